//! Host-supplied media items.
//!
//! Items are immutable once handed to a [`Carousel`](crate::Carousel); the
//! controller only ever changes which one is current.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable key of a media item, unique within one carousel.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    #[default]
    Image,
    /// Playback of the clip itself belongs to the host; the carousel only
    /// crossfades its poster content like any image.
    Video,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    Avif,
    Webp,
    Jpeg,
    Png,
    Gif,
    Bmp,
}

impl ImageFormat {
    /// Maps a file extension (case-insensitive, without the dot) to a format.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "avif" => Some(ImageFormat::Avif),
            "webp" => Some(ImageFormat::Webp),
            "jpg" | "jpeg" => Some(ImageFormat::Jpeg),
            "png" => Some(ImageFormat::Png),
            "gif" => Some(ImageFormat::Gif),
            "bmp" => Some(ImageFormat::Bmp),
            _ => None,
        }
    }
}

/// Format-keyed URIs (or srcset strings) for one rendition of an item.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceSet(BTreeMap<ImageFormat, String>);

impl SourceSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(format: ImageFormat, uri: impl Into<String>) -> Self {
        let mut set = Self::new();
        set.insert(format, uri);
        set
    }

    pub fn insert(&mut self, format: ImageFormat, uri: impl Into<String>) {
        self.0.insert(format, uri.into());
    }

    pub fn get(&self, format: ImageFormat) -> Option<&str> {
        self.0.get(&format).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ImageFormat, &str)> {
        self.0.iter().map(|(format, uri)| (*format, uri.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    pub id: ItemId,
    #[serde(default)]
    pub kind: MediaKind,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub alt_text: Option<String>,
    #[serde(default)]
    pub sources: SourceSet,
    #[serde(default)]
    pub thumbnail: SourceSet,
    /// Layout hint passed through to the host untouched.
    #[serde(default)]
    pub sizes: Option<String>,
    /// Intrinsic `(width, height)` in pixels, when the host knows it.
    #[serde(default)]
    pub dimensions: Option<(u32, u32)>,
}

impl MediaItem {
    /// An image item whose display and thumbnail renditions share one source.
    pub fn image(id: impl Into<ItemId>, format: ImageFormat, uri: impl Into<String>) -> Self {
        let sources = SourceSet::single(format, uri);
        Self {
            id: id.into(),
            kind: MediaKind::Image,
            caption: None,
            alt_text: None,
            thumbnail: sources.clone(),
            sources,
            sizes: None,
            dimensions: None,
        }
    }

    pub fn with_kind(mut self, kind: MediaKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn with_alt_text(mut self, alt_text: impl Into<String>) -> Self {
        self.alt_text = Some(alt_text.into());
        self
    }

    pub fn with_thumbnail(mut self, thumbnail: SourceSet) -> Self {
        self.thumbnail = thumbnail;
        self
    }

    pub fn with_dimensions(mut self, width: u32, height: u32) -> Self {
        self.dimensions = Some((width, height));
        self
    }

    pub fn has_caption(&self) -> bool {
        self.caption.as_deref().is_some_and(|c| !c.trim().is_empty())
    }
}

/// Caption and accessibility attributes applied to one display layer.
///
/// A missing caption produces empty labeling so the previous item's caption
/// and accessible name never linger on the layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Labeling<'a> {
    pub caption: Option<&'a str>,
    pub alt_text: Option<&'a str>,
    /// Accessible name of the layer; present only for captioned items.
    pub aria_label: Option<&'a str>,
}

impl<'a> Labeling<'a> {
    pub fn for_item(item: &'a MediaItem) -> Self {
        let caption = item.caption.as_deref().filter(|_| item.has_caption());
        Self {
            caption,
            alt_text: item.alt_text.as_deref(),
            aria_label: caption,
        }
    }

    pub fn cleared() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_lookup_ignores_case() {
        assert_eq!(ImageFormat::from_extension("JPG"), Some(ImageFormat::Jpeg));
        assert_eq!(ImageFormat::from_extension("webp"), Some(ImageFormat::Webp));
        assert_eq!(ImageFormat::from_extension("txt"), None);
    }

    #[test]
    fn blank_caption_yields_cleared_labeling() {
        let item = MediaItem::image("a", ImageFormat::Jpeg, "a.jpg")
            .with_caption("   ")
            .with_alt_text("a lake");
        let labeling = Labeling::for_item(&item);
        assert_eq!(labeling.caption, None);
        assert_eq!(labeling.aria_label, None);
        assert_eq!(labeling.alt_text, Some("a lake"));
    }

    #[test]
    fn captioned_item_names_the_layer() {
        let item = MediaItem::image("a", ImageFormat::Jpeg, "a.jpg").with_caption("Harbour at dusk");
        let labeling = Labeling::for_item(&item);
        assert_eq!(labeling.caption, Some("Harbour at dusk"));
        assert_eq!(labeling.aria_label, Some("Harbour at dusk"));
    }

    #[test]
    fn manifest_entry_deserializes_with_defaults() {
        let item: MediaItem = toml::from_str(
            r#"
            id = "harbour"
            caption = "Harbour at dusk"
            kind = "video"
            dimensions = [1920, 1080]
            "#,
        )
        .expect("manifest entry should parse");

        assert_eq!(item.id, ItemId::new("harbour"));
        assert_eq!(item.kind, MediaKind::Video);
        assert_eq!(item.dimensions, Some((1920, 1080)));
        assert!(item.sources.is_empty());
        assert!(item.thumbnail.is_empty());
    }
}
