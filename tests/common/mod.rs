use std::collections::HashMap;

use carousel::{ImageFormat, ItemId, Labeling, Layer, MediaItem, Surface, SurfaceElement};

pub fn items(ids: &[&str]) -> Vec<MediaItem> {
    ids.iter()
        .map(|id| MediaItem::image(*id, ImageFormat::Webp, format!("/media/{id}.webp")))
        .collect()
}

/// Mimics a page widget: two picture slots, caption regions and a thumbnail
/// strip whose buttons carry an active flag.
#[derive(Debug, Default)]
pub struct PageSurface {
    pub resting: Option<ItemId>,
    pub incoming: Option<ItemId>,
    pub incoming_opacity: f32,
    pub resting_caption: Option<String>,
    pub thumbnails: HashMap<ItemId, bool>,
    pub progress: f32,
    pub playing: bool,
    pub mode_active: bool,
}

impl PageSurface {
    pub fn new(items: &[MediaItem]) -> Self {
        Self {
            thumbnails: items.iter().map(|item| (item.id.clone(), false)).collect(),
            ..Self::default()
        }
    }

    pub fn active_thumbnails(&self) -> Vec<&str> {
        let mut active: Vec<_> = self
            .thumbnails
            .iter()
            .filter(|(_, active)| **active)
            .map(|(id, _)| id.as_str())
            .collect();
        active.sort_unstable();
        active
    }
}

impl Surface for PageSurface {
    fn provides(&self, _element: SurfaceElement) -> bool {
        true
    }

    fn has_thumbnail(&self, id: &ItemId) -> bool {
        self.thumbnails.contains_key(id)
    }

    fn activate(&mut self, _captioned: bool) {
        self.mode_active = true;
    }

    fn deactivate(&mut self) {
        self.mode_active = false;
    }

    fn load(&mut self, layer: Layer, item: &MediaItem) {
        match layer {
            Layer::Resting => self.resting = Some(item.id.clone()),
            Layer::Incoming => self.incoming = Some(item.id.clone()),
        }
    }

    fn set_opacity(&mut self, layer: Layer, opacity: f32) {
        if layer == Layer::Incoming {
            self.incoming_opacity = opacity;
        }
    }

    fn set_labeling(&mut self, layer: Layer, labeling: Labeling<'_>) {
        if layer == Layer::Resting {
            self.resting_caption = labeling.caption.map(str::to_owned);
        }
    }

    fn highlight_thumbnail(&mut self, id: &ItemId) {
        for (thumbnail, active) in self.thumbnails.iter_mut() {
            *active = thumbnail == id;
        }
    }

    fn set_progress(&mut self, fraction: f32) {
        self.progress = fraction;
    }

    fn set_playing(&mut self, playing: bool) {
        self.playing = playing;
    }
}
