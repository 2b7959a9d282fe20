//! Test helpers: a surface that records what the carousel asked it to show.

use std::collections::{BTreeMap, HashSet};
use std::time::Duration;

use crate::media::{ImageFormat, ItemId, Labeling, MediaItem};
use crate::surface::{Layer, RevealDriver, Surface, SurfaceElement};
use crate::transition::TransitionToken;
use crate::tween::Easing;

/// Image items with the given ids, in order.
pub fn items(ids: &[&str]) -> Vec<MediaItem> {
    ids.iter()
        .map(|id| MediaItem::image(*id, ImageFormat::Jpeg, format!("{id}.jpg")))
        .collect()
}

#[derive(Debug, Default, Clone)]
struct LayerRecord {
    loaded: Option<ItemId>,
    opacity: f32,
    caption: Option<String>,
    alt_text: Option<String>,
    aria_label: Option<String>,
}

#[derive(Debug)]
pub struct RecordingSurface {
    missing: HashSet<SurfaceElement>,
    driver: RevealDriver,
    thumbnails: BTreeMap<ItemId, bool>,
    resting: LayerRecord,
    incoming: LayerRecord,
    reveals: Vec<TransitionToken>,
    progress: f32,
    playing: Option<bool>,
    fullscreen: bool,
    active: bool,
    captioned: bool,
}

impl RecordingSurface {
    /// A surface exposing every element and one thumbnail per item.
    pub fn for_items(items: &[MediaItem]) -> Self {
        Self {
            missing: HashSet::new(),
            driver: RevealDriver::Tweened,
            thumbnails: items.iter().map(|item| (item.id.clone(), false)).collect(),
            resting: LayerRecord::default(),
            incoming: LayerRecord::default(),
            reveals: Vec::new(),
            progress: 0.0,
            playing: None,
            fullscreen: false,
            active: false,
            captioned: false,
        }
    }

    pub fn without(mut self, element: SurfaceElement) -> Self {
        self.missing.insert(element);
        self
    }

    pub fn with_driver(mut self, driver: RevealDriver) -> Self {
        self.driver = driver;
        self
    }

    fn layer(&self, layer: Layer) -> &LayerRecord {
        match layer {
            Layer::Resting => &self.resting,
            Layer::Incoming => &self.incoming,
        }
    }

    fn layer_mut(&mut self, layer: Layer) -> &mut LayerRecord {
        match layer {
            Layer::Resting => &mut self.resting,
            Layer::Incoming => &mut self.incoming,
        }
    }

    pub fn loaded(&self, layer: Layer) -> Option<&str> {
        self.layer(layer).loaded.as_ref().map(ItemId::as_str)
    }

    pub fn opacity(&self, layer: Layer) -> f32 {
        self.layer(layer).opacity
    }

    pub fn caption(&self, layer: Layer) -> Option<&str> {
        self.layer(layer).caption.as_deref()
    }

    pub fn alt_text(&self, layer: Layer) -> Option<&str> {
        self.layer(layer).alt_text.as_deref()
    }

    pub fn aria_label(&self, layer: Layer) -> Option<&str> {
        self.layer(layer).aria_label.as_deref()
    }

    pub fn reveals_started(&self) -> &[TransitionToken] {
        &self.reveals
    }

    pub fn active_thumbnails(&self) -> Vec<&str> {
        self.thumbnails
            .iter()
            .filter(|(_, active)| **active)
            .map(|(id, _)| id.as_str())
            .collect()
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn playing(&self) -> Option<bool> {
        self.playing
    }

    pub fn fullscreen(&self) -> bool {
        self.fullscreen
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_captioned(&self) -> bool {
        self.captioned
    }
}

impl Surface for RecordingSurface {
    fn provides(&self, element: SurfaceElement) -> bool {
        !self.missing.contains(&element)
    }

    fn has_thumbnail(&self, id: &ItemId) -> bool {
        self.thumbnails.contains_key(id)
    }

    fn reveal_driver(&self) -> RevealDriver {
        self.driver
    }

    fn activate(&mut self, captioned: bool) {
        self.active = true;
        self.captioned = captioned;
    }

    fn deactivate(&mut self) {
        self.active = false;
    }

    fn load(&mut self, layer: Layer, item: &MediaItem) {
        self.layer_mut(layer).loaded = Some(item.id.clone());
    }

    fn set_opacity(&mut self, layer: Layer, opacity: f32) {
        self.layer_mut(layer).opacity = opacity;
    }

    fn set_labeling(&mut self, layer: Layer, labeling: Labeling<'_>) {
        let record = self.layer_mut(layer);
        record.caption = labeling.caption.map(str::to_owned);
        record.alt_text = labeling.alt_text.map(str::to_owned);
        record.aria_label = labeling.aria_label.map(str::to_owned);
    }

    fn begin_reveal(&mut self, token: TransitionToken, _duration: Duration, _easing: Easing) {
        self.reveals.push(token);
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
        self.playing = Some(playing);
    }

    fn set_fullscreen(&mut self, fullscreen: bool) {
        self.fullscreen = fullscreen;
    }
}
