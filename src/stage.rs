use std::collections::HashMap;

use raylib::prelude::*;

use carousel::constants::*;
use carousel::{ItemId, Labeling, Layer, MediaItem, Surface, SurfaceElement};

const BUTTON_WIDTH: i32 = 56;
const THUMBNAIL_WIDTH: i32 = THUMBNAIL_HEIGHT * 4 / 3;
const THUMBNAIL_GAP: i32 = 6;
const CAPTION_SIZE: i32 = 22;
const ACCENT: Color = Color::new(235, 180, 52, 255);
const BAR_BACKGROUND: Color = Color::new(20, 20, 20, 255);

/// What a click on the stage landed on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Control {
    Previous,
    PlayPause,
    Next,
    Fullscreen,
    Thumbnail(ItemId),
}

const BUTTONS: [Control; 4] = [
    Control::Previous,
    Control::PlayPause,
    Control::Next,
    Control::Fullscreen,
];

#[derive(Default)]
struct Slot {
    item: Option<ItemId>,
    opacity: f32,
    caption: Option<String>,
}

/// Raylib rendition of the carousel surface: two picture slots, a caption,
/// a transport bar with progress and a scrolling thumbnail strip.
pub struct Stage {
    textures: HashMap<ItemId, Texture2D>,
    order: Vec<ItemId>,
    resting: Slot,
    incoming: Slot,
    active: Option<ItemId>,
    first_visible: usize,
    progress: f32,
    playing: bool,
    interactive: bool,
    fullscreen_request: Option<bool>,
    width: i32,
    height: i32,
}

impl Stage {
    pub fn new() -> Self {
        Self {
            textures: HashMap::new(),
            order: Vec::new(),
            resting: Slot {
                opacity: 1.0,
                ..Slot::default()
            },
            incoming: Slot::default(),
            active: None,
            first_visible: 0,
            progress: 0.0,
            playing: false,
            interactive: false,
            fullscreen_request: None,
            width: RENDER_WIDTH,
            height: RENDER_HEIGHT,
        }
    }

    pub fn add(&mut self, id: ItemId, texture: Texture2D) {
        self.order.push(id.clone());
        self.textures.insert(id, texture);
    }

    pub fn set_viewport(&mut self, width: i32, height: i32) {
        self.width = width;
        self.height = height;
        self.scroll_to_active();
    }

    /// Fullscreen state the window should switch to, once.
    pub fn take_fullscreen_request(&mut self) -> Option<bool> {
        self.fullscreen_request.take()
    }

    fn image_area(&self) -> Rectangle {
        let controls = if self.interactive {
            THUMBNAIL_HEIGHT + CONTROL_BAR_HEIGHT + PROGRESS_HEIGHT
        } else {
            0
        };
        Rectangle::new(0.0, 0.0, self.width as f32, (self.height - controls).max(0) as f32)
    }

    fn control_bar_y(&self) -> i32 {
        self.height - THUMBNAIL_HEIGHT - CONTROL_BAR_HEIGHT
    }

    fn button_rect(&self, slot: usize) -> Rectangle {
        Rectangle::new(
            (slot as i32 * BUTTON_WIDTH) as f32,
            self.control_bar_y() as f32,
            BUTTON_WIDTH as f32,
            CONTROL_BAR_HEIGHT as f32,
        )
    }

    fn visible_thumbnails(&self) -> usize {
        ((self.width / (THUMBNAIL_WIDTH + THUMBNAIL_GAP)).max(1)) as usize
    }

    fn thumbnail_rect(&self, position: usize) -> Rectangle {
        let column = position as i32 - self.first_visible as i32;
        Rectangle::new(
            (THUMBNAIL_GAP + column * (THUMBNAIL_WIDTH + THUMBNAIL_GAP)) as f32,
            (self.height - THUMBNAIL_HEIGHT + THUMBNAIL_GAP / 2) as f32,
            THUMBNAIL_WIDTH as f32,
            (THUMBNAIL_HEIGHT - THUMBNAIL_GAP) as f32,
        )
    }

    fn scroll_to_active(&mut self) {
        let Some(position) = self
            .active
            .as_ref()
            .and_then(|id| self.order.iter().position(|other| other == id))
        else {
            return;
        };
        let visible = self.visible_thumbnails();
        if position < self.first_visible {
            self.first_visible = position;
        } else if position >= self.first_visible + visible {
            self.first_visible = position + 1 - visible;
        }
    }

    pub fn hit_test(&self, point: Vector2) -> Option<Control> {
        if !self.interactive {
            return None;
        }
        if let Some(slot) = (0..BUTTONS.len()).find(|slot| contains(self.button_rect(*slot), point)) {
            return Some(BUTTONS[slot].clone());
        }
        let visible = self.visible_thumbnails();
        self.order
            .iter()
            .enumerate()
            .skip(self.first_visible)
            .take(visible)
            .find(|(position, _)| contains(self.thumbnail_rect(*position), point))
            .map(|(_, id)| Control::Thumbnail(id.clone()))
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        let area = self.image_area();
        self.draw_slot(d, &self.resting, area);
        self.draw_slot(d, &self.incoming, area);

        if !self.interactive {
            return;
        }

        let bar_y = self.control_bar_y();
        d.draw_rectangle(0, bar_y - PROGRESS_HEIGHT, self.width, PROGRESS_HEIGHT, BAR_BACKGROUND);
        d.draw_rectangle(
            0,
            bar_y - PROGRESS_HEIGHT,
            (self.width as f32 * self.progress) as i32,
            PROGRESS_HEIGHT,
            ACCENT,
        );
        d.draw_rectangle(0, bar_y, self.width, CONTROL_BAR_HEIGHT + THUMBNAIL_HEIGHT, BAR_BACKGROUND);

        for (slot, control) in BUTTONS.iter().enumerate() {
            let rect = self.button_rect(slot);
            let label = match control {
                Control::Previous => "<<",
                Control::PlayPause if self.playing => "||",
                Control::PlayPause => ">",
                Control::Next => ">>",
                Control::Fullscreen => "[ ]",
                Control::Thumbnail(_) => continue,
            };
            d.draw_text(label, rect.x as i32 + 14, rect.y as i32 + 10, 20, Color::WHITE);
        }

        let visible = self.visible_thumbnails();
        for (position, id) in self.order.iter().enumerate().skip(self.first_visible).take(visible) {
            let rect = self.thumbnail_rect(position);
            if let Some(texture) = self.textures.get(id) {
                let source = Rectangle::new(0.0, 0.0, texture.width() as f32, texture.height() as f32);
                d.draw_texture_pro(texture, source, fit(source, rect), Vector2::zero(), 0.0, Color::WHITE);
            }
            if self.active.as_ref() == Some(id) {
                d.draw_rectangle_lines_ex(rect, 3.0, ACCENT);
            }
        }
    }

    fn draw_slot(&self, d: &mut RaylibDrawHandle, slot: &Slot, area: Rectangle) {
        if slot.opacity <= 0.0 {
            return;
        }
        let Some(texture) = slot.item.as_ref().and_then(|id| self.textures.get(id)) else {
            return;
        };
        let alpha = (slot.opacity.clamp(0.0, 1.0) * 255.0) as u8;
        let source = Rectangle::new(0.0, 0.0, texture.width() as f32, texture.height() as f32);
        d.draw_texture_pro(
            texture,
            source,
            fit(source, area),
            Vector2::zero(),
            0.0,
            Color::new(255, 255, 255, alpha),
        );

        if let Some(caption) = &slot.caption {
            let y = (area.y + area.height) as i32 - CAPTION_SIZE - 16;
            d.draw_rectangle(0, y - 8, self.width, CAPTION_SIZE + 16, Color::new(0, 0, 0, alpha / 2));
            d.draw_text(caption, 16, y, CAPTION_SIZE, Color::new(255, 255, 255, alpha));
        }
    }

    fn slot_mut(&mut self, layer: Layer) -> &mut Slot {
        match layer {
            Layer::Resting => &mut self.resting,
            Layer::Incoming => &mut self.incoming,
        }
    }
}

impl Surface for Stage {
    fn provides(&self, _element: SurfaceElement) -> bool {
        true
    }

    fn has_thumbnail(&self, id: &ItemId) -> bool {
        self.textures.contains_key(id)
    }

    fn activate(&mut self, _captioned: bool) {
        self.interactive = true;
    }

    fn deactivate(&mut self) {
        self.interactive = false;
    }

    fn load(&mut self, layer: Layer, item: &MediaItem) {
        self.slot_mut(layer).item = Some(item.id.clone());
    }

    fn set_opacity(&mut self, layer: Layer, opacity: f32) {
        match layer {
            // the resting slot is always fully visible underneath
            Layer::Resting => {}
            Layer::Incoming => self.incoming.opacity = opacity,
        }
    }

    fn set_labeling(&mut self, layer: Layer, labeling: Labeling<'_>) {
        self.slot_mut(layer).caption = labeling.caption.map(str::to_owned);
    }

    fn highlight_thumbnail(&mut self, id: &ItemId) {
        self.active = Some(id.clone());
        self.scroll_to_active();
    }

    fn set_progress(&mut self, fraction: f32) {
        self.progress = fraction;
    }

    fn set_playing(&mut self, playing: bool) {
        self.playing = playing;
    }

    fn set_fullscreen(&mut self, fullscreen: bool) {
        self.fullscreen_request = Some(fullscreen);
    }
}

fn contains(rect: Rectangle, point: Vector2) -> bool {
    point.x >= rect.x && point.x < rect.x + rect.width && point.y >= rect.y && point.y < rect.y + rect.height
}

/// Largest rectangle with `source`'s aspect ratio centered inside `target`.
fn fit(source: Rectangle, target: Rectangle) -> Rectangle {
    if source.width <= 0.0 || source.height <= 0.0 {
        return target;
    }
    let scale = (target.width / source.width).min(target.height / source.height);
    let width = source.width * scale;
    let height = source.height * scale;
    Rectangle::new(
        target.x + (target.width - width) * 0.5,
        target.y + (target.height - height) * 0.5,
        width,
        height,
    )
}
