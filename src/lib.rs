//! A self-paced, crossfading media carousel.
//!
//! [`Carousel`] cycles through host-supplied [`MediaItem`]s one at a time,
//! crossfading each new item in over the last one, and keeps the thumbnail
//! highlight, progress indicator and play/pause affordance of a host
//! [`Surface`] in step with it. The host owns rendering and input; the
//! carousel owns the current index, the dwell timer and the transition
//! sequence.
//!
//! ```
//! use std::time::Duration;
//! # use carousel::{ItemId, Labeling, Layer, MediaItem, Surface, SurfaceElement};
//! # struct Strip(Vec<ItemId>);
//! # impl Surface for Strip {
//! #     fn provides(&self, _: SurfaceElement) -> bool { true }
//! #     fn has_thumbnail(&self, id: &ItemId) -> bool { self.0.contains(id) }
//! #     fn activate(&mut self, _: bool) {}
//! #     fn deactivate(&mut self) {}
//! #     fn load(&mut self, _: Layer, _: &MediaItem) {}
//! #     fn set_opacity(&mut self, _: Layer, _: f32) {}
//! #     fn set_labeling(&mut self, _: Layer, _: Labeling<'_>) {}
//! #     fn highlight_thumbnail(&mut self, _: &ItemId) {}
//! #     fn set_playing(&mut self, _: bool) {}
//! # }
//! use carousel::{Carousel, CarouselConfig, ImageFormat};
//!
//! let items = vec![
//!     MediaItem::image("a", ImageFormat::Jpeg, "a.jpg"),
//!     MediaItem::image("b", ImageFormat::Jpeg, "b.jpg"),
//! ];
//! let surface = Strip(items.iter().map(|item| item.id.clone()).collect());
//! let mut carousel = Carousel::new(items, surface, &CarouselConfig::default())?;
//!
//! carousel.init();
//! carousel.update(Duration::from_secs(5));
//! assert_eq!(carousel.current_item_id().map(ItemId::as_str), Some("b"));
//! # Ok::<(), carousel::Error>(())
//! ```

pub mod carousel;
pub mod config;
pub mod constants;
pub mod error;
pub mod indicator;
pub mod media;
pub mod scan;
pub mod state;
pub mod surface;
pub mod timer;
pub mod transition;
pub mod tween;

#[cfg(test)]
mod test_utils;

pub use crate::carousel::Carousel;
pub use crate::config::CarouselConfig;
pub use crate::error::{Error, Result};
pub use crate::media::{ImageFormat, ItemId, Labeling, MediaItem, MediaKind, SourceSet};
pub use crate::state::PlaybackState;
pub use crate::surface::{Layer, RevealDriver, Surface, SurfaceElement};
pub use crate::timer::TimerHandle;
pub use crate::transition::TransitionToken;
pub use crate::tween::Easing;
