//! The rendering surface a host hands to the carousel.
//!
//! Everything visual happens behind this trait: the carousel decides what
//! the layers, thumbnails and controls should show, the host decides how.

use std::collections::HashSet;
use std::fmt;
use std::time::Duration;

use crate::error::{Error, Result};
use crate::media::{ItemId, Labeling, MediaItem};
use crate::transition::TransitionToken;
use crate::tween::Easing;

/// Display slot addressed by the transition sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    /// Persistently visible slot holding the last committed item.
    Resting,
    /// Transient slot the next item fades in on.
    Incoming,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurfaceElement {
    RestingSlot,
    TransitionSlot,
    RestingCaption,
    TransitionCaption,
    PlayPauseButton,
    NextButton,
    PreviousButton,
    ThumbnailStrip,
    FullscreenButton,
    ProgressIndicator,
}

impl SurfaceElement {
    /// Elements a surface must expose for the carousel to become interactive.
    pub const REQUIRED: [SurfaceElement; 8] = [
        SurfaceElement::RestingSlot,
        SurfaceElement::TransitionSlot,
        SurfaceElement::RestingCaption,
        SurfaceElement::TransitionCaption,
        SurfaceElement::PlayPauseButton,
        SurfaceElement::NextButton,
        SurfaceElement::PreviousButton,
        SurfaceElement::ThumbnailStrip,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SurfaceElement::RestingSlot => "resting display slot",
            SurfaceElement::TransitionSlot => "transition display slot",
            SurfaceElement::RestingCaption => "resting caption region",
            SurfaceElement::TransitionCaption => "transition caption region",
            SurfaceElement::PlayPauseButton => "play/pause button",
            SurfaceElement::NextButton => "next button",
            SurfaceElement::PreviousButton => "previous button",
            SurfaceElement::ThumbnailStrip => "thumbnail strip",
            SurfaceElement::FullscreenButton => "fullscreen button",
            SurfaceElement::ProgressIndicator => "progress indicator",
        }
    }
}

impl fmt::Display for SurfaceElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Who animates the incoming layer's reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealDriver {
    /// The carousel tweens the opacity from its `update` loop.
    #[default]
    Tweened,
    /// The surface animates on its own and the host reports completion
    /// through [`Carousel::complete_reveal`](crate::Carousel::complete_reveal).
    Host,
    /// No animation support; reveals commit immediately.
    Unavailable,
}

pub trait Surface {
    fn provides(&self, element: SurfaceElement) -> bool;

    /// Whether the thumbnail strip has a selectable control for `id`.
    fn has_thumbnail(&self, id: &ItemId) -> bool;

    fn reveal_driver(&self) -> RevealDriver {
        RevealDriver::Tweened
    }

    /// Switches the surface from its static markup to the interactive mode.
    fn activate(&mut self, captioned: bool);

    fn deactivate(&mut self);

    fn load(&mut self, layer: Layer, item: &MediaItem);

    fn set_opacity(&mut self, layer: Layer, opacity: f32);

    fn set_labeling(&mut self, layer: Layer, labeling: Labeling<'_>);

    /// Starts a host-driven reveal of the incoming layer. Only called when
    /// [`reveal_driver`](Self::reveal_driver) returns [`RevealDriver::Host`].
    fn begin_reveal(&mut self, _token: TransitionToken, _duration: Duration, _easing: Easing) {}

    /// Marks `id` as the only active thumbnail and keeps it in view.
    fn highlight_thumbnail(&mut self, id: &ItemId);

    fn set_progress(&mut self, _fraction: f32) {}

    fn set_playing(&mut self, playing: bool);

    fn set_fullscreen(&mut self, _fullscreen: bool) {}
}

/// Checks that `surface` can host `items`.
///
/// Fails on the first missing required element, then on the first item
/// without a thumbnail control. Duplicate ids are rejected too since
/// thumbnail selection is keyed by id.
pub fn validate<S: Surface + ?Sized>(surface: &S, items: &[MediaItem]) -> Result<()> {
    if let Some(missing) = SurfaceElement::REQUIRED
        .into_iter()
        .find(|element| !surface.provides(*element))
    {
        return Err(Error::MissingElement(missing));
    }

    let mut seen = HashSet::with_capacity(items.len());
    for item in items {
        if !seen.insert(&item.id) {
            return Err(Error::DuplicateItem(item.id.clone()));
        }
        if !surface.has_thumbnail(&item.id) {
            return Err(Error::MissingThumbnail(item.id.clone()));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{RecordingSurface, items};

    #[test]
    fn complete_surface_validates() {
        let items = items(&["a", "b"]);
        let surface = RecordingSurface::for_items(&items);
        assert!(validate(&surface, &items).is_ok());
    }

    #[test]
    fn optional_elements_are_not_required() {
        let items = items(&["a"]);
        let surface = RecordingSurface::for_items(&items)
            .without(SurfaceElement::FullscreenButton)
            .without(SurfaceElement::ProgressIndicator);
        assert!(validate(&surface, &items).is_ok());
    }

    #[test]
    fn missing_button_is_reported() {
        let items = items(&["a"]);
        let surface = RecordingSurface::for_items(&items).without(SurfaceElement::NextButton);
        let err = validate(&surface, &items).unwrap_err();
        assert!(matches!(err, Error::MissingElement(SurfaceElement::NextButton)));
        assert_eq!(err.to_string(), "surface is missing required element: next button");
    }

    #[test]
    fn missing_thumbnail_is_reported() {
        let items = items(&["a", "b"]);
        let surface = RecordingSurface::for_items(&items[..1]);
        let err = validate(&surface, &items).unwrap_err();
        assert!(matches!(err, Error::MissingThumbnail(id) if id.as_str() == "b"));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let items = items(&["a", "a"]);
        let surface = RecordingSurface::for_items(&items);
        let err = validate(&surface, &items).unwrap_err();
        assert!(matches!(err, Error::DuplicateItem(id) if id.as_str() == "a"));
    }
}
