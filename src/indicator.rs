//! Derived UI state that follows the controller: active thumbnail, dwell
//! progress and the play/pause affordance.

use crate::media::ItemId;
use crate::surface::Surface;
use crate::timer::DwellTimer;

/// Pushes indicator changes to the surface, skipping values it already shows.
#[derive(Debug, Default)]
pub struct IndicatorSync {
    active: Option<ItemId>,
    progress: Option<f32>,
    playing: Option<bool>,
}

impl IndicatorSync {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn highlight<S: Surface + ?Sized>(&mut self, surface: &mut S, id: &ItemId) {
        if self.active.as_ref() != Some(id) {
            surface.highlight_thumbnail(id);
            self.active = Some(id.clone());
        }
    }

    /// Empties the progress indicator for a new dwell period.
    pub fn restart_progress<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        self.show_progress(surface, 0.0);
    }

    /// Mirrors the armed timer's progress. A disarmed timer leaves the
    /// indicator frozen where it was.
    pub fn track_progress<S: Surface + ?Sized>(&mut self, surface: &mut S, timer: &DwellTimer) {
        if let Some(fraction) = timer.progress() {
            self.show_progress(surface, fraction);
        }
    }

    pub fn show_running<S: Surface + ?Sized>(&mut self, surface: &mut S, running: bool) {
        if self.playing != Some(running) {
            surface.set_playing(running);
            self.playing = Some(running);
        }
    }

    fn show_progress<S: Surface + ?Sized>(&mut self, surface: &mut S, fraction: f32) {
        if self.progress != Some(fraction) {
            surface.set_progress(fraction);
            self.progress = Some(fraction);
        }
    }

    pub fn active(&self) -> Option<&ItemId> {
        self.active.as_ref()
    }

    pub fn progress(&self) -> f32 {
        self.progress.unwrap_or(0.0)
    }
}
