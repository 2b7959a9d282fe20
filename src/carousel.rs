//! The playback controller.
//!
//! A [`Carousel`] owns the item list, the current index, the dwell timer and
//! the transition sequence of one embedded widget. Hosts drive it from a
//! single thread: input handlers call the command methods and the frame loop
//! calls [`Carousel::update`] with the elapsed time.

use std::time::Duration;

use tracing::{debug, info, trace, warn};

use crate::config::CarouselConfig;
use crate::error::{Error, Result};
use crate::indicator::IndicatorSync;
use crate::media::{ItemId, MediaItem};
use crate::state::PlaybackState;
use crate::surface::{self, Surface, SurfaceElement};
use crate::timer::{DwellTimer, TimerHandle};
use crate::transition::{TransitionSequencer, TransitionToken};

/// Why the current index is changing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Trigger {
    Start,
    Timer,
    Next,
    Previous,
    Select,
}

pub struct Carousel<S: Surface> {
    items: Vec<MediaItem>,
    surface: S,
    state: PlaybackState,
    current: usize,
    delay: Duration,
    pause_on_hover: bool,
    /// Set while the pause was caused by the pointer, so leaving only
    /// resumes what hovering stopped.
    hover_paused: bool,
    fullscreen: bool,
    timer: DwellTimer,
    sequencer: TransitionSequencer,
    indicators: IndicatorSync,
}

impl<S: Surface> Carousel<S> {
    /// Binds `items` to `surface`.
    ///
    /// Fails without touching the surface when a required element or a
    /// thumbnail control is missing, or when item ids repeat.
    pub fn new(items: Vec<MediaItem>, surface: S, config: &CarouselConfig) -> Result<Self> {
        config.validate()?;
        surface::validate(&surface, &items)?;

        Ok(Self {
            items,
            surface,
            state: PlaybackState::Idle,
            current: 0,
            delay: config.interval(),
            pause_on_hover: config.pause_on_hover,
            hover_paused: false,
            fullscreen: false,
            timer: DwellTimer::new(),
            sequencer: TransitionSequencer::new(config.reveal_duration(), config.easing),
            indicators: IndicatorSync::new(),
        })
    }

    /// Starts playback at the first item. Calling it again has no effect.
    ///
    /// An empty collection leaves the carousel idle on its static markup.
    pub fn init(&mut self) {
        if self.state.is_started() {
            trace!("carousel already initialized");
            return;
        }
        if self.items.is_empty() {
            warn!("carousel has no items, staying static");
            return;
        }

        info!(items = self.items.len(), delay_ms = self.delay.as_millis() as u64, "starting carousel");
        let captioned = self.is_captioned();
        self.surface.activate(captioned);
        self.state = PlaybackState::Playing;
        self.navigate(0, Trigger::Start);
    }

    /// Advances animations and the dwell timer by `dt`.
    pub fn update(&mut self, dt: Duration) {
        if !self.state.is_started() {
            return;
        }

        if let Some(token) = self.sequencer.update(dt, &mut self.surface) {
            self.complete_reveal(token);
        }

        if self.timer.tick(dt) {
            let next = self.step(1);
            debug!(from = self.current, to = next, "dwell elapsed");
            self.navigate(next, Trigger::Timer);
        } else {
            self.indicators.track_progress(&mut self.surface, &self.timer);
        }
    }

    /// Reports that the reveal started for `token` has finished.
    ///
    /// Hosts with [`RevealDriver::Host`](crate::RevealDriver::Host) call this
    /// from their animation-end callback. Tokens superseded by a later
    /// transition are ignored.
    pub fn complete_reveal(&mut self, token: TransitionToken) {
        let Some(target) = self.sequencer.target_of(token) else {
            trace!(%token, "reveal completed for a superseded transition");
            return;
        };
        if let Some(committed) = self.sequencer.commit(token, &self.items[target], &mut self.surface) {
            debug!(%token, index = committed, id = %self.items[committed].id, "transition committed");
        }
    }

    pub fn play(&mut self) {
        if self.state_is(PlaybackState::Paused) {
            debug!("play");
            self.hover_paused = false;
            self.resume();
        }
    }

    pub fn pause(&mut self) {
        if self.state_is(PlaybackState::Playing) {
            debug!("pause");
            self.hover_paused = false;
            self.suspend();
        }
    }

    pub fn toggle_play_pause(&mut self) {
        match self.state {
            PlaybackState::Playing => self.pause(),
            PlaybackState::Paused => self.play(),
            _ => trace!(state = ?self.state, "play/pause ignored"),
        }
    }

    pub fn next(&mut self) {
        if self.accepts_navigation() {
            let target = self.step(1);
            self.navigate(target, Trigger::Next);
        }
    }

    pub fn previous(&mut self) {
        if self.accepts_navigation() {
            let target = self.step(-1);
            self.navigate(target, Trigger::Previous);
        }
    }

    /// Jumps to the item with `id`. Unknown ids are ignored.
    pub fn select_item(&mut self, id: &ItemId) {
        if !self.accepts_navigation() {
            return;
        }
        match self.items.iter().position(|item| &item.id == id) {
            Some(target) => self.navigate(target, Trigger::Select),
            None => debug!(%id, "ignoring selection of unknown item"),
        }
    }

    /// Pointer entered the widget: pauses auto-advance while hovering.
    pub fn pointer_enter(&mut self) {
        if self.pause_on_hover && self.state_is(PlaybackState::Playing) {
            debug!("hover pause");
            self.hover_paused = true;
            self.suspend();
        }
    }

    /// Pointer left the widget: resumes if hovering paused it.
    pub fn pointer_leave(&mut self) {
        if self.hover_paused && self.state_is(PlaybackState::Paused) {
            debug!("hover resume");
            self.resume();
        }
        self.hover_paused = false;
    }

    /// Changes the dwell delay used by the next arming of the timer.
    pub fn set_delay(&mut self, delay: Duration) -> Result<()> {
        if delay.is_zero() {
            return Err(Error::InvalidDelay);
        }
        debug!(delay_ms = delay.as_millis() as u64, "dwell delay changed");
        self.delay = delay;
        Ok(())
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Flips fullscreen without touching playback.
    pub fn toggle_fullscreen(&mut self) {
        if !self.surface.provides(SurfaceElement::FullscreenButton) {
            trace!("surface has no fullscreen control");
            return;
        }
        self.fullscreen = !self.fullscreen;
        debug!(fullscreen = self.fullscreen, "fullscreen toggled");
        self.surface.set_fullscreen(self.fullscreen);
    }

    /// Stops the timer, drops any in-flight transition and hands the surface
    /// back to the host.
    pub fn teardown(mut self) -> S {
        self.timer.cancel();
        self.sequencer.cancel();
        if self.state.is_started() {
            self.surface.deactivate();
        }
        info!("carousel torn down");
        self.surface
    }

    pub fn state(&self) -> PlaybackState {
        match self.state {
            PlaybackState::Playing | PlaybackState::Paused if self.sequencer.is_transitioning() => {
                PlaybackState::Transitioning
            }
            state => state,
        }
    }

    pub fn is_running(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    /// Whether any item carries a caption.
    pub fn is_captioned(&self) -> bool {
        self.items.iter().any(MediaItem::has_caption)
    }

    pub fn current_index(&self) -> Option<usize> {
        self.state.is_started().then_some(self.current)
    }

    pub fn current_item(&self) -> Option<&MediaItem> {
        self.current_index().map(|index| &self.items[index])
    }

    pub fn current_item_id(&self) -> Option<&ItemId> {
        self.current_item().map(|item| &item.id)
    }

    /// Item last committed to the resting layer.
    pub fn resting_item_id(&self) -> Option<&ItemId> {
        self.sequencer.resting().map(|index| &self.items[index].id)
    }

    pub fn timer_handle(&self) -> Option<TimerHandle> {
        self.timer.handle()
    }

    pub fn transition_in_flight(&self) -> Option<TransitionToken> {
        self.sequencer.in_flight()
    }

    /// Fill of the progress indicator, in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        self.indicators.progress()
    }

    pub fn items(&self) -> &[MediaItem] {
        &self.items
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    fn state_is(&self, state: PlaybackState) -> bool {
        self.state == state
    }

    fn accepts_navigation(&self) -> bool {
        if !self.state.is_started() {
            trace!("navigation ignored before init");
            return false;
        }
        !self.items.is_empty()
    }

    fn step(&self, offset: isize) -> usize {
        let len = self.items.len() as isize;
        (self.current as isize + offset).rem_euclid(len) as usize
    }

    /// Moves to `target` and restarts the dwell from full delay.
    ///
    /// The timer is cancelled and the new sequence prepared before this
    /// returns, so nothing observes the old index with a live timer.
    fn navigate(&mut self, target: usize, trigger: Trigger) {
        self.timer.cancel();

        self.current = target;
        let showing = self.sequencer.pending().or(self.sequencer.resting());
        if showing != Some(target) {
            let item = &self.items[target];
            let token = self.sequencer.prepare(target, item, &mut self.surface);
            debug!(?trigger, index = target, id = %item.id, %token, "transition started");
        } else {
            trace!(?trigger, index = target, "already showing target, restarting dwell");
        }
        self.indicators.highlight(&mut self.surface, &self.items[target].id);

        self.hover_paused = false;
        self.resume();
    }

    fn resume(&mut self) {
        let handle = self.timer.rearm(self.delay);
        trace!(%handle, "dwell timer armed");
        self.state = PlaybackState::Playing;
        self.indicators.restart_progress(&mut self.surface);
        self.indicators.show_running(&mut self.surface, true);
    }

    fn suspend(&mut self) {
        if let Some(handle) = self.timer.cancel() {
            trace!(%handle, "dwell timer cancelled");
        }
        self.state = PlaybackState::Paused;
        self.indicators.show_running(&mut self.surface, false);
    }
}

impl<S: Surface> std::fmt::Debug for Carousel<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Carousel")
            .field("items", &self.items.len())
            .field("state", &self.state())
            .field("current", &self.current)
            .field("delay", &self.delay)
            .field("fullscreen", &self.fullscreen)
            .field("timer", &self.timer.handle())
            .field("transition", &self.sequencer.in_flight())
            .finish()
    }
}
