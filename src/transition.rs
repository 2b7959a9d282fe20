//! Two-phase crossfade of the incoming layer onto the resting layer.
//!
//! Every [`TransitionSequencer::prepare`] mints a new [`TransitionToken`].
//! Only the latest token can commit; an older sequence that completes late is
//! dropped instead of overwriting the newer result.

use std::fmt;
use std::time::Duration;

use tracing::{trace, warn};

use crate::media::{Labeling, MediaItem};
use crate::surface::{Layer, RevealDriver, Surface};
use crate::tween::{Easing, Tween};

/// Version marker of one transition sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TransitionToken(u64);

impl fmt::Display for TransitionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "transition#{}", self.0)
    }
}

#[derive(Debug)]
struct Reveal {
    token: TransitionToken,
    target: usize,
    /// `None` while the host animates the layer itself.
    tween: Option<Tween>,
}

#[derive(Debug)]
pub struct TransitionSequencer {
    duration: Duration,
    easing: Easing,
    issued: u64,
    in_flight: Option<Reveal>,
    resting: Option<usize>,
}

impl TransitionSequencer {
    pub fn new(duration: Duration, easing: Easing) -> Self {
        Self {
            duration,
            easing,
            issued: 0,
            in_flight: None,
            resting: None,
        }
    }

    /// Loads `item` (at index `target`) hidden into the incoming layer and
    /// starts revealing it, superseding any sequence still in flight.
    ///
    /// When the surface cannot animate, or the reveal duration is zero, the
    /// item is committed before this returns.
    pub fn prepare<S: Surface + ?Sized>(
        &mut self,
        target: usize,
        item: &MediaItem,
        surface: &mut S,
    ) -> TransitionToken {
        self.issued += 1;
        let token = TransitionToken(self.issued);
        if let Some(stale) = self.in_flight.take() {
            trace!(superseded = %stale.token, by = %token, "transition superseded");
        }

        surface.set_opacity(Layer::Incoming, 0.0);
        surface.load(Layer::Incoming, item);
        surface.set_labeling(Layer::Incoming, Labeling::for_item(item));

        let driver = if self.duration.is_zero() {
            RevealDriver::Unavailable
        } else {
            surface.reveal_driver()
        };

        match driver {
            RevealDriver::Tweened => {
                self.in_flight = Some(Reveal {
                    token,
                    target,
                    tween: Some(Tween::new(self.easing, 0.0, 1.0, self.duration)),
                });
            }
            RevealDriver::Host => {
                self.in_flight = Some(Reveal {
                    token,
                    target,
                    tween: None,
                });
                surface.begin_reveal(token, self.duration, self.easing);
            }
            RevealDriver::Unavailable => {
                if !self.duration.is_zero() {
                    warn!(%token, "surface cannot animate, committing immediately");
                }
                self.in_flight = Some(Reveal {
                    token,
                    target,
                    tween: None,
                });
                surface.set_opacity(Layer::Incoming, 1.0);
                self.commit(token, item, surface);
            }
        }

        token
    }

    /// Advances a tweened reveal. Returns the token once its animation has
    /// reached full opacity and is ready to commit.
    pub fn update<S: Surface + ?Sized>(&mut self, dt: Duration, surface: &mut S) -> Option<TransitionToken> {
        let reveal = self.in_flight.as_mut()?;
        let tween = reveal.tween.as_mut()?;
        let opacity = tween.apply(dt);
        surface.set_opacity(Layer::Incoming, opacity);
        tween.finished().then_some(reveal.token)
    }

    /// Copies the revealed item into the resting layer.
    ///
    /// Returns the committed index, or `None` when `token` is stale or
    /// nothing is in flight. `item` must be the item the token was prepared
    /// for; see [`target_of`](Self::target_of).
    pub fn commit<S: Surface + ?Sized>(
        &mut self,
        token: TransitionToken,
        item: &MediaItem,
        surface: &mut S,
    ) -> Option<usize> {
        let Some(reveal) = self.in_flight.as_ref().filter(|r| r.token == token) else {
            trace!(%token, latest = self.issued, "ignoring stale commit");
            return None;
        };
        let target = reveal.target;
        self.in_flight = None;

        surface.load(Layer::Resting, item);
        surface.set_labeling(Layer::Resting, Labeling::for_item(item));
        surface.set_opacity(Layer::Incoming, 0.0);
        surface.set_labeling(Layer::Incoming, Labeling::cleared());
        self.resting = Some(target);
        Some(target)
    }

    /// Index the in-flight sequence is revealing, if `token` is still current.
    pub fn target_of(&self, token: TransitionToken) -> Option<usize> {
        self.in_flight
            .as_ref()
            .filter(|reveal| reveal.token == token)
            .map(|reveal| reveal.target)
    }

    /// Index the in-flight sequence is revealing.
    pub fn pending(&self) -> Option<usize> {
        self.in_flight.as_ref().map(|reveal| reveal.target)
    }

    /// Invalidates the in-flight sequence without touching the resting layer.
    pub fn cancel(&mut self) -> Option<TransitionToken> {
        self.in_flight.take().map(|reveal| reveal.token)
    }

    pub fn in_flight(&self) -> Option<TransitionToken> {
        self.in_flight.as_ref().map(|reveal| reveal.token)
    }

    pub fn is_transitioning(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Index last committed to the resting layer.
    pub fn resting(&self) -> Option<usize> {
        self.resting
    }
}
