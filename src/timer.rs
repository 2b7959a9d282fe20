//! The single auto-advance timer of a carousel.
//!
//! Time only moves when the host calls [`DwellTimer::tick`], so the timer is
//! as deterministic as the frame deltas fed into it.

use std::fmt;
use std::time::Duration;

/// Opaque identity of one arming of the timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

impl fmt::Display for TimerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy)]
struct Armed {
    handle: TimerHandle,
    delay: Duration,
    elapsed: Duration,
}

#[derive(Debug, Default)]
pub struct DwellTimer {
    armed: Option<Armed>,
    issued: u64,
}

impl DwellTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms the timer with `delay` and returns the new handle.
    ///
    /// The timer must be disarmed first: the carousel never holds two handles.
    pub fn arm(&mut self, delay: Duration) -> TimerHandle {
        debug_assert!(self.armed.is_none(), "dwell timer armed twice without cancel");
        self.issued += 1;
        let handle = TimerHandle(self.issued);
        self.armed = Some(Armed {
            handle,
            delay,
            elapsed: Duration::ZERO,
        });
        handle
    }

    /// Disarms the timer, returning the handle that was active.
    pub fn cancel(&mut self) -> Option<TimerHandle> {
        self.armed.take().map(|armed| armed.handle)
    }

    /// Cancels any active handle and arms a fresh one from full delay.
    pub fn rearm(&mut self, delay: Duration) -> TimerHandle {
        self.cancel();
        self.arm(delay)
    }

    /// Advances the timer by `dt`, returning `true` when it fires.
    ///
    /// A firing timer starts its next period from zero; a `dt` spanning more
    /// than one period still fires once.
    pub fn tick(&mut self, dt: Duration) -> bool {
        let Some(armed) = self.armed.as_mut() else {
            return false;
        };
        armed.elapsed += dt;
        if armed.elapsed >= armed.delay {
            armed.elapsed = Duration::ZERO;
            true
        } else {
            false
        }
    }

    pub fn handle(&self) -> Option<TimerHandle> {
        self.armed.map(|armed| armed.handle)
    }

    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    /// Fraction of the current period already elapsed, `None` when disarmed.
    pub fn progress(&self) -> Option<f32> {
        self.armed.map(|armed| {
            if armed.delay.is_zero() {
                1.0
            } else {
                (armed.elapsed.as_secs_f32() / armed.delay.as_secs_f32()).min(1.0)
            }
        })
    }
}
