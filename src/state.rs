/// Observable playback state of a carousel.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum PlaybackState {
    Idle,          // Constructed, `init()` not called yet
    Playing,       // Auto-advance timer armed
    Paused,        // Timer cancelled by hover or the pause button
    Transitioning, // A reveal is in flight; auto-advance resumes underneath
}

impl PlaybackState {
    pub fn is_started(self) -> bool {
        self != PlaybackState::Idle
    }
}
