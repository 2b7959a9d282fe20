use std::time::Duration;

pub const DEFAULT_INTERVAL_MS: u64 = 5000;    // Dwell time between automatic advances
pub const DEFAULT_REVEAL_MS: u64 = 1000;      // Crossfade duration of the incoming layer

pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(DEFAULT_INTERVAL_MS);
pub const DEFAULT_REVEAL: Duration = Duration::from_millis(DEFAULT_REVEAL_MS);

pub const RENDER_WIDTH: i32 = 1280;           // Initial viewer window width
pub const RENDER_HEIGHT: i32 = 720;           // Initial viewer window height
pub const FPS: u32 = 60;                      // Frames per second

pub const THUMBNAIL_HEIGHT: i32 = 72;         // Height of the thumbnail strip cells
pub const CONTROL_BAR_HEIGHT: i32 = 40;       // Height of the transport bar
pub const PROGRESS_HEIGHT: i32 = 4;           // Thickness of the progress indicator
