use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use rand::seq::SliceRandom;
use raylib::prelude::*;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod stage;
mod texture_loader;

use carousel::constants::*;
use carousel::scan::{items_from_paths, load_sorted_image_paths};
use carousel::{Carousel, CarouselConfig};

use crate::stage::{Control, Stage};
use crate::texture_loader::load_texture_with_exif_rotation;

#[derive(Parser, Debug)]
#[command(name = "carousel", version, about = "Crossfading image carousel")]
struct Args {
    /// Directory containing the images to cycle through
    directory: PathBuf,

    /// TOML file with carousel settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Dwell time between automatic advances, in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Crossfade duration, in milliseconds
    #[arg(long)]
    reveal_ms: Option<u64>,

    /// Shuffle the display order once at startup
    #[arg(long)]
    shuffle: bool,

    /// Start in fullscreen
    #[arg(long)]
    fullscreen: bool,
}

fn load_config(args: &Args) -> Result<CarouselConfig> {
    let mut config = match &args.config {
        Some(path) => CarouselConfig::load_from_path(path)?,
        None => CarouselConfig::default(),
    };
    if let Some(delay_ms) = args.delay_ms {
        config.interval_ms = delay_ms;
    }
    if let Some(reveal_ms) = args.reveal_ms {
        config.reveal_ms = reveal_ms;
    }
    config.validate()?;
    Ok(config)
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let config = load_config(&args)?;

    let mut paths = load_sorted_image_paths(&args.directory)
        .with_context(|| format!("cannot load images from {}", args.directory.display()))?;
    if args.shuffle {
        paths.shuffle(&mut rand::rng());
    }
    info!(images = paths.len(), directory = %args.directory.display(), "found images");

    let (mut rl, thread) = raylib::init()
        .size(RENDER_WIDTH, RENDER_HEIGHT)
        .title("Carousel")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    // --- Load Textures ---
    let mut stage = Stage::new();
    let mut items = Vec::new();
    for item in items_from_paths(&paths) {
        let Some((_, uri)) = item.sources.iter().next() else {
            continue;
        };
        match load_texture_with_exif_rotation(&mut rl, &thread, Path::new(uri)) {
            Ok(texture) => {
                stage.add(item.id.clone(), texture);
                items.push(item);
            }
            Err(e) => warn!("skipping {}: {e:#}", item.id),
        }
    }

    let mut carousel = Carousel::new(items, stage, &config).context("failed to set up carousel")?;
    carousel.init();
    if args.fullscreen {
        carousel.toggle_fullscreen();
    }

    // --- Main Loop ---
    let mut hovering = false;
    while !rl.window_should_close() {
        let dt = Duration::from_secs_f32(rl.get_frame_time());
        let (width, height) = (rl.get_screen_width(), rl.get_screen_height());
        carousel.surface_mut().set_viewport(width, height);

        handle_input(&rl, &mut carousel, &mut hovering);
        carousel.update(dt);

        if let Some(fullscreen) = carousel.surface_mut().take_fullscreen_request() {
            if rl.is_window_fullscreen() != fullscreen {
                rl.toggle_fullscreen();
            }
        }

        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);
        carousel.surface().draw(&mut d);
    }

    carousel.teardown();
    Ok(())
}

fn handle_input(rl: &RaylibHandle, carousel: &mut Carousel<Stage>, hovering: &mut bool) {
    let over = rl.is_cursor_on_screen();
    if over != *hovering {
        *hovering = over;
        if over {
            carousel.pointer_enter();
        } else {
            carousel.pointer_leave();
        }
    }

    if rl.is_key_pressed(KeyboardKey::KEY_SPACE) {
        carousel.toggle_play_pause();
    }
    if rl.is_key_pressed(KeyboardKey::KEY_RIGHT) {
        carousel.next();
    }
    if rl.is_key_pressed(KeyboardKey::KEY_LEFT) {
        carousel.previous();
    }
    if rl.is_key_pressed(KeyboardKey::KEY_F) {
        carousel.toggle_fullscreen();
    }
    if rl.is_key_pressed(KeyboardKey::KEY_HOME) {
        if let Some(first) = carousel.items().first().map(|item| item.id.clone()) {
            carousel.select_item(&first);
        }
    }

    if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
        match carousel.surface().hit_test(rl.get_mouse_position()) {
            Some(Control::Previous) => carousel.previous(),
            Some(Control::PlayPause) => carousel.toggle_play_pause(),
            Some(Control::Next) => carousel.next(),
            Some(Control::Fullscreen) => carousel.toggle_fullscreen(),
            Some(Control::Thumbnail(id)) => carousel.select_item(&id),
            None => {}
        }
    }
}
