//! Star Road: a painter's-algorithm 3D platformer
//!
//! - Flat-shaded polygons sorted back to front, no depth buffer
//! - Software framebuffer scaled to the window
//! - Sixteen hand-built courses with stars and coins
//! - Fixed-rate simulation decoupled from the frame rate

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod rasterizer;
mod world;
mod game;
mod config;
mod scene;
mod present;
mod app;

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use clap::Parser;
use log::{error, info, warn};
use macroquad::prelude::*;
use app::AppState;
use config::{load_config, save_config, GameConfig};
use game::{InputState, MenuInput};
use rasterizer::Framebuffer;

#[derive(Parser, Debug)]
#[command(name = "star-road", version, about = "Painter's-algorithm 3D platformer")]
struct Args {
    /// Configuration file, used when it exists
    #[arg(long, default_value = "star-road.ron")]
    config: PathBuf,

    /// Write the default configuration to PATH and exit
    #[arg(long, value_name = "PATH")]
    dump_config: Option<PathBuf>,

    /// Jump straight into the named course
    #[arg(long, value_name = "NAME")]
    course: Option<String>,

    /// Window scale factor
    #[arg(long, default_value_t = 1)]
    scale: u32,
}

fn window_conf() -> Conf {
    let scale = Args::try_parse().map(|a| a.scale).unwrap_or(1).clamp(1, 4) as i32;
    Conf {
        window_title: format!("Star Road v{}", VERSION),
        window_width: 800 * scale,
        window_height: 600 * scale,
        window_resizable: true,
        ..Default::default()
    }
}

fn read_config(path: &Path) -> GameConfig {
    if !path.exists() {
        info!("No config at {}, using defaults", path.display());
        return GameConfig::default();
    }
    match load_config(path) {
        Ok(cfg) => {
            info!("Loaded config from {}", path.display());
            cfg
        }
        Err(e) => {
            warn!("Failed to load config {}: {}, using defaults", path.display(), e);
            GameConfig::default()
        }
    }
}

fn save_screenshot(fb: &Framebuffer) {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let path = format!("screenshot-{}.png", secs);
    match fb.save_png(&path) {
        Ok(()) => info!("Saved screenshot {}", path),
        Err(e) => error!("Failed to save screenshot {}: {}", path, e),
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    if let Some(path) = &args.dump_config {
        match save_config(&GameConfig::default(), path) {
            Ok(()) => info!("Wrote default config to {}", path.display()),
            Err(e) => error!("Failed to write config {}: {}", path.display(), e),
        }
        return;
    }

    let cfg = read_config(&args.config);
    let mut fb = Framebuffer::new(cfg.render.width, cfg.render.height);
    let mut app = AppState::new();

    if let Some(name) = &args.course {
        match world::find_course(name) {
            Some(index) => {
                app.start_course(index, &cfg);
            }
            None => warn!("Unknown course {:?}, starting at the menu", name),
        }
    }

    info!("=== Star Road v{} ===", VERSION);

    let step = cfg.tick_seconds();
    let max_ticks = cfg.max_ticks_per_frame.max(1);
    let mut accumulator = 0.0f64;
    let mut pending = MenuInput::default();

    loop {
        pending = pending.merge(MenuInput::from_keyboard());
        if pending.screenshot {
            save_screenshot(&fb);
            pending.screenshot = false;
        }

        // Fixed-rate simulation; scene keys go to the first tick only
        accumulator += get_frame_time() as f64;
        let mut ticks = 0;
        while accumulator >= step && ticks < max_ticks {
            let input = InputState::from_keyboard();
            app.tick(&input, &pending, &cfg);
            pending = MenuInput::default();
            accumulator -= step;
            ticks += 1;
        }
        if ticks == max_ticks {
            accumulator = accumulator.min(step);
        }

        clear_background(BLACK);
        app.render(&mut fb, &cfg);
        let fit = present::blit(&fb);
        app.draw_overlay(&fit, &cfg);

        next_frame().await;
    }
}
