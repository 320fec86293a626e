//! The Se7enth Code: a top-down detective game
//!
//! Walk the precinct office and seven crime scenes, one per deadly sin:
//! - Pick up evidence and inspect bodies to fill the notebook
//! - Interrogate suspects, then make an accusation
//! - Fixed 1280x720 logical scene, letterboxed to any window size

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod app;
mod assets;
mod config;
mod game;
mod input;
mod inventory;
mod menu;
mod notebook;
mod scene;
mod ui;

use macroquad::prelude::*;

use app::{AppState, FrameOutcome};
use assets::Assets;
use config::GameConfig;

fn window_conf() -> Conf {
    let config = GameConfig::load_or_default();
    Conf {
        window_title: format!("{} v{}", config.window.title, VERSION),
        window_width: config.window.width,
        window_height: config.window.height,
        window_resizable: true,
        high_dpi: true,
        // WASM: browser handles sizing
        #[cfg(not(target_arch = "wasm32"))]
        fullscreen: config.window.fullscreen,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    // window_conf can't hand its copy over, so read it again
    let config = GameConfig::load_or_default();
    let assets = Assets::load_all(&config.player.sprite_sheet);
    ui::set_font(assets.font().cloned());
    let mut app = AppState::new(config, assets);

    loop {
        app.timer.begin();

        if app.frame() == FrameOutcome::Quit {
            println!("Goodbye");
            break;
        }

        app.timer.wait(app.config.fps_limit);
        next_frame().await;
    }
}
