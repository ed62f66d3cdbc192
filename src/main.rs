use log::info;

mod collision;
mod components;
mod config;
mod engine;
mod renderer;
mod road;
mod systems;

use config::{ScreenConfig, SpawnConfig};

fn main() {
    env_logger::init();

    let screen = ScreenConfig::default();
    let spawn = SpawnConfig::default();

    info!(
        "starting {}x{} window ({}x upscale, {} fps)",
        screen.width * screen.scale,
        screen.height * screen.scale,
        screen.scale,
        screen.fps,
    );

    engine::run(screen, spawn);
}
