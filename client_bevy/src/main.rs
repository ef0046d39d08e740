mod constants;
mod coord;
mod game;

use bevy::prelude::*;
use bevy::window::{PresentMode, WindowResolution};
use bevy_rapier3d::prelude::*;
use rollball_shared::config::GameConfig;

use game::{
    ArenaPlugin, BallPlugin, CameraPlugin, CorePlugin, HudPlugin, InputPlugin, SessionPlugin,
};

fn main() {
    let seed = rng_seed();
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid game configuration: {}", e);
            std::process::exit(1);
        }
    };

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Rollball".to_string(),
                resolution: WindowResolution::new(1280, 720),
                present_mode: PresentMode::AutoVsync,
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::default().in_fixed_schedule())
        .add_plugins(CorePlugin { config, seed })
        .add_plugins(ArenaPlugin)
        .add_plugins(BallPlugin)
        .add_plugins(InputPlugin)
        .add_plugins(SessionPlugin)
        .add_plugins(CameraPlugin)
        .add_plugins(HudPlugin)
        .run();
}

const DEFAULT_SEED: u64 = 42;

fn rng_seed() -> u64 {
    std::env::var("ROLLBALL_SEED")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_SEED)
}

/// Defaults, or the JSON file named by `ROLLBALL_CONFIG`.
fn load_config() -> Result<GameConfig, String> {
    let config = match std::env::var("ROLLBALL_CONFIG") {
        Ok(path) => {
            let json = std::fs::read_to_string(&path)
                .map_err(|e| format!("cannot read {}: {}", path, e))?;
            GameConfig::from_json(&json)?
        }
        Err(_) => GameConfig::default(),
    };
    config.validate()?;
    Ok(config)
}
