use bevy::prelude::*;
use rollball_shared::camera::follow_step;

use crate::coord::{to_bevy, to_game};

use super::ball::Player;
use super::core::MainCamera;
use super::{Settings, UpdateSet};

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, follow_player.in_set(UpdateSet::Visuals));
    }
}

/// Ease the camera toward its offset behind the player, then aim at the player.
fn follow_player(
    settings: Res<Settings>,
    q_player: Query<&Transform, (With<Player>, Without<MainCamera>)>,
    mut q_camera: Query<&mut Transform, With<MainCamera>>,
) {
    let Ok(player) = q_player.single() else {
        return;
    };
    let Ok(mut camera) = q_camera.single_mut() else {
        return;
    };

    let next = follow_step(
        to_game(camera.translation),
        to_game(player.translation),
        &settings.config.camera,
    );
    camera.translation = to_bevy(next);
    camera.look_at(player.translation, Vec3::Y);
}
