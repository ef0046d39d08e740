use crate::config::CameraConfig;
use crate::vec3::{add, lerp, Vec3};

/// Where the chase camera wants to be for a given player position.
pub fn follow_target(player: Vec3, cfg: &CameraConfig) -> Vec3 {
    add(player, cfg.offset)
}

/// One frame of camera smoothing: move a fixed fraction toward the target.
/// The camera always looks at `player` afterwards.
pub fn follow_step(camera: Vec3, player: Vec3, cfg: &CameraConfig) -> Vec3 {
    lerp(camera, follow_target(player, cfg), cfg.follow_lerp)
}
