//! Avoidance steering for AI balls.
//!
//! AI balls run away from the player when it comes close and get pushed
//! back from walls. Forces only act on the arena floor plane.

use rand::Rng;

use crate::config::{AiConfig, ArenaConfig};
use crate::vec3::{distance, normalize_or_zero, sub, vec3, Vec3};

/// A wall anchor. Steering compares a ball against each anchor on both floor axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wall {
    pub x: f32,
    pub z: f32,
}

/// Wall anchors in back, front, left, right order.
pub fn arena_walls(arena: &ArenaConfig) -> [Wall; 4] {
    let e = arena.half_extent;
    [
        Wall { x: 0.0, z: -e },
        Wall { x: 0.0, z: e },
        Wall { x: -e, z: 0.0 },
        Wall { x: e, z: 0.0 },
    ]
}

/// Jitter added to the avoidance force, uniform in [-max, max).
pub fn sample_jitter<R: Rng>(rng: &mut R, max: f32) -> f32 {
    if max <= 0.0 {
        return 0.0;
    }
    rng.gen_range(-max..max)
}

/// Force pushing an AI ball away from the player, or None when the player is
/// out of range. Magnitude is `avoid_force + jitter` on the floor plane.
pub fn avoidance_force(ai: Vec3, player: Vec3, jitter: f32, cfg: &AiConfig) -> Option<Vec3> {
    if distance(ai, player) >= cfg.avoid_distance {
        return None;
    }
    let away = normalize_or_zero(sub(ai, player));
    let magnitude = cfg.avoid_force + jitter;
    Some(vec3(away.x * magnitude, 0.0, away.z * magnitude))
}

/// Sum of wall repulsion on an AI ball. For each wall anchor, each floor axis
/// within `wall_distance` contributes `wall_force` pointing away from the anchor.
/// A ball exactly on the anchor's coordinate gets nothing on that axis.
pub fn wall_repulsion(ai: Vec3, walls: &[Wall], cfg: &AiConfig) -> Vec3 {
    let mut force = Vec3::ZERO;
    for wall in walls {
        let dz = ai.z - wall.z;
        if dz.abs() < cfg.wall_distance {
            force.z += unit_sign(dz) * cfg.wall_force;
        }
        let dx = ai.x - wall.x;
        if dx.abs() < cfg.wall_distance {
            force.x += unit_sign(dx) * cfg.wall_force;
        }
    }
    force
}

fn unit_sign(v: f32) -> f32 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Total steering force for one AI ball this frame.
pub fn steer<R: Rng>(
    ai: Vec3,
    player: Vec3,
    walls: &[Wall],
    cfg: &AiConfig,
    rng: &mut R,
) -> Vec3 {
    let jitter = sample_jitter(rng, cfg.avoid_jitter);
    let mut force = wall_repulsion(ai, walls, cfg);
    if let Some(avoid) = avoidance_force(ai, player, jitter, cfg) {
        force.x += avoid.x;
        force.z += avoid.z;
    }
    force
}
