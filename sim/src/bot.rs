//! Input sources that drive a `GameState` from inside the run loop.

use rollball_shared::input::MoveKey;
use rollball_shared::vec3::{distance, Vec3};

use crate::state::{GameState, START_KEY};

/// Called once before every frame.
pub trait Controller {
    fn drive(&mut self, state: &mut GameState);
}

/// Leaves the input untouched.
#[derive(Debug, Default)]
pub struct Passive;

impl Controller for Passive {
    fn drive(&mut self, _state: &mut GameState) {}
}

/// Presses Enter once, then chases the nearest AI ball.
#[derive(Debug)]
pub struct Autopilot {
    dead_zone: f32,
    pressed_start: bool,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self {
            dead_zone: 0.5,
            pressed_start: false,
        }
    }
}

impl Autopilot {
    pub fn new(dead_zone: f32) -> Self {
        Self {
            dead_zone,
            pressed_start: false,
        }
    }

    /// Keys to hold to move from `from` toward `to` on the floor.
    pub fn keys_toward(&self, from: Vec3, to: Vec3) -> Vec<MoveKey> {
        let mut keys = Vec::new();
        let dx = to.x - from.x;
        let dz = to.z - from.z;
        if dx > self.dead_zone {
            keys.push(MoveKey::D);
        } else if dx < -self.dead_zone {
            keys.push(MoveKey::A);
        }
        if dz > self.dead_zone {
            keys.push(MoveKey::S);
        } else if dz < -self.dead_zone {
            keys.push(MoveKey::W);
        }
        keys
    }
}

pub fn nearest(from: Vec3, candidates: &[Vec3]) -> Option<Vec3> {
    candidates
        .iter()
        .copied()
        .min_by(|a, b| distance(from, *a).total_cmp(&distance(from, *b)))
}

impl Controller for Autopilot {
    fn drive(&mut self, state: &mut GameState) {
        if !self.pressed_start {
            state.key_press(START_KEY);
            self.pressed_start = true;
        }

        let player = state.player_position();
        let target = nearest(player, &state.ai_positions());
        let keys = match target {
            Some(t) => self.keys_toward(player, t),
            None => Vec::new(),
        };

        let input = state.input_mut();
        input.clear();
        for key in keys {
            input.set(key, true);
        }
    }
}
