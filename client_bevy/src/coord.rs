//! Conversions between the shared game vectors and bevy's glam types.
//! Both are Y-up, right-handed and in meters, so these are plain copies.

use bevy::prelude::Vec3;
use rollball_shared::vec3 as game;

pub fn to_bevy(v: game::Vec3) -> Vec3 {
    Vec3::new(v.x, v.y, v.z)
}

pub fn to_game(v: Vec3) -> game::Vec3 {
    game::vec3(v.x, v.y, v.z)
}
