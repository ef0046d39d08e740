//! Engine-independent game rules shared by the headless simulation and the
//! bevy client.

pub mod camera;
pub mod config;
pub mod input;
pub mod scoring;
pub mod session;
pub mod steering;
pub mod vec3;
