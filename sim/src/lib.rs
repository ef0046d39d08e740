//! Headless rollball game.
//!
//! This module exposes the simulation components for use in tests and binaries.

pub mod bot;
pub mod config;
pub mod game_loop;
pub mod physics;
pub mod render;
pub mod scene;
pub mod state;
