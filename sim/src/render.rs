//! Rendering seam. The headless game hands a read-only view of each frame to
//! a `Renderer`; what it does with it is its own business.

use rollball_shared::vec3::Vec3;

use crate::scene::{MeshKind, Scene};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub look_at: Vec3,
}

/// Text overlay lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hud {
    pub score: String,
    pub timer: String,
}

pub struct Frame<'a> {
    pub index: u64,
    pub scene: &'a Scene,
    pub camera: &'a Camera,
    pub hud: &'a Hud,
}

pub trait Renderer {
    fn render(&mut self, frame: &Frame<'_>);
}

/// Draws nothing.
#[derive(Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _frame: &Frame<'_>) {}
}

/// Emits the overlay and player position through tracing.
#[derive(Debug)]
pub struct LogRenderer {
    every_n_frames: u64,
    last_hud: Option<Hud>,
}

impl LogRenderer {
    pub fn new(every_n_frames: u64) -> Self {
        Self {
            every_n_frames: every_n_frames.max(1),
            last_hud: None,
        }
    }
}

impl Renderer for LogRenderer {
    fn render(&mut self, frame: &Frame<'_>) {
        if self.last_hud.as_ref() != Some(frame.hud) {
            let timer_changed = self
                .last_hud
                .as_ref()
                .map_or(true, |last| last.timer != frame.hud.timer);
            if timer_changed {
                tracing::info!("{} | {}", frame.hud.score, frame.hud.timer);
            } else {
                tracing::debug!("{} | {}", frame.hud.score, frame.hud.timer);
            }
            self.last_hud = Some(frame.hud.clone());
        }

        if frame.index % self.every_n_frames == 0 {
            let player = frame
                .scene
                .meshes()
                .iter()
                .find(|m| m.kind == MeshKind::PlayerBall)
                .map(|m| m.pose.position);
            tracing::debug!(
                frame = frame.index,
                ?player,
                camera = ?frame.camera.position,
                "frame"
            );
        }
    }
}
