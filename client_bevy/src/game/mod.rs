mod arena;
mod ball;
mod camera;
mod core;
mod hud;
mod input;
mod session;

pub use arena::ArenaPlugin;
pub use ball::BallPlugin;
pub use camera::CameraPlugin;
pub use core::CorePlugin;
pub(crate) use core::{FixedSet, Settings, UpdateSet};
pub use hud::HudPlugin;
pub use input::InputPlugin;
pub use session::SessionPlugin;
