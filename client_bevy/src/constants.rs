/// Sun placed straight above the arena center.
pub const LIGHT_HEIGHT: f32 = 20.0;
pub const LIGHT_ILLUMINANCE: f32 = 10_000.0;
pub const AMBIENT_BRIGHTNESS: f32 = 250.0;

pub const BALL_FRICTION: f32 = 0.5;

pub const HUD_FONT_SIZE: f32 = 24.0;
pub const HUD_LEFT: f32 = 10.0;
pub const HUD_SCORE_TOP: f32 = 10.0;
pub const HUD_TIMER_TOP: f32 = 40.0;

#[derive(Clone, Copy)]
pub struct Colors;

impl Colors {
    pub const SKY: u32 = 0x87a9c8;
    pub const GROUND: u32 = 0x6b8e4e;
    pub const WALL: u32 = 0x9a9a9a;
    pub const PLAYER: u32 = 0x3a7bd5;
    pub const AI_BALL: u32 = 0xff0000;
    pub const AMBIENT: u32 = 0x404040;
    pub const HUD_TEXT: u32 = 0xffffff;
}

pub fn color_from_hex(rgb: u32) -> bevy::prelude::Color {
    let r = ((rgb >> 16) & 0xff) as f32 / 255.0;
    let g = ((rgb >> 8) & 0xff) as f32 / 255.0;
    let b = (rgb & 0xff) as f32 / 255.0;
    bevy::prelude::Color::srgb(r, g, b)
}
