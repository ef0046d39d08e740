use bevy::prelude::*;

use crate::constants::{
    color_from_hex, Colors, HUD_FONT_SIZE, HUD_LEFT, HUD_SCORE_TOP, HUD_TIMER_TOP,
};
use crate::game::session::SessionState;

use super::types::{HudScoreText, HudTimerText};

pub(super) fn spawn_hud(mut commands: Commands, state: Res<SessionState>) {
    let font = TextFont::from_font_size(HUD_FONT_SIZE);
    let color = color_from_hex(Colors::HUD_TEXT);

    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(HUD_LEFT),
            top: Val::Px(HUD_SCORE_TOP),
            ..default()
        },
        Text::new(state.session.score_text()),
        font.clone(),
        TextColor(color),
        HudScoreText,
    ));

    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(HUD_LEFT),
            top: Val::Px(HUD_TIMER_TOP),
            ..default()
        },
        Text::new(state.session.timer_text()),
        font,
        TextColor(color),
        HudTimerText,
    ));
}
