use bevy::prelude::*;

use crate::game::session::SessionState;

use super::types::{HudScoreText, HudTimerText};

type ScoreTextQuery<'w, 's> =
    Query<'w, 's, &'static mut Text, (With<HudScoreText>, Without<HudTimerText>)>;
type TimerTextQuery<'w, 's> =
    Query<'w, 's, &'static mut Text, (With<HudTimerText>, Without<HudScoreText>)>;

pub(super) fn update_session_ui(
    state: Res<SessionState>,
    mut q_score: ScoreTextQuery,
    mut q_timer: TimerTextQuery,
) {
    if !state.is_changed() {
        return;
    }
    if let Ok(mut text) = q_score.single_mut() {
        text.0 = state.session.score_text();
    }
    if let Ok(mut text) = q_timer.single_mut() {
        text.0 = state.session.timer_text();
    }
}
