use bevy::prelude::*;

#[derive(Component)]
pub(super) struct HudScoreText;

#[derive(Component)]
pub(super) struct HudTimerText;
