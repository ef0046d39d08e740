use bevy::prelude::*;
use rollball_shared::input::{InputState, MoveKey};

use super::session::SessionState;
use super::UpdateSet;

pub struct InputPlugin;

/// Movement keys held this frame, read by the fixed-step force system.
#[derive(Resource, Default)]
pub(crate) struct MoveInput(pub(crate) InputState);

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, input_system.in_set(UpdateSet::Input));
    }
}

fn key_code(key: MoveKey) -> KeyCode {
    match key {
        MoveKey::W => KeyCode::KeyW,
        MoveKey::A => KeyCode::KeyA,
        MoveKey::S => KeyCode::KeyS,
        MoveKey::D => KeyCode::KeyD,
    }
}

pub(crate) fn held_keys(keys: &ButtonInput<KeyCode>) -> InputState {
    let mut state = InputState::default();
    for key in MoveKey::ALL {
        state.set(key, keys.pressed(key_code(key)));
    }
    state
}

fn input_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut input: ResMut<MoveInput>,
    mut session: ResMut<SessionState>,
) {
    input.0 = held_keys(&keys);

    if keys.just_pressed(KeyCode::Enter) && session.start() {
        info!(
            duration_secs = session.session.duration_secs(),
            "session started"
        );
    }
}
