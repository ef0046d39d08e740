use bevy::prelude::*;
use rollball_shared::session::{Session, SessionEvent};

use super::UpdateSet;

pub struct SessionPlugin;

/// The scoring session and its one-second countdown timer.
#[derive(Resource)]
pub(crate) struct SessionState {
    pub(crate) session: Session,
    timer: Timer,
}

impl SessionState {
    pub(crate) fn new(duration_secs: u32) -> Self {
        Self {
            session: Session::new(duration_secs),
            timer: Timer::from_seconds(1.0, TimerMode::Repeating),
        }
    }

    /// Enter pressed. Restarts the countdown from a full second.
    pub(crate) fn start(&mut self) -> bool {
        if !self.session.start() {
            return false;
        }
        self.timer.reset();
        true
    }

    /// Advance the countdown by `delta`; the session sees one tick per
    /// elapsed second and none once it has ended.
    pub(crate) fn advance(&mut self, delta: std::time::Duration) -> Vec<SessionEvent> {
        if !self.session.is_running() {
            return Vec::new();
        }
        self.timer.tick(delta);
        let mut events = Vec::new();
        for _ in 0..self.timer.times_finished_this_tick() {
            let event = self.session.tick_second();
            events.push(event);
            if !self.session.is_running() {
                break;
            }
        }
        events
    }
}

impl Plugin for SessionPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, countdown_system.in_set(UpdateSet::Session));
    }
}

fn countdown_system(time: Res<Time>, mut state: ResMut<SessionState>) {
    if !state.session.is_running() {
        return;
    }
    for event in state.advance(time.delta()) {
        match event {
            SessionEvent::Tick { time_remaining } => debug!(time_remaining, "timer tick"),
            SessionEvent::Ended { final_score } => {
                info!(final_score, "Game Over! Final Score: {}", final_score)
            }
            SessionEvent::Ignored => {}
        }
    }
}
