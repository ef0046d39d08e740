//! Run loops.
//!
//! `RunLoop` advances whole frames back to back and derives the one-second
//! session timer from the fixed step, so a run is fully deterministic.
//! `run_realtime` paces the same state with tokio timers and takes keyboard
//! commands from a channel.

use std::future::pending;
use std::time::Duration;

use rollball_shared::session::{SessionEvent, SessionPhase};
use tokio::sync::mpsc;
use tokio::time::{interval, interval_at, Instant, Interval, MissedTickBehavior};

use crate::bot::Controller;
use crate::render::Renderer;
use crate::state::GameState;

/// When a run stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopCondition {
    /// After this many frames
    Frames(u64),
    /// As soon as a session has ended
    SessionEnded,
    /// Whichever of the two comes first
    Either(u64),
}

impl StopCondition {
    fn reached(&self, frames: u64, phase: SessionPhase) -> bool {
        match *self {
            StopCondition::Frames(n) => frames >= n,
            StopCondition::SessionEnded => phase == SessionPhase::Ended,
            StopCondition::Either(n) => frames >= n || phase == SessionPhase::Ended,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSummary {
    pub frames: u64,
    pub timer_ticks: u32,
    pub points_awarded: u64,
    pub final_score: u32,
    pub phase: SessionPhase,
}

/// Commands from keyboard sources to the real-time runner
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameCommand {
    KeyDown(String),
    KeyUp(String),
    KeyPress(String),
    Shutdown,
}

/// Fixed-step loop with a frame-counted one-second timer.
#[derive(Debug)]
pub struct RunLoop {
    frames_per_second: u32,
    frames_into_second: u32,
    seen_generation: u32,
}

impl RunLoop {
    pub fn new(state: &GameState) -> Self {
        Self {
            frames_per_second: state.config().physics.steps_per_second().max(1),
            frames_into_second: 0,
            seen_generation: state.session().generation(),
        }
    }

    pub fn run(
        &mut self,
        state: &mut GameState,
        renderer: &mut dyn Renderer,
        controller: &mut dyn Controller,
        stop: StopCondition,
    ) -> RunSummary {
        let mut summary = RunSummary {
            phase: state.session().phase(),
            final_score: state.session().score(),
            ..RunSummary::default()
        };

        while !stop.reached(summary.frames, state.session().phase()) {
            controller.drive(state);
            self.rearm_on_new_session(state);

            let report = state.frame(renderer);
            summary.frames += 1;
            summary.points_awarded += report.points_awarded as u64;

            if state.session().is_running() {
                self.frames_into_second += 1;
                if self.frames_into_second >= self.frames_per_second {
                    self.frames_into_second = 0;
                    if state.tick_second() != SessionEvent::Ignored {
                        summary.timer_ticks += 1;
                    }
                }
            }
        }

        summary.phase = state.session().phase();
        summary.final_score = state.session().score();
        tracing::info!(
            frames = summary.frames,
            timer_ticks = summary.timer_ticks,
            score = summary.final_score,
            phase = ?summary.phase,
            "run finished"
        );
        summary
    }

    fn rearm_on_new_session(&mut self, state: &GameState) {
        let generation = state.session().generation();
        if generation != self.seen_generation {
            self.seen_generation = generation;
            self.frames_into_second = 0;
        }
    }
}

async fn tick_if_armed(timer: &mut Option<Interval>) {
    match timer {
        Some(t) => {
            t.tick().await;
        }
        None => pending::<()>().await,
    }
}

fn second_timer() -> Interval {
    let period = Duration::from_secs(1);
    interval_at(Instant::now() + period, period)
}

/// Drive `state` in real time until `stop` is reached or a `Shutdown`
/// command arrives. Frames run on one interval, the session countdown on an
/// independent one-second interval armed whenever a session starts.
pub async fn run_realtime<R, C>(
    state: &mut GameState,
    renderer: &mut R,
    controller: &mut C,
    mut cmd_rx: mpsc::Receiver<GameCommand>,
    stop: StopCondition,
) -> RunSummary
where
    R: Renderer,
    C: Controller,
{
    let frame_period = Duration::from_secs_f32(state.config().physics.fixed_dt);
    let mut frame_interval = interval(frame_period);
    frame_interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let mut seen_generation = state.session().generation();
    let mut countdown: Option<Interval> = state.session().is_running().then(second_timer);
    let mut summary = RunSummary::default();

    loop {
        tokio::select! {
            _ = frame_interval.tick() => {
                controller.drive(state);
                let report = state.frame(renderer);
                summary.frames += 1;
                summary.points_awarded += report.points_awarded as u64;
            }

            _ = tick_if_armed(&mut countdown) => {
                match state.tick_second() {
                    SessionEvent::Ignored => countdown = None,
                    SessionEvent::Tick { .. } => summary.timer_ticks += 1,
                    SessionEvent::Ended { .. } => {
                        summary.timer_ticks += 1;
                        countdown = None;
                    }
                }
            }

            Some(cmd) = cmd_rx.recv() => {
                match cmd {
                    GameCommand::KeyDown(key) => state.key_down(&key),
                    GameCommand::KeyUp(key) => state.key_up(&key),
                    GameCommand::KeyPress(key) => {
                        state.key_press(&key);
                    }
                    GameCommand::Shutdown => {
                        tracing::info!("shutdown requested");
                        break;
                    }
                }
            }
        }

        let generation = state.session().generation();
        if generation != seen_generation {
            seen_generation = generation;
            countdown = Some(second_timer());
        }

        if stop.reached(summary.frames, state.session().phase()) {
            break;
        }
    }

    summary.phase = state.session().phase();
    summary.final_score = state.session().score();
    tracing::info!(
        frames = summary.frames,
        timer_ticks = summary.timer_ticks,
        score = summary.final_score,
        "real-time run finished"
    );
    summary
}
