//! Integration tests for the headless game.
//!
//! These tests build a full arena and drive it through the public API the
//! same way the binary does.

use rollball_shared::config::GameConfig;
use rollball_shared::session::SessionPhase;
use rollball_shared::vec3::vec3;
use rollball_sim::bot::{Autopilot, Controller, Passive};
use rollball_sim::game_loop::{RunLoop, StopCondition};
use rollball_sim::render::{Frame, NullRenderer, Renderer};
use rollball_sim::state::GameState;

/// Records what each frame handed to the renderer.
#[derive(Default)]
struct RecordingRenderer {
    frames: Vec<u64>,
    scores: Vec<String>,
    timers: Vec<String>,
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, frame: &Frame<'_>) {
        self.frames.push(frame.index);
        self.scores.push(frame.hud.score.clone());
        self.timers.push(frame.hud.timer.clone());
    }
}

/// Presses a fixed set of keys every frame.
struct Hold(&'static [&'static str]);

impl Controller for Hold {
    fn drive(&mut self, state: &mut GameState) {
        for key in self.0 {
            state.key_down(key);
        }
    }
}

fn lone_player() -> GameState {
    let mut config = GameConfig::default();
    config.ai.count = 0;
    GameState::new(config, 1).unwrap()
}

/// One small AI ball parked next to a resting player: close enough to score,
/// far enough that the spheres do not touch physically.
fn player_with_close_ai() -> GameState {
    let mut config = GameConfig::default();
    config.ai.count = 1;
    config.ai.radius = 0.1;
    let mut state = GameState::new(config, 1).unwrap();
    let player = state.player_body();
    let ai = state.ai_bodies()[0];
    assert!(state.place_body(player, vec3(0.0, 1.0, 0.0)));
    assert!(state.place_body(ai, vec3(1.5, 0.1, 0.0)));
    state
}

#[test]
fn full_session_ends_after_thirty_seconds_of_frames() {
    let mut state = GameState::new(GameConfig::default(), 42).unwrap();
    let mut renderer = RecordingRenderer::default();
    assert!(state.key_press("Enter"));

    let mut run = RunLoop::new(&state);
    let summary = run.run(
        &mut state,
        &mut renderer,
        &mut Passive,
        StopCondition::Either(10_000),
    );

    assert_eq!(summary.frames, 30 * 60);
    assert_eq!(summary.timer_ticks, 30);
    assert_eq!(summary.phase, SessionPhase::Ended);
    assert_eq!(renderer.frames.len(), 30 * 60);
    assert_eq!(renderer.timers.first().unwrap(), "Time left: 30s");
    assert_eq!(
        state.hud().timer,
        format!("Game Over! Final Score: {}", summary.final_score)
    );
    assert_eq!(summary.points_awarded, summary.final_score as u64);
}

#[test]
fn renderer_sees_every_frame_in_order() {
    let mut state = lone_player();
    let mut renderer = RecordingRenderer::default();
    RunLoop::new(&state).run(&mut state, &mut renderer, &mut Passive, StopCondition::Frames(5));
    assert_eq!(renderer.frames, vec![0, 1, 2, 3, 4]);
}

#[test]
fn meshes_track_bodies_every_frame() {
    let mut state = GameState::new(GameConfig::default(), 9).unwrap();
    let mut renderer = NullRenderer;
    state.key_press("Enter");
    state.key_down("d");
    for _ in 0..120 {
        state.frame(&mut renderer);
        for (body, mesh) in state.scene().registry().pairs() {
            let body_pose = state.physics().pose(body).unwrap();
            let mesh_pose = state.scene().mesh(mesh).unwrap().pose;
            assert_eq!(body_pose, mesh_pose);
        }
    }
}

#[test]
fn holding_w_pushes_player_forward() {
    let mut state = lone_player();
    let mut renderer = NullRenderer;
    state.key_down("w");
    state.frame(&mut renderer);
    let v = state.physics().linear_velocity(state.player_body()).unwrap();
    // 50 / mass 5 over one 1/60 s step, less a little damping.
    let expected = -50.0 / 5.0 / 60.0;
    assert!(v.z < 0.0);
    assert!((v.z - expected).abs() < expected.abs() * 0.05, "vz {}", v.z);
    assert!(v.x.abs() < 1e-6);
}

#[test]
fn opposing_keys_apply_no_force() {
    let mut state = lone_player();
    let mut renderer = NullRenderer;
    state.key_down("w");
    state.key_down("S");
    state.key_down("a");
    state.key_down("D");
    for _ in 0..30 {
        state.frame(&mut renderer);
    }
    let v = state.physics().linear_velocity(state.player_body()).unwrap();
    assert!(v.x.abs() < 1e-4, "vx {}", v.x);
    assert!(v.z.abs() < 1e-4, "vz {}", v.z);
}

#[test]
fn releasing_keys_stops_pushing() {
    let mut state = lone_player();
    let mut renderer = NullRenderer;
    RunLoop::new(&state).run(&mut state, &mut renderer, &mut Hold(&["d"]), StopCondition::Frames(10));
    state.key_up("D");
    let before = state.physics().linear_velocity(state.player_body()).unwrap().x;
    state.frame(&mut renderer);
    let after = state.physics().linear_velocity(state.player_body()).unwrap().x;
    assert!(before > 0.0);
    assert!(after <= before, "damping only, no more push");
}

#[test]
fn contact_while_idle_never_scores() {
    let mut state = player_with_close_ai();
    let mut renderer = NullRenderer;
    for _ in 0..3 {
        let report = state.frame(&mut renderer);
        assert_eq!(report.points_awarded, 0);
    }
    assert_eq!(state.session().score(), 0);
}

#[test]
fn contact_while_running_scores_every_frame() {
    let mut state = player_with_close_ai();
    let mut renderer = NullRenderer;
    state.key_press("Enter");
    let first = state.frame(&mut renderer);
    assert_eq!(first.contacts, 1);
    assert_eq!(first.points_awarded, 1);
    let second = state.frame(&mut renderer);
    assert_eq!(second.points_awarded, 1);
    assert_eq!(state.session().score(), 2);
    assert_eq!(state.hud().score, "Points: 2");
    // The ball stays in the arena after scoring.
    assert_eq!(state.ai_bodies().len(), 1);
}

#[test]
fn contact_after_game_over_never_scores() {
    let mut config = GameConfig::default();
    config.ai.count = 1;
    config.ai.radius = 0.1;
    config.session.duration_secs = 1;
    let mut state = GameState::new(config, 1).unwrap();
    state.key_press("Enter");
    RunLoop::new(&state).run(&mut state, &mut NullRenderer, &mut Passive, StopCondition::SessionEnded);
    assert_eq!(state.session().phase(), SessionPhase::Ended);
    let score = state.session().score();

    let player = state.player_body();
    let ai = state.ai_bodies()[0];
    state.place_body(player, vec3(0.0, 1.0, 0.0));
    state.place_body(ai, vec3(1.5, 0.1, 0.0));
    let report = state.frame(&mut NullRenderer);
    assert_eq!(report.points_awarded, 0);
    assert_eq!(state.session().score(), score);
}

#[test]
fn restart_after_game_over_resets_score_and_timer() {
    let mut config = GameConfig::default();
    config.session.duration_secs = 1;
    let mut state = GameState::new(config, 3).unwrap();
    state.key_press("Enter");
    let mut run = RunLoop::new(&state);
    run.run(&mut state, &mut NullRenderer, &mut Passive, StopCondition::SessionEnded);
    assert_eq!(state.session().phase(), SessionPhase::Ended);

    assert!(state.key_press("Enter"));
    assert_eq!(state.session().phase(), SessionPhase::Running);
    assert_eq!(state.session().score(), 0);
    assert_eq!(state.session().time_remaining(), 1);
    assert_eq!(state.hud().timer, "Time left: 1s");

    let summary = run.run(&mut state, &mut NullRenderer, &mut Passive, StopCondition::SessionEnded);
    assert_eq!(summary.frames, 60);
    assert_eq!(summary.timer_ticks, 1);
}

#[test]
fn ai_ball_runs_from_player() {
    let mut config = GameConfig::default();
    config.ai.count = 1;
    config.ai.avoid_jitter = 0.0;
    let mut state = GameState::new(config, 1).unwrap();
    let player = state.player_body();
    let ai = state.ai_bodies()[0];
    // Away from every wall anchor so only avoidance acts.
    state.place_body(player, vec3(20.0, 1.0, 20.0));
    state.place_body(ai, vec3(23.0, 1.0, 20.0));

    for _ in 0..60 {
        state.frame(&mut NullRenderer);
    }
    let ai_pos = state.physics().position(ai).unwrap();
    assert!(ai_pos.x > 23.5, "ai x {}", ai_pos.x);
}

#[test]
fn ai_ball_is_pushed_off_the_wall() {
    let mut config = GameConfig::default();
    config.ai.count = 1;
    let mut state = GameState::new(config, 1).unwrap();
    let ai = state.ai_bodies()[0];
    state.place_body(state.player_body(), vec3(-30.0, 1.0, -30.0));
    state.place_body(ai, vec3(44.0, 1.0, 25.0));

    for _ in 0..60 {
        state.frame(&mut NullRenderer);
    }
    let ai_pos = state.physics().position(ai).unwrap();
    assert!(ai_pos.x < 44.0, "ai x {}", ai_pos.x);
}

#[test]
fn same_seed_same_run() {
    let run = |seed: u64| {
        let mut state = GameState::new(GameConfig::default(), seed).unwrap();
        let mut bot = Autopilot::default();
        RunLoop::new(&state).run(&mut state, &mut NullRenderer, &mut bot, StopCondition::Frames(240));
        (state.ai_positions(), state.player_position(), state.session().score())
    };
    assert_eq!(run(17), run(17));
}

#[test]
fn autopilot_plays_a_whole_session() {
    let mut config = GameConfig::default();
    config.session.duration_secs = 5;
    let mut state = GameState::new(config, 21).unwrap();
    let mut bot = Autopilot::default();
    let summary = RunLoop::new(&state).run(
        &mut state,
        &mut NullRenderer,
        &mut bot,
        StopCondition::Either(10_000),
    );
    assert_eq!(summary.phase, SessionPhase::Ended);
    assert_eq!(summary.frames, 5 * 60);
    assert_eq!(summary.timer_ticks, 5);
}

#[test]
fn camera_follows_player() {
    let mut state = lone_player();
    RunLoop::new(&state).run(&mut state, &mut NullRenderer, &mut Hold(&["a"]), StopCondition::Frames(240));
    let player = state.player_position();
    let camera = state.camera();
    assert_eq!(camera.look_at, player);
    assert!(camera.position.x < 0.0, "camera drifts with the player");
    assert!(camera.position.y > player.y);
}
