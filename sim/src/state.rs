use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rollball_shared::camera::follow_step;
use rollball_shared::config::GameConfig;
use rollball_shared::input::InputState;
use rollball_shared::scoring::count_contacts;
use rollball_shared::session::{Session, SessionEvent};
use rollball_shared::steering::{arena_walls, steer, Wall};
use rollball_shared::vec3::{vec3, Vec3};

use crate::physics::{BodyDesc, BodyId, BodyShape, PhysicsWorld};
use crate::render::{Camera, Frame, Hud, Renderer};
use crate::scene::{MeshKind, Scene};

/// Key that starts a session.
pub const START_KEY: &str = "Enter";

/// What happened during one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameReport {
    pub index: u64,
    /// Meshes reconciled with their bodies
    pub synced: usize,
    /// AI balls within scoring distance this frame
    pub contacts: u32,
    pub points_awarded: u32,
}

/// Everything the game loop and the input handlers touch.
pub struct GameState {
    config: GameConfig,
    physics: PhysicsWorld,
    scene: Scene,
    input: InputState,
    session: Session,
    camera: Camera,
    hud: Hud,
    rng: ChaCha8Rng,
    walls: [Wall; 4],
    player: BodyId,
    ai_balls: Vec<BodyId>,
    frame: u64,
}

impl GameState {
    pub fn new(config: GameConfig, rng_seed: u64) -> Result<Self, String> {
        config.validate()?;

        let mut rng = ChaCha8Rng::seed_from_u64(rng_seed);
        let mut physics = PhysicsWorld::new(config.physics.gravity);
        let mut scene = Scene::new();

        let ground = physics.add_body(BodyDesc::fixed(BodyShape::Plane, Vec3::ZERO));
        scene.spawn_for(&physics, ground, MeshKind::Ground)?;

        let arena = config.arena;
        let e = arena.half_extent;
        let half_h = arena.wall_height / 2.0;
        let half_t = arena.wall_thickness / 2.0;
        let wall_bodies = [
            (vec3(0.0, half_h, -e), vec3(e, half_h, half_t)),
            (vec3(0.0, half_h, e), vec3(e, half_h, half_t)),
            (vec3(-e, half_h, 0.0), vec3(half_t, half_h, e)),
            (vec3(e, half_h, 0.0), vec3(half_t, half_h, e)),
        ];
        for (position, half_extents) in wall_bodies {
            let wall = physics.add_body(BodyDesc::fixed(BodyShape::Cuboid { half_extents }, position));
            scene.spawn_for(&physics, wall, MeshKind::Wall)?;
        }

        let ai = config.ai;
        let mut ai_balls = Vec::with_capacity(ai.count);
        for _ in 0..ai.count {
            let x = spawn_coord(&mut rng, ai.spawn_half_range);
            let z = spawn_coord(&mut rng, ai.spawn_half_range);
            let ball = physics.add_body(BodyDesc::dynamic(
                BodyShape::Sphere { radius: ai.radius },
                ai.mass,
                vec3(x, ai.spawn_height, z),
            ));
            scene.spawn_for(&physics, ball, MeshKind::AiBall)?;
            ai_balls.push(ball);
        }

        let p = config.player;
        let player = physics.add_body(
            BodyDesc::dynamic(BodyShape::Sphere { radius: p.radius }, p.mass, p.spawn)
                .with_damping(p.linear_damping, p.angular_damping),
        );
        scene.spawn_for(&physics, player, MeshKind::PlayerBall)?;

        let session = Session::new(config.session.duration_secs);
        let hud = Hud {
            score: session.score_text(),
            timer: session.timer_text(),
        };

        tracing::debug!(
            seed = rng_seed,
            ai_balls = ai_balls.len(),
            bodies = physics.body_count(),
            "arena built"
        );

        Ok(Self {
            camera: Camera {
                position: config.camera.initial_position,
                look_at: p.spawn,
            },
            walls: arena_walls(&config.arena),
            config,
            physics,
            scene,
            input: InputState::default(),
            session,
            hud,
            rng,
            player,
            ai_balls,
            frame: 0,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn physics(&self) -> &PhysicsWorld {
        &self.physics
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut InputState {
        &mut self.input
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn hud(&self) -> &Hud {
        &self.hud
    }

    pub fn player_body(&self) -> BodyId {
        self.player
    }

    pub fn ai_bodies(&self) -> &[BodyId] {
        &self.ai_balls
    }

    pub fn frame_index(&self) -> u64 {
        self.frame
    }

    /// Player position as last drawn.
    pub fn player_position(&self) -> Vec3 {
        self.scene.position_of(self.player).unwrap_or(self.config.player.spawn)
    }

    /// AI ball positions as last drawn.
    pub fn ai_positions(&self) -> Vec<Vec3> {
        self.ai_balls
            .iter()
            .filter_map(|b| self.scene.position_of(*b))
            .collect()
    }

    pub fn key_down(&mut self, key: &str) {
        self.input.key_down(key);
    }

    pub fn key_up(&mut self, key: &str) {
        self.input.key_up(key);
    }

    /// Key-press event. Only Enter does anything. Returns true if a session started.
    pub fn key_press(&mut self, key: &str) -> bool {
        if key == START_KEY {
            return self.start_session();
        }
        false
    }

    pub fn start_session(&mut self) -> bool {
        if !self.session.start() {
            return false;
        }
        self.refresh_hud();
        tracing::info!(
            duration_secs = self.session.duration_secs(),
            session = self.session.generation(),
            "session started"
        );
        true
    }

    /// One-second timer callback.
    pub fn tick_second(&mut self) -> SessionEvent {
        let event = self.session.tick_second();
        match event {
            SessionEvent::Ignored => {}
            SessionEvent::Tick { time_remaining } => {
                tracing::debug!(time_remaining, "timer tick");
                self.refresh_hud();
            }
            SessionEvent::Ended { final_score } => {
                tracing::info!(final_score, "Game Over! Final Score: {}", final_score);
                self.refresh_hud();
            }
        }
        event
    }

    /// Teleport a body and reconcile its mesh right away.
    pub fn place_body(&mut self, body: BodyId, position: Vec3) -> bool {
        if !self.physics.place(body, position) {
            return false;
        }
        self.scene.sync(&self.physics);
        true
    }

    /// Advance one frame: player force, fixed physics step, mesh sync, AI
    /// steering, scoring, camera, render.
    pub fn frame(&mut self, renderer: &mut dyn Renderer) -> FrameReport {
        let force = self.input.movement_force(self.config.player.move_force);
        if !force.is_zero() {
            self.physics.apply_force(self.player, force);
        }

        self.physics.step(self.config.physics.fixed_dt);
        let synced = self.scene.sync(&self.physics);

        let player_pos = self.player_position();
        for &ball in &self.ai_balls {
            let Some(ai_pos) = self.scene.position_of(ball) else {
                continue;
            };
            let steering = steer(ai_pos, player_pos, &self.walls, &self.config.ai, &mut self.rng);
            if !steering.is_zero() {
                self.physics.apply_force(ball, steering);
            }
        }

        let mut contacts = 0;
        let mut points_awarded = 0;
        if self.session.is_running() {
            contacts = count_contacts(self.ai_positions(), player_pos, self.config.player.radius);
            points_awarded = self.session.record_contacts(contacts);
            if points_awarded > 0 {
                tracing::debug!(contacts, score = self.session.score(), "scored");
                self.refresh_hud();
            }
        }

        self.camera.position = follow_step(self.camera.position, player_pos, &self.config.camera);
        self.camera.look_at = player_pos;

        let index = self.frame;
        self.frame += 1;
        renderer.render(&Frame {
            index,
            scene: &self.scene,
            camera: &self.camera,
            hud: &self.hud,
        });

        FrameReport {
            index,
            synced,
            contacts,
            points_awarded,
        }
    }

    fn refresh_hud(&mut self) {
        self.hud.score = self.session.score_text();
        self.hud.timer = self.session.timer_text();
    }
}

fn spawn_coord(rng: &mut ChaCha8Rng, half_range: f32) -> f32 {
    if half_range <= 0.0 {
        return 0.0;
    }
    rng.gen_range(-half_range..half_range)
}
