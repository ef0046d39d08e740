use bevy::prelude::*;
use bevy_rapier3d::prelude::{PhysicsSet, RapierConfiguration, TimestepMode};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rollball_shared::config::GameConfig;
use rollball_shared::steering::{arena_walls, Wall};

use crate::constants::{
    color_from_hex, Colors, AMBIENT_BRIGHTNESS, LIGHT_HEIGHT, LIGHT_ILLUMINANCE,
};
use crate::coord::to_bevy;

use super::input::MoveInput;
use super::session::SessionState;

#[derive(SystemSet, Debug, Hash, Eq, PartialEq, Clone)]
pub(crate) enum UpdateSet {
    Input,
    Session,
    Visuals,
}

#[derive(SystemSet, Debug, Hash, Eq, PartialEq, Clone)]
pub(crate) enum FixedSet {
    /// Forces for the upcoming physics step
    Simulate,
    /// Reads positions written back by the step
    PostPhysics,
}

pub struct CorePlugin {
    pub config: GameConfig,
    pub seed: u64,
}

/// Game configuration plus values derived from it once at startup.
#[derive(Resource)]
pub(crate) struct Settings {
    pub(crate) config: GameConfig,
    pub(crate) walls: [Wall; 4],
}

impl Settings {
    pub(crate) fn new(config: GameConfig) -> Self {
        Self {
            walls: arena_walls(&config.arena),
            config,
        }
    }
}

/// Randomness for spawn positions and steering jitter.
#[derive(Resource)]
pub(crate) struct SteeringRng(pub(crate) ChaCha8Rng);

#[derive(Component)]
pub(crate) struct MainCamera;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        let dt = self.config.physics.fixed_dt;

        app.insert_resource(Settings::new(self.config))
            .insert_resource(SteeringRng(ChaCha8Rng::seed_from_u64(self.seed)))
            .insert_resource(SessionState::new(self.config.session.duration_secs))
            .init_resource::<MoveInput>()
            .insert_resource(ClearColor(color_from_hex(Colors::SKY)))
            .insert_resource(Time::<Fixed>::from_seconds(dt as f64))
            .insert_resource(TimestepMode::Fixed { dt, substeps: 1 })
            .configure_sets(
                Update,
                (UpdateSet::Input, UpdateSet::Session, UpdateSet::Visuals).chain(),
            )
            .configure_sets(FixedUpdate, (FixedSet::Simulate, FixedSet::PostPhysics).chain())
            .configure_sets(
                FixedUpdate,
                FixedSet::Simulate.before(PhysicsSet::SyncBackend),
            )
            .configure_sets(
                FixedUpdate,
                FixedSet::PostPhysics.after(PhysicsSet::Writeback),
            )
            .add_systems(Startup, (setup_camera, setup_light, configure_rapier_gravity));
    }
}

fn setup_camera(mut commands: Commands, settings: Res<Settings>) {
    let cam = &settings.config.camera;
    let start = to_bevy(cam.initial_position);
    let look_at = to_bevy(settings.config.player.spawn);

    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: cam.fov_degrees.to_radians(),
            near: cam.near,
            far: cam.far,
            ..default()
        }),
        Transform::from_translation(start).looking_at(look_at, Vec3::Y),
        AmbientLight {
            color: color_from_hex(Colors::AMBIENT),
            brightness: AMBIENT_BRIGHTNESS,
            ..default()
        },
        MainCamera,
    ));
}

fn setup_light(mut commands: Commands) {
    commands.spawn((
        DirectionalLight {
            illuminance: LIGHT_ILLUMINANCE,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(0.0, LIGHT_HEIGHT, 0.0).looking_at(Vec3::ZERO, Vec3::NEG_Z),
    ));
}

fn configure_rapier_gravity(
    settings: Res<Settings>,
    mut q_config: Query<&mut RapierConfiguration>,
) {
    for mut cfg in &mut q_config {
        cfg.gravity = to_bevy(settings.config.physics.gravity);
    }
}
