use bevy::prelude::*;
use bevy_rapier3d::prelude::*;
use rand::Rng;
use rollball_shared::scoring::count_contacts;
use rollball_shared::steering::steer;

use crate::constants::{color_from_hex, Colors, BALL_FRICTION};
use crate::coord::{to_bevy, to_game};

use super::core::SteeringRng;
use super::input::MoveInput;
use super::session::SessionState;
use super::{FixedSet, Settings};

pub struct BallPlugin;

#[derive(Component)]
pub(crate) struct Player;

#[derive(Component)]
pub(crate) struct AiBall;

impl Plugin for BallPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (spawn_player, spawn_ai_balls))
            .add_systems(
                FixedUpdate,
                (player_force_system, ai_steering_system).in_set(FixedSet::Simulate),
            )
            .add_systems(FixedUpdate, scoring_system.in_set(FixedSet::PostPhysics));
    }
}

fn spawn_player(
    mut commands: Commands,
    settings: Res<Settings>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let p = settings.config.player;

    commands.spawn((
        // Physics
        RigidBody::Dynamic,
        Collider::ball(p.radius),
        ColliderMassProperties::Mass(p.mass),
        Friction::coefficient(BALL_FRICTION),
        Damping {
            linear_damping: p.linear_damping,
            angular_damping: p.angular_damping,
        },
        ExternalForce::default(),
        Transform::from_translation(to_bevy(p.spawn)),
        // Visual
        Mesh3d(meshes.add(Sphere::new(p.radius).mesh().uv(32, 32))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: color_from_hex(Colors::PLAYER),
            ..default()
        })),
        // Game state
        Player,
    ));
}

fn spawn_ai_balls(
    mut commands: Commands,
    settings: Res<Settings>,
    mut rng: ResMut<SteeringRng>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let ai = settings.config.ai;
    let mesh = meshes.add(Sphere::new(ai.radius).mesh().uv(32, 32));
    let material = materials.add(StandardMaterial {
        base_color: color_from_hex(Colors::AI_BALL),
        ..default()
    });

    for _ in 0..ai.count {
        let x = spawn_coord(&mut rng.0, ai.spawn_half_range);
        let z = spawn_coord(&mut rng.0, ai.spawn_half_range);
        commands.spawn((
            RigidBody::Dynamic,
            Collider::ball(ai.radius),
            ColliderMassProperties::Mass(ai.mass),
            Friction::coefficient(BALL_FRICTION),
            ExternalForce::default(),
            Transform::from_xyz(x, ai.spawn_height, z),
            Mesh3d(mesh.clone()),
            MeshMaterial3d(material.clone()),
            AiBall,
        ));
    }
    info!(count = ai.count, "spawned AI balls");
}

fn spawn_coord(rng: &mut impl Rng, half_range: f32) -> f32 {
    if half_range <= 0.0 {
        return 0.0;
    }
    rng.gen_range(-half_range..half_range)
}

fn player_force_system(
    settings: Res<Settings>,
    input: Res<MoveInput>,
    mut q_player: Query<&mut ExternalForce, With<Player>>,
) {
    let force = to_bevy(input.0.movement_force(settings.config.player.move_force));
    for mut ext in &mut q_player {
        ext.force = force;
    }
}

fn ai_steering_system(
    settings: Res<Settings>,
    mut rng: ResMut<SteeringRng>,
    q_player: Query<&Transform, With<Player>>,
    mut q_ai: Query<(&Transform, &mut ExternalForce), (With<AiBall>, Without<Player>)>,
) {
    let Ok(player) = q_player.single() else {
        return;
    };
    let player_pos = to_game(player.translation);

    for (transform, mut ext) in &mut q_ai {
        let force = steer(
            to_game(transform.translation),
            player_pos,
            &settings.walls,
            &settings.config.ai,
            &mut rng.0,
        );
        ext.force = to_bevy(force);
    }
}

fn scoring_system(
    settings: Res<Settings>,
    mut session: ResMut<SessionState>,
    q_player: Query<&Transform, With<Player>>,
    q_ai: Query<&Transform, (With<AiBall>, Without<Player>)>,
) {
    if !session.session.is_running() {
        return;
    }
    let Ok(player) = q_player.single() else {
        return;
    };

    let contacts = count_contacts(
        q_ai.iter().map(|t| to_game(t.translation)),
        to_game(player.translation),
        settings.config.player.radius,
    );
    if contacts > 0 {
        session.session.record_contacts(contacts);
        debug!(contacts, score = session.session.score(), "scored");
    }
}
