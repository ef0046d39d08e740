use bevy::prelude::*;
use bevy_rapier3d::prelude::*;
use rollball_shared::config::ArenaConfig;

use crate::constants::{color_from_hex, Colors};

use super::Settings;

pub struct ArenaPlugin;

#[derive(Component)]
pub(crate) struct Ground;

#[derive(Component)]
pub(crate) struct ArenaWall;

impl Plugin for ArenaPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_arena);
    }
}

/// Center and half extents of a wall box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct WallBox {
    pub(crate) center: Vec3,
    pub(crate) half_extents: Vec3,
}

/// Back, front, left, right walls standing on the ground at the arena edge.
pub(crate) fn wall_boxes(arena: &ArenaConfig) -> [WallBox; 4] {
    let e = arena.half_extent;
    let hy = arena.wall_height * 0.5;
    let ht = arena.wall_thickness * 0.5;
    let along_x = Vec3::new(e, hy, ht);
    let along_z = Vec3::new(ht, hy, e);
    [
        WallBox {
            center: Vec3::new(0.0, hy, -e),
            half_extents: along_x,
        },
        WallBox {
            center: Vec3::new(0.0, hy, e),
            half_extents: along_x,
        },
        WallBox {
            center: Vec3::new(-e, hy, 0.0),
            half_extents: along_z,
        },
        WallBox {
            center: Vec3::new(e, hy, 0.0),
            half_extents: along_z,
        },
    ]
}

fn spawn_arena(
    mut commands: Commands,
    settings: Res<Settings>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let arena = settings.config.arena;
    let size = arena.half_extent * 2.0;

    let mut ground = commands.spawn((
        RigidBody::Fixed,
        Transform::default(),
        Mesh3d(meshes.add(Plane3d::default().mesh().size(size, size))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: color_from_hex(Colors::GROUND),
            perceptual_roughness: 0.9,
            ..default()
        })),
        Ground,
    ));
    match Collider::halfspace(Vec3::Y) {
        Some(collider) => {
            ground.insert(collider);
        }
        None => warn!("ground plane has no collider"),
    }

    let wall_material = materials.add(StandardMaterial {
        base_color: color_from_hex(Colors::WALL),
        ..default()
    });
    for wall in wall_boxes(&arena) {
        let h = wall.half_extents;
        commands.spawn((
            RigidBody::Fixed,
            Collider::cuboid(h.x, h.y, h.z),
            Transform::from_translation(wall.center),
            Mesh3d(meshes.add(Cuboid::from_size(h * 2.0))),
            MeshMaterial3d(wall_material.clone()),
            ArenaWall,
        ));
    }
}
