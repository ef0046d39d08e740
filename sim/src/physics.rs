//! Thin wrapper over a rapier3d world.
//!
//! Bodies are addressed by `BodyId`; forces added with `apply_force` act on
//! the next `step` only and are cleared afterwards.

use rapier3d::prelude::*;
use rollball_shared::vec3::{Pose, Quat, Vec3};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(u32);

impl BodyId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BodyShape {
    Sphere { radius: f32 },
    Cuboid { half_extents: Vec3 },
    /// Infinite ground plane with +Y normal
    Plane,
}

/// Body definition. A mass of zero makes the body static.
#[derive(Debug, Clone, Copy)]
pub struct BodyDesc {
    pub shape: BodyShape,
    pub mass: f32,
    pub position: Vec3,
    pub linear_damping: f32,
    pub angular_damping: f32,
}

impl BodyDesc {
    pub fn fixed(shape: BodyShape, position: Vec3) -> Self {
        Self {
            shape,
            mass: 0.0,
            position,
            linear_damping: 0.0,
            angular_damping: 0.0,
        }
    }

    pub fn dynamic(shape: BodyShape, mass: f32, position: Vec3) -> Self {
        Self {
            shape,
            mass,
            position,
            linear_damping: 0.0,
            angular_damping: 0.0,
        }
    }

    pub fn with_damping(mut self, linear: f32, angular: f32) -> Self {
        self.linear_damping = linear;
        self.angular_damping = angular;
        self
    }
}

fn to_vector(v: Vec3) -> Vector<Real> {
    vector![v.x, v.y, v.z]
}

fn from_vector(v: &Vector<Real>) -> Vec3 {
    Vec3::new(v.x, v.y, v.z)
}

pub struct PhysicsWorld {
    gravity: Vector<Real>,
    integration_parameters: IntegrationParameters,
    pipeline: PhysicsPipeline,
    islands: IslandManager,
    broad_phase: DefaultBroadPhase,
    narrow_phase: NarrowPhase,
    bodies: RigidBodySet,
    colliders: ColliderSet,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd_solver: CCDSolver,
    query_pipeline: QueryPipeline,
    /// Index is the BodyId
    handles: Vec<RigidBodyHandle>,
    steps: u64,
}

impl PhysicsWorld {
    pub fn new(gravity: Vec3) -> Self {
        Self {
            gravity: to_vector(gravity),
            integration_parameters: IntegrationParameters::default(),
            pipeline: PhysicsPipeline::new(),
            islands: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            query_pipeline: QueryPipeline::new(),
            handles: Vec::new(),
            steps: 0,
        }
    }

    pub fn add_body(&mut self, desc: BodyDesc) -> BodyId {
        let builder = if desc.mass > 0.0 {
            RigidBodyBuilder::dynamic()
        } else {
            RigidBodyBuilder::fixed()
        };
        let body = builder
            .translation(to_vector(desc.position))
            .linear_damping(desc.linear_damping)
            .angular_damping(desc.angular_damping)
            .build();
        let handle = self.bodies.insert(body);

        let collider = match desc.shape {
            BodyShape::Sphere { radius } => ColliderBuilder::ball(radius),
            BodyShape::Cuboid { half_extents } => {
                ColliderBuilder::cuboid(half_extents.x, half_extents.y, half_extents.z)
            }
            BodyShape::Plane => ColliderBuilder::halfspace(Vector::y_axis()),
        };
        let collider = if desc.mass > 0.0 {
            collider.mass(desc.mass)
        } else {
            collider
        };
        self.colliders
            .insert_with_parent(collider.build(), handle, &mut self.bodies);

        let id = BodyId(self.handles.len() as u32);
        self.handles.push(handle);
        id
    }

    pub fn body_count(&self) -> usize {
        self.handles.len()
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn ids(&self) -> impl Iterator<Item = BodyId> + '_ {
        (0..self.handles.len() as u32).map(BodyId)
    }

    fn body(&self, id: BodyId) -> Option<&RigidBody> {
        let handle = self.handles.get(id.index())?;
        self.bodies.get(*handle)
    }

    fn body_mut(&mut self, id: BodyId) -> Option<&mut RigidBody> {
        let handle = self.handles.get(id.index())?;
        self.bodies.get_mut(*handle)
    }

    pub fn is_dynamic(&self, id: BodyId) -> bool {
        self.body(id).is_some_and(|b| b.is_dynamic())
    }

    /// Accumulate a force for the next step. Returns false for unknown or static bodies.
    pub fn apply_force(&mut self, id: BodyId, force: Vec3) -> bool {
        match self.body_mut(id) {
            Some(body) if body.is_dynamic() => {
                body.add_force(to_vector(force), true);
                true
            }
            _ => false,
        }
    }

    /// Force accumulated for the next step.
    pub fn pending_force(&self, id: BodyId) -> Option<Vec3> {
        self.body(id).map(|b| from_vector(&b.user_force()))
    }

    /// Advance the world by `dt` seconds, then clear accumulated forces.
    pub fn step(&mut self, dt: f32) {
        self.integration_parameters.dt = dt;
        let hooks = ();
        let events = ();
        self.pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.islands,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd_solver,
            Some(&mut self.query_pipeline),
            &hooks,
            &events,
        );
        for handle in &self.handles {
            if let Some(body) = self.bodies.get_mut(*handle) {
                body.reset_forces(false);
            }
        }
        self.steps += 1;
    }

    pub fn pose(&self, id: BodyId) -> Option<Pose> {
        let body = self.body(id)?;
        let q = body.rotation().coords;
        Some(Pose {
            position: from_vector(body.translation()),
            rotation: Quat::from_xyzw(q.x, q.y, q.z, q.w),
        })
    }

    pub fn position(&self, id: BodyId) -> Option<Vec3> {
        self.body(id).map(|b| from_vector(b.translation()))
    }

    pub fn linear_velocity(&self, id: BodyId) -> Option<Vec3> {
        self.body(id).map(|b| from_vector(b.linvel()))
    }

    /// Teleport a body and zero its velocity.
    pub fn place(&mut self, id: BodyId, position: Vec3) -> bool {
        match self.body_mut(id) {
            Some(body) => {
                body.set_translation(to_vector(position), true);
                body.set_linvel(Vector::zeros(), true);
                body.set_angvel(Vector::zeros(), true);
                true
            }
            None => false,
        }
    }
}
