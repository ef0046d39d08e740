//! Visual mirror of the physics world.
//!
//! Meshes never point at bodies. The `Registry` owns the association table
//! and `Scene::sync` copies poses from physics into meshes once per frame.

use std::collections::BTreeMap;

use rollball_shared::vec3::{Pose, Vec3};

use crate::physics::{BodyId, PhysicsWorld};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MeshId(u32);

impl MeshId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeshKind {
    Ground,
    Wall,
    PlayerBall,
    AiBall,
}

#[derive(Debug, Clone)]
pub struct Mesh {
    pub kind: MeshKind,
    pub pose: Pose,
}

/// Body -> mesh association table. Each body and each mesh appears at most once.
#[derive(Debug, Default)]
pub struct Registry {
    body_to_mesh: BTreeMap<BodyId, MeshId>,
    mesh_to_body: BTreeMap<MeshId, BodyId>,
}

impl Registry {
    pub fn pair(&mut self, body: BodyId, mesh: MeshId) -> Result<(), String> {
        if self.body_to_mesh.contains_key(&body) {
            return Err(format!("body {} is already paired", body.index()));
        }
        if self.mesh_to_body.contains_key(&mesh) {
            return Err(format!("mesh {} is already paired", mesh.index()));
        }
        self.body_to_mesh.insert(body, mesh);
        self.mesh_to_body.insert(mesh, body);
        Ok(())
    }

    pub fn mesh_for(&self, body: BodyId) -> Option<MeshId> {
        self.body_to_mesh.get(&body).copied()
    }

    pub fn body_for(&self, mesh: MeshId) -> Option<BodyId> {
        self.mesh_to_body.get(&mesh).copied()
    }

    pub fn len(&self) -> usize {
        self.body_to_mesh.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body_to_mesh.is_empty()
    }

    pub fn pairs(&self) -> impl Iterator<Item = (BodyId, MeshId)> + '_ {
        self.body_to_mesh.iter().map(|(b, m)| (*b, *m))
    }
}

#[derive(Debug, Default)]
pub struct Scene {
    meshes: Vec<Mesh>,
    registry: Registry,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self, kind: MeshKind, pose: Pose) -> MeshId {
        let id = MeshId(self.meshes.len() as u32);
        self.meshes.push(Mesh { kind, pose });
        id
    }

    /// Spawn a mesh at the body's current pose and pair them.
    pub fn spawn_for(
        &mut self,
        physics: &PhysicsWorld,
        body: BodyId,
        kind: MeshKind,
    ) -> Result<MeshId, String> {
        let pose = physics
            .pose(body)
            .ok_or_else(|| format!("unknown body {}", body.index()))?;
        let mesh = self.spawn(kind, pose);
        self.registry.pair(body, mesh)?;
        Ok(mesh)
    }

    pub fn pair(&mut self, body: BodyId, mesh: MeshId) -> Result<(), String> {
        if mesh.index() >= self.meshes.len() {
            return Err(format!("unknown mesh {}", mesh.index()));
        }
        self.registry.pair(body, mesh)
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn mesh(&self, id: MeshId) -> Option<&Mesh> {
        self.meshes.get(id.index())
    }

    pub fn meshes(&self) -> &[Mesh] {
        &self.meshes
    }

    /// Mesh paired with `body`.
    pub fn mesh_of(&self, body: BodyId) -> Option<&Mesh> {
        self.registry.mesh_for(body).and_then(|m| self.mesh(m))
    }

    pub fn position_of(&self, body: BodyId) -> Option<Vec3> {
        self.mesh_of(body).map(|m| m.pose.position)
    }

    /// Copy every paired body's pose into its mesh. Returns the number of meshes updated.
    pub fn sync(&mut self, physics: &PhysicsWorld) -> usize {
        let mut updated = 0;
        for (body, mesh) in self.registry.pairs() {
            let (Some(pose), Some(target)) = (physics.pose(body), self.meshes.get_mut(mesh.index()))
            else {
                continue;
            };
            target.pose = pose;
            updated += 1;
        }
        updated
    }
}
