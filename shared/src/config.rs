use crate::vec3::{vec3, Vec3};

/// Arena geometry: square ground with four walls at +-half_extent.
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ArenaConfig {
    pub half_extent: f32,
    pub wall_height: f32,
    pub wall_thickness: f32,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            half_extent: 50.0,
            wall_height: 100.0,
            wall_thickness: 1.0,
        }
    }
}

/// Player ball
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerConfig {
    pub radius: f32,
    pub mass: f32,
    pub linear_damping: f32,
    pub angular_damping: f32,
    /// Force applied per held movement key
    pub move_force: f32,
    pub spawn: Vec3,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            radius: 1.0,
            mass: 5.0,
            linear_damping: 0.1,
            angular_damping: 0.1,
            move_force: 50.0,
            spawn: vec3(0.0, 6.0, 0.0),
        }
    }
}

/// AI-controlled balls and their steering rules
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AiConfig {
    pub count: usize,
    pub radius: f32,
    pub mass: f32,
    /// Spawn x/z are drawn from [-spawn_half_range, spawn_half_range)
    pub spawn_half_range: f32,
    pub spawn_height: f32,
    pub avoid_force: f32,
    /// Jitter is drawn from [-avoid_jitter, avoid_jitter)
    pub avoid_jitter: f32,
    pub avoid_distance: f32,
    pub wall_force: f32,
    pub wall_distance: f32,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            count: 10,
            radius: 1.0,
            mass: 1.0,
            spawn_half_range: 15.0,
            spawn_height: 5.0,
            avoid_force: 20.0,
            avoid_jitter: 10.0,
            avoid_distance: 10.0,
            wall_force: 50.0,
            wall_distance: 10.0,
        }
    }
}

#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionConfig {
    pub duration_secs: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { duration_secs: 30 }
    }
}

/// Chase camera
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CameraConfig {
    pub offset: Vec3,
    pub follow_lerp: f32,
    pub initial_position: Vec3,
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            offset: vec3(0.0, 5.0, 10.0),
            follow_lerp: 0.1,
            initial_position: vec3(0.0, 10.0, 20.0),
            fov_degrees: 75.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PhysicsConfig {
    pub gravity: Vec3,
    /// Fixed step per frame (seconds)
    pub fixed_dt: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: vec3(0.0, -9.82, 0.0),
            fixed_dt: 1.0 / 60.0,
        }
    }
}

impl PhysicsConfig {
    /// Number of fixed steps in one second of simulated time.
    pub fn steps_per_second(&self) -> u32 {
        (1.0 / self.fixed_dt).round() as u32
    }
}

/// Complete game configuration
#[derive(Debug, Clone, Copy, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameConfig {
    pub arena: ArenaConfig,
    pub player: PlayerConfig,
    pub ai: AiConfig,
    pub session: SessionConfig,
    pub camera: CameraConfig,
    pub physics: PhysicsConfig,
}

fn positive(name: &str, value: f32) -> Result<(), String> {
    if !value.is_finite() || value <= 0.0 {
        return Err(format!("{name} must be finite and > 0"));
    }
    Ok(())
}

fn non_negative(name: &str, value: f32) -> Result<(), String> {
    if !value.is_finite() || value < 0.0 {
        return Err(format!("{name} must be finite and >= 0"));
    }
    Ok(())
}

impl GameConfig {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: GameConfig =
            serde_json::from_str(json).map_err(|e| format!("invalid game config: {e}"))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        positive("arena.half_extent", self.arena.half_extent)?;
        positive("arena.wall_height", self.arena.wall_height)?;
        positive("arena.wall_thickness", self.arena.wall_thickness)?;

        positive("player.radius", self.player.radius)?;
        positive("player.mass", self.player.mass)?;
        non_negative("player.linear_damping", self.player.linear_damping)?;
        non_negative("player.angular_damping", self.player.angular_damping)?;
        non_negative("player.move_force", self.player.move_force)?;
        if !self.player.spawn.is_finite() {
            return Err("player.spawn must be finite".to_string());
        }
        if self.player.spawn.x.abs() >= self.arena.half_extent
            || self.player.spawn.z.abs() >= self.arena.half_extent
        {
            return Err("player.spawn must lie inside the arena".to_string());
        }

        positive("ai.radius", self.ai.radius)?;
        positive("ai.mass", self.ai.mass)?;
        non_negative("ai.spawn_half_range", self.ai.spawn_half_range)?;
        if self.ai.spawn_half_range >= self.arena.half_extent {
            return Err("ai.spawn_half_range must be < arena.half_extent".to_string());
        }
        non_negative("ai.spawn_height", self.ai.spawn_height)?;
        non_negative("ai.avoid_force", self.ai.avoid_force)?;
        non_negative("ai.avoid_jitter", self.ai.avoid_jitter)?;
        non_negative("ai.avoid_distance", self.ai.avoid_distance)?;
        non_negative("ai.wall_force", self.ai.wall_force)?;
        non_negative("ai.wall_distance", self.ai.wall_distance)?;

        if self.session.duration_secs == 0 {
            return Err("session.duration_secs must be > 0".to_string());
        }

        if !self.camera.offset.is_finite() || !self.camera.initial_position.is_finite() {
            return Err("camera offset and initial position must be finite".to_string());
        }
        if !self.camera.follow_lerp.is_finite()
            || self.camera.follow_lerp <= 0.0
            || self.camera.follow_lerp > 1.0
        {
            return Err("camera.follow_lerp must be in (0, 1]".to_string());
        }
        positive("camera.fov_degrees", self.camera.fov_degrees)?;
        positive("camera.near", self.camera.near)?;
        if !self.camera.far.is_finite() || self.camera.far <= self.camera.near {
            return Err("camera.far must be finite and > camera.near".to_string());
        }

        if !self.physics.gravity.is_finite() {
            return Err("physics.gravity must be finite".to_string());
        }
        positive("physics.fixed_dt", self.physics.fixed_dt)?;
        if self.physics.fixed_dt > 1.0 {
            return Err("physics.fixed_dt must be <= 1 second".to_string());
        }
        Ok(())
    }
}
