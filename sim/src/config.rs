use rollball_shared::config::GameConfig;

/// Headless runner configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimConfig {
    pub rng_seed: u64,
    /// Upper bound on frames for one run
    pub frame_limit: u64,
    /// Let the autopilot press Enter and chase AI balls
    pub autopilot: bool,
    /// Pace frames with wall-clock timers instead of running flat out
    pub realtime: bool,
    /// Optional JSON file with a `GameConfig`
    pub game_config_path: Option<String>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            rng_seed: 42,
            frame_limit: 60 * 35,
            autopilot: true,
            realtime: false,
            game_config_path: None,
        }
    }
}

fn parse_bool(name: &str, value: &str) -> Result<bool, String> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(format!("{name} must be a boolean, got {value:?}")),
    }
}

impl SimConfig {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from a key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(v) = lookup("ROLLBALL_SEED") {
            config.rng_seed = v
                .parse()
                .map_err(|_| format!("ROLLBALL_SEED must be an unsigned integer, got {v:?}"))?;
        }
        if let Some(v) = lookup("ROLLBALL_FRAMES") {
            config.frame_limit = v
                .parse()
                .map_err(|_| format!("ROLLBALL_FRAMES must be an unsigned integer, got {v:?}"))?;
        }
        if let Some(v) = lookup("ROLLBALL_AUTOPILOT") {
            config.autopilot = parse_bool("ROLLBALL_AUTOPILOT", &v)?;
        }
        if let Some(v) = lookup("ROLLBALL_REALTIME") {
            config.realtime = parse_bool("ROLLBALL_REALTIME", &v)?;
        }
        config.game_config_path = lookup("ROLLBALL_CONFIG").filter(|s| !s.is_empty());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.frame_limit == 0 {
            return Err("frame_limit must be > 0".to_string());
        }
        Ok(())
    }

    /// Game configuration from the configured file, or defaults.
    pub fn load_game_config(&self) -> Result<GameConfig, String> {
        match &self.game_config_path {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .map_err(|e| format!("cannot read {path}: {e}"))?;
                GameConfig::from_json(&json)
            }
            None => Ok(GameConfig::default()),
        }
    }
}
