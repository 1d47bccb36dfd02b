//! Game configuration. Loaded from config.ron at startup.

use serde::{Deserialize, Serialize};

/// Persistent settings for the demo loop. Loaded from `config.ron` in the
/// current directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Fixed simulation rate in Hz.
    #[serde(default = "default_sim_rate_hz")]
    pub sim_rate_hz: f64,
    /// How many fixed steps the demo runs before exiting.
    #[serde(default = "default_demo_steps")]
    pub demo_steps: u32,
    /// Projectile flight duration in seconds.
    #[serde(default = "default_flight_duration")]
    pub flight_duration: f32,
    /// Defenders spawned per pattern call at each base.
    #[serde(default = "default_defenders_per_pattern")]
    pub defenders_per_pattern: usize,
}

fn default_sim_rate_hz() -> f64 {
    60.0
}
fn default_demo_steps() -> u32 {
    240
}
fn default_flight_duration() -> f32 {
    crate::projectile::DEFAULT_FLIGHT_DURATION
}
fn default_defenders_per_pattern() -> usize {
    crate::base::DEFENDERS_PER_PATTERN
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            sim_rate_hz: default_sim_rate_hz(),
            demo_steps: default_demo_steps(),
            flight_duration: default_flight_duration(),
            defenders_per_pattern: default_defenders_per_pattern(),
        }
    }
}

impl GameConfig {
    /// Load config from `config.ron`. If the file is missing or invalid,
    /// returns the default config.
    pub fn load() -> Self {
        let path = config_path();
        if let Ok(data) = std::fs::read_to_string(&path) {
            match ron::from_str::<Self>(&data) {
                Ok(c) => return c.validated(),
                Err(e) => log::warn!("Invalid config at {:?}: {}, using defaults", path, e),
            }
        }
        Self::default()
    }

    /// Replace out-of-range values with their defaults, warning per field.
    fn validated(mut self) -> Self {
        if !self.sim_rate_hz.is_finite() || self.sim_rate_hz <= 0.0 {
            log::warn!(
                "Ignoring sim_rate_hz {}: not a positive rate, using {} Hz",
                self.sim_rate_hz,
                default_sim_rate_hz()
            );
            self.sim_rate_hz = default_sim_rate_hz();
        }
        if !self.flight_duration.is_finite() || self.flight_duration <= 0.0 {
            log::warn!(
                "Ignoring flight_duration {}: not a positive duration, using {}s",
                self.flight_duration,
                default_flight_duration()
            );
            self.flight_duration = default_flight_duration();
        }
        self
    }
}

fn config_path() -> std::path::PathBuf {
    std::env::current_dir()
        .unwrap_or_else(|_| std::path::PathBuf::from("."))
        .join("config.ron")
}
