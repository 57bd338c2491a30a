//! Game tunables, loaded from an optional TOML file.
//!
//! Every field has a default matching the reference game, so a config file
//! only needs to list the values it overrides.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Error;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Playfield width in canvas units.
    pub width: f64,
    /// Playfield height in canvas units.
    pub height: f64,
    /// Milliseconds between enemy spawns.
    pub enemy_interval: f64,
    pub starting_ammo: u32,
    pub max_ammo: u32,
    /// Milliseconds between ammo refills.
    pub ammo_interval: f64,
    /// The session is won once the score strictly exceeds this.
    pub winning_score: u32,
    /// Milliseconds until the session is lost.
    pub time_limit: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 500.0,
            height: 500.0,
            enemy_interval: 1000.0,
            starting_ammo: 20,
            max_ammo: 50,
            ammo_interval: 500.0,
            winning_score: 10,
            time_limit: 15_000.0,
        }
    }
}

impl GameConfig {
    /// Load settings from a TOML file and validate them.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let content = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_toml(&content)?;
        tracing::info!(path = %path.display(), "loaded game config");
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self, Error> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), Error> {
        let positive = [
            ("width", self.width),
            ("height", self.height),
            ("enemy_interval", self.enemy_interval),
            ("ammo_interval", self.ammo_interval),
            ("time_limit", self.time_limit),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(Error::InvalidConfig(format!(
                    "{field} must be a positive number, got {value}"
                )));
            }
        }
        if self.starting_ammo > self.max_ammo {
            return Err(Error::InvalidConfig(format!(
                "starting_ammo ({}) exceeds max_ammo ({})",
                self.starting_ammo, self.max_ammo
            )));
        }
        Ok(())
    }
}
