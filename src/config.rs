//! Simulation configuration
//!
//! Screen and sprite dimensions the simulation is parameterized by. Loaded
//! from JSON; every key is optional and falls back to the 640x480 defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{BIRD_SPAWN_MARGIN, TICKS_PER_SECOND};

/// Error loading or validating a [`SimConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Screen/sprite dimensions and tick rate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SimConfig {
    /// Visible world width in pixels
    pub screen_width: i32,
    /// Visible world height in pixels (also the floor boundary)
    pub screen_height: i32,
    /// Character sprite edge length
    pub birdman_sprite_size: i32,
    /// Bird sprite edge length (used for the despawn test)
    pub bird_sprite_size: i32,
    /// Logical tick rate; one second of damage lasts this many ticks
    pub ticks_per_second: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            screen_width: 640,
            screen_height: 480,
            birdman_sprite_size: 100,
            bird_sprite_size: 100,
            ticks_per_second: TICKS_PER_SECOND,
        }
    }
}

impl SimConfig {
    /// Parse and validate a config from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.as_ref().display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.screen_width <= 0 {
            return Err(ConfigError::Invalid(format!(
                "screenWidth must be positive, got {}",
                self.screen_width
            )));
        }
        if self.screen_height <= 2 * BIRD_SPAWN_MARGIN {
            return Err(ConfigError::Invalid(format!(
                "screenHeight must exceed {}, got {}",
                2 * BIRD_SPAWN_MARGIN,
                self.screen_height
            )));
        }
        if self.birdman_sprite_size <= 0 || self.bird_sprite_size <= 0 {
            return Err(ConfigError::Invalid("sprite sizes must be positive".into()));
        }
        if self.ticks_per_second == 0 {
            return Err(ConfigError::Invalid("ticksPerSecond must be positive".into()));
        }
        Ok(())
    }

    /// Character Y at run start (a third of the way down the screen)
    pub fn initial_birdman_y(&self) -> i32 {
        self.screen_height / 3
    }

    /// Half-open vertical band birds may spawn in
    pub fn spawn_band(&self) -> std::ops::Range<i32> {
        BIRD_SPAWN_MARGIN..self.screen_height - BIRD_SPAWN_MARGIN
    }
}
