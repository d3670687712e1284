//! Simulation settings
//!
//! Every tunable the simulation reads lives here as an explicit set, fixed for
//! the whole run. Defaults reproduce the classic constants; a JSON file named by
//! `PLATFORMER_SETTINGS` can override any subset of fields.

use std::path::{Path, PathBuf};
use std::time::Duration;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SetupError;
use crate::sim::level::{Level, Tile};

/// Environment variable naming an optional JSON settings file
pub const SETTINGS_ENV: &str = "PLATFORMER_SETTINGS";

/// Simulation and presentation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Window ===
    pub window_title: String,
    pub window_width: f32,
    pub window_height: f32,

    // === Geometry ===
    pub player_size: f32,
    pub block_size: i32,

    // === Kinematics (per tick) ===
    pub gravity: f32,
    /// Negative values point up
    pub jump_strength: f32,
    pub move_speed: f32,

    // === Pacing ===
    pub tick_delay_ms: u64,

    /// Spawn and respawn point (top-left of the player)
    pub spawn: Vec2,

    /// Custom level as `[x, y]` tile corners, in resolver order.
    /// `None` uses the classic layout.
    pub level: Option<Vec<[i32; 2]>>,

    // === Headless driver ===
    /// Ticks the autopilot plays before asserting quit
    pub demo_ticks: u64,
    /// Seed for the autopilot's jump timing
    pub autopilot_seed: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_title: WINDOW_TITLE.to_string(),
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,

            player_size: PLAYER_SIZE,
            block_size: BLOCK_SIZE,

            gravity: GRAVITY,
            jump_strength: JUMP_STRENGTH,
            move_speed: MOVE_SPEED,

            tick_delay_ms: TICK_DELAY_MS,

            spawn: Vec2::new(SPAWN_X, SPAWN_Y),
            level: None,

            demo_ticks: 600,
            autopilot_seed: 0x5EED,
        }
    }
}

impl Settings {
    /// Load settings from the file named by `PLATFORMER_SETTINGS`, or defaults
    pub fn load() -> Result<Self, SetupError> {
        match std::env::var_os(SETTINGS_ENV) {
            Some(path) => Self::load_from(Path::new(&path)),
            None => {
                log::info!("Using default settings");
                let settings = Self::default();
                settings.validate()?;
                Ok(settings)
            }
        }
    }

    /// Load and validate settings from a JSON file
    pub fn load_from(path: &Path) -> Result<Self, SetupError> {
        let json = std::fs::read_to_string(path).map_err(|source| SetupError::ReadSettings {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json, path)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Parse and validate settings; `origin` is only used in error messages
    pub fn from_json(json: &str, origin: &Path) -> Result<Self, SetupError> {
        let settings: Self =
            serde_json::from_str(json).map_err(|source| SetupError::ParseSettings {
                path: PathBuf::from(origin),
                source,
            })?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject settings the collision rules can't work with
    pub fn validate(&self) -> Result<(), SetupError> {
        if !(self.player_size.is_finite() && self.player_size > 0.0) {
            return Err(SetupError::invalid("player_size", "must be positive"));
        }
        if self.block_size <= 0 {
            return Err(SetupError::invalid("block_size", "must be positive"));
        }
        if !(self.window_width.is_finite() && self.window_width >= self.player_size) {
            return Err(SetupError::invalid(
                "window_width",
                format!("must be at least player_size ({})", self.player_size),
            ));
        }
        if !(self.window_height.is_finite() && self.window_height > 0.0) {
            return Err(SetupError::invalid("window_height", "must be positive"));
        }
        for (field, value) in [
            ("gravity", self.gravity),
            ("jump_strength", self.jump_strength),
            ("move_speed", self.move_speed),
            ("spawn.x", self.spawn.x),
            ("spawn.y", self.spawn.y),
        ] {
            if !value.is_finite() {
                return Err(SetupError::invalid(field, "must be finite"));
            }
        }
        Ok(())
    }

    /// Fixed end-of-tick delay
    pub fn tick_delay(&self) -> Duration {
        Duration::from_millis(self.tick_delay_ms)
    }

    /// Largest x the player's left edge may occupy
    pub fn max_player_x(&self) -> f32 {
        self.window_width - self.player_size
    }

    /// Build the level these settings describe
    pub fn build_level(&self) -> Level {
        match &self.level {
            Some(corners) => Level::new(
                self.block_size,
                corners.iter().map(|&[x, y]| Tile::new(x, y)),
            ),
            None => Level::classic(self.block_size),
        }
    }
}
