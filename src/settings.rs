//! Game settings
//!
//! Physics and camera tuning, injected into a `LevelSession` at construction.
//! Stored as JSON next to the binary.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while loading or validating settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("settings parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Physics, camera and level tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === World ===
    /// Size of one layout cell in pixels
    pub tile_size: f32,
    pub screen_width: f32,
    pub screen_height: f32,

    // === Physics ===
    /// Added to vertical velocity every frame
    pub gravity: f32,
    /// Vertical velocity after a jump (negative is up)
    pub jump_speed: f32,
    /// Nominal horizontal speed, restored whenever the camera is not scrolling
    pub player_speed: f32,
    pub player_width: f32,
    pub player_height: f32,

    // === Camera ===
    /// World slide per frame while scrolling
    pub scroll_step: f32,
    /// Edge zone is `screen_width / dead_zone_divisor` wide on each side
    pub dead_zone_divisor: f32,

    // === Trivia ===
    /// Shuffle seed for dealing questions to NPCs (None keeps bank order)
    pub question_seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tile_size: TILE_SIZE,
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,

            gravity: GRAVITY,
            jump_speed: JUMP_SPEED,
            player_speed: PLAYER_SPEED,
            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,

            scroll_step: SCROLL_STEP,
            dead_zone_divisor: DEAD_ZONE_DIVISOR,

            question_seed: None,
        }
    }
}

impl Settings {
    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings from a JSON file, falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path.as_ref()) {
            Ok(settings) => settings,
            Err(err) => {
                log::warn!("Using default settings ({err})");
                Self::default()
            }
        }
    }

    /// Save settings as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let path = path.as_ref();
        fs::write(path, self.to_json()?)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }

    /// Reject values the simulation cannot work with
    pub fn validate(&self) -> Result<(), SettingsError> {
        let finite = [
            ("tile_size", self.tile_size),
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("gravity", self.gravity),
            ("jump_speed", self.jump_speed),
            ("player_speed", self.player_speed),
            ("player_width", self.player_width),
            ("player_height", self.player_height),
            ("scroll_step", self.scroll_step),
            ("dead_zone_divisor", self.dead_zone_divisor),
        ];
        if let Some((name, value)) = finite.iter().find(|(_, value)| !value.is_finite()) {
            return Err(SettingsError::Invalid(format!(
                "{name} must be finite, got {value}"
            )));
        }

        if self.tile_size <= 0.0 {
            return Err(SettingsError::Invalid(format!(
                "tile_size must be positive, got {}",
                self.tile_size
            )));
        }
        if self.screen_width <= 0.0 {
            return Err(SettingsError::Invalid(format!(
                "screen_width must be positive, got {}",
                self.screen_width
            )));
        }
        // Below 2 the two edge zones overlap and both scroll rules fire at once
        if self.dead_zone_divisor <= 2.0 {
            return Err(SettingsError::Invalid(format!(
                "dead_zone_divisor must be greater than 2, got {}",
                self.dead_zone_divisor
            )));
        }
        if self.player_width < 0.0 || self.player_height < 0.0 {
            return Err(SettingsError::Invalid(
                "player size must not be negative".to_string(),
            ));
        }
        Ok(())
    }

    /// Width of each scroll-triggering edge zone
    pub fn dead_zone_width(&self) -> f32 {
        self.screen_width / self.dead_zone_divisor
    }
}
