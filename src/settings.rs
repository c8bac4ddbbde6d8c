//! Game settings and balance tuning
//!
//! Loaded from a JSON file by the native driver. Every field has a default,
//! so a file only needs to list what it overrides.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Settings loading error
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Settings file could not be read
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Settings file is not valid JSON for [`Settings`]
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Values parsed but make no sense together
    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Data-driven game balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub initial_lives: u32,
    /// Cap for the extra-life bonus
    pub max_lives: u32,
    /// Paddle speed in world units per second
    pub paddle_speed: f32,
    pub initial_ball_speed: f32,
    /// Multiplier applied on every speed bump
    pub speed_increment: f32,
    pub bonus_fall_speed: f32,
    /// Hit counts (since the last ball reset) that bump the speed
    pub speed_bump_hits: Vec<u32>,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            initial_lives: INITIAL_LIVES,
            max_lives: MAX_LIVES,
            paddle_speed: PADDLE_SPEED,
            initial_ball_speed: INITIAL_BALL_SPEED,
            speed_increment: BALL_SPEED_INCREMENT,
            bonus_fall_speed: BONUS_FALL_SPEED,
            speed_bump_hits: vec![4, 12],
        }
    }
}

impl Tuning {
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(1..=MAX_LIVES).contains(&self.max_lives) {
            return Err(SettingsError::Invalid(format!(
                "max_lives must be in 1..={}, got {}",
                MAX_LIVES, self.max_lives
            )));
        }
        if !(1..=self.max_lives).contains(&self.initial_lives) {
            return Err(SettingsError::Invalid(format!(
                "initial_lives must be in 1..={}, got {}",
                self.max_lives, self.initial_lives
            )));
        }

        let rates = [
            ("paddle_speed", self.paddle_speed),
            ("initial_ball_speed", self.initial_ball_speed),
            ("speed_increment", self.speed_increment),
            ("bonus_fall_speed", self.bonus_fall_speed),
        ];
        for (name, value) in rates {
            if !value.is_finite() || value <= 0.0 {
                return Err(SettingsError::Invalid(format!(
                    "{} must be finite and positive, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

/// Driver settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Initial viewport width in pixels
    pub viewport_width: u32,
    /// Initial viewport height in pixels
    pub viewport_height: u32,
    pub tuning: Tuning,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            viewport_width: 960,
            viewport_height: 540,
            tuning: Tuning::default(),
        }
    }
}

impl Settings {
    /// Parse and validate settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.as_ref().display());
        Ok(settings)
    }

    /// Load settings, falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path.as_ref()) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!(
                    "Using default settings ({}): {}",
                    path.as_ref().display(),
                    e
                );
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.viewport_width == 0 || self.viewport_height == 0 {
            return Err(SettingsError::Invalid(format!(
                "viewport must be at least 1x1, got {}x{}",
                self.viewport_width, self.viewport_height
            )));
        }
        self.tuning.validate()
    }
}
