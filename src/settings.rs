//! Game settings and preferences
//!
//! Stored as JSON next to the high score file. Values are checked when the
//! world is built, not when they are parsed.

use std::fs;
use std::num::NonZeroU32;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_PLAY_HEIGHT, DEFAULT_PLAY_WIDTH, MAX_FRAME_DT, PLAYER_MAX_HEALTH};
use crate::error::{ConfigError, PersistenceError};
use crate::sim::entity::PlayBounds;
use crate::sim::player::checked_max_health;

/// Quality preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum QualityPreset {
    Low,
    #[default]
    Medium,
    High,
}

impl QualityPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityPreset::Low => "Low",
            QualityPreset::Medium => "Medium",
            QualityPreset::High => "High",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(QualityPreset::Low),
            "medium" | "med" => Some(QualityPreset::Medium),
            "high" => Some(QualityPreset::High),
            _ => None,
        }
    }

    /// Maximum live particles for this preset
    pub fn max_particles(&self) -> usize {
        match self {
            QualityPreset::Low => 100,
            QualityPreset::Medium => 200,
            QualityPreset::High => 400,
        }
    }

    /// Number of background stars
    pub fn star_count(&self) -> usize {
        match self {
            QualityPreset::Low => 60,
            QualityPreset::Medium => 150,
            QualityPreset::High => 300,
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Logical play area
    pub play_width: f32,
    pub play_height: f32,

    /// Graphics quality preset
    pub quality: QualityPreset,
    /// Particle effects (explosions, sparks)
    pub particles: bool,

    /// Starting and maximum player health
    pub player_max_health: i64,
    /// Largest frame delta fed to one step
    pub max_frame_dt: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            play_width: DEFAULT_PLAY_WIDTH,
            play_height: DEFAULT_PLAY_HEIGHT,
            quality: QualityPreset::Medium,
            particles: true,
            player_max_health: PLAYER_MAX_HEALTH as i64,
            max_frame_dt: MAX_FRAME_DT,
        }
    }
}

impl Settings {
    /// Create settings from a quality preset
    pub fn from_preset(preset: QualityPreset) -> Self {
        Self {
            quality: preset,
            ..Self::default()
        }
    }

    /// Effective particle count cap
    pub fn max_particles(&self) -> usize {
        if !self.particles {
            0
        } else {
            self.quality.max_particles()
        }
    }

    pub fn star_count(&self) -> usize {
        self.quality.star_count()
    }

    pub fn play_bounds(&self) -> Result<PlayBounds, ConfigError> {
        PlayBounds::new(self.play_width, self.play_height)
    }

    pub fn max_health(&self) -> Result<NonZeroU32, ConfigError> {
        checked_max_health(self.player_max_health)
    }

    pub fn frame_dt_cap(&self) -> Result<f32, ConfigError> {
        if self.max_frame_dt.is_finite() && self.max_frame_dt > 0.0 {
            Ok(self.max_frame_dt)
        } else {
            Err(ConfigError::InvalidFrameDt {
                value: self.max_frame_dt,
            })
        }
    }

    /// Check every field the world depends on
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.play_bounds()?;
        self.max_health()?;
        self.frame_dt_cap()?;
        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn to_json(&self) -> String {
        // Plain data with no maps or non-string keys; serialization cannot fail
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Load settings from disk, falling back to defaults if missing or unreadable
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring {}: {e}", path.display());
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("No settings at {} ({e}), using defaults", path.display());
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), PersistenceError> {
        fs::write(path, self.to_json())?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}
