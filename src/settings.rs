//! Game settings and preferences
//!
//! Read from an optional JSON file at startup. Any key left out falls back
//! to its default, so a config only needs the values it changes.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{TARGET_FPS, WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::error::ConfigError;

/// Runtime settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Display ===
    /// Playfield width in pixels
    pub window_width: f32,
    /// Playfield height in pixels
    pub window_height: f32,
    /// Frame limiter target
    pub target_fps: u32,

    // === HUD ===
    /// Show FPS counter
    pub show_fps: bool,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Silence everything
    pub muted: bool,

    // === Simulation ===
    /// RNG seed; a fixed default is used when absent
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            target_fps: TARGET_FPS,

            show_fps: true,

            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,

            seed: None,
        }
    }
}

impl Settings {
    /// Seed used when none is configured
    pub const DEFAULT_SEED: u64 = 0x5EED_A57E;

    /// Parse settings from a JSON document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load settings, falling back to defaults when the file is unusable
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load_from(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Using default settings ({}: {})", path.display(), e);
                Self::default()
            }
        }
    }

    /// Reject values the game cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.window_width > 0.0 && self.window_height > 0.0) {
            return Err(ConfigError::Invalid {
                field: "window_width/window_height",
                reason: format!(
                    "playfield must be non-empty, got {}x{}",
                    self.window_width, self.window_height
                ),
            });
        }
        if self.target_fps == 0 {
            return Err(ConfigError::Invalid {
                field: "target_fps",
                reason: "must be at least 1".to_string(),
            });
        }
        for (field, value) in [
            ("master_volume", self.master_volume),
            ("sfx_volume", self.sfx_volume),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("{} is outside 0.0..=1.0", value),
                });
            }
        }
        Ok(())
    }

    /// Seed for the session RNG
    pub fn effective_seed(&self) -> u64 {
        self.seed.unwrap_or(Self::DEFAULT_SEED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "target_fps": 30, "seed": 7 }"#).unwrap();
        assert_eq!(settings.target_fps, 30);
        assert_eq!(settings.effective_seed(), 7);
        assert_eq!(settings.window_width, WINDOW_WIDTH);
        assert!(settings.show_fps);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = Settings::from_json(r#"{ "target_fps": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "target_fps", .. }));

        let err = Settings::from_json(r#"{ "sfx_volume": 1.5 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "sfx_volume", .. }));

        assert!(matches!(
            Settings::from_json("not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let settings = Settings::load_or_default("/definitely/not/here/astro-drift.json");
        assert_eq!(settings, Settings::default());
    }
}
