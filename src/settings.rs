//! Player preferences
//!
//! Persisted as JSON next to the high score file. Missing or unreadable
//! settings fall back to defaults; a corrupt file warns and is overwritten
//! on the next save.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Settings file, relative to the working directory
pub const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Mute all audio
    pub muted: bool,
    /// Show the elapsed-time clock in the HUD
    pub show_timer: bool,
    /// Show the frames-per-second counter
    pub show_fps: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
            show_timer: true,
            show_fps: false,
        }
    }
}

impl Settings {
    /// Effective playback volume for a sound effect
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            (self.master_volume * self.sfx_volume).clamp(0.0, 1.0)
        }
    }

    pub fn load() -> Self {
        Self::load_from(SETTINGS_FILE)
    }

    pub fn load_from(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("loaded settings from {}", path.display());
                    settings
                }
                Err(err) => {
                    log::warn!("bad settings in {}: {err}; using defaults", path.display());
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    pub fn save(&self) {
        self.save_to(SETTINGS_FILE)
    }

    pub fn save_to(&self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(err) = fs::write(path, json) {
                    log::warn!("failed to write {}: {err}", path.display());
                }
            }
            Err(err) => log::warn!("failed to serialize settings: {err}"),
        }
    }
}
