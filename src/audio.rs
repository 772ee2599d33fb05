//! Sound effects
//!
//! A registry of named sounds behind a fire-and-forget contract: loading a
//! missing file or playing an unknown name logs a warning and the game
//! carries on without the effect.

use std::collections::HashMap;

use macroquad::audio::{self, PlaySoundParams, Sound};

use crate::settings::Settings;

/// Sound names the game loop asks for
pub const PADDLE: &str = "paddle";
pub const BRICK: &str = "brick";
pub const BALL_LOST: &str = "ball_lost";
pub const LEVEL_UP: &str = "level_up";
pub const GAME_OVER: &str = "game_over";

struct Entry {
    sound: Sound,
    volume: f32,
}

/// Named sound registry
#[derive(Default)]
pub struct SoundBank {
    sounds: HashMap<String, Entry>,
}

impl SoundBank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every effect the game uses from `assets/sounds/`.
    pub async fn load_defaults() -> Self {
        let mut bank = Self::new();
        for name in [PADDLE, BRICK, BALL_LOST, LEVEL_UP, GAME_OVER] {
            let path = format!("assets/sounds/{name}.wav");
            bank.load(name, &path, 0.5).await;
        }
        bank
    }

    /// Register `name` with the file at `path` and a per-sound volume.
    /// Missing or unreadable files are skipped with a warning.
    pub async fn load(&mut self, name: &str, path: &str, volume: f32) {
        match audio::load_sound(path).await {
            Ok(sound) => {
                self.sounds.insert(
                    name.to_string(),
                    Entry {
                        sound,
                        volume: volume.clamp(0.0, 1.0),
                    },
                );
            }
            Err(err) => {
                log::warn!("sound '{name}' unavailable ({path}): {err:?}");
            }
        }
    }

    /// Fire-and-forget playback; unknown names warn and are skipped.
    pub fn play(&self, name: &str, settings: &Settings) {
        let Some(entry) = self.sounds.get(name) else {
            log::warn!("sound '{name}' not loaded");
            return;
        };
        let volume = entry.volume * settings.effective_volume();
        if volume <= 0.0 {
            return;
        }
        audio::play_sound(
            &entry.sound,
            PlaySoundParams {
                looped: false,
                volume,
            },
        );
    }

    pub fn len(&self) -> usize {
        self.sounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sounds.is_empty()
    }
}
