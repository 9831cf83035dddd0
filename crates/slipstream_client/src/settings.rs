//! Client settings from settings.toml
//!
//! Missing file is fine (defaults); a parse error is logged and defaults
//! are used. Nothing here panics.

use std::path::Path;

use bevy::prelude::Resource;
use serde::Deserialize;

use slipstream_simulation::{logger, LocomotionConfig};

#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClientSettings {
    /// Mouse look sensitivity (radians per pixel of motion)
    pub mouse_sensitivity: f32,
    /// Flight-sim style inverted pitch
    pub invert_y: bool,
    /// Locomotion tunables applied to the player on spawn
    pub locomotion: LocomotionConfig,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            mouse_sensitivity: 0.002,
            invert_y: false,
            locomotion: LocomotionConfig::default(),
        }
    }
}

impl ClientSettings {
    /// Load settings from a TOML file, falling back to defaults.
    pub fn load(path: &Path) -> Self {
        let Ok(content) = std::fs::read_to_string(path) else {
            // No settings file — defaults are the normal case
            return Self::default();
        };

        match toml::from_str(&content) {
            Ok(settings) => settings,
            Err(e) => {
                logger::log_error(&format!(
                    "Failed to parse {}: {} (using defaults)",
                    path.display(),
                    e
                ));
                Self::default()
            }
        }
    }
}
