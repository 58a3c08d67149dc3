//! User-tweakable settings, loaded from a JSON file in the platform config
//! directory. Missing or malformed files fall back to the defaults.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub width: u32,
    pub height: u32,
    pub fullscreen: bool,
    pub vsync: bool,
    /// Vertical field of view in degrees.
    pub fov: f32,
    pub mouse_sensitivity: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            fullscreen: false,
            vsync: true,
            fov: 45.0,
            mouse_sensitivity: 0.1,
        }
    }
}

impl Settings {
    fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("facet3d").join("settings.json"))
    }

    /// Loads the settings file, or returns the defaults if it is absent or
    /// unreadable.
    pub fn load_or_default() -> Self {
        let Some(path) = Self::path() else {
            log::warn!("No config directory on this platform, using default settings");
            return Self::default();
        };
        let data = match std::fs::read_to_string(&path) {
            Ok(data) => data,
            Err(_) => {
                log::info!("No settings file at {}, using defaults", path.display());
                return Self::default();
            }
        };
        match serde_json::from_str(&data) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Failed to parse {}: {}, using defaults", path.display(), e);
                Self::default()
            }
        }
    }
}
