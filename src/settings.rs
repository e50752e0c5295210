//! Game settings and preferences
//!
//! Persisted in LocalStorage on the web; read from an optional JSON file on
//! native. Only preferences live here, never game progress.

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_GIFT_COUNT;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Gifts scattered in the bed at startup
    pub gift_count: usize,
    /// Fixed bed layout seed (None = seed from the clock)
    pub seed: Option<u64>,
    /// Vertical field of view in degrees
    pub camera_fov_degrees: f32,

    // === Input ===
    /// Arrow keys / WASD / space in addition to the on-screen joystick
    pub keyboard_controls: bool,
    /// Start with the autopilot driving the claw
    pub demo_mode: bool,

    // === HUD ===
    /// Show FPS counter
    pub show_fps: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            gift_count: DEFAULT_GIFT_COUNT,
            seed: None,
            camera_fov_degrees: 60.0,

            keyboard_controls: true,
            demo_mode: false,

            show_fps: false,
        }
    }
}

impl Settings {
    /// Parse settings JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut settings: Settings = serde_json::from_str(json)?;
        settings.camera_fov_degrees = settings.camera_fov_degrees.clamp(20.0, 120.0);
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Seed for the gift bed, falling back to `fallback` (usually the clock)
    pub fn seed_or(&self, fallback: u64) -> u64 {
        self.seed.unwrap_or(fallback)
    }

    /// Flip demo mode; returns the new value
    pub fn toggle_demo_mode(&mut self) -> bool {
        self.demo_mode = !self.demo_mode;
        self.demo_mode
    }

    /// LocalStorage key
    pub const STORAGE_KEY: &'static str = "claw_machine_settings";

    /// Load settings through a key/value reader, falling back to defaults
    pub fn load_with(read: impl FnOnce(&str) -> Option<String>) -> Self {
        if let Some(json) = read(Self::STORAGE_KEY) {
            match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded stored settings");
                    return settings;
                }
                Err(e) => log::warn!("Ignoring stored settings: {}", e),
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Store settings through a key/value writer; returns true on success
    pub fn save_with<E: std::fmt::Debug>(
        &self,
        write: impl FnOnce(&str, &str) -> Result<(), E>,
    ) -> bool {
        let json = match self.to_json() {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not serialize settings: {}", e);
                return false;
            }
        };

        match write(Self::STORAGE_KEY, &json) {
            Ok(()) => {
                log::info!("Settings saved");
                true
            }
            Err(e) => {
                log::warn!("Could not save settings: {:?}", e);
                false
            }
        }
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        Self::load_with(|key| storage.and_then(|s| s.get_item(key).ok().flatten()))
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) -> bool {
        let Some(storage) = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
        else {
            log::warn!("LocalStorage unavailable, settings not saved");
            return false;
        };

        self.save_with(|key, json| storage.set_item(key, json))
    }

    /// Load settings from a JSON file, or defaults when no path is given
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: Option<&std::path::Path>) -> Self {
        let Some(path) = path else {
            log::info!("Using default settings");
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Invalid settings in {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}
