//! Presentation settings and preferences
//!
//! Gameplay constants are fixed at compile time (see `consts`). Only how the
//! game is shown can be tweaked; read as JSON (LocalStorage on web, a file in
//! the working directory on native). The native binary can write the file.

use serde::{Deserialize, Serialize};

/// Fill colors for each kind of body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub hazard: String,
    pub platform: String,
    pub support: String,
    /// Turtles about to dive
    pub support_warning: String,
    pub player: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            hazard: "burlywood".to_string(),
            platform: "brown".to_string(),
            support: "red".to_string(),
            support_warning: "lightgreen".to_string(),
            player: "green".to_string(),
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub palette: Palette,
    /// How long the Game Over text stays up
    pub game_over_overlay_ms: u32,
    /// Headless runs: log the HUD every this many ticks (0 = only on change)
    pub hud_log_interval_ticks: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            game_over_overlay_ms: 2000,
            hud_log_interval_ticks: 500,
        }
    }
}

impl Settings {
    /// Parse settings JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Overlay duration converted to clock ticks
    pub fn game_over_overlay_ticks(&self) -> u64 {
        u64::from(self.game_over_overlay_ms / crate::consts::TICK_PERIOD_MS)
    }

    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "frogger_settings";

    /// Settings file read by the native binary
    #[cfg(not(target_arch = "wasm32"))]
    pub const FILE_NAME: &'static str = "frogger-settings.json";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Load settings from `frogger-settings.json` in the working directory
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        match std::fs::read_to_string(Self::FILE_NAME) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", Self::FILE_NAME);
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring {}: {}", Self::FILE_NAME, e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Write settings to `frogger-settings.json` in the working directory
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) -> std::io::Result<()> {
        self.save_to(std::path::Path::new(Self::FILE_NAME))
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn save_to(&self, path: &std::path::Path) -> std::io::Result<()> {
        let json = self.to_json().map_err(std::io::Error::other)?;
        std::fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}
