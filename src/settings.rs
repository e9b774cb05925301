//! Game settings
//!
//! Read once at startup from a JSON file. Every field has a default, so a
//! partial file (or no file at all) is fine. Nothing is ever written back.

use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::consts::TARGET_FPS;
use crate::error::Error;

/// Environment variable overriding the settings path
pub const SETTINGS_ENV: &str = "MISSION_EARTH_SETTINGS";
/// Settings file looked up in the working directory
pub const DEFAULT_SETTINGS_FILE: &str = "mission_earth.json";

/// Frame rate bounds accepted from the settings file
const MIN_FPS: u32 = 10;
const MAX_FPS: u32 = 240;

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directory holding backgrounds/, player_images/, obstacles/, puzzle_images/
    pub asset_root: PathBuf,
    /// Frame loop rate
    pub target_fps: u32,
    /// RNG seed; derived from the clock when absent
    pub seed: Option<u64>,
    /// How long the terminal frontend treats a key as held after its last press/repeat
    pub held_key_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            asset_root: PathBuf::from("assets"),
            target_fps: TARGET_FPS,
            seed: None,
            held_key_ms: 150,
        }
    }
}

impl Settings {
    /// Parse settings from JSON text
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load settings from `path`. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self, Error> {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No settings at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(Error::SettingsRead {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        Self::from_json(&json).map_err(|source| Error::Settings {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load settings from the configured location, falling back to defaults
    pub fn load() -> Self {
        let path = std::env::var_os(SETTINGS_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_FILE));

        match Self::load_from(&path) {
            Ok(settings) => {
                log::info!("Settings: {:?}", settings);
                settings
            }
            Err(e) => {
                log::warn!("{e}; using default settings");
                Self::default()
            }
        }
    }

    /// Effective frame rate (clamped)
    pub fn fps(&self) -> u32 {
        self.target_fps.clamp(MIN_FPS, MAX_FPS)
    }

    /// Duration of one frame at the effective rate
    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.fps() as f64)
    }

    pub fn held_key_window(&self) -> Duration {
        Duration::from_millis(self.held_key_ms)
    }

    /// Configured seed, or one derived from the wall clock
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(0xC0FFEE)
        })
    }
}
