use std::path::PathBuf;

use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/vibra/config.toml` or `~/.config/vibra/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `VIBRA__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub audio: AudioSettings,
    pub catalog: CatalogSettings,
    pub ui: UiSettings,
    pub controls: ControlsSettings,
    pub storage: StorageSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    /// Fade-out duration when skipping tracks (milliseconds).
    /// Set to 0 to switch tracks with a hard cut.
    pub fade_ms: u64,
    /// Number of steps used to ramp volume (higher = smoother, more CPU).
    pub fade_steps: u64,
    /// Fade-out duration when quitting (milliseconds).
    /// Set to 0 to stop immediately.
    pub quit_fade_out_ms: u64,
    /// Timeout for fetching a track's audio stream (seconds).
    pub fetch_timeout_secs: u64,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            fade_ms: 400,
            fade_steps: 10,
            quit_fade_out_ms: 500,
            fetch_timeout_secs: 15,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    /// Base URL of the music catalog API.
    pub base_url: String,
    /// Base URL of the lyrics lookup API.
    pub lyrics_base_url: String,
    /// How many entries to request from the chart endpoints.
    pub chart_limit: u32,
    /// Per-request timeout (seconds).
    pub timeout_secs: u64,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            base_url: "https://api.deezer.com".to_string(),
            lyrics_base_url: "https://api.vagalume.com.br".to_string(),
            chart_limit: 30,
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Name shown in the header profile row.
    pub profile_name: String,
    /// The text rendered inside the top header box.
    pub header_text: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            profile_name: "Listener".to_string(),
            header_text: " ~ vibra ~ stream the good vibes ~ ".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ControlsSettings {
    /// Relative seek step for `H` / `L` on the player screen, as a
    /// percentage of the track duration.
    pub seek_step_percent: u8,
}

impl Default for ControlsSettings {
    fn default() -> Self {
        Self {
            seek_step_percent: 5,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// Override for the data directory holding the persisted library
    /// entries. Defaults to `$XDG_DATA_HOME/vibra`.
    pub data_dir: Option<PathBuf>,
}
