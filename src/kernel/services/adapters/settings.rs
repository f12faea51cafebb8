//! Ratio storage adapters.
//!
//! The durable format is a flat JSON object of string values with two
//! fixed keys (`hectareToBigha`, `bighaToBiswa`). Read semantics are
//! deliberately presence-over-validity: a key that exists with a
//! non-empty value suppresses the default even when the value does not
//! parse (it then loads as NaN). Do not "fix" this by validating on
//! read; the converter tolerates the degenerate values.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::kernel::convert::{display_number, parse_number};
use crate::kernel::services::ports::{
    RatioConfig, RatioStore, BIGHA_TO_BISWA_KEY, HECTARE_TO_BIGHA_KEY,
};

const STATE_DIR: &str = ".bhumi";
const RATIOS_FILE: &str = "ratios.json";

pub fn get_ratios_path() -> Option<PathBuf> {
    get_cache_dir().map(|dir| dir.join(STATE_DIR).join(RATIOS_FILE))
}

/// Wire form of the ratio file. Values stay strings so whatever the user
/// typed survives a round trip untouched; a missing key reads as `None`.
#[derive(Debug, Default, Serialize, Deserialize)]
struct RatioEntries {
    #[serde(rename = "hectareToBigha", skip_serializing_if = "Option::is_none")]
    hectare_to_bigha: Option<String>,
    #[serde(rename = "bighaToBiswa", skip_serializing_if = "Option::is_none")]
    bigha_to_biswa: Option<String>,
}

fn config_from_entries(entries: &RatioEntries) -> RatioConfig {
    let mut config = RatioConfig::default();
    // Presence (non-empty string), not parseability, decides whether the
    // default is kept.
    if let Some(value) = entries.hectare_to_bigha.as_deref().filter(|v| !v.is_empty()) {
        config.hectare_to_bigha = parse_number(value);
    }
    if let Some(value) = entries.bigha_to_biswa.as_deref().filter(|v| !v.is_empty()) {
        config.bigha_to_biswa = parse_number(value);
    }
    config
}

fn entries_from_config(config: &RatioConfig) -> RatioEntries {
    RatioEntries {
        hectare_to_bigha: Some(display_number(config.hectare_to_bigha)),
        bigha_to_biswa: Some(display_number(config.bigha_to_biswa)),
    }
}

/// Filesystem-backed ratio storage under the user cache directory.
pub struct FsRatioStore {
    path: Option<PathBuf>,
}

impl FsRatioStore {
    pub fn new() -> Self {
        Self {
            path: get_ratios_path(),
        }
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self { path: Some(path) }
    }

    fn read_entries(&self) -> RatioEntries {
        let Some(path) = &self.path else {
            return RatioEntries::default();
        };
        let Ok(data) = std::fs::read_to_string(path) else {
            return RatioEntries::default();
        };
        serde_json::from_str(&data).unwrap_or_default()
    }
}

impl Default for FsRatioStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RatioStore for FsRatioStore {
    fn load(&self) -> RatioConfig {
        config_from_entries(&self.read_entries())
    }

    fn save(&mut self, config: &RatioConfig) {
        let Some(path) = &self.path else {
            return;
        };
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        match serde_json::to_string_pretty(&entries_from_config(config)) {
            Ok(data) => {
                if let Err(err) = std::fs::write(path, data) {
                    tracing::warn!(path = %path.display(), error = %err, "ratio save failed");
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "ratio serialization failed");
            }
        }
    }
}

/// In-memory ratio storage for tests and headless use.
#[derive(Debug, Default)]
pub struct MemoryRatioStore {
    entries: RatioEntries,
}

impl MemoryRatioStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a raw string entry, bypassing numeric formatting. Useful to
    /// simulate corrupt or hand-edited storage.
    pub fn insert_raw(&mut self, key: &str, value: &str) {
        let slot = match key {
            HECTARE_TO_BIGHA_KEY => &mut self.entries.hectare_to_bigha,
            BIGHA_TO_BISWA_KEY => &mut self.entries.bigha_to_biswa,
            _ => return,
        };
        *slot = Some(value.to_string());
    }
}

impl RatioStore for MemoryRatioStore {
    fn load(&self) -> RatioConfig {
        config_from_entries(&self.entries)
    }

    fn save(&mut self, config: &RatioConfig) {
        self.entries = entries_from_config(config);
    }
}

fn get_cache_dir() -> Option<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        return std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join("Library/Caches"));
    }

    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_CACHE_HOME") {
            return Some(PathBuf::from(xdg));
        }
        return std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join(".cache"));
    }

    #[cfg(target_os = "windows")]
    {
        if let Ok(local) = std::env::var("LOCALAPPDATA") {
            return Some(PathBuf::from(local));
        }
        return std::env::var("APPDATA").ok().map(PathBuf::from);
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        None
    }
}
