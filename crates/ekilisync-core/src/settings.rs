//! Settings - 設定の読み込み
//!
//! 優先順位（後のものが勝つ）:
//! 1. **Compiled defaults** — [`Settings::default()`]
//! 2. **Settings file** — JSON、未指定のフィールドはデフォルトのまま
//! 3. **Environment variables** — `EKILISYNC_DATA_FILE`, `EKILISYNC_LOG`

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const ENV_DATA_FILE: &str = "EKILISYNC_DATA_FILE";
pub const ENV_LOG: &str = "EKILISYNC_LOG";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// ```json
/// { "dataFile": "/home/me/.ekilisync/data.json", "logLevel": "debug" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Where `FileStore` keeps the key space.
    pub data_file: PathBuf,
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("ekilisync.json"),
            log_level: "warn".to_string(),
        }
    }
}

impl Settings {
    /// Applies overrides from `lookup` (normally `std::env::var`).
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(ENV_DATA_FILE).filter(|v| !v.trim().is_empty()) {
            self.data_file = PathBuf::from(path);
        }
        if let Some(level) = lookup(ENV_LOG).filter(|v| !v.trim().is_empty()) {
            self.log_level = level;
        }
        self
    }
}

pub fn load_settings_from_path(path: &Path) -> Result<Settings, SettingsError> {
    let raw = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Defaults, then the optional file, then the process environment.
pub fn load_settings(path: Option<&Path>) -> Result<Settings, SettingsError> {
    let base = match path {
        Some(path) => load_settings_from_path(path)?,
        None => Settings::default(),
    };
    Ok(base.with_overrides(|key| std::env::var(key).ok()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let settings = Settings::default();
        assert_eq!(settings.data_file, PathBuf::from("ekilisync.json"));
        assert_eq!(settings.log_level, "warn");
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"logLevel": "debug"}"#).unwrap();

        let settings = load_settings_from_path(&path).unwrap();
        assert_eq!(settings.log_level, "debug");
        assert_eq!(settings.data_file, PathBuf::from("ekilisync.json"));
    }

    #[test]
    fn overrides_win_over_file_values() {
        let settings = Settings {
            data_file: PathBuf::from("from-file.json"),
            log_level: "info".to_string(),
        }
        .with_overrides(|key| match key {
            ENV_DATA_FILE => Some("/tmp/override.json".to_string()),
            _ => None,
        });

        assert_eq!(settings.data_file, PathBuf::from("/tmp/override.json"));
        assert_eq!(settings.log_level, "info");
    }

    #[test]
    fn blank_overrides_are_ignored() {
        let settings = Settings::default().with_overrides(|_| Some("  ".to_string()));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = load_settings_from_path(Path::new("/nonexistent/settings.json")).unwrap_err();
        assert!(matches!(err, SettingsError::Read { .. }));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{").unwrap();

        assert!(matches!(
            load_settings_from_path(&path),
            Err(SettingsError::Parse { .. })
        ));
    }
}
