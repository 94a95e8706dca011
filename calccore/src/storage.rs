//! Preferences storage
//!
//! Window and font preferences are kept as JSON in the user's config
//! directory. Calculator state itself is never written to disk.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StorageError>;

const APP_NAME: &str = "simplecalc";
const PREFERENCES_FILE: &str = "preferences.json";

/// User preferences that are persisted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub window_width: f32,
    pub window_height: f32,
    /// Display text size in points
    pub display_font_size: f32,
    /// Button label size in points
    pub button_font_size: f32,
    /// Edge length of a grid button
    pub button_size: f32,
    pub show_tooltips: bool,
    /// `tracing` filter directive used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            window_width: 300.0,
            window_height: 400.0,
            display_font_size: 20.0,
            button_font_size: 18.0,
            button_size: 60.0,
            show_tooltips: true,
            log_filter: "warn".to_string(),
        }
    }
}

impl Preferences {
    pub fn default_path() -> PathBuf {
        config_dir(APP_NAME).join(PREFERENCES_FILE)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Load from the default location. A missing file means first run and
    /// yields defaults.
    pub fn load() -> Result<Self> {
        match Self::load_from(&Self::default_path()) {
            Err(StorageError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                Ok(Self::default())
            }
            other => other,
        }
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::default_path();
        tracing::debug!(path = %path.display(), "saving preferences");
        self.save_to(&path)
    }
}

/// Get the config directory for an app
pub fn config_dir(app_name: &str) -> PathBuf {
    directories::ProjectDirs::from("", "", app_name)
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("calccore_{}_{}", name, std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_save_and_load() {
        let dir = scratch_dir("save_load");
        let path = dir.join("nested").join(PREFERENCES_FILE);
        let prefs = Preferences {
            window_width: 320.0,
            show_tooltips: false,
            log_filter: "calccore=trace".to_string(),
            ..Preferences::default()
        };
        prefs.save_to(&path).unwrap();
        assert_eq!(Preferences::load_from(&path).unwrap(), prefs);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let prefs: Preferences = serde_json::from_str(r#"{ "button_size": 48.0 }"#).unwrap();
        assert_eq!(prefs.button_size, 48.0);
        assert_eq!(prefs.window_width, 300.0);
        assert_eq!(prefs.log_filter, "warn");
    }

    #[test]
    fn test_load_errors() {
        let dir = scratch_dir("errors");
        let path = dir.join(PREFERENCES_FILE);
        assert!(matches!(Preferences::load_from(&path), Err(StorageError::Io(_))));

        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(&path, "not json").unwrap();
        assert!(matches!(Preferences::load_from(&path), Err(StorageError::Json(_))));
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_default_path() {
        assert!(Preferences::default_path().ends_with(PREFERENCES_FILE));
    }
}
