//! Application settings read from a JSON document.

use crate::error::AppError;
use crate::infra::InitialData;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "appsettings.json";
pub const DEFAULT_DB_FILE: &str = "exercise_tracker.db";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    #[serde(default)]
    pub database_path: Option<PathBuf>,
    #[serde(default)]
    pub initial_data: Option<InitialData>,
}

impl AppConfig {
    pub fn from_json_str(raw: &str) -> Result<Self, AppError> {
        serde_json::from_str(raw).map_err(|e| AppError::Config(e.to_string()))
    }

    pub fn from_file(path: &Path) -> Result<Self, AppError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&raw)
    }

    /// Load the explicitly named file, or `appsettings.json` from the working
    /// directory when present. No file at all yields the defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, AppError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        let fallback = Path::new(DEFAULT_CONFIG_FILE);
        if fallback.is_file() {
            return Self::from_file(fallback);
        }
        log::debug!("no {} found, using defaults", DEFAULT_CONFIG_FILE);
        Ok(Self::default())
    }

    /// `override_path` beats the configured path, which beats the default.
    pub fn resolve_db_path(&self, override_path: Option<&Path>) -> PathBuf {
        override_path
            .map(Path::to_path_buf)
            .or_else(|| self.database_path.clone())
            .unwrap_or_else(default_db_path)
    }
}

pub fn default_db_path() -> PathBuf {
    let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("exercise-tracker").join(DEFAULT_DB_FILE)
}
