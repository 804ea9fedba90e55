//! RON settings loader

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// File name looked up in the platform config directory
pub const SETTINGS_FILE: &str = "settings.ron";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
    #[error("{field} = {value} is outside 0..={max}")]
    OutOfRange { field: &'static str, value: i32, max: i32 },
}

/// Parameters of one generated world
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldSettings {
    /// 0 small .. 4 large
    pub land_size: i32,
    /// 0 cool .. 4 warm
    pub temperature: i32,
    /// 0 arid .. 3 wet
    pub climate: i32,
    /// 0 young .. 4 old
    pub age: i32,
    /// Fixed RNG seed; fresh entropy when unset
    pub seed: Option<u64>,
}

impl Default for WorldSettings {
    fn default() -> Self {
        Self {
            land_size: 1,
            temperature: 1,
            climate: 1,
            age: 1,
            seed: None,
        }
    }
}

impl WorldSettings {
    pub fn from_ron(content: &str, path: &Path) -> Result<Self, SettingsError> {
        let settings: Self = ron::from_str(content).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read an explicit settings file. Missing or invalid files are errors.
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let content = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_ron(&content, path)
    }

    /// Load `path` if given, else the platform settings file, else defaults
    pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
        if let Some(path) = path {
            return Self::load_from(path);
        }

        match settings_path() {
            Some(path) if path.exists() => {
                log::info!("Loading settings from {}", path.display());
                Self::load_from(&path)
            }
            Some(path) => {
                log::debug!("No settings at {}, using defaults", path.display());
                Ok(Self::default())
            }
            None => {
                log::debug!("No config directory, using default settings");
                Ok(Self::default())
            }
        }
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        let checks = [
            ("land_size", self.land_size, 4),
            ("temperature", self.temperature, 4),
            ("climate", self.climate, 3),
            ("age", self.age, 4),
        ];
        for (field, value, max) in checks {
            if !(0..=max).contains(&value) {
                return Err(SettingsError::OutOfRange { field, value, max });
            }
        }
        Ok(())
    }
}

/// Get the settings file path
pub fn settings_path() -> Option<PathBuf> {
    use directories::ProjectDirs;

    ProjectDirs::from("com", "civgen", "Civgen").map(|dirs| dirs.config_dir().join(SETTINGS_FILE))
}
