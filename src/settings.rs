use std::path::{Path, PathBuf};

use approx::Units;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const CONFIG_DIR: &str = "approx";
const CONFIG_FILE: &str = "settings.toml";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("No configuration directory on this platform")]
    NoConfigDir,

    #[error("Could not access {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Could not parse TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Could not write TOML: {0}")]
    TomlWrite(#[from] toml::ser::Error),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Large units used when formatting, e.g. `"ywd"`. Days are always shown.
    pub units: String,
    /// Maximum level of log events written to stderr.
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            units: "d".to_owned(),
            log_level: "info".to_owned(),
        }
    }
}

impl Settings {
    /// `<config dir>/approx/settings.toml`.
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|config_dir| config_dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Reads the settings file, or the defaults if there is none.
    pub fn load() -> Result<Self, SettingsError> {
        match Self::path() {
            Some(path) if path.is_file() => Self::read(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn read(path: &Path) -> Result<Self, SettingsError> {
        let text = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_owned(),
            source,
        })?;
        Ok(toml::from_str(&text)?)
    }

    /// Writes the settings to [`Settings::path`], creating the directory if needed.
    pub fn write(&self) -> Result<PathBuf, SettingsError> {
        let path = Self::path().ok_or(SettingsError::NoConfigDir)?;
        self.write_to(&path)?;
        Ok(path)
    }

    pub fn write_to(&self, path: &Path) -> Result<(), SettingsError> {
        let io = |source| SettingsError::Io {
            path: path.to_owned(),
            source,
        };
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir).map_err(io)?;
        }
        let settings = toml::to_string_pretty(self)?;
        std::fs::write(path, settings).map_err(io)
    }

    pub fn units(&self) -> Units {
        Units::from_spec(&self.units)
    }
}
