use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::cli::Format;

pub const APP_DIR: &str = "calisthenics-planner";
pub const FILE_NAME: &str = "config.toml";

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub format: Format,
    pub theme: Theme,
    pub log_level: LevelFilter,
}

impl Settings {
    /// Read the settings from `path`, falling back to the defaults if the file does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("invalid configuration in {}", path.display()))
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string(self).context("failed to serialize configuration")
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            format: Format::Text,
            theme: Theme::Light,
            log_level: LevelFilter::Warn,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    Light,
    Dark,
}

pub fn default_path() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|d| d.join(APP_DIR).join(FILE_NAME))
        .context("could not determine config directory")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            Settings::load(&dir.path().join(FILE_NAME)).unwrap(),
            Settings::default()
        );
    }

    #[test]
    fn test_load_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(FILE_NAME);
        fs::write(&path, "theme = \"dark\"\nlog_level = \"debug\"\n").unwrap();
        assert_eq!(
            Settings::load(&path).unwrap(),
            Settings {
                format: Format::Text,
                theme: Theme::Dark,
                log_level: LevelFilter::Debug,
            }
        );
    }

    #[test]
    fn test_load_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(FILE_NAME);
        fs::write(&path, "format = \"pdf\"\n").unwrap();
        let err = Settings::load(&path).unwrap_err();
        assert!(err.to_string().starts_with("invalid configuration in"));
    }

    #[test]
    fn test_to_toml_round_trip() {
        let settings = Settings {
            format: Format::Json,
            theme: Theme::Dark,
            log_level: LevelFilter::Info,
        };
        assert_eq!(
            toml::from_str::<Settings>(&settings.to_toml().unwrap()).unwrap(),
            settings
        );
    }

    #[test]
    fn test_default_path() {
        if let Ok(path) = default_path() {
            assert!(path.ends_with("calisthenics-planner/config.toml"));
        }
    }
}
