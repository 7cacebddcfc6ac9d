use std::{fs, path::Path};

use anyhow::{Context, Result};
use calisthenics_domain::{BaselineTests, ProgramSettings, UserProfile};
use serde::{Deserialize, Serialize};

/// Everything needed to generate a plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRequest {
    pub profile: UserProfile,
    pub baseline: BaselineTests,
    pub settings: ProgramSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestFormat {
    Toml,
    Json,
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum RequestError {
    #[error("unsupported request format \"{0}\" (expected .toml or .json)")]
    UnsupportedFormat(String),
}

impl TryFrom<&Path> for RequestFormat {
    type Error = RequestError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("toml") => Ok(RequestFormat::Toml),
            Some("json") => Ok(RequestFormat::Json),
            _ => Err(RequestError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

impl PlanRequest {
    pub fn load(path: &Path) -> Result<Self> {
        let format = RequestFormat::try_from(path)?;
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::parse(&content, format)
            .with_context(|| format!("invalid request in {}", path.display()))
    }

    pub fn parse(content: &str, format: RequestFormat) -> Result<Self> {
        Ok(match format {
            RequestFormat::Toml => toml::from_str(content)?,
            RequestFormat::Json => serde_json::from_str(content)?,
        })
    }
}
