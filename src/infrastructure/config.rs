use crate::domain::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_ENV_VAR: &str = "PROJDECK_CONFIG";
pub const LOG_LEVEL_ENV_VAR: &str = "PROJDECK_LOG";
pub const DEFAULT_CONFIG_FILE: &str = "projdeck.json";

/// Runtime settings. Every field has a default, so a config file may set
/// only the keys it cares about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub log_level: String,
    pub log_dir: String,
    pub export_path: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_dir: "logs".to_string(),
            export_path: "projects.csv".to_string(),
        }
    }
}

impl AppConfig {
    /// Reads a JSON config file.
    pub fn load_from_file(path: &Path) -> DomainResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| DomainError::Config(format!("cannot read {}: {}", path.display(), e)))?;
        serde_json::from_str(&content)
            .map_err(|e| DomainError::Config(format!("invalid config {}: {}", path.display(), e)))
    }

    /// Resolves configuration from the environment.
    ///
    /// Uses the file named by `PROJDECK_CONFIG` if set, else `projdeck.json`
    /// when it exists, else defaults. `PROJDECK_LOG` overrides the level.
    pub fn load() -> DomainResult<Self> {
        let explicit = std::env::var(CONFIG_ENV_VAR).ok();
        let level_override = std::env::var(LOG_LEVEL_ENV_VAR).ok();
        Self::resolve(explicit.as_deref(), Path::new(DEFAULT_CONFIG_FILE), level_override.as_deref())
    }

    fn resolve(explicit: Option<&str>, fallback: &Path, level_override: Option<&str>) -> DomainResult<Self> {
        let mut config = match explicit {
            Some(path) => Self::load_from_file(Path::new(path))?,
            None if fallback.exists() => Self::load_from_file(fallback)?,
            None => Self::default(),
        };

        if let Some(level) = level_override.filter(|l| !l.trim().is_empty()) {
            config.log_level = level.trim().to_string();
        }

        Ok(config)
    }
}
