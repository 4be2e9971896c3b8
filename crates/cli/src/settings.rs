use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use allenatore_enhancer::EnhancerConfig;
use log::LevelFilter;
use serde::{Deserialize, Serialize};

#[derive(thiserror::Error, Debug)]
pub enum SettingsError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid settings in {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid log level \"{0}\"")]
    LogLevel(String),
}

/// Defaults for the command line, read from a TOML file.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub weeks: u32,
    pub model: String,
    pub sessions_per_week: u32,
    pub mode: String,
    pub data_dir: PathBuf,
    pub log_level: String,
    pub log_file: Option<PathBuf>,
    pub enhancer: EnhancerSettings,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct EnhancerSettings {
    pub enabled: bool,
    pub base_url: Option<String>,
    pub model: Option<String>,
    pub timeout_secs: u64,
}

impl Settings {
    /// Reads `path`, or returns the defaults if no file is given.
    pub async fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| SettingsError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        toml::from_str(&content).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn level(&self, verbose: bool) -> Result<LevelFilter, SettingsError> {
        if verbose {
            return Ok(LevelFilter::Debug);
        }
        self.log_level
            .parse()
            .map_err(|_| SettingsError::LogLevel(self.log_level.clone()))
    }

    /// Connection settings of the enhancer. Environment variables take
    /// precedence over the file.
    #[must_use]
    pub fn enhancer_config(&self) -> EnhancerConfig {
        let mut config = EnhancerConfig {
            timeout: Duration::from_secs(self.enhancer.timeout_secs),
            ..EnhancerConfig::default()
        };
        if let Some(base_url) = &self.enhancer.base_url {
            config.base_url.clone_from(base_url);
        }
        if let Some(model) = &self.enhancer.model {
            config.model.clone_from(model);
        }
        config.with_env()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            weeks: 8,
            model: "linear".to_string(),
            sessions_per_week: 3,
            mode: "catalog".to_string(),
            data_dir: PathBuf::from("data"),
            log_level: "warn".to_string(),
            log_file: None,
            enhancer: EnhancerSettings::default(),
        }
    }
}

impl Default for EnhancerSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            base_url: None,
            model: None,
            timeout_secs: 20,
        }
    }
}
