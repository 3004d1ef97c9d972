//! Configuration types

use std::collections::HashMap;
use std::path::PathBuf;

use mvb_application::ports::registry::MediationHostConfig;
use mvb_domain::constants::{DEFAULT_MAX_MEDIATION_DEPTH, DEFAULT_MEDIATION_HOST};
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_LOG_LEVEL;

/// Root configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MediationConfig {
    /// Mediation binder settings
    pub mediation: MediationSettings,
    /// Logging settings
    pub logging: LoggingConfig,
}

/// Mediation binder settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MediationSettings {
    /// Nesting ceiling for AWAKE processing
    pub max_depth: usize,

    /// Registry name of the mediation host
    pub host: String,

    /// Host-specific options passed through to the host factory
    pub host_options: HashMap<String, String>,
}

impl MediationSettings {
    /// Registry lookup config for the selected host
    pub fn host_config(&self) -> MediationHostConfig {
        MediationHostConfig {
            name: self.host.clone(),
            extra: self.host_options.clone(),
        }
    }
}

impl Default for MediationSettings {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_MEDIATION_DEPTH,
            host: DEFAULT_MEDIATION_HOST.to_string(),
            host_options: HashMap::new(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Enable JSON output format
    pub json_format: bool,

    /// Log to file in addition to stdout
    pub file_output: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json_format: false,
            file_output: None,
        }
    }
}
