//! Configuration loading
//!
//! Settings are resolved in priority order:
//! 1. Command-line arguments (highest priority)
//! 2. Environment variable (`RECIPE_SEARCH_ENDPOINT`, parsed by the CLI
//!    layer into [`ConfigOverrides::endpoint`])
//! 3. TOML config file
//! 4. Compiled defaults (fallback)
//!
//! A missing or unreadable config file at the default location falls back
//! to defaults with a warning. A file named explicitly on the command line
//! must exist and parse.
//!
//! Loading runs before the tracing subscriber exists, so nothing here logs.
//! Warnings are collected in [`Config::warnings`] for the caller to report.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::loader::search_url;
use crate::{Error, Result};

/// MealDB search endpoint (without the `s` parameter)
pub const DEFAULT_ENDPOINT: &str = "https://www.themealdb.com/api/json/v1/1/search.php";

/// Environment variable overriding the endpoint (below the CLI flag)
pub const ENDPOINT_ENV: &str = "RECIPE_SEARCH_ENDPOINT";

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Directory name under the platform config dir
const CONFIG_DIR_NAME: &str = "recipe-search";

/// Configuration file contents
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    /// Search endpoint base URL
    #[serde(default)]
    pub endpoint: Option<String>,

    /// HTTP request timeout in seconds
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// Logging configuration (optional)
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log file path (optional)
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl TomlConfig {
    /// Read and parse a TOML config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read config file {}: {}", path.display(), e))
        })?;

        toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse TOML {}: {}", path.display(), e)))
    }
}

/// Default config file location (`<config_dir>/recipe-search/config.toml`)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(CONFIG_DIR_NAME).join("config.toml"))
}

/// Command-line configuration overrides
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub endpoint: Option<String>,
    pub timeout_secs: Option<u64>,
    pub config_path: Option<PathBuf>,
    pub log_level: Option<String>,
    pub log_file: Option<PathBuf>,
}

/// Resolved configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Search endpoint base URL
    pub endpoint: String,

    /// HTTP request timeout
    pub timeout: Duration,

    pub logging: LoggingConfig,

    /// TOML file the settings were read from, if any
    pub source: Option<PathBuf>,

    /// Problems that fell back to defaults; log once tracing is up
    pub warnings: Vec<String>,
}

impl Config {
    /// Load the TOML file (explicit or default location) and resolve
    pub fn load(overrides: ConfigOverrides) -> Result<Self> {
        Self::load_with_default(overrides, default_config_path().as_deref())
    }

    /// [`Config::load`] with the default file location supplied by the caller
    ///
    /// `default_path` is only consulted when no explicit path is given;
    /// `None` means the platform has no config directory.
    pub fn load_with_default(
        overrides: ConfigOverrides,
        default_path: Option<&Path>,
    ) -> Result<Self> {
        let mut warnings = Vec::new();

        let (toml_config, source) = match &overrides.config_path {
            Some(path) => (TomlConfig::from_file(path)?, Some(path.clone())),
            None => load_default_file(default_path, &mut warnings),
        };

        let mut config = Self::resolve(overrides, toml_config);
        config.source = source;
        config.warnings = warnings;
        config.validate()?;
        Ok(config)
    }

    /// Merge overrides and file values over the defaults
    pub fn resolve(overrides: ConfigOverrides, toml_config: TomlConfig) -> Self {
        let endpoint = overrides
            .endpoint
            .or(toml_config.endpoint)
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        let timeout_secs = overrides
            .timeout_secs
            .or(toml_config.timeout_secs)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        let logging = LoggingConfig {
            level: overrides.log_level.unwrap_or(toml_config.logging.level),
            file: overrides.log_file.or(toml_config.logging.file),
        };

        Self {
            endpoint,
            timeout: Duration::from_secs(timeout_secs),
            logging,
            source: None,
            warnings: Vec::new(),
        }
    }

    /// Full search URL for `term` (empty term requests every recipe)
    pub fn search_url(&self, term: &str) -> Result<String> {
        search_url(&self.endpoint, term)
    }

    fn validate(&self) -> Result<()> {
        if self.timeout.is_zero() {
            return Err(Error::Config("timeout_secs must be greater than zero".to_string()));
        }
        self.search_url("").map(|_| ())
    }
}

fn load_default_file(
    path: Option<&Path>,
    warnings: &mut Vec<String>,
) -> (TomlConfig, Option<PathBuf>) {
    let Some(path) = path else {
        warnings.push("Could not determine config directory, using defaults".to_string());
        return (TomlConfig::default(), None);
    };

    if !path.exists() {
        warnings.push(format!("No config file at {}, using defaults", path.display()));
        return (TomlConfig::default(), None);
    }

    match TomlConfig::from_file(path) {
        Ok(config) => (config, Some(path.to_path_buf())),
        Err(e) => {
            warnings.push(format!("{e}; using defaults"));
            (TomlConfig::default(), None)
        }
    }
}
