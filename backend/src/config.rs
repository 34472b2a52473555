//! Dashboard configuration file support.
//!
//! Settings are read from a `dashboard.toml` file when one is found and then
//! overridden by environment variables:
//!
//! - `DASHBOARD_CONFIG`: explicit path of the configuration file
//! - `HOST`: server host (default: 0.0.0.0)
//! - `PORT`: server port (default: 8050)
//! - `LAUNCH_DATA_PATH`: launch CSV (default: data/spacex_launch_dash.csv)

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for {name}: {message}")]
    InvalidValue { name: String, message: String },
}

/// Complete dashboard configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub data: DataSettings,
    #[serde(default)]
    pub dashboard: DashboardSettings,
}

/// HTTP bind settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Location of the launch records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataSettings {
    #[serde(default = "default_data_path")]
    pub path: PathBuf,
}

/// Page title and range slider bounds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSettings {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_slider_min")]
    pub slider_min: i64,
    #[serde(default = "default_slider_max")]
    pub slider_max: i64,
    #[serde(default = "default_slider_step")]
    pub slider_step: i64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8050
}

fn default_data_path() -> PathBuf {
    PathBuf::from("data/spacex_launch_dash.csv")
}

fn default_title() -> String {
    "SpaceX Launch Records Dashboard".to_string()
}

fn default_slider_min() -> i64 {
    0
}

fn default_slider_max() -> i64 {
    10000
}

fn default_slider_step() -> i64 {
    1000
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            path: default_data_path(),
        }
    }
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            title: default_title(),
            slider_min: default_slider_min(),
            slider_max: default_slider_max(),
            slider_step: default_slider_step(),
        }
    }
}

impl DashboardConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|source| ConfigError::Read {
            path: path.as_ref().to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: DashboardConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Search for `dashboard.toml` in:
    /// 1. Current directory
    /// 2. `backend/` directory
    /// 3. Parent directory
    ///
    /// Returns `Ok(None)` when no file exists in any of them.
    pub fn from_default_location() -> Result<Option<Self>, ConfigError> {
        let search_paths = [
            PathBuf::from("dashboard.toml"),
            PathBuf::from("backend/dashboard.toml"),
            PathBuf::from("../dashboard.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path).map(Some);
            }
        }
        Ok(None)
    }

    /// Resolve the effective configuration: file (explicit or searched), then
    /// environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match env::var("DASHBOARD_CONFIG") {
            Ok(path) => Self::from_file(path)?,
            Err(_) => Self::from_default_location()?.unwrap_or_default(),
        };
        config.apply_overrides(|name| env::var(name).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `HOST`, `PORT` and `LAUNCH_DATA_PATH` overrides from `lookup`.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("PORT") {
            self.server.port = port.parse().map_err(|_| ConfigError::InvalidValue {
                name: "PORT".to_string(),
                message: format!("'{}' is not a valid port number", port),
            })?;
        }
        if let Some(path) = lookup("LAUNCH_DATA_PATH") {
            self.data.path = PathBuf::from(path);
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let dashboard = &self.dashboard;
        if dashboard.slider_step <= 0 {
            return Err(ConfigError::InvalidValue {
                name: "dashboard.slider_step".to_string(),
                message: "must be positive".to_string(),
            });
        }
        if dashboard.slider_min >= dashboard.slider_max {
            return Err(ConfigError::InvalidValue {
                name: "dashboard.slider_min".to_string(),
                message: format!(
                    "must be below slider_max ({} >= {})",
                    dashboard.slider_min, dashboard.slider_max
                ),
            });
        }
        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
