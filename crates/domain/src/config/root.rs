use serde::{Deserialize, Serialize};

use super::controller::ControllerConfig;
use super::database::DatabaseConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::server::ServerConfig;

const LOCAL_CONFIG_PATH: &str = "killswitch.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/killswitch/config.toml";
const MAX_RECENT_WINDOW_DAYS: u32 = 36_500;

/// Main configuration structure for the kill switch dashboard
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Web server configuration (port, bind address, dashboard key)
    #[serde(default)]
    pub server: ServerConfig,

    /// UniFi controller connection
    #[serde(default)]
    pub controller: ControllerConfig,

    /// Database configuration
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. killswitch.toml in current directory
    /// 3. /etc/killswitch/config.toml
    /// 4. Default configuration
    ///
    /// `UNIFI_*` environment variables override the file, CLI flags override both.
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path.map(str::to_string).or_else(Self::get_config_path) {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Load configuration from a specific file
    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply the controller environment variables the dashboard has always honoured.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("UNIFI_CONTROLLER_URL").filter(|v| !v.is_empty()) {
            self.controller.url = Some(url);
        }
        if let Some(key) = lookup("UNIFI_API_KEY").filter(|v| !v.is_empty()) {
            self.controller.api_key = Some(key);
        }
        if let Some(site) = lookup("UNIFI_SITE").filter(|v| !v.is_empty()) {
            self.controller.site = site;
        }
    }

    /// Apply command-line overrides to configuration
    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.web_port {
            self.server.web_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(db) = overrides.database_path {
            self.database.path = db;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.web_port == 0 {
            return Err(ConfigError::Validation("Web port cannot be 0".to_string()));
        }

        if self.database.max_connections == 0 {
            return Err(ConfigError::Validation(
                "Database pool needs at least one connection".to_string(),
            ));
        }

        if let Some(url) = self.controller.base_url() {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConfigError::Validation(format!(
                    "Controller URL '{}' must start with http:// or https://",
                    url
                )));
            }
        }

        if self.controller.request_timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "Controller request timeout must be at least 1 second".to_string(),
            ));
        }

        if !(1..=MAX_RECENT_WINDOW_DAYS).contains(&self.controller.recent_window_days) {
            return Err(ConfigError::Validation(format!(
                "Recent window must be between 1 and {} days",
                MAX_RECENT_WINDOW_DAYS
            )));
        }

        if self.controller.site.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Controller site cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        [LOCAL_CONFIG_PATH, SYSTEM_CONFIG_PATH]
            .into_iter()
            .find(|p| std::path::Path::new(p).exists())
            .map(str::to_string)
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub web_port: Option<u16>,
    pub bind_address: Option<String>,
    pub database_path: Option<String>,
    pub log_level: Option<String>,
}
