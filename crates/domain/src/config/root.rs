use super::{AuditConfig, CacheConfig, ConfigError, LoggingConfig, ServerConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable overriding the HTTP port.
pub const PORT_ENV_VAR: &str = "LIGHTHOUSE_API_PORT";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub cache: CacheConfig,

    #[serde(default)]
    pub audit: AuditConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Values given on the command line; they win over file and environment.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub port: Option<u16>,
    pub bind_address: Option<String>,
    pub log_level: Option<String>,
}

impl Config {
    /// Loads `config_path` (or defaults when absent), then applies
    /// `LIGHTHOUSE_API_PORT`, then the CLI overrides.
    pub fn load(config_path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match config_path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        config.apply_env_port(std::env::var(PORT_ENV_VAR).ok().as_deref())?;
        config.apply_cli_overrides(cli_overrides);

        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn apply_env_port(&mut self, value: Option<&str>) -> Result<(), ConfigError> {
        if let Some(raw) = value.filter(|v| !v.trim().is_empty()) {
            self.server.port = raw.trim().parse().map_err(|_| ConfigError::InvalidEnv {
                name: PORT_ENV_VAR.to_string(),
                value: raw.to_string(),
            })?;
        }
        Ok(())
    }

    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cache.capacity == 0 {
            return Err(ConfigError::Validation(
                "cache.capacity must be at least 1".to_string(),
            ));
        }
        if self.audit.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "audit.timeout_secs must be greater than 0".to_string(),
            ));
        }
        if self.audit.launch_timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "audit.launch_timeout_secs must be greater than 0".to_string(),
            ));
        }
        if self.audit.chrome_path.trim().is_empty() || self.audit.lighthouse_path.trim().is_empty() {
            return Err(ConfigError::Validation(
                "audit.chrome_path and audit.lighthouse_path cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}
