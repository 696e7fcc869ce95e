use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;

use crate::error::{ExposureError, Result};

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExposureConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub cli: CliConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address the HTTP shell listens on
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
    /// Upper bound on concurrently open assessment sessions
    #[serde(default = "default_max_sessions")]
    pub max_sessions: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter level; `RUST_LOG` takes precedence
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliConfig {
    /// Print the help text under each question in the wizard
    #[serde(default = "default_show_help_text")]
    pub show_help_text: bool,
    #[serde(default)]
    pub output: OutputFormat,
    /// Assessment server used by `assess` when set
    #[serde(default)]
    pub server_url: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn default_bind_addr() -> String {
    "127.0.0.1:8080".to_string()
}

const fn default_max_sessions() -> usize {
    1024
}

fn default_log_level() -> String {
    "info".to_string()
}

const fn default_show_help_text() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            max_sessions: default_max_sessions(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            show_help_text: default_show_help_text(),
            output: OutputFormat::default(),
            server_url: None,
        }
    }
}

impl ExposureConfig {
    /// Load and validate a TOML configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: ExposureConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.server.max_sessions == 0 {
            return Err(ExposureError::config_validation(
                "server.max_sessions must be greater than 0",
            ));
        }

        self.bind_addr()?;

        if !LOG_LEVELS.contains(&self.logging.level.to_ascii_lowercase().as_str()) {
            return Err(ExposureError::config_validation(format!(
                "logging.level must be one of {}, got '{}'",
                LOG_LEVELS.join(", "),
                self.logging.level
            )));
        }

        if let Some(url) = &self.cli.server_url {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ExposureError::config_validation(format!(
                    "cli.server_url must use http or https, got '{}'",
                    url
                )));
            }
        }

        Ok(())
    }

    pub fn bind_addr(&self) -> Result<SocketAddr> {
        self.server.bind_addr.parse().map_err(|_| {
            ExposureError::config_validation(format!(
                "server.bind_addr is not a socket address: '{}'",
                self.server.bind_addr
            ))
        })
    }
}
