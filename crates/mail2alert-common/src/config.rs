//! Configuration for Mail2Alert

use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Interest filter deciding whether a mail is processed at all
    #[serde(rename = "messages-we-want", default)]
    pub messages_we_want: WantedConfig,

    /// Alerting rules, evaluated in configuration order
    #[serde(default)]
    pub rules: Vec<RuleConfig>,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Interest filter configuration
///
/// A configured `to` is checked first; `from` only applies when `to` is
/// absent. With neither set, no mail is wanted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WantedConfig {
    /// Process mail addressed to this recipient
    pub to: Option<String>,

    /// Process mail sent from exactly this address
    pub from: Option<String>,
}

/// A single configured alerting rule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Condition the message must satisfy
    pub when: WhenConfig,

    /// Actions taken when the condition matches
    pub then: ThenConfig,
}

/// Predicate reference: provider group, predicate name and arguments
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WhenConfig {
    /// Predicate provider group
    #[serde(default = "default_provider")]
    pub provider: String,

    /// Predicate name within the provider
    pub predicate: String,

    /// Arguments handed to the predicate constructor
    #[serde(default)]
    pub args: Vec<String>,
}

fn default_provider() -> String {
    "mail".to_string()
}

/// Actions for a matched rule
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThenConfig {
    /// Recipients to alert
    #[serde(default)]
    pub mailto: Vec<String>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: "json" or "text"
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

impl Config {
    /// Load configuration from file
    pub fn from_file(path: &std::path::Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| crate::Error::Config(format!("Failed to read config file: {}", e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| crate::Error::Config(format!("Failed to parse config: {}", e)))?;

        Ok(config)
    }

    /// Load configuration from default locations
    pub fn load() -> crate::Result<Self> {
        let paths = [
            std::path::PathBuf::from("./mail2alert.toml"),
            std::path::PathBuf::from("./config.toml"),
            std::path::PathBuf::from("/etc/mail2alert/config.toml"),
        ];

        for path in paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Err(crate::Error::Config(
            "No configuration file found".to_string(),
        ))
    }
}
