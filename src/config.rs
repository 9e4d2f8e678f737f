use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

/// How the command line tool renders an extracted recipe
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Title, ingredient lines and numbered steps
    #[default]
    Text,
    /// Pretty printed JSON
    Json,
}

/// Settings for fetching and rendering recipe pages
#[derive(Debug, Deserialize, Clone)]
pub struct ScraperConfig {
    /// User agent sent with every page request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    #[serde(default)]
    pub output: OutputFormat,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            timeout: default_timeout(),
            output: OutputFormat::default(),
        }
    }
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (compatible; WprmParser/0.1)".to_string()
}

fn default_timeout() -> u64 {
    30
}

impl ScraperConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with WPRM__ prefix
    /// 2. wprm.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: WPRM__TIMEOUT=10
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

/// Load configuration from `wprm.toml` (optional) and `WPRM__*` variables
pub fn load_config() -> Result<ScraperConfig, ConfigError> {
    Config::builder()
        .add_source(File::with_name("wprm").required(false))
        .add_source(
            Environment::with_prefix("WPRM")
                .separator("__")
                .try_parsing(true),
        )
        .build()?
        .try_deserialize()
}
