use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use crate::models::MatcherConfig;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
    #[serde(default)]
    pub cors: CorsSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8000 }

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_max_team_size")]
    pub max_team_size: usize,
    #[serde(default = "default_candidates_per_anchor")]
    pub candidates_per_anchor: usize,
    #[serde(default = "default_min_token_len")]
    pub min_token_len: usize,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            max_team_size: default_max_team_size(),
            candidates_per_anchor: default_candidates_per_anchor(),
            min_token_len: default_min_token_len(),
        }
    }
}

fn default_max_team_size() -> usize { 4 }
fn default_candidates_per_anchor() -> usize { 3 }
fn default_min_token_len() -> usize { 2 }

impl From<&MatchingSettings> for MatcherConfig {
    fn from(settings: &MatchingSettings) -> Self {
        Self {
            max_team_size: settings.max_team_size,
            candidates_per_anchor: settings.candidates_per_anchor,
            min_token_len: settings.min_token_len,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "compact".to_string() }

/// Allowed CORS origins; empty means permissive
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CorsSettings {
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with EVENTLY_), plus PORT
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., EVENTLY__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("EVENTLY")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        apply_port_override(settings)?.try_deserialize()
    }

    pub fn matcher_config(&self) -> MatcherConfig {
        MatcherConfig::from(&self.matching)
    }
}

/// Honour the platform-provided PORT variable as a shortcut for server.port
fn apply_port_override(settings: Config) -> Result<Config, ConfigError> {
    match std::env::var("PORT").ok().and_then(|p| p.parse::<u16>().ok()) {
        Some(port) => Config::builder()
            .add_source(settings)
            .set_override("server.port", port)?
            .build(),
        None => Ok(settings),
    }
}
