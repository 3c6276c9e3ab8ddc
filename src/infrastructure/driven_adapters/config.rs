//! Application Configuration
//!
//! Loads configuration from defaults, files and environment variables.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Environment variable that, when set, selects the backing store location
pub const DB_URI_ENV: &str = "DB_URI";

/// Store used when nothing else is configured: a local SQLite file
pub const DEFAULT_DATABASE_URL: &str = "sqlite://app.db";

/// Server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    pub json: bool,
}

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub log: LogConfig,
}

impl AppConfig {
    /// Load configuration from defaults, files and environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source cannot be parsed or a value has the
    /// wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "default".into());

        Self::builder()?
            .add_source(File::with_name("config/default").required(false))
            // Merge environment-specific config if it exists
            .add_source(File::with_name(&format!("config/{run_mode}")).required(false))
            // Override with environment variables (e.g., APP__SERVER__PORT)
            .add_source(Environment::with_prefix("APP").separator("__"))
            .set_override_option("database.url", std::env::var(DB_URI_ENV).ok())?
            .build()?
            .try_deserialize()
    }

    /// Configuration builder seeded with the built-in defaults
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a default cannot be set.
    pub fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 5555)?
            .set_default("database.url", DEFAULT_DATABASE_URL)?
            .set_default("database.max_connections", 5)?
            .set_default("database.min_connections", 1)?
            .set_default("log.json", false)
    }
}
