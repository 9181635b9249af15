use std::env;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use self::auth::AuthConfig;
use self::database::DatabaseConfig;
use self::mail::MailConfig;
use self::posts::PostsConfig;
use self::server::ServerConfig;

pub mod auth;
pub mod database;
pub mod mail;
pub mod posts;
pub mod server;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub posts: PostsConfig,
    pub mail: MailConfig,
    pub auth: AuthConfig,
}

impl Config {
    /// Build from environment variables, falling back to defaults
    pub fn new() -> Self {
        Config {
            server: ServerConfig::new(),
            database: DatabaseConfig::new(),
            posts: PostsConfig::new(),
            mail: MailConfig::new(),
            auth: AuthConfig::new(),
        }
    }

    /// Load a JSON config file. Missing fields take their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let config = serde_json::from_str(&data)?;
        Ok(config)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parse `key` from the environment, keeping `default` when unset or invalid
pub(crate) fn env_or<T: FromStr>(key: &str, default: T) -> T {
    parse_or(env::var(key).ok(), default)
}

fn parse_or<T: FromStr>(raw: Option<String>, default: T) -> T {
    raw.and_then(|v| v.trim().parse().ok()).unwrap_or(default)
}

pub(crate) fn env_string(key: &str, default: String) -> String {
    env::var(key).unwrap_or(default)
}
