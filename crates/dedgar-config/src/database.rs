use serde::{Deserialize, Serialize};

use crate::{env_or, env_string};

fn default_path() -> String {
    "dedgar.db".to_string()
}

fn default_busy_timeout_ms() -> u64 {
    5000
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// SQLite file holding the kanji table and user accounts
    #[serde(default = "default_path")]
    pub path: String,
    #[serde(default = "default_busy_timeout_ms")]
    pub busy_timeout_ms: u64,
}

impl DatabaseConfig {
    pub fn new() -> Self {
        Self {
            path: env_string("DEDGAR_DATABASE", default_path()),
            busy_timeout_ms: env_or("DEDGAR_DB_BUSY_TIMEOUT_MS", default_busy_timeout_ms()),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            busy_timeout_ms: default_busy_timeout_ms(),
        }
    }
}
