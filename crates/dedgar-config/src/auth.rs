use serde::{Deserialize, Serialize};

use crate::{env_or, env_string};

fn default_cookie_name() -> String {
    "dedgar_session".to_string()
}

fn default_session_ttl_secs() -> u64 {
    86_400
}

fn default_purge_interval_secs() -> u64 {
    300
}

fn default_min_password_len() -> usize {
    8
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    #[serde(default = "default_session_ttl_secs")]
    pub session_ttl_secs: u64,
    /// How often expired sessions are swept from memory
    #[serde(default = "default_purge_interval_secs")]
    pub purge_interval_secs: u64,
    #[serde(default = "default_min_password_len")]
    pub min_password_len: usize,
}

impl AuthConfig {
    pub fn new() -> Self {
        Self {
            cookie_name: env_string("DEDGAR_COOKIE_NAME", default_cookie_name()),
            session_ttl_secs: env_or("DEDGAR_SESSION_TTL_SECS", default_session_ttl_secs()),
            purge_interval_secs: env_or("DEDGAR_SESSION_PURGE_SECS", default_purge_interval_secs()),
            min_password_len: default_min_password_len(),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            cookie_name: default_cookie_name(),
            session_ttl_secs: default_session_ttl_secs(),
            purge_interval_secs: default_purge_interval_secs(),
            min_password_len: default_min_password_len(),
        }
    }
}
