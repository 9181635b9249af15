use serde::{Deserialize, Serialize};

use crate::{env_or, env_string};

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_static_dir() -> String {
    "static".to_string()
}

fn default_pages_dir() -> String {
    "tmpl".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Files served as-is for any unmatched route
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
    /// Directory holding the fixed HTML pages (about, contact, ...)
    #[serde(default = "default_pages_dir")]
    pub pages_dir: String,
    /// Account thumbprint appended to ACME http-01 challenge responses
    #[serde(default)]
    pub cert_account: String,
}

impl ServerConfig {
    pub fn new() -> Self {
        Self {
            host: env_string("DEDGAR_HOST", default_host()),
            port: env_or("DEDGAR_PORT", default_port()),
            static_dir: env_string("DEDGAR_STATIC_DIR", default_static_dir()),
            pages_dir: env_string("DEDGAR_PAGES_DIR", default_pages_dir()),
            cert_account: env_string("CERT_ACC", String::new()),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
            pages_dir: default_pages_dir(),
            cert_account: String::new(),
        }
    }
}
