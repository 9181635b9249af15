use serde::{Deserialize, Serialize};

use crate::{env_or, env_string};

fn default_enabled() -> bool {
    true
}

fn default_api_url() -> String {
    "http://localhost:8025/api/send".to_string()
}

fn default_address() -> String {
    "contact@shinobu.ninja".to_string()
}

fn default_subject() -> String {
    "dedgar contact form submission".to_string()
}

fn default_allowed_link_host() -> String {
    "dedgar.com/".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MailConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Mail API endpoint accepting a JSON message
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_address")]
    pub sender: String,
    #[serde(default = "default_address")]
    pub recipient: String,
    #[serde(default = "default_subject")]
    pub subject: String,
    /// Links are only allowed in messages when they point at this host
    #[serde(default = "default_allowed_link_host")]
    pub allowed_link_host: String,
}

impl MailConfig {
    pub fn new() -> Self {
        Self {
            enabled: env_or("MAIL_ENABLED", default_enabled()),
            api_url: env_string("MAIL_API_URL", default_api_url()),
            api_key: env_string("MAIL_API_KEY", String::new()),
            sender: env_string("MAIL_SENDER", default_address()),
            recipient: env_string("MAIL_RECIPIENT", default_address()),
            subject: default_subject(),
            allowed_link_host: default_allowed_link_host(),
        }
    }
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            api_url: default_api_url(),
            api_key: String::new(),
            sender: default_address(),
            recipient: default_address(),
            subject: default_subject(),
            allowed_link_host: default_allowed_link_host(),
        }
    }
}
