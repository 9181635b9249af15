use serde::{Deserialize, Serialize};

use crate::env_string;

fn default_dir() -> String {
    "tmpl/posts".to_string()
}

fn default_extension() -> String {
    ".html".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PostsConfig {
    #[serde(default = "default_dir")]
    pub dir: String,
    #[serde(default = "default_extension")]
    pub extension: String,
}

impl PostsConfig {
    pub fn new() -> Self {
        Self {
            dir: env_string("DEDGAR_POSTS_DIR", default_dir()),
            extension: default_extension(),
        }
    }
}

impl Default for PostsConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            extension: default_extension(),
        }
    }
}
