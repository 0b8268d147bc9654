//! Service configuration loaded from the environment.
//!
//! | Env | Default | Description |
//! |-----|---------|-------------|
//! | PORT | 3001 | Gateway listen port. |
//! | TASKFORGE_MODEL | openai/gpt-4o-mini | Completion model slug passed to the bridge. |
//! | OPENROUTER_API_KEY | — | Completion API key; without it extraction calls fail with the uniform envelope. |

use serde::{Deserialize, Serialize};

fn default_port() -> u16 {
    3001
}

/// Environment-driven settings. Unset or invalid values fall back to defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoreConfig {
    /// PORT: gateway listen port.
    #[serde(default = "default_port")]
    pub port: u16,
    /// TASKFORGE_MODEL: override for the completion model slug.
    #[serde(default)]
    pub model: Option<String>,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            model: None,
        }
    }
}

impl CoreConfig {
    /// Load settings from environment variables.
    pub fn from_env() -> Self {
        Self {
            port: env_u16("PORT", default_port()),
            model: env_opt_string("TASKFORGE_MODEL"),
        }
    }
}

fn env_u16(name: &str, default: u16) -> u16 {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

fn env_opt_string(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
