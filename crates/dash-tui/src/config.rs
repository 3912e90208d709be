// crates/dash-tui/src/config.rs

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Configuration for the dashboard terminal
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// API base URL, up to and including the `/api` prefix.
    pub server_url: String,

    /// Route to open when no `--route` flag is given.
    pub default_route: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_url: "http://127.0.0.1:8000/api".to_string(),
            default_route: "/".to_string(),
        }
    }
}

impl ClientConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("invalid config file {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: ClientConfig = toml::from_str("server_url = \"http://10.0.0.5:8000/api\"").unwrap();
        assert_eq!(config.server_url, "http://10.0.0.5:8000/api");
        assert_eq!(config.default_route, "/");
    }
}
