//! Configuration for the dashboard API server.
//!
//! Intentionally simple: defaults, overridable via a few environment
//! variables:
//!
//! - `DASH_BIND_ADDR` (default: "127.0.0.1")
//! - `DASH_PORT`      (default: "8000")

use std::env;
use std::str::FromStr;

use anyhow::{anyhow, Result};

/// Server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// IP address / interface to bind to (e.g. "0.0.0.0" or "127.0.0.1").
    pub bind_addr: String,

    /// TCP port to listen on.
    pub port: u16,
}

impl Config {
    /// Construct a `Config` from environment variables, falling back
    /// to reasonable defaults.
    pub fn from_env() -> Result<Self> {
        let bind_addr = env::var("DASH_BIND_ADDR").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = read_env_or_default("DASH_PORT", 8000u16)?;

        Ok(Config { bind_addr, port })
    }

    /// Convenience: `addr:port` socket string.
    pub fn socket_addr_string(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

fn read_env_or_default<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(val) => val
            .parse::<T>()
            .map_err(|e| anyhow!("invalid value for {key}: {e}")),
        Err(_) => Ok(default),
    }
}
