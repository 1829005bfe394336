//! Server configuration parsed from the cargo-leptos environment.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::SocketAddr;

use leptos::config::{LeptosOptions, get_configuration};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("invalid PORT {value:?}: {reason}")]
    InvalidPort { value: String, reason: String },
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub leptos_options: LeptosOptions,
    pub addr: SocketAddr,
}

impl ServerConfig {
    /// Build server config from environment variables.
    ///
    /// Required (set by `cargo leptos`):
    /// - `LEPTOS_OUTPUT_NAME`
    ///
    /// Optional:
    /// - `LEPTOS_SITE_ADDR`: listen address, default `127.0.0.1:3000`
    /// - `PORT`: overrides the port of the listen address
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Leptos` when the Leptos environment is missing or
    /// malformed, and `ConfigError::InvalidPort` when `PORT` is set but is not
    /// a port in 1-65535.
    pub fn from_env() -> Result<Self, ConfigError> {
        let conf = get_configuration(None).map_err(|e| ConfigError::Leptos(e.to_string()))?;
        let leptos_options = conf.leptos_options;
        let addr = resolve_addr(leptos_options.site_addr, std::env::var("PORT").ok().as_deref())?;
        Ok(Self { leptos_options, addr })
    }
}

/// Apply an optional `PORT` override to the configured site address.
///
/// # Errors
///
/// Returns `ConfigError::InvalidPort` when `port` does not parse as a `u16`
/// or is `0`.
pub fn resolve_addr(site_addr: SocketAddr, port: Option<&str>) -> Result<SocketAddr, ConfigError> {
    let Some(raw) = port else {
        return Ok(site_addr);
    };
    let invalid = |reason: String| ConfigError::InvalidPort { value: raw.to_owned(), reason };
    let port = raw.trim().parse::<u16>().map_err(|e| invalid(e.to_string()))?;
    if port == 0 {
        return Err(invalid("port 0 is reserved".to_owned()));
    }
    Ok(SocketAddr::new(site_addr.ip(), port))
}
