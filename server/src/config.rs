//! Server configuration parsed from environment variables.
//!
//! Leptos settings (`LEPTOS_SITE_ADDR`, `LEPTOS_SITE_ROOT`, ...) are read by
//! `leptos::config::get_configuration`; this module only covers what the
//! hosting server adds on top.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `PORT` is set but is not a valid port number.
    #[error("invalid PORT: {0}")]
    InvalidPort(String),

    /// The Leptos configuration could not be loaded.
    #[error("leptos configuration: {0}")]
    Leptos(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// When set, listen on `0.0.0.0:<port>` instead of the Leptos site address.
    pub port: Option<u16>,
}

impl ServerConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: bind all interfaces on this port (container deployments)
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        Ok(Self { port })
    }

    /// Address to bind, given the address from the Leptos configuration.
    pub fn bind_addr(&self, site_addr: SocketAddr) -> SocketAddr {
        match self.port {
            Some(port) => SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), port),
            None => site_addr,
        }
    }
}

fn parse_port(raw: Option<&str>) -> Result<Option<u16>, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse::<u16>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidPort(value.to_owned())),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
