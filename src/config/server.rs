//! # Server Configuration
//!
//! HTTP listener settings loaded from environment variables.

use std::net::{IpAddr, SocketAddr};

use tracing::warn;

/// HTTP server configuration
///
/// All settings have sensible defaults and can be overridden via environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Listen port (`PORT`)
    pub port: u16,
    /// Listen address (`BIND_ADDRESS`)
    pub bind_address: IpAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        use crate::constants::{DEFAULT_BIND_ADDRESS, DEFAULT_PORT};
        Self {
            port: DEFAULT_PORT,
            bind_address: DEFAULT_BIND_ADDRESS
                .parse()
                .unwrap_or(IpAddr::from([0, 0, 0, 0])),
        }
    }
}

impl ServerConfig {
    /// Load configuration through `lookup` with defaults
    pub fn from_lookup<F>(lookup: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            port: var_or_default(lookup, "PORT", defaults.port),
            bind_address: var_or_default(lookup, "BIND_ADDRESS", defaults.bind_address),
        }
    }

    /// Socket address the listener binds to
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_address, self.port)
    }
}

/// Read a variable through `lookup` or return the default value
///
/// Unparsable values fall back to the default with a warning.
fn var_or_default<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr + std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("Ignoring invalid {}={:?}, using default {}", key, raw, default);
            default
        }),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_server_config_defaults() {
        let config = ServerConfig::from_lookup(&lookup_from(&[]));
        assert_eq!(config.port, 8080);
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8080");
    }

    #[test]
    fn test_server_config_overrides() {
        let config =
            ServerConfig::from_lookup(&lookup_from(&[("PORT", "9090"), ("BIND_ADDRESS", "127.0.0.1")]));
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:9090");
    }

    #[test]
    fn test_invalid_port_falls_back_to_default() {
        let config = ServerConfig::from_lookup(&lookup_from(&[("PORT", "not-a-port")]));
        assert_eq!(config.port, 8080);
    }
}
