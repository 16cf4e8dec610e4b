//! Configuration Module
//!
//! Handles loading the cache and demo server configuration from environment
//! variables. Configuration is read once at startup and not changed afterwards.

use std::env;
use std::time::Duration;

use crate::cache::Ttl;

/// Default TTL applied when an interceptor is built without one (5 minutes)
pub const DEFAULT_TTL_SECS: u64 = 300;

/// Default interval between expired-entry sweeps (10 minutes)
pub const DEFAULT_CLEANUP_INTERVAL_SECS: u64 = 600;

/// Default HTTP port of the demo server
pub const DEFAULT_SERVER_PORT: u16 = 3000;

/// Cache and server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// TTL used by interceptors built without an explicit TTL
    pub default_ttl: Ttl,
    /// Interval between background sweeps, zero disables sweeping
    pub cleanup_interval: Duration,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `DEFAULT_TTL` - Default TTL in seconds, `never` or `-1` for no expiration (default: 300)
    /// - `CLEANUP_INTERVAL` - Sweep frequency in seconds, `0` disables it (default: 600)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    pub fn from_env() -> Self {
        Self {
            default_ttl: env::var("DEFAULT_TTL")
                .ok()
                .and_then(|v| parse_ttl(&v))
                .unwrap_or(Ttl::from_secs(DEFAULT_TTL_SECS)),
            cleanup_interval: Duration::from_secs(
                env::var("CLEANUP_INTERVAL")
                    .ok()
                    .and_then(|v| v.trim().parse().ok())
                    .unwrap_or(DEFAULT_CLEANUP_INTERVAL_SECS),
            ),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(DEFAULT_SERVER_PORT),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_ttl: Ttl::from_secs(DEFAULT_TTL_SECS),
            cleanup_interval: Duration::from_secs(DEFAULT_CLEANUP_INTERVAL_SECS),
            server_port: DEFAULT_SERVER_PORT,
        }
    }
}

/// Parses a TTL given in seconds, accepting `never` and `-1` as no expiration.
fn parse_ttl(raw: &str) -> Option<Ttl> {
    let raw = raw.trim();
    if raw.eq_ignore_ascii_case("never") || raw == "-1" {
        return Some(Ttl::Never);
    }
    raw.parse().ok().map(Ttl::from_secs)
}
