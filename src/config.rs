// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Runtime configuration.
//!
//! | Setting | Value |
//! |---------|-------|
//! | Store URL | `sqlite://items.db` |
//! | Listen address | `127.0.0.1:8000` |
//!
//! Both are fixed. The process reads no environment variables or flags for
//! them; only `RUST_LOG` tunes logging.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// SQLite database URL, relative to the working directory.
pub const DATABASE_URL: &str = "sqlite://items.db";

/// Listen address.
pub const ADDR: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 8000);

/// Service configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// SQLite connection URL.
    pub database_url: String,

    /// Socket address the HTTP listener binds.
    pub addr: SocketAddr
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: DATABASE_URL.to_string(),
            addr:         ADDR
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_store_and_listener() {
        let config = Config::default();
        assert_eq!(config.database_url, "sqlite://items.db");
        assert_eq!(config.addr.to_string(), "127.0.0.1:8000");
    }

    #[test]
    fn listener_is_loopback_only() {
        assert!(Config::default().addr.ip().is_loopback());
    }
}
