//! Server configuration.
//!
//! An explicit struct handed to the bootstrap, never mutated into process
//! globals. Only the listen port is environment-driven.

use std::net::SocketAddr;
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 8080;

/// Bounds how long reading a request's headers and body may take.
pub const READ_TIMEOUT: Duration = Duration::from_secs(10);

/// Bounds how long writing the response may take.
pub const WRITE_TIMEOUT: Duration = Duration::from_secs(1);

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub read_timeout: Duration,
    pub write_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            read_timeout: READ_TIMEOUT,
            write_timeout: WRITE_TIMEOUT,
        }
    }
}

impl ServerConfig {
    /// Read the listen port from `PORT`, falling back to the default on a
    /// missing or unparseable value. Timeouts are fixed.
    pub fn from_env() -> Self {
        let port = match std::env::var("PORT") {
            Ok(raw) => match raw.parse() {
                Ok(port) => port,
                Err(_) => {
                    tracing::warn!(%raw, "PORT is not a valid port number; using default");
                    DEFAULT_PORT
                }
            },
            Err(_) => DEFAULT_PORT,
        };

        Self {
            port,
            ..Self::default()
        }
    }

    /// Listen address: all interfaces on the configured port.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }

    /// Per-request deadline covering both the read and write budgets.
    pub fn request_deadline(&self) -> Duration {
        self.read_timeout + self.write_timeout
    }
}
