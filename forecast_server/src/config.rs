//! Server settings.
//!
//! The service binds to every interface on a fixed port unless a listening
//! socket is handed over by `systemfd` (see [`crate::bind_listener`]). There
//! are no config files; logging verbosity is read from the environment (see
//! [`crate::telemetry`]).

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Default listen port
pub const DEFAULT_PORT: u16 = 8000;

/// Listen address for the HTTP server
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
        }
    }
}
