use std::net::{Ipv4Addr, SocketAddr};

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 8888;
pub const CALLBACK_PATH: &str = "/callback";

/// Where the receiver listens. `Default` is the only configuration the binary uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiverConfig {
    /// Host name announced in logs and redirect URIs
    pub host: String,

    /// TCP port, `0` lets the OS pick one
    pub port: u16,

    /// Route the provider redirects the browser to
    pub path: String,
}

impl Default for ReceiverConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            path: CALLBACK_PATH.to_string(),
        }
    }
}

impl ReceiverConfig {
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Loopback only, the callback is never meant to be reachable from outside.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::LOCALHOST, self.port))
    }

    /// The redirect URI an OAuth client registers for this receiver.
    pub fn redirect_uri(&self) -> String {
        format!("http://{}:{}{}", self.host, self.port, self.path)
    }
}
