use std::net::SocketAddr;
use std::str::FromStr;
use strum_macros::{Display, EnumString};
use tracing::warn;

/// How the server talks to its client
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum TransportKind {
    /// Newline-delimited JSON-RPC on stdin/stdout
    Stdio,
    Http,
}

/// Server configuration, read from the environment
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub transport: TransportKind,
    pub http_addr: SocketAddr,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; unparsable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let transport = match lookup("GAMEHELPER_TRANSPORT") {
            Some(raw) => TransportKind::from_str(raw.trim()).unwrap_or_else(|_| {
                warn!(value = %raw, "Unknown GAMEHELPER_TRANSPORT, using stdio");
                TransportKind::Stdio
            }),
            None => TransportKind::Stdio,
        };

        let http_addr = lookup("GAMEHELPER_HTTP_ADDR")
            .and_then(|raw| match raw.trim().parse() {
                Ok(addr) => Some(addr),
                Err(_) => {
                    warn!(value = %raw, "Invalid GAMEHELPER_HTTP_ADDR, using default");
                    None
                }
            })
            .unwrap_or_else(default_http_addr);

        Self {
            transport,
            http_addr,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            transport: TransportKind::Stdio,
            http_addr: default_http_addr(),
        }
    }
}

fn default_http_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 3000))
}
