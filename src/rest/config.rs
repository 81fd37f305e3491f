//! Server configuration.
//!
//! Port and database name are externalized and populated from CLI flags or
//! environment variables.

use serde::{Deserialize, Serialize};

/// HTTP server and store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 2349)
    #[serde(default = "default_port")]
    pub port: u16,

    /// Logical database name for the document store (default: "book")
    #[serde(default = "default_database")]
    pub database: String,

    /// Reject book writes whose author_id/section_id resolve to nothing
    /// (default: off; dangling references are legal)
    #[serde(default)]
    pub enforce_references: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    2349
}

fn default_database() -> String {
    "book".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            database: default_database(),
            enforce_references: false,
        }
    }
}

impl ServerConfig {
    /// Create a config with a specific port.
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
