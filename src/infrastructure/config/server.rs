//! HTTP server configuration.

use std::path::PathBuf;

use serde::Deserialize;

/// HTTP listener and asset settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address to listen on.
    pub bind: String,
    /// Directory served under `/static/`.
    pub static_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:5000".into(),
            static_dir: PathBuf::from("static"),
        }
    }
}
