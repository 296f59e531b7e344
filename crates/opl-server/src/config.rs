use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ServerError, ServerResult};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// File-backed store location; everything stays in memory when unset.
    pub data_path: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8420".parse().unwrap(),
            data_path: None,
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file. Missing keys fall back to
    /// defaults.
    pub fn load(path: impl AsRef<Path>) -> ServerResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(|e| ServerError::Config(e.to_string()))
    }
}
