//! Server configuration from environment variables
//!
//! `.env` is read first when present.

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::path::PathBuf;

const DEFAULT_GUESTS_PATH: &str = "guests.json";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

/// Server settings
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// JSON file holding the guest directory
    pub guests_path: PathBuf,
    pub bind_addr: SocketAddr,
}

impl ServerConfig {
    /// Read `FUMI_GUESTS_PATH` and `FUMI_BIND_ADDR`, falling back to defaults
    pub fn from_env() -> Result<Self> {
        Self::from_vars(
            std::env::var("FUMI_GUESTS_PATH").ok(),
            std::env::var("FUMI_BIND_ADDR").ok(),
        )
    }

    fn from_vars(guests_path: Option<String>, bind_addr: Option<String>) -> Result<Self> {
        let guests_path = PathBuf::from(guests_path.unwrap_or_else(|| DEFAULT_GUESTS_PATH.to_string()));
        let bind_addr = bind_addr.unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .parse()
            .with_context(|| format!("Invalid FUMI_BIND_ADDR: {}", bind_addr))?;

        Ok(Self {
            guests_path,
            bind_addr,
        })
    }
}
