//! Deployment configuration, read once at startup.

use std::net::SocketAddr;

use anyhow::{anyhow, Context};

/// Names the shared table holding records and queue items.
pub const ENV_TABLE: &str = "IPFS_INTAKE_TABLE";
/// Overrides the listen address.
pub const ENV_BIND: &str = "IPFS_INTAKE_BIND";

const DEFAULT_BIND: &str = "0.0.0.0:8080";

#[derive(Debug, Clone)]
pub struct Config {
    /// Namespace shared with the fetch worker. Both sides must resolve
    /// the same value or submissions and lookups land in different
    /// datasets.
    pub table: String,
    pub bind: SocketAddr,
}

impl Config {
    /// Reads configuration from the environment.
    ///
    /// A missing `IPFS_INTAKE_TABLE` is fatal here, at startup, rather
    /// than surfacing later as requests against a nameless table.
    pub fn from_env() -> anyhow::Result<Self> {
        let table = std::env::var(ENV_TABLE)
            .map_err(|_| anyhow!("{ENV_TABLE} environment variable not set"))?;
        let bind = std::env::var(ENV_BIND)
            .unwrap_or_else(|_| DEFAULT_BIND.to_string())
            .parse()
            .with_context(|| format!("invalid {ENV_BIND} listen address"))?;
        Ok(Self { table, bind })
    }
}
