use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

const DEFAULT_DB_PATH: &str = "portal.db";
const DEFAULT_LATENCY_MS: u64 = 800;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub db_path: PathBuf,
    pub in_memory: bool,
    pub latency: Duration,
}

impl Config {
    /// Reads `PORTAL_*` variables from the environment (and `.env`, once
    /// loaded by the caller).
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let db_path = lookup("PORTAL_DB_PATH").unwrap_or_else(|| DEFAULT_DB_PATH.into());

        let in_memory = match lookup("PORTAL_IN_MEMORY") {
            Some(v) => matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"),
            None => false,
        };

        let latency_ms: u64 = match lookup("PORTAL_LATENCY_MS") {
            Some(v) => v
                .trim()
                .parse()
                .with_context(|| format!("PORTAL_LATENCY_MS must be milliseconds, got {:?}", v))?,
            None => DEFAULT_LATENCY_MS,
        };

        Ok(Self {
            db_path: PathBuf::from(db_path),
            in_memory,
            latency: Duration::from_millis(latency_ms),
        })
    }
}
