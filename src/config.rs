use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::env;
use std::time::Duration;

pub const DEFAULT_ARXIV_API_URL: &str = "https://export.arxiv.org/api/query";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub search: SearchConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    pub api_url: String,
    pub timeout_secs: u64,
}

impl SearchConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_ARXIV_API_URL.to_string(),
            timeout_secs: 10,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let timeout_secs: u64 = var("ARXIV_TIMEOUT_SECS", "10")
            .parse()
            .context("ARXIV_TIMEOUT_SECS must be a whole number of seconds")?;
        if timeout_secs == 0 {
            bail!("ARXIV_TIMEOUT_SECS must be at least 1 second");
        }

        Ok(Self {
            server: ServerConfig {
                port: var("PORT", "7860")
                    .parse()
                    .context("PORT must be a valid port number")?,
                host: var("HOST", "127.0.0.1"),
            },
            search: SearchConfig {
                api_url: var("ARXIV_API_URL", DEFAULT_ARXIV_API_URL),
                timeout_secs,
            },
        })
    }
}
