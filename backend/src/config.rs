use std::{env, path::PathBuf};

use anyhow::{Context, Result};

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_BIND_ADDR: &str = "0.0.0.0";
const DEFAULT_DB_PATH: &str = "./data/archive.db";

/// Process configuration, read once at startup from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub bind_addr: String,
    pub db_path: PathBuf,
    /// Bearer token required on mutating archive routes. `None` leaves them
    /// open.
    pub admin_token: Option<String>,
    /// Single allowed origin; `None` allows any.
    pub cors_allow_origin: Option<String>,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let port = match read("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("PORT must be a TCP port number, got `{raw}`"))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            port,
            bind_addr: read("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            db_path: read("DB_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_PATH)),
            admin_token: read("ADMIN_TOKEN"),
            cors_allow_origin: read("CORS_ALLOW_ORIGIN"),
        })
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}
