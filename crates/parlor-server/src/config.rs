use std::net::SocketAddr;

use anyhow::{Context, Result};
use parlor_store::DEFAULT_FALLBACK_AVATAR;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub fallback_avatar: String,
}

impl Config {
    /// Read `PARLOR_*` variables from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let host = lookup("PARLOR_HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = match lookup("PARLOR_PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("PARLOR_PORT is not a valid port: {raw:?}"))?,
            None => 3000,
        };
        let fallback_avatar = lookup("PARLOR_FALLBACK_AVATAR")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_FALLBACK_AVATAR.into());

        Ok(Self {
            host,
            port,
            fallback_avatar,
        })
    }

    pub fn addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid listen address {}:{}", self.host, self.port))
    }
}
