use anyhow::Context;
use std::net::SocketAddr;

use crate::modules::deals::use_cases::create_deal::authorize::ADMIN_TOKEN_VAR;
use crate::shared::infrastructure::store_provider::CREDENTIALS_VAR;

pub const BIND_ADDR_VAR: &str = "DEALS_BIND_ADDR";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Runtime configuration. Secrets stay optional here: their absence is reported
/// on the first request that needs them, not at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub admin_token: Option<String>,
    pub store_credentials: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let bind_addr = lookup(BIND_ADDR_VAR)
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = bind_addr
            .trim()
            .parse()
            .with_context(|| format!("invalid {BIND_ADDR_VAR}: {bind_addr}"))?;

        Ok(Self {
            bind_addr,
            admin_token: lookup(ADMIN_TOKEN_VAR),
            store_credentials: lookup(CREDENTIALS_VAR),
        })
    }
}
