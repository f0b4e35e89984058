// src/config.rs
use std::net::{IpAddr, Ipv4Addr};

pub const DEFAULT_SEED_URL: &str = "https://s3.amazonaws.com/roxiler.com/product_transaction.json";

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Process configuration read from the environment (and `.env`, if present).
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: IpAddr,
    pub port: u16,
    pub seed_url: String,
    pub max_connections: u32,
}

impl AppConfig {
    /// Reads the configuration from process environment variables.
    ///
    /// Only `DATABASE_URL` is required. Unparseable optional values fall back to
    /// their defaults.
    pub fn from_env() -> Result<Self, std::env::VarError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, std::env::VarError> {
        let database_url = lookup("DATABASE_URL").ok_or(std::env::VarError::NotPresent)?;

        Ok(Self {
            database_url,
            host: parse_or("HOST", lookup("HOST"), DEFAULT_HOST),
            port: parse_or("PORT", lookup("PORT"), DEFAULT_PORT),
            seed_url: lookup("SEED_URL").unwrap_or_else(|| DEFAULT_SEED_URL.to_string()),
            max_connections: parse_or(
                "DB_MAX_CONNECTIONS",
                lookup("DB_MAX_CONNECTIONS"),
                DEFAULT_MAX_CONNECTIONS,
            ),
        })
    }
}

fn parse_or<T: std::str::FromStr>(key: &str, raw: Option<String>, default: T) -> T {
    match raw {
        Some(value) => value.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(key, %value, "Invalid value in environment, using default");
            default
        }),
        None => default,
    }
}
