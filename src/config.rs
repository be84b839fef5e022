use std::env;
use std::time::Duration;

use crate::db::DEFAULT_QUERY_TIMEOUT;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub db_max_conns: u32,
    pub query_timeout: Duration,
    pub max_secondary_targets: usize,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:fitcatalog.db?mode=rwc".to_string()),
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: parse_or("PORT", 8080),
            db_max_conns: parse_positive_or("DB_MAX_CONNS", 5),
            query_timeout: Duration::from_secs(parse_positive_or(
                "QUERY_TIMEOUT_SECS",
                DEFAULT_QUERY_TIMEOUT.as_secs(),
            )),
            max_secondary_targets: parse_or("MAX_SECONDARY_TARGETS", 10),
        }
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!("Ignoring invalid {}={:?}", key, raw);
            default
        }),
        Err(_) => default,
    }
}

/// Like `parse_or`, but zero counts as invalid.
fn parse_positive_or<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + PartialOrd + Default + Copy,
{
    let value = parse_or(key, default);
    if value > T::default() {
        return value;
    }
    tracing::warn!("Ignoring non-positive {}, using the default", key);
    default
}
