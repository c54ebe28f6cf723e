//! Runtime settings read from the environment (after `.env`, if present).

use crate::error::ConfigError;
use std::net::SocketAddr;

pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost/cupcakes";
pub const DEFAULT_BIND: &str = "127.0.0.1:5000";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_BODY_LIMIT: usize = 64 * 1024;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreKind {
    Postgres,
    Memory,
}

#[derive(Clone, Debug)]
pub struct Settings {
    pub database_url: String,
    pub bind: SocketAddr,
    pub max_connections: u32,
    pub store: StoreKind,
    pub body_limit: usize,
}

impl Settings {
    /// Read `DATABASE_URL`, `CUPCAKES_BIND`, `CUPCAKES_MAX_CONNECTIONS`, `CUPCAKES_STORE`
    /// and `CUPCAKES_BODY_LIMIT`; unset variables take their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let database_url = get("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into());

        let bind_raw = get("CUPCAKES_BIND").unwrap_or_else(|| DEFAULT_BIND.into());
        let bind: SocketAddr = bind_raw.parse().map_err(|_| ConfigError::Invalid {
            key: "CUPCAKES_BIND",
            value: bind_raw.clone(),
        })?;

        let max_connections = match get("CUPCAKES_MAX_CONNECTIONS") {
            None => DEFAULT_MAX_CONNECTIONS,
            Some(v) => v.parse::<u32>().ok().filter(|n| *n > 0).ok_or(ConfigError::Invalid {
                key: "CUPCAKES_MAX_CONNECTIONS",
                value: v,
            })?,
        };

        let store = match get("CUPCAKES_STORE").map(|v| v.to_ascii_lowercase()).as_deref() {
            None | Some("postgres") => StoreKind::Postgres,
            Some("memory") => StoreKind::Memory,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    key: "CUPCAKES_STORE",
                    value: other.to_string(),
                })
            }
        };

        let body_limit = match get("CUPCAKES_BODY_LIMIT") {
            None => DEFAULT_BODY_LIMIT,
            Some(v) => v.parse::<usize>().map_err(|_| ConfigError::Invalid {
                key: "CUPCAKES_BODY_LIMIT",
                value: v,
            })?,
        };

        Ok(Settings {
            database_url,
            bind,
            max_connections,
            store,
            body_limit,
        })
    }
}
