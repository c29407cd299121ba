use std::{net::SocketAddr, str::FromStr};

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Runtime configuration read from the environment (and `.env` when present).
pub struct Config {
    pub database_url: String,

    /// Address the HTTP listener binds to.
    pub bind_addr: SocketAddr,

    /// Origin allowed to make credentialed cross-origin requests. CORS is disabled
    /// when unset.
    pub cors_allowed_origin: Option<String>,

    /// Whether the session cookie carries the `Secure` attribute.
    pub session_secure: bool,

    /// Insert demo users, posts and groups on startup.
    pub seed_demo_data: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_addr: match parse_var("BIND_ADDR")? {
                Some(addr) => addr,
                None => parse_value("BIND_ADDR", DEFAULT_BIND_ADDR)?,
            },
            cors_allowed_origin: std::env::var("CORS_ALLOWED_ORIGIN")
                .ok()
                .filter(|origin| !origin.trim().is_empty()),
            session_secure: parse_var("SESSION_SECURE")?.unwrap_or(false),
            seed_demo_data: parse_var("SEED_DEMO_DATA")?.unwrap_or(false),
        })
    }
}

/// Reads and parses an optional variable. Unset means `None`, unparsable is an error.
fn parse_var<T>(name: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(name) {
        Ok(value) => parse_value(name, &value).map(Some),
        Err(_) => Ok(None),
    }
}

fn parse_value<T>(name: &str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e: T::Err| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.to_string(),
            reason: e.to_string(),
        })
}
