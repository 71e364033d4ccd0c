//! Environment-variable configuration for the client process
//!
//! All validation happens here, before any network activity: the wire
//! core assumes a well-formed host, port, and request value.

use std::env;

use thiserror::Error;

const COUNT_VAR: &str = "COLLATZ_COUNT";
const HOST_VAR: &str = "SERVER_HOST";
const PORT_VAR: &str = "SERVER_PORT";

const DEFAULT_HOST: &str = "server";
const DEFAULT_PORT: u16 = 9000;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required env var: {0}")]
    Missing(&'static str),

    #[error("env var {name} must be an integer, got: {value:?}")]
    NotAnInteger { name: &'static str, value: String },

    #[error("{0} must be > 0")]
    NotPositive(&'static str),

    #[error("{name} must be in 1..=65535, got: {value}")]
    PortOutOfRange { name: &'static str, value: i64 },

    #[error("{0} must not be empty")]
    EmptyHost(&'static str),
}

/// Validated client configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub count: u64,
    pub host: String,
    pub port: u16,
}

impl Config {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let count = match lookup(COUNT_VAR) {
            None => return Err(ConfigError::Missing(COUNT_VAR)),
            Some(raw) => parse_int(COUNT_VAR, &raw)?,
        };
        if count <= 0 {
            return Err(ConfigError::NotPositive(COUNT_VAR));
        }

        let host = match lookup(HOST_VAR) {
            None => DEFAULT_HOST.to_string(),
            Some(h) if h.trim().is_empty() => return Err(ConfigError::EmptyHost(HOST_VAR)),
            Some(h) => h,
        };

        let port = match lookup(PORT_VAR) {
            None => DEFAULT_PORT,
            Some(raw) => {
                let value = parse_int(PORT_VAR, &raw)?;
                if !(1..=65535).contains(&value) {
                    return Err(ConfigError::PortOutOfRange {
                        name: PORT_VAR,
                        value,
                    });
                }
                value as u16
            }
        };

        Ok(Self {
            count: count as u64,
            host,
            port,
        })
    }
}

fn parse_int(name: &'static str, raw: &str) -> Result<i64, ConfigError> {
    raw.trim().parse::<i64>().map_err(|_| ConfigError::NotAnInteger {
        name,
        value: raw.to_string(),
    })
}
