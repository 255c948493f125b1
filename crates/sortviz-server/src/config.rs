//! Server configuration from environment variables.
//!
//! - `SORTVIZ_HOST`: listen address (default: "0.0.0.0")
//! - `SORTVIZ_PORT`: listen port (default: 8080)
//! - `SORTVIZ_MAX_ELEMENTS`: largest accepted input; unset or `0` accepts
//!   any length (default: unset)

use thiserror::Error;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;

/// Configuration errors raised at startup.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value '{value}' for {var}: {reason}")]
    InvalidValue {
        var: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Inputs longer than this are rejected; `None` disables the check.
    pub max_elements: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            max_elements: None,
        }
    }
}

impl ServerConfig {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Reads configuration through `lookup`, falling back to defaults for
    /// unset variables.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ServerConfig::default();

        if let Some(host) = lookup("SORTVIZ_HOST") {
            config.host = host;
        }
        if let Some(port) = lookup("SORTVIZ_PORT") {
            config.port = parse_var("SORTVIZ_PORT", port)?;
        }
        if let Some(max) = lookup("SORTVIZ_MAX_ELEMENTS") {
            config.max_elements = match parse_var::<usize>("SORTVIZ_MAX_ELEMENTS", max)? {
                0 => None,
                n => Some(n),
            };
        }

        Ok(config)
    }

    /// Socket address string to bind, e.g. `0.0.0.0:8080`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<T>(var: &'static str, value: String) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|err: T::Err| ConfigError::InvalidValue {
            var,
            reason: err.to_string(),
            value,
        })
}
