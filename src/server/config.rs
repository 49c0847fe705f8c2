use std::{env::VarError, path::PathBuf};

use crate::server::error::config::ConfigError;

pub static DEFAULT_CHARACTERS_FILE: &str = "characters.json";
pub static DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;

pub struct Config {
    pub characters_file: PathBuf,
    pub host: String,
    pub port: u16,
}

impl Config {
    /// Reads the configuration from the process environment, falling back to defaults for
    /// unset variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var))
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        let optional = |var: &str| match lookup(var) {
            Ok(value) => Ok(Some(value)),
            Err(VarError::NotPresent) => Ok(None),
            Err(VarError::NotUnicode(_)) => Err(ConfigError::InvalidEnvValue {
                var: var.to_string(),
                reason: "value is not valid unicode".to_string(),
            }),
        };

        let characters_file = optional("CHARACTERS_FILE")?
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CHARACTERS_FILE));
        let host = optional("HOST")?.unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match optional("PORT")? {
            Some(port) => port
                .parse::<u16>()
                .map_err(|e| ConfigError::InvalidEnvValue {
                    var: "PORT".to_string(),
                    reason: e.to_string(),
                })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            characters_file,
            host,
            port,
        })
    }

    /// Address the listener binds to, in `host:port` form
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
