use std::env;

use thiserror::Error;

/// Connection settings for the producer, loaded once at startup and passed
/// into the handler so tests can substitute fixtures without touching the
/// process environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bootstrap_servers: String,
    pub topic: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} not set - bootstrap server and topic must be provided as environment variables")]
    MissingVar(&'static str),
}

impl Config {
    pub fn load_from_env() -> Result<Config, ConfigError> {
        Ok(Config {
            bootstrap_servers: required_var("BS")?,
            topic: required_var("TOPIC")?,
        })
    }
}

// An empty value is treated the same as an unset one.
fn required_var(name: &'static str) -> Result<String, ConfigError> {
    env::var(name)
        .ok()
        .filter(|value| !value.is_empty())
        .ok_or(ConfigError::MissingVar(name))
}
