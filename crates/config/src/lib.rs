//! Configuration module for the exam scheduling service.

use serde::Deserialize;
use std::env;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Address to bind the server to
    pub bind_address: String,
    /// Directory holding the static front-end
    pub static_dir: String,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let bind_address = env_var_or("BIND_ADDRESS", "0.0.0.0:8080");
        if bind_address.parse::<std::net::SocketAddr>().is_err() {
            return Err(ConfigError::InvalidValue(
                "BIND_ADDRESS".to_string(),
                bind_address,
            ));
        }

        Ok(Self {
            bind_address,
            static_dir: env_var_or("STATIC_DIR", "./static"),
        })
    }
}

fn env_var_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}
