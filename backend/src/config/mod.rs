//! Central module for application-wide configuration settings.
//!
//! This module handles loading and managing configuration parameters such as
//! the server bind address, the token signing secret, and credential hashing
//! cost. Values come from `ROLLBOOK_*` environment variables and fall back to
//! development defaults; every loaded configuration is validated before use.

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Top-level application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub auth: AuthConfig,
}

/// HTTP server settings.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

/// Credential hashing and token issuance settings.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// HS256 signing secret for issued tokens.
    pub token_secret: String,
    /// Token lifetime in seconds.
    pub token_ttl_secs: u64,
    /// bcrypt work factor. Tests use the minimum cost to stay fast.
    pub bcrypt_cost: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            auth: AuthConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 3000,
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_secret: "insecure-dev-secret".to_owned(),
            token_ttl_secs: 3600,
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl AppConfig {
    /// Loads configuration from the environment, falling back to defaults for
    /// unset variables, and validates the result.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Ok(value) = env::var("ROLLBOOK_HOST") {
            config.server.host = value
                .parse()
                .map_err(|_| ConfigError::InvalidAddress(value.clone()))?;
        }
        if let Ok(value) = env::var("ROLLBOOK_PORT") {
            config.server.port = value
                .parse()
                .map_err(|_| ConfigError::InvalidPort(value.clone()))?;
        }
        if let Ok(value) = env::var("ROLLBOOK_TOKEN_SECRET") {
            config.auth.token_secret = value;
        }
        if let Ok(value) = env::var("ROLLBOOK_TOKEN_TTL_SECS") {
            config.auth.token_ttl_secs = value
                .parse()
                .map_err(|_| ConfigError::InvalidTtl(value.clone()))?;
        }
        if let Ok(value) = env::var("ROLLBOOK_BCRYPT_COST") {
            config.auth.bcrypt_cost = value
                .parse()
                .map_err(|_| ConfigError::InvalidCost(value.clone()))?;
        }
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::InvalidPort("0".to_owned()));
        }
        if self.auth.token_secret.is_empty() {
            return Err(ConfigError::MissingSecret);
        }
        if self.auth.token_ttl_secs == 0 {
            return Err(ConfigError::InvalidTtl("0".to_owned()));
        }
        // bcrypt accepts work factors 4 through 31.
        if !(4..=31).contains(&self.auth.bcrypt_cost) {
            return Err(ConfigError::InvalidCost(self.auth.bcrypt_cost.to_string()));
        }
        Ok(())
    }

    /// Socket address the server binds to.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.server.host, self.server.port)
    }
}

/// Configuration errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid bind address: {0}")]
    InvalidAddress(String),

    #[error("invalid port: {0}")]
    InvalidPort(String),

    #[error("token secret must not be empty")]
    MissingSecret,

    #[error("invalid token ttl: {0}")]
    InvalidTtl(String),

    #[error("invalid bcrypt cost: {0}")]
    InvalidCost(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.bind_addr().port(), 3000);
    }

    #[test]
    fn zero_port_is_rejected() {
        let mut config = AppConfig::default();
        config.server.port = 0;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidPort(_))));
    }

    #[test]
    fn empty_secret_is_rejected() {
        let mut config = AppConfig::default();
        config.auth.token_secret.clear();
        assert!(matches!(config.validate(), Err(ConfigError::MissingSecret)));
    }

    #[test]
    fn out_of_range_bcrypt_cost_is_rejected() {
        let mut config = AppConfig::default();
        config.auth.bcrypt_cost = 99;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidCost(_))));
    }
}
