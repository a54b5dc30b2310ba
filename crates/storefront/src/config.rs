//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required in production (`APP_ENV=production`)
//! - `MONGO_URI` - MongoDB connection string (may contain credentials)
//!
//! ## Optional
//! - `APP_ENV` - Deployment environment (default: development)
//! - `MONGO_URI` - Connection string (default: local replica set)
//! - `MONGO_DB` - Database name (default: penguin_shop)
//! - `STOREFRONT_HOST` - Bind address (default: 127.0.0.1)
//! - `PORT_FRONTEND` - Listen port (default: 8081)
//! - `UPLOADS_BASE` - Base URL product image paths resolve against
//!   (default: http://localhost:4100)

use std::net::{IpAddr, SocketAddr};

use secrecy::SecretString;
use thiserror::Error;

const DEFAULT_MONGO_URI: &str = "mongodb://localhost:27017/penguin_shop?replicaSet=rs0";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// MongoDB connection string (may contain credentials)
    pub mongo_uri: SecretString,
    /// MongoDB database name
    pub database: String,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Base URL that product image paths are resolved against
    pub uploads_base: String,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present,
    /// except in production where variables come from the environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        let production = get_env_or_default("APP_ENV", "development") == "production";
        if !production {
            // Load .env file if present (ignore errors if not found)
            let _ = dotenvy::dotenv();
        }

        let mongo_uri = if production {
            SecretString::from(get_required_env("MONGO_URI")?)
        } else {
            SecretString::from(get_env_or_default("MONGO_URI", DEFAULT_MONGO_URI))
        };
        let database = get_env_or_default("MONGO_DB", "penguin_shop");
        let host = parse_env_or_default::<IpAddr>("STOREFRONT_HOST", "127.0.0.1")?;
        let port = parse_env_or_default::<u16>("PORT_FRONTEND", "8081")?;
        let uploads_base = get_env_or_default("UPLOADS_BASE", "http://localhost:4100");

        Ok(Self {
            mongo_uri,
            database,
            host,
            port,
            uploads_base,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Get an environment variable with a default, parsed into `T`.
fn parse_env_or_default<T>(key: &str, default: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    get_env_or_default(key, default)
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn socket_addr_combines_host_and_port() {
        let config = StorefrontConfig {
            mongo_uri: SecretString::from(DEFAULT_MONGO_URI),
            database: "penguin_shop".to_owned(),
            host: "127.0.0.1".parse().unwrap(),
            port: 8081,
            uploads_base: "http://localhost:4100".to_owned(),
        };
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8081");
    }

    #[test]
    fn config_error_messages_name_the_variable() {
        let err = ConfigError::MissingEnvVar("MONGO_URI".to_owned());
        assert_eq!(err.to_string(), "Missing environment variable: MONGO_URI");
    }
}
