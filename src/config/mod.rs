//! Process configuration
//!
//! Everything comes from the environment, read once at startup. The
//! connection string is passed down explicitly from here; nothing re-reads
//! the environment after boot.

use crate::core::error::ConfigError;

/// Address the server binds when `LISTEN_ADDR` is not set.
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:3000";

/// Configuration for the invoice service.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// PostgreSQL connection string.
    pub database_url: String,
    /// Address to serve HTTP on.
    pub listen_addr: String,
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url =
            std::env::var("DATABASE_URL").map_err(|_| ConfigError::MissingEnv("DATABASE_URL"))?;
        let listen_addr =
            std::env::var("LISTEN_ADDR").unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string());
        Ok(Self {
            database_url,
            listen_addr,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_listen_addr_parses_as_socket_addr() {
        assert!(DEFAULT_LISTEN_ADDR.parse::<std::net::SocketAddr>().is_ok());
    }
}
