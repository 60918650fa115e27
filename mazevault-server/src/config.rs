//! Server configuration, read from the environment.

use std::net::SocketAddr;

/// Password accepted by `/delete` when none is configured.
const DEFAULT_DELETE_PASSWORD: &str = "mazevault";

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 127.0.0.1:3040)
    pub bind_addr: SocketAddr,

    /// SQLite connection string (default: sqlite:mazevault.db)
    pub database_url: String,

    /// Password required by the delete endpoint
    pub delete_password: String,

    /// Allow permissive CORS (default: false = localhost only)
    ///
    /// WARNING: Setting this to true allows any origin.
    pub cors_permissive: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3040)),
            database_url: "sqlite:mazevault.db".to_string(),
            delete_password: DEFAULT_DELETE_PASSWORD.to_string(),
            cors_permissive: false,
        }
    }
}

impl ServerConfig {
    /// Build a config from the environment, falling back to defaults.
    ///
    /// Recognized variables:
    /// - `MAZEVAULT_ADDR` - bind address, `host:port`
    /// - `DATABASE_URL` - SQLite connection string
    /// - `MAZEVAULT_DELETE_PASSWORD` - delete endpoint password
    ///
    /// A malformed `MAZEVAULT_ADDR` is ignored with a warning rather than
    /// aborting startup.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(addr) = std::env::var("MAZEVAULT_ADDR") {
            match addr.parse() {
                Ok(parsed) => config.bind_addr = parsed,
                Err(_) => {
                    tracing::warn!(addr = %addr, "ignoring malformed MAZEVAULT_ADDR");
                }
            }
        }

        if let Ok(url) = std::env::var("DATABASE_URL") {
            config.database_url = url;
        }

        match std::env::var("MAZEVAULT_DELETE_PASSWORD") {
            Ok(password) if !password.is_empty() => config.delete_password = password,
            _ => {
                tracing::warn!("MAZEVAULT_DELETE_PASSWORD not set, using built-in default");
            }
        }

        config
    }
}
