//! Service configuration
//!
//! Settings come from the process environment. A `.env` file in the working
//! directory, when present, is loaded first and never overrides variables
//! that are already set.

use serde::Deserialize;
use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Environment could not be read or deserialized
    #[error("invalid environment: {0}")]
    Source(#[from] config::ConfigError),

    /// A value was read but is out of range
    #[error("{0}")]
    Invalid(String),
}

/// Server and database settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 3307)
    #[serde(default = "default_port")]
    pub port: u16,

    /// MySQL server host (default: "localhost")
    #[serde(default = "default_db_host")]
    pub db_host: String,

    /// MySQL server port (default: 3306)
    #[serde(default = "default_db_port")]
    pub db_port: u16,

    #[serde(default = "default_db_user")]
    pub db_user: String,

    #[serde(default)]
    pub db_password: String,

    /// Database the pool selects; `setup` connects without one
    #[serde(default)]
    pub db_database: Option<String>,

    /// Upper bound on open pooled connections (default: 10)
    #[serde(default = "default_db_pool_size")]
    pub db_pool_size: u32,

    /// How long a request waits for a free connection (default: 30s)
    #[serde(default = "default_db_acquire_timeout_secs")]
    pub db_acquire_timeout_secs: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3307
}

fn default_db_host() -> String {
    "localhost".to_string()
}

fn default_db_port() -> u16 {
    3306
}

fn default_db_user() -> String {
    "root".to_string()
}

fn default_db_pool_size() -> u32 {
    10
}

fn default_db_acquire_timeout_secs() -> u64 {
    30
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            db_host: default_db_host(),
            db_port: default_db_port(),
            db_user: default_db_user(),
            db_password: String::new(),
            db_database: None,
            db_pool_size: default_db_pool_size(),
            db_acquire_timeout_secs: default_db_acquire_timeout_secs(),
        }
    }
}

impl Settings {
    /// Load `.env` (if any) and read settings from the environment
    pub fn load() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_source(config::Environment::default())
    }

    /// Read settings from an arbitrary `config` source.
    ///
    /// Keys are the lowercased variable names (`DB_HOST` -> `db_host`).
    /// Values stay strings until deserialized, so a password such as
    /// `0123` is kept verbatim.
    pub fn from_source<S>(source: S) -> Result<Self, ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let settings: Settings = config::Config::builder()
            .add_source(source)
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.db_pool_size == 0 {
            return Err(ConfigError::Invalid("DB_POOL_SIZE must be > 0".to_string()));
        }
        if self.db_acquire_timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "DB_ACQUIRE_TIMEOUT_SECS must be > 0".to_string(),
            ));
        }
        if self.db_database.as_deref() == Some("") {
            return Err(ConfigError::Invalid(
                "DB_DATABASE must not be empty when set".to_string(),
            ));
        }
        Ok(())
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
