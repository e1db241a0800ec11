use std::env;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidVar(&'static str, String),
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub db_host: String,
    pub db_port: u16,
    pub db_user: String,
    pub db_password: String,
    pub db_name: String,
    pub server_port: u16,
}

impl AppConfig {
    /// Load configuration from the process environment.
    ///
    /// The database variables (DB_HOST, DB_USER, DB_PASSWORD, DB_NAME) are
    /// required; startup aborts when any of them is missing.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            db_host: require("DB_HOST")?,
            db_port: optional_port("DB_PORT", 3306)?,
            db_user: require("DB_USER")?,
            db_password: require("DB_PASSWORD")?,
            db_name: require("DB_NAME")?,
            server_port: optional_port("SERVER_PORT", 5055)?,
        })
    }

    /// Connection URL understood by the sqlx MySQL driver.
    pub fn database_url(&self) -> String {
        format!(
            "mysql://{}:{}@{}:{}/{}",
            self.db_user, self.db_password, self.db_host, self.db_port, self.db_name
        )
    }
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    env::var(name).map_err(|_| ConfigError::MissingVar(name))
}

fn optional_port(name: &'static str, default: u16) -> Result<u16, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|_| ConfigError::InvalidVar(name, raw.clone())),
        Err(_) => Ok(default),
    }
}
