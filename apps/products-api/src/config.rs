//! Configuration for the Products API

use eyre::WrapErr;
use std::env;

/// Application environment
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn from_env() -> Self {
        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());
        if app_env.eq_ignore_ascii_case("production") {
            Environment::Production
        } else {
            Environment::Development
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

/// Application configuration, loaded from environment variables
#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// When absent the service runs on the in-memory repository
    pub database_url: Option<String>,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3003".to_string())
            .parse()
            .wrap_err("PORT must be a valid port number")?;
        let database_url = env::var("DATABASE_URL").ok();

        Ok(Self {
            host,
            port,
            database_url,
            environment: Environment::from_env(),
        })
    }
}
