use crate::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_TOKEN_TTL_HOURS: i64 = 72;

pub struct Config {
    pub database_url: String,
    pub bind_addr: String,

    pub token_secret: String,
    pub token_ttl_hours: i64,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let token_ttl_hours = match std::env::var("TOKEN_TTL_HOURS") {
            Ok(raw) => raw
                .parse::<i64>()
                .map_err(|_| ConfigError::InvalidEnvVar("TOKEN_TTL_HOURS".to_string()))?,
            Err(_) => DEFAULT_TOKEN_TTL_HOURS,
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_addr: std::env::var("BIND_ADDR")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            token_secret: std::env::var("TOKEN_SECRET")
                .map_err(|_| ConfigError::MissingEnvVar("TOKEN_SECRET".to_string()))?,
            token_ttl_hours,
        })
    }
}
