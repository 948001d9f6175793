use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required environment variable was not set.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    /// An environment variable was set but could not be parsed.
    #[error("Invalid environment variable: {0}")]
    InvalidEnvVar(String),
}
