use thiserror::Error;

#[derive(Error, Debug)]
pub enum GaError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid bounds for variable {index}: min {min} must be finite and below max {max}")]
    InvalidBounds { index: usize, min: f64, max: f64 },

    #[error("Config source error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GaError>;
