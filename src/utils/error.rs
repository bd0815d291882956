use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrderDeskError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Scenario parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, OrderDeskError>;
