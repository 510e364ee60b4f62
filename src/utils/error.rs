use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoffeeError {
    #[error("Invalid drink id: '{value}' is not a version-4 UUID")]
    InvalidUuid { value: String },

    #[error("No coffee drink matches '{value}'")]
    NotFound { value: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Catalog format error: {0}")]
    CatalogFormatError(#[from] toml::de::Error),

    #[error("Invalid configuration value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, CoffeeError>;
