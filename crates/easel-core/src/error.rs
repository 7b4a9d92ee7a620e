//! Error types for Easel

use thiserror::Error;

/// The main error type for Easel operations
#[derive(Debug, Error)]
pub enum EaselError {
    #[error("Element kind not found: {0}")]
    ElementNotFound(String),

    #[error("Attribute not found: {0}")]
    AttributeNotFound(String),

    #[error("Duplicate attribute name: {0}")]
    DuplicateAttribute(String),

    #[error("Schema error: {0}")]
    SchemaError(String),

    #[error("Invalid default for attribute '{attr}': {reason}")]
    InvalidDefault { attr: String, reason: String },

    #[error("Invalid value type: expected {expected}, got {got}")]
    InvalidValueType { expected: String, got: String },

    #[error("Value out of range: {attr} must be between {min} and {max}, got {value}")]
    ValueOutOfRange {
        attr: String,
        min: f64,
        max: f64,
        value: f64,
    },

    #[error("Invalid enumerated value: {value} is not one of {allowed:?}")]
    InvalidEnumValue {
        value: String,
        allowed: Vec<String>,
    },

    #[error("Invalid axis reference: {0}")]
    InvalidAxisRef(String),

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(String),
}

/// Result type alias for Easel operations
pub type Result<T> = std::result::Result<T, EaselError>;

impl From<toml::de::Error> for EaselError {
    fn from(err: toml::de::Error) -> Self {
        EaselError::TomlParseError(err.to_string())
    }
}
