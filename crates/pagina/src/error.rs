//! Error types for the page controller

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PageError {
    /// A required element is not in the document
    #[error("element #{id} not found")]
    MissingElement { id: String },

    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}

impl PageError {
    pub fn missing(id: impl Into<String>) -> Self {
        PageError::MissingElement { id: id.into() }
    }
}
