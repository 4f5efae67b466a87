//! Error types for FormFlow
//!
//! Bad user input on a page is not an error: it is recorded in the page
//! state and displayed. These types cover the failures that are not
//! recoverable by re-prompting, plus invalid requests from the caller.

use thiserror::Error;

use crate::navigation::Page;

pub type Result<T> = std::result::Result<T, FormFlowError>;

#[derive(Error, Debug)]
pub enum FormFlowError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("No navigation link from {from} to {to}")]
    Navigation { from: Page, to: Page },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl FormFlowError {
    /// Returns the appropriate exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            FormFlowError::InvalidInput(_) => 3,
            FormFlowError::Navigation { .. } => 1,
            FormFlowError::Config(_) => 1,
            FormFlowError::Io(_) => 1,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),
}
