//! Error types for formflow-tui
//!
//! Wraps form-flow library errors and terminal/IO errors for unified
//! error handling in the event loop.

use thiserror::Error;

/// TUI-specific errors
#[derive(Error, Debug)]
pub enum TuiError {
    /// Form flow library error (configuration, logging setup)
    #[error("FormFlow error: {0}")]
    Flow(#[from] libformflow::FormFlowError),

    /// Terminal/IO error
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Result type for TUI operations
pub type Result<T> = std::result::Result<T, TuiError>;
