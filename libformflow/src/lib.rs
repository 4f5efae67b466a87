//! libformflow - Core library for the FormFlow pages
//!
//! Holds the logic behind the three form pages (number list, email check,
//! age categorization) and the navigation graph between them. Rendering is
//! left to the caller: read the state, call the `on_*` action methods,
//! re-render.

pub mod age;
pub mod config;
pub mod controller;
pub mod email;
pub mod error;
pub mod logging;
pub mod navigation;
pub mod numbers;

// Re-export commonly used types
pub use age::{categorize_age, AgeCategory, AgeOutcome, AgeState};
pub use config::Config;
pub use controller::FormFlowController;
pub use email::{validate_email, EmailOutcome, EmailState};
pub use error::{ConfigError, FormFlowError, Result};
pub use navigation::{Link, Page};
pub use numbers::{NumberListState, Parity, ParityReport};
