//! Page 2: email validation
//!
//! A check classifies the input as empty, malformed or valid, in that
//! order of precedence. Editing the input clears whatever the last check
//! displayed.

use serde::Serialize;

pub const EMPTY_EMAIL_MESSAGE: &str = "Email is empty";
pub const MALFORMED_EMAIL_MESSAGE: &str = "Email is malformed";
pub const VALID_EMAIL_MESSAGE: &str = "You entered a valid email";

/// Outcome of an email check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EmailOutcome {
    /// Empty or whitespace only
    Empty,
    /// Missing an `@`
    Malformed,
    Valid,
}

impl EmailOutcome {
    pub fn is_valid(self) -> bool {
        self == EmailOutcome::Valid
    }

    pub fn message(self) -> &'static str {
        match self {
            EmailOutcome::Empty => EMPTY_EMAIL_MESSAGE,
            EmailOutcome::Malformed => MALFORMED_EMAIL_MESSAGE,
            EmailOutcome::Valid => VALID_EMAIL_MESSAGE,
        }
    }
}

/// Classify an email address
pub fn validate_email(input: &str) -> EmailOutcome {
    if input.trim().is_empty() {
        EmailOutcome::Empty
    } else if !input.contains('@') {
        EmailOutcome::Malformed
    } else {
        EmailOutcome::Valid
    }
}

/// Email page state
///
/// At most one of the two messages is non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmailState {
    raw_input: String,
    error_message: String,
    success_message: String,
}

impl EmailState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raw_input(&self) -> &str {
        &self.raw_input
    }

    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    pub fn success_message(&self) -> &str {
        &self.success_message
    }

    /// Replace the input; clears both messages
    pub fn set_input(&mut self, input: &str) {
        self.raw_input = input.to_string();
        self.error_message.clear();
        self.success_message.clear();
    }

    pub fn check(&mut self) -> EmailOutcome {
        let outcome = validate_email(&self.raw_input);
        self.error_message.clear();
        self.success_message.clear();
        if outcome.is_valid() {
            self.success_message.push_str(outcome.message());
        } else {
            self.error_message.push_str(outcome.message());
        }
        outcome
    }
}
