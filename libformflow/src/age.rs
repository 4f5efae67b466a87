//! Page 3: age categorization
//!
//! The buckets overlap at 6 (`2..=6` and `6..=65`). They are evaluated in
//! order and the first match wins, so 6 is a child.

use std::fmt;

use serde::Serialize;

pub const INVALID_AGE_MESSAGE: &str = "invalid age";

/// Age bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AgeCategory {
    Infant,
    Child,
    Adult,
    Elderly,
}

impl AgeCategory {
    /// Bucket for a parsed age, first match wins
    pub fn of(age: i32) -> Self {
        if age < 2 {
            AgeCategory::Infant
        } else if (2..=6).contains(&age) {
            AgeCategory::Child
        } else if (6..=65).contains(&age) {
            AgeCategory::Adult
        } else {
            AgeCategory::Elderly
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AgeCategory::Infant => "infant (<2)",
            AgeCategory::Child => "child (2-6)",
            AgeCategory::Adult => "adult (6-65)",
            AgeCategory::Elderly => "elderly (>65)",
        }
    }
}

/// Result of an age check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "category", rename_all = "lowercase")]
pub enum AgeOutcome {
    Categorized(AgeCategory),
    Invalid,
}

impl AgeOutcome {
    pub fn label(self) -> &'static str {
        match self {
            AgeOutcome::Categorized(category) => category.label(),
            AgeOutcome::Invalid => INVALID_AGE_MESSAGE,
        }
    }

    pub fn category(self) -> Option<AgeCategory> {
        match self {
            AgeOutcome::Categorized(category) => Some(category),
            AgeOutcome::Invalid => None,
        }
    }
}

impl fmt::Display for AgeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Categorize a raw age string
pub fn categorize_age(raw_age: &str) -> AgeOutcome {
    match raw_age.parse::<i32>() {
        Ok(age) => AgeOutcome::Categorized(AgeCategory::of(age)),
        Err(_) => AgeOutcome::Invalid,
    }
}

/// Age page state
///
/// `category` is only written by [`AgeState::check`]; edits to the name or
/// age leave the previous result on display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AgeState {
    name: String,
    raw_age: String,
    category: Option<AgeOutcome>,
}

impl AgeState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn raw_age(&self) -> &str {
        &self.raw_age
    }

    /// Last check result, `None` before the first check
    pub fn category(&self) -> Option<AgeOutcome> {
        self.category
    }

    pub fn set_name(&mut self, input: &str) {
        self.name = input.to_string();
    }

    pub fn set_age(&mut self, input: &str) {
        self.raw_age = input.to_string();
    }

    pub fn check(&mut self) -> AgeOutcome {
        let outcome = categorize_age(&self.raw_age);
        self.category = Some(outcome);
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries() {
        assert_eq!(AgeCategory::of(1), AgeCategory::Infant);
        assert_eq!(AgeCategory::of(2), AgeCategory::Child);
        assert_eq!(AgeCategory::of(6), AgeCategory::Child);
        assert_eq!(AgeCategory::of(7), AgeCategory::Adult);
        assert_eq!(AgeCategory::of(65), AgeCategory::Adult);
        assert_eq!(AgeCategory::of(66), AgeCategory::Elderly);
    }

    #[test]
    fn test_negative_age_is_infant() {
        assert_eq!(AgeCategory::of(-3), AgeCategory::Infant);
    }

    #[test]
    fn test_categorize_invalid() {
        assert_eq!(categorize_age("x"), AgeOutcome::Invalid);
        assert_eq!(categorize_age(""), AgeOutcome::Invalid);
        assert_eq!(categorize_age("12.5"), AgeOutcome::Invalid);
        assert_eq!(categorize_age("x").label(), "invalid age");
    }

    #[test]
    fn test_no_category_before_check() {
        let mut state = AgeState::new();
        state.set_name("Ana");
        state.set_age("30");
        assert!(state.category().is_none());
    }

    #[test]
    fn test_edits_keep_previous_result() {
        let mut state = AgeState::new();
        state.set_age("70");
        assert_eq!(state.check(), AgeOutcome::Categorized(AgeCategory::Elderly));

        state.set_age("1");
        state.set_name("Someone");
        assert_eq!(state.category(), Some(AgeOutcome::Categorized(AgeCategory::Elderly)));

        state.check();
        assert_eq!(state.category(), Some(AgeOutcome::Categorized(AgeCategory::Infant)));
    }

    #[test]
    fn test_outcome_label() {
        assert_eq!(categorize_age("6").to_string(), "child (2-6)");
        assert_eq!(categorize_age("40").category(), Some(AgeCategory::Adult));
    }
}
