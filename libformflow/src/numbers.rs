//! Page 1: number list generation
//!
//! The user enters a count and gets the buttons `1..=n`. Clicking a button
//! reports whether that number is even or odd.

use std::fmt;

use serde::Serialize;

/// Message shown when the input does not parse as an integer
pub const INVALID_INPUT_MESSAGE: &str = "The data you entered is invalid";

/// Parity of a clicked number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    pub fn of(num: i32) -> Self {
        if num % 2 == 0 {
            Parity::Even
        } else {
            Parity::Odd
        }
    }
}

impl fmt::Display for Parity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Parity::Even => write!(f, "even"),
            Parity::Odd => write!(f, "odd"),
        }
    }
}

/// Result of clicking a list item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParityReport {
    pub number: i32,
    pub parity: Parity,
}

impl ParityReport {
    pub fn new(number: i32) -> Self {
        Self {
            number,
            parity: Parity::of(number),
        }
    }

    /// Display message for the report
    pub fn message(&self) -> String {
        match self.parity {
            Parity::Even => format!("Correct: {} is even", self.number),
            Parity::Odd => format!("Wrong: {} is odd", self.number),
        }
    }
}

/// Number list page state
///
/// The generated list is always `1..=generated_upto`, so it is stored as its
/// upper bound. A bound of zero means the list is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumberListState {
    raw_input: String,
    is_error: bool,
    generated_upto: i32,
    last_report: Option<ParityReport>,
}

impl NumberListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raw_input(&self) -> &str {
        &self.raw_input
    }

    pub fn is_error(&self) -> bool {
        self.is_error
    }

    /// Error message to display, if the last generate failed
    pub fn error_message(&self) -> Option<&'static str> {
        self.is_error.then_some(INVALID_INPUT_MESSAGE)
    }

    /// Generated numbers in order
    pub fn generated_list(&self) -> impl DoubleEndedIterator<Item = i32> {
        1..=self.generated_upto.max(0)
    }

    pub fn len(&self) -> usize {
        self.generated_upto.max(0) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.generated_upto <= 0
    }

    /// Number at a zero-based position in the list
    pub fn get(&self, index: usize) -> Option<i32> {
        if index < self.len() {
            i32::try_from(index).ok().map(|i| i + 1)
        } else {
            None
        }
    }

    pub fn contains(&self, num: i32) -> bool {
        num >= 1 && num <= self.generated_upto
    }

    pub fn last_report(&self) -> Option<&ParityReport> {
        self.last_report.as_ref()
    }

    /// Store the input and regenerate the list from it
    ///
    /// Input that is not an integer sets the error flag and empties the
    /// list. Zero or negative counts produce an empty list without error.
    pub fn generate(&mut self, input: &str) {
        self.raw_input = input.to_string();
        self.last_report = None;
        match input.parse::<i32>() {
            Ok(n) => {
                self.is_error = false;
                self.generated_upto = n.max(0);
            }
            Err(_) => {
                self.is_error = true;
                self.generated_upto = 0;
            }
        }
    }

    /// Report the parity of a clicked number
    ///
    /// Returns `None` when `num` is not in the current list.
    pub fn click(&mut self, num: i32) -> Option<ParityReport> {
        if !self.contains(num) {
            return None;
        }
        let report = ParityReport::new(num);
        self.last_report = Some(report.clone());
        Some(report)
    }
}
