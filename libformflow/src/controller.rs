//! Form flow controller
//!
//! Owns the state of all three pages plus the current page. The caller
//! reads state through the accessors, forwards user input to the `on_*`
//! methods and re-renders after each call. Every action completes
//! synchronously.
//!
//! # Example
//!
//! ```
//! use libformflow::{FormFlowController, Page};
//!
//! let mut flow = FormFlowController::new();
//! flow.on_generate_list("3");
//! assert_eq!(flow.numbers().generated_list().collect::<Vec<_>>(), vec![1, 2, 3]);
//!
//! flow.on_navigate(Page::Email).unwrap();
//! flow.on_email_change("a@b.com");
//! assert!(flow.on_check_email().is_valid());
//! ```

use tracing::debug;

use crate::age::{AgeOutcome, AgeState};
use crate::email::{EmailOutcome, EmailState};
use crate::error::Result;
use crate::navigation::Page;
use crate::numbers::{NumberListState, ParityReport};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFlowController {
    page: Page,
    numbers: NumberListState,
    email: EmailState,
    age: AgeState,
}

impl FormFlowController {
    /// Fresh controller on the numbers page with empty state
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn numbers(&self) -> &NumberListState {
        &self.numbers
    }

    pub fn email(&self) -> &EmailState {
        &self.email
    }

    pub fn age(&self) -> &AgeState {
        &self.age
    }

    // === Page 1 ===

    pub fn on_generate_list(&mut self, input: &str) {
        self.numbers.generate(input);
        debug!(
            page = %Page::Numbers,
            is_error = self.numbers.is_error(),
            len = self.numbers.len(),
            "generate list"
        );
    }

    /// Report parity for a clicked list item, `None` if it is not listed
    pub fn on_click_list_item(&mut self, num: i32) -> Option<ParityReport> {
        let report = self.numbers.click(num);
        debug!(page = %Page::Numbers, num, parity = ?report.as_ref().map(|r| r.parity), "click list item");
        report
    }

    // === Page 2 ===

    pub fn on_email_change(&mut self, input: &str) {
        self.email.set_input(input);
        debug!(page = %Page::Email, len = input.len(), "email changed");
    }

    pub fn on_check_email(&mut self) -> EmailOutcome {
        let outcome = self.email.check();
        debug!(page = %Page::Email, outcome = ?outcome, "check email");
        outcome
    }

    // === Page 3 ===

    pub fn on_name_change(&mut self, input: &str) {
        self.age.set_name(input);
        debug!(page = %Page::Age, len = input.len(), "name changed");
    }

    pub fn on_age_change(&mut self, input: &str) {
        self.age.set_age(input);
        debug!(page = %Page::Age, len = input.len(), "age changed");
    }

    pub fn on_check_age(&mut self) -> AgeOutcome {
        let outcome = self.age.check();
        debug!(page = %Page::Age, outcome = %outcome, "check age");
        outcome
    }

    // === Navigation ===

    /// Move to `target` if the current page links to it
    ///
    /// On error the current page is unchanged. Page state is never reset.
    pub fn on_navigate(&mut self, target: Page) -> Result<Page> {
        let next = self.page.navigate(target)?;
        debug!(from = %self.page, to = %next, "navigate");
        self.page = next;
        Ok(next)
    }
}
