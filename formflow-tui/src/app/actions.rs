//! Actions for the reducer pattern
//!
//! All state transitions are triggered by actions. Form actions map one to
//! one onto the `FormFlowController` entry points.

use crossterm::event::KeyEvent;
use libformflow::Page;

/// Actions that trigger state transitions
#[derive(Debug, Clone)]
pub enum Action {
    // === UI Events ===
    /// Keyboard input event
    Key(KeyEvent),

    /// Periodic tick, drives toast expiry
    Tick,

    /// Terminal resize event
    Resize(u16, u16),

    // === Navigation ===
    /// Navigate to a page (rejected unless the current page links to it)
    Navigate(Page),

    /// Follow the n-th link of the current page
    FollowLink(usize),

    /// Quit the application
    Quit,

    /// Show help overlay
    ShowHelp,

    /// Hide help overlay
    HideHelp,

    /// Move focus to the next widget on the current page
    FocusNext,

    /// Move focus to the previous widget on the current page
    FocusPrev,

    // === Page 1: Numbers ===
    /// Count field edited (not yet submitted)
    CountInputChanged(String),

    /// Generate the list from the count field
    GenerateList,

    /// Move the list cursor up
    CursorUp,

    /// Move the list cursor down
    CursorDown,

    /// A list item was clicked
    ClickListItem(i32),

    // === Page 2: Email ===
    EmailChanged(String),

    CheckEmail,

    // === Page 3: Age ===
    NameChanged(String),

    AgeChanged(String),

    CheckAge,

    // === Messages ===
    /// Show a transient message
    ShowToast(String),

    /// Show error overlay
    ShowError(String),

    /// Dismiss error overlay
    DismissError,
}
