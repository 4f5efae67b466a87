//! Application state
//!
//! All state transitions happen through the reducer (see `reducer.rs`).
//! Page state lives in the `FormFlowController`; this module adds what only
//! the terminal front end needs (focus, list cursor, overlays, toast).

use libformflow::config::{Config, UiSettings};
use libformflow::{FormFlowController, Page};

use super::fields::FieldEditors;

/// Root application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Should the application quit?
    pub should_quit: bool,

    /// Form pages and current page
    pub flow: FormFlowController,

    /// Focused widget on the current page
    pub focus: Focus,

    /// Count field contents, submitted on generate
    pub count_draft: String,

    /// Text field editors
    pub fields: FieldEditors,

    /// Selected index in the number list
    pub list_cursor: usize,

    /// Transient message (parity reports)
    pub toast: Option<Toast>,

    /// Help overlay visible?
    pub help_visible: bool,

    /// Error overlay state
    pub error: Option<String>,

    /// UI configuration
    pub config: UiConfig,
}

/// Focusable widgets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    CountInput,
    NumberList,
    EmailInput,
    NameInput,
    AgeInput,
}

impl Focus {
    /// Focus order on a page
    pub fn order(page: Page) -> &'static [Focus] {
        match page {
            Page::Numbers => &[Focus::CountInput, Focus::NumberList],
            Page::Email => &[Focus::EmailInput],
            Page::Age => &[Focus::NameInput, Focus::AgeInput],
        }
    }

    /// Initial focus when entering a page
    pub fn initial(page: Page) -> Self {
        Self::order(page)[0]
    }

    pub fn next(self, page: Page) -> Self {
        Self::step(self, page, 1)
    }

    pub fn prev(self, page: Page) -> Self {
        let len = Self::order(page).len();
        Self::step(self, page, len - 1)
    }

    fn step(self, page: Page, by: usize) -> Self {
        let order = Self::order(page);
        match order.iter().position(|f| *f == self) {
            Some(pos) => order[(pos + by) % order.len()],
            None => order[0],
        }
    }

    /// Whether the widget is a text field
    pub fn is_text(self) -> bool {
        !matches!(self, Focus::NumberList)
    }
}

/// Transient message with a lifetime in ticks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub ticks_remaining: u32,
}

/// UI configuration
#[derive(Debug, Clone)]
pub struct UiConfig {
    /// Use colors?
    pub colors_enabled: bool,

    /// Use unicode symbols (false = ASCII fallback)
    pub unicode_enabled: bool,

    /// Tick rate in milliseconds
    pub tick_rate_ms: u64,

    /// Toast lifetime in ticks
    pub toast_ticks: u32,
}

impl UiConfig {
    pub fn from_settings(settings: &UiSettings) -> Self {
        let tick_rate_ms = settings.tick_rate_ms.max(1);
        let toast_ticks = (settings.toast_ms / tick_rate_ms).max(1);

        Self {
            colors_enabled: settings.colors,
            unicode_enabled: settings.unicode,
            tick_rate_ms,
            toast_ticks: u32::try_from(toast_ticks).unwrap_or(u32::MAX),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        // Defaults plus environment overrides, no config file
        let mut config = Config::default();
        config.apply_env();
        Self::from_settings(&config.ui)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_config(UiConfig::default())
    }
}

impl AppState {
    /// Create new application state with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: UiConfig) -> Self {
        let flow = FormFlowController::new();
        Self {
            should_quit: false,
            focus: Focus::initial(flow.page()),
            flow,
            count_draft: String::new(),
            fields: FieldEditors::default(),
            list_cursor: 0,
            toast: None,
            help_visible: false,
            error: None,
            config,
        }
    }

    pub fn page(&self) -> Page {
        self.flow.page()
    }

    /// Is an overlay capturing input?
    pub fn overlay_visible(&self) -> bool {
        self.help_visible || self.error.is_some()
    }

    /// Number under the list cursor
    pub fn selected_number(&self) -> Option<i32> {
        self.flow.numbers().get(self.list_cursor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_cycles_within_page() {
        let focus = Focus::initial(Page::Age);
        assert_eq!(focus, Focus::NameInput);
        assert_eq!(focus.next(Page::Age), Focus::AgeInput);
        assert_eq!(focus.next(Page::Age).next(Page::Age), Focus::NameInput);
        assert_eq!(focus.prev(Page::Age), Focus::AgeInput);
    }

    #[test]
    fn test_single_widget_page_keeps_focus() {
        assert_eq!(Focus::EmailInput.next(Page::Email), Focus::EmailInput);
    }

    #[test]
    fn test_foreign_focus_resets_to_first() {
        assert_eq!(Focus::EmailInput.next(Page::Numbers), Focus::CountInput);
    }

    #[test]
    fn test_toast_ticks_from_settings() {
        let settings = UiSettings {
            tick_rate_ms: 100,
            toast_ms: 2000,
            colors: true,
            unicode: true,
        };
        assert_eq!(UiConfig::from_settings(&settings).toast_ticks, 20);

        let settings = UiSettings {
            tick_rate_ms: 500,
            toast_ms: 100,
            colors: true,
            unicode: false,
        };
        let config = UiConfig::from_settings(&settings);
        assert_eq!(config.toast_ticks, 1);
        assert!(config.colors_enabled);
        assert!(!config.unicode_enabled);
    }
}
