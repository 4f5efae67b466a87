//! Reducer function for state transitions
//!
//! `(State, Action) -> State`. No I/O happens here; form logic is
//! delegated to the `FormFlowController` owned by the state.

use super::actions::Action;
use super::state::{AppState, Focus, Toast};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Reducer function
///
/// Takes current state and an action, returns new state.
pub fn reduce(state: AppState, action: Action) -> AppState {
    let mut state = state;

    match action {
        // === UI Events ===
        Action::Key(key) => return handle_key(state, key),
        Action::Tick => {
            state.toast = state.toast.and_then(|toast| {
                let ticks_remaining = toast.ticks_remaining.saturating_sub(1);
                (ticks_remaining > 0).then_some(Toast { ticks_remaining, ..toast })
            });
        }
        Action::Resize(_, _) => {} // Terminal auto-handles resize

        // === Navigation ===
        Action::Navigate(page) => match state.flow.on_navigate(page) {
            Ok(page) => {
                state.focus = Focus::initial(page);
                state.toast = None;
            }
            Err(e) => return reduce(state, Action::ShowError(e.to_string())),
        },

        Action::FollowLink(index) => {
            if let Some(link) = state.page().links().get(index) {
                return reduce(state, Action::Navigate(link.target));
            }
        }

        Action::Quit => state.should_quit = true,

        Action::ShowHelp => state.help_visible = true,

        Action::HideHelp => state.help_visible = false,

        Action::FocusNext => state.focus = state.focus.next(state.page()),

        Action::FocusPrev => state.focus = state.focus.prev(state.page()),

        // === Page 1 ===
        Action::CountInputChanged(input) => {
            state.fields.sync(Focus::CountInput, &input);
            state.count_draft = input;
        }

        Action::GenerateList => {
            let input = state.count_draft.clone();
            state.flow.on_generate_list(&input);
            state.list_cursor = 0;
            state.toast = None;
        }

        Action::CursorUp => state.list_cursor = state.list_cursor.saturating_sub(1),

        Action::CursorDown => {
            let last = state.flow.numbers().len().saturating_sub(1);
            state.list_cursor = (state.list_cursor + 1).min(last);
        }

        Action::ClickListItem(num) => {
            if let Some(report) = state.flow.on_click_list_item(num) {
                return reduce(state, Action::ShowToast(report.message()));
            }
        }

        // === Page 2 ===
        Action::EmailChanged(input) => {
            state.fields.sync(Focus::EmailInput, &input);
            state.flow.on_email_change(&input);
        }

        Action::CheckEmail => {
            state.flow.on_check_email();
        }

        // === Page 3 ===
        Action::NameChanged(input) => {
            state.fields.sync(Focus::NameInput, &input);
            state.flow.on_name_change(&input);
        }

        Action::AgeChanged(input) => {
            state.fields.sync(Focus::AgeInput, &input);
            state.flow.on_age_change(&input);
        }

        Action::CheckAge => {
            state.flow.on_check_age();
        }

        // === Messages ===
        Action::ShowToast(message) => {
            state.toast = Some(Toast {
                message,
                ticks_remaining: state.config.toast_ticks,
            });
        }

        Action::ShowError(error) => state.error = Some(error),

        Action::DismissError => state.error = None,
    }

    state
}

/// Handle keyboard input
///
/// Maps keys to high-level actions. This is where keybindings are defined.
fn handle_key(state: AppState, key: KeyEvent) -> AppState {
    if key.kind == KeyEventKind::Release {
        return state;
    }

    // Global keybindings (work everywhere)
    match (key.code, key.modifiers) {
        // Quit
        (KeyCode::Char('c'), KeyModifiers::CONTROL) | (KeyCode::Char('q'), KeyModifiers::CONTROL) => {
            return reduce(state, Action::Quit);
        }

        // Help
        (KeyCode::F(1), _) => {
            let action = if state.help_visible { Action::HideHelp } else { Action::ShowHelp };
            return reduce(state, action);
        }

        // Dismiss error
        (KeyCode::Esc, _) if state.error.is_some() => {
            return reduce(state, Action::DismissError);
        }

        // Hide help
        (KeyCode::Esc, _) if state.help_visible => {
            return reduce(state, Action::HideHelp);
        }

        _ => {}
    }

    // Overlays swallow everything else
    if state.overlay_visible() {
        return state;
    }

    match (key.code, key.modifiers) {
        // Page links
        (KeyCode::F(5), _) => reduce(state, Action::FollowLink(0)),
        (KeyCode::F(6), _) => reduce(state, Action::FollowLink(1)),

        // Focus
        (KeyCode::Tab, _) => reduce(state, Action::FocusNext),
        (KeyCode::BackTab, _) => reduce(state, Action::FocusPrev),

        _ => handle_page_key(state, key),
    }
}

/// Handle keys for the focused widget
fn handle_page_key(state: AppState, key: KeyEvent) -> AppState {
    match (state.focus, key.code) {
        (Focus::NumberList, KeyCode::Up) => reduce(state, Action::CursorUp),
        (Focus::NumberList, KeyCode::Down) => reduce(state, Action::CursorDown),
        (Focus::NumberList, KeyCode::Enter) => match state.selected_number() {
            Some(num) => reduce(state, Action::ClickListItem(num)),
            None => state,
        },

        (Focus::CountInput, KeyCode::Enter) => reduce(state, Action::GenerateList),
        (Focus::EmailInput, KeyCode::Enter) => reduce(state, Action::CheckEmail),
        (Focus::NameInput | Focus::AgeInput, KeyCode::Enter) => reduce(state, Action::CheckAge),

        (focus, _) if focus.is_text() => edit_focused(state, key),

        _ => state,
    }
}

/// Feed the key to the focused field's editor and dispatch its new contents
fn edit_focused(mut state: AppState, key: KeyEvent) -> AppState {
    let focus = state.focus;
    let Some(text) = state.fields.input(focus, key) else {
        return state;
    };

    let action = match focus {
        Focus::CountInput => Action::CountInputChanged(text),
        Focus::EmailInput => Action::EmailChanged(text),
        Focus::NameInput => Action::NameChanged(text),
        Focus::AgeInput => Action::AgeChanged(text),
        Focus::NumberList => return state,
    };
    reduce(state, action)
}

#[cfg(test)]
mod tests {
    use super::*;
    use libformflow::Page;

    #[test]
    fn test_reducer_returns_new_state() {
        let state = AppState::new();
        let state_clone = state.clone();

        let new_state = reduce(state_clone.clone(), Action::ShowError("Test".to_string()));

        // Original state unchanged
        assert!(state_clone.error.is_none());

        // New state has the change
        assert_eq!(new_state.error, Some("Test".to_string()));
    }

    #[test]
    fn test_quit_action() {
        let state = AppState::new();
        assert!(!state.should_quit);

        let new_state = reduce(state, Action::Quit);
        assert!(new_state.should_quit);
    }

    #[test]
    fn test_rejected_navigation_shows_error() {
        let state = AppState::new();
        let state = reduce(state, Action::Navigate(Page::Age));

        assert_eq!(state.page(), Page::Numbers);
        assert_eq!(state.error.as_deref(), Some("No navigation link from page1 to page3"));
    }

    #[test]
    fn test_programmatic_change_syncs_editor() {
        let state = reduce(AppState::new(), Action::CountInputChanged("42".to_string()));
        assert_eq!(state.fields.text(Focus::CountInput).as_deref(), Some("42"));
        assert_eq!(state.count_draft, "42");
    }

    #[test]
    fn test_navigation_resets_focus() {
        let mut state = AppState::new();
        state.focus = Focus::NumberList;

        let state = reduce(state, Action::Navigate(Page::Email));
        assert_eq!(state.focus, Focus::EmailInput);
    }

    #[test]
    fn test_toast_expires_after_ticks() {
        let mut state = AppState::new();
        state.config.toast_ticks = 2;

        state = reduce(state, Action::ShowToast("hi".to_string()));
        state = reduce(state, Action::Tick);
        assert!(state.toast.is_some());
        state = reduce(state, Action::Tick);
        assert!(state.toast.is_none());
    }

    #[test]
    fn test_cursor_clamped_to_list() {
        let mut state = AppState::new();
        state = reduce(state, Action::CountInputChanged("2".to_string()));
        state = reduce(state, Action::GenerateList);

        for _ in 0..5 {
            state = reduce(state, Action::CursorDown);
        }
        assert_eq!(state.list_cursor, 1);

        for _ in 0..5 {
            state = reduce(state, Action::CursorUp);
        }
        assert_eq!(state.list_cursor, 0);
    }

    #[test]
    fn test_follow_missing_link_is_noop() {
        let state = AppState::new();
        let state = reduce(state, Action::FollowLink(1));
        assert_eq!(state.page(), Page::Numbers);
        assert!(state.error.is_none());
    }
}
