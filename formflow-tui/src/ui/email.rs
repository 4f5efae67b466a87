//! Email page: input field and the check message

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Color,
    widgets::Paragraph,
};
use crate::app::{AppState, Focus};
use super::{accent, render_input};

pub(super) fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Email input
            Constraint::Length(1), // Message
            Constraint::Min(0),
        ])
        .split(area);

    let email = state.flow.email();

    render_input(
        frame,
        chunks[0],
        "Email (Enter to check)",
        &state.fields.email,
        state.focus == Focus::EmailInput,
        &state.config,
    );

    // At most one of the two is set
    let message = if !email.error_message().is_empty() {
        Some((email.error_message(), Color::Red))
    } else if !email.success_message().is_empty() {
        Some((email.success_message(), Color::Green))
    } else {
        None
    };

    if let Some((text, color)) = message {
        frame.render_widget(Paragraph::new(text).style(accent(&state.config, color)), chunks[1]);
    }
}
