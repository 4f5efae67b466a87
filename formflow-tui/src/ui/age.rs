//! Age page: name and age fields, result block after a check

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Color,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use crate::app::{AppState, Focus};
use super::{accent, render_input};

pub(super) fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Name
            Constraint::Length(3), // Age
            Constraint::Min(0),    // Result
        ])
        .split(area);

    let age = state.flow.age();

    render_input(
        frame,
        chunks[0],
        "Name",
        &state.fields.name,
        state.focus == Focus::NameInput,
        &state.config,
    );
    render_input(
        frame,
        chunks[1],
        "Age (Enter to check)",
        &state.fields.age,
        state.focus == Focus::AgeInput,
        &state.config,
    );

    // Name and age are shown live; the category is the last check's
    if let Some(outcome) = age.category() {
        let lines = vec![
            Line::from(format!("Name: {}", age.name())),
            Line::from(format!("Age: {}", age.raw_age())),
            Line::from(vec![
                Span::raw("Category: "),
                Span::styled(outcome.label(), accent(&state.config, Color::Blue)),
            ]),
        ];
        let result = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Result "));
        frame.render_widget(result, chunks[2]);
    }
}
