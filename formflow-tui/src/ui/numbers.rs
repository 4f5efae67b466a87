//! Numbers page: count field, error line and the generated list

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use crate::app::{AppState, Focus};
use super::{accent, render_input};

pub(super) fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Count input
            Constraint::Length(1), // Error line
            Constraint::Min(3),    // List
        ])
        .split(area);

    render_input(
        frame,
        chunks[0],
        "Count (Enter to generate)",
        &state.fields.count,
        state.focus == Focus::CountInput,
        &state.config,
    );

    if let Some(message) = state.flow.numbers().error_message() {
        let error = Paragraph::new(message).style(accent(&state.config, Color::Red));
        frame.render_widget(error, chunks[1]);
    }

    render_list(frame, chunks[2], state);
}

/// Visible window of the list around the cursor
///
/// The list can be very long, so only the rows that fit are built.
fn render_list(frame: &mut Frame, area: Rect, state: &AppState) {
    let numbers = state.flow.numbers();
    let focused = state.focus == Focus::NumberList;
    let height = usize::from(area.height.saturating_sub(2)).max(1);
    let cursor = state.list_cursor.min(numbers.len().saturating_sub(1));
    let start = cursor.saturating_sub(height - 1);

    let items: Vec<ListItem> = (start..start + height)
        .map_while(|index| numbers.get(index))
        .map(|num| ListItem::new(Line::from(num.to_string()).alignment(Alignment::Center)))
        .collect();

    let title = format!(" List ({}) ", numbers.len());
    let border = if focused {
        accent(&state.config, Color::Cyan)
    } else {
        Style::default()
    };
    let highlight = if state.config.colors_enabled {
        Style::default().bg(Color::Red).fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::REVERSED)
    };

    let list = List::new(items)
        .block(Block::default().title(title).borders(Borders::ALL).border_style(border))
        .highlight_style(highlight)
        .highlight_symbol(if state.config.unicode_enabled { "▶ " } else { "> " });

    let mut list_state = ListState::default();
    if focused && !numbers.is_empty() {
        list_state.select(Some(cursor - start));
    }

    frame.render_stateful_widget(list, area, &mut list_state);
}
