//! UI rendering
//!
//! Rendering functions that transform state into terminal frames.
//! They read state and draw; nothing here mutates the application.

mod age;
mod email;
mod numbers;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use libformflow::Page;
use tui_textarea::TextArea;
use crate::app::{AppState, UiConfig};

/// Render the application UI
///
/// This is the main rendering entry point.
pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(6),    // Page body
            Constraint::Length(3), // Links and hints
        ])
        .split(area);

    render_title(frame, chunks[0], state);

    match state.page() {
        Page::Numbers => numbers::render(frame, chunks[1], state),
        Page::Email => email::render(frame, chunks[1], state),
        Page::Age => age::render(frame, chunks[1], state),
    }

    render_links_bar(frame, chunks[2], state);

    if let Some(ref toast) = state.toast {
        render_toast(frame, area, &toast.message, &state.config);
    }

    if state.help_visible {
        render_help_overlay(frame, area, state);
    }

    if let Some(ref error) = state.error {
        render_error_overlay(frame, area, error, state);
    }
}

/// Page title with a page indicator
fn render_title(frame: &mut Frame, area: Rect, state: &AppState) {
    let spans: Vec<Span> = Page::ALL
        .iter()
        .enumerate()
        .flat_map(|(i, page)| {
            let style = if *page == state.page() {
                accent(&state.config, Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let sep = if i == 0 { "" } else { " | " };
            [Span::raw(sep), Span::styled(page.title(), style)]
        })
        .collect();

    let title = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title(" FormFlow "))
        .alignment(Alignment::Center);

    frame.render_widget(title, area);
}

/// Navigation buttons of the current page plus key hints
fn render_links_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut spans = Vec::new();
    for (i, link) in state.page().links().iter().enumerate() {
        spans.push(Span::styled(
            format!("[F{}] {}", i + 5, link.label),
            accent(&state.config, Color::Yellow),
        ));
        spans.push(Span::raw("  "));
    }
    spans.push(Span::styled(
        "Tab: Focus | Enter: Run | F1: Help | Ctrl+Q: Quit",
        accent(&state.config, Color::Gray),
    ));

    let bar = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    frame.render_widget(bar, area);
}

/// Single-line text input; the cursor is drawn only when focused
pub(crate) fn render_input(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    editor: &TextArea<'_>,
    focused: bool,
    config: &UiConfig,
) {
    let border = if focused {
        accent(config, Color::Cyan)
    } else {
        Style::default()
    };

    let mut editor = editor.clone();
    editor.set_block(
        Block::default()
            .title(format!(" {} ", title))
            .borders(Borders::ALL)
            .border_style(border),
    );
    editor.set_cursor_line_style(Style::default());
    if !focused {
        editor.set_cursor_style(Style::default());
    }

    frame.render_widget(&editor, area);
}

/// Style with a foreground colour, or plain when colours are off
pub(crate) fn accent(config: &UiConfig, color: Color) -> Style {
    if config.colors_enabled {
        Style::default().fg(color)
    } else {
        Style::default()
    }
}

/// Toast at the bottom of the screen
fn render_toast(frame: &mut Frame, area: Rect, message: &str, config: &UiConfig) {
    let width = u16::try_from(message.chars().count() + 4)
        .unwrap_or(u16::MAX)
        .min(area.width);
    let toast_area = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + area.height.saturating_sub(6),
        width,
        height: 3.min(area.height),
    };

    let toast = Paragraph::new(message)
        .block(Block::default().borders(Borders::ALL).border_style(accent(config, Color::Green)))
        .alignment(Alignment::Center);

    frame.render_widget(Clear, toast_area);
    frame.render_widget(toast, toast_area);
}

/// Render help overlay
fn render_help_overlay(frame: &mut Frame, area: Rect, state: &AppState) {
    let popup_area = centered_rect(60, 70, area);

    let help_text = vec![
        Line::from(Span::styled("Keyboard Shortcuts", Style::default().add_modifier(Modifier::BOLD))),
        Line::from(""),
        Line::from("Global:"),
        Line::from("  Ctrl+Q   - Quit"),
        Line::from("  F1       - Toggle help"),
        Line::from("  F5 / F6  - Follow page links"),
        Line::from("  Tab      - Next field"),
        Line::from("  Esc      - Dismiss overlays"),
        Line::from("  Left/Right, Home/End - Move in field"),
        Line::from(""),
        Line::from("Numbers:"),
        Line::from("  Enter    - Generate list / check parity"),
        Line::from("  Up/Down  - Move in list"),
        Line::from(""),
        Line::from("Email, Age:"),
        Line::from("  Enter    - Check"),
        Line::from(""),
        Line::from("Press Esc or F1 to close"),
    ];

    let help = Paragraph::new(help_text)
        .block(Block::default()
            .title(" Help ")
            .borders(Borders::ALL)
            .border_style(accent(&state.config, Color::Cyan)))
        .wrap(Wrap { trim: false });

    frame.render_widget(Clear, popup_area);
    frame.render_widget(help, popup_area);
}

/// Render error overlay
fn render_error_overlay(frame: &mut Frame, area: Rect, error: &str, state: &AppState) {
    let popup_area = centered_rect(70, 30, area);

    let error_text = vec![
        Line::from(Span::styled("Error", accent(&state.config, Color::Red).add_modifier(Modifier::BOLD))),
        Line::from(""),
        Line::from(error),
        Line::from(""),
        Line::from("Press Esc to dismiss"),
    ];

    let error_widget = Paragraph::new(error_text)
        .block(Block::default()
            .title(" Error ")
            .borders(Borders::ALL)
            .border_style(accent(&state.config, Color::Red)))
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Center);

    frame.render_widget(Clear, popup_area);
    frame.render_widget(error_widget, popup_area);
}

/// Helper to create centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
