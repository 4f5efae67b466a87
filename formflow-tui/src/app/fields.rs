//! Single-line text fields backed by tui-textarea
//!
//! The editors own cursor position and editing. Their contents are synced
//! into the form state through the `*Changed` actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_textarea::{CursorMove, TextArea};

use super::state::Focus;

/// One editor per text field, across all pages
#[derive(Debug, Clone, Default)]
pub struct FieldEditors {
    pub count: TextArea<'static>,
    pub email: TextArea<'static>,
    pub name: TextArea<'static>,
    pub age: TextArea<'static>,
}

impl FieldEditors {
    pub fn get(&self, focus: Focus) -> Option<&TextArea<'static>> {
        match focus {
            Focus::CountInput => Some(&self.count),
            Focus::EmailInput => Some(&self.email),
            Focus::NameInput => Some(&self.name),
            Focus::AgeInput => Some(&self.age),
            Focus::NumberList => None,
        }
    }

    fn get_mut(&mut self, focus: Focus) -> Option<&mut TextArea<'static>> {
        match focus {
            Focus::CountInput => Some(&mut self.count),
            Focus::EmailInput => Some(&mut self.email),
            Focus::NameInput => Some(&mut self.name),
            Focus::AgeInput => Some(&mut self.age),
            Focus::NumberList => None,
        }
    }

    /// Contents of a field
    pub fn text(&self, focus: Focus) -> Option<String> {
        self.get(focus).map(|editor| editor.lines().concat())
    }

    /// Feed a key to a field, returning its contents if the text changed
    ///
    /// Line breaks are refused so every field stays on one line.
    pub fn input(&mut self, focus: Focus, key: KeyEvent) -> Option<String> {
        if is_line_break(key) {
            return None;
        }
        let editor = self.get_mut(focus)?;
        if !editor.input(key) {
            return None;
        }
        Some(editor.lines().concat())
    }

    /// Replace a field's contents if they differ, cursor at the end
    pub fn sync(&mut self, focus: Focus, text: &str) {
        let Some(editor) = self.get_mut(focus) else {
            return;
        };
        if editor.lines().concat() != text {
            *editor = single_line(text);
        }
    }
}

fn single_line(text: &str) -> TextArea<'static> {
    let mut editor = TextArea::new(vec![text.to_string()]);
    editor.move_cursor(CursorMove::End);
    editor
}

fn is_line_break(key: KeyEvent) -> bool {
    matches!(
        (key.code, key.modifiers),
        (KeyCode::Enter, _) | (KeyCode::Char('m' | 'j'), KeyModifiers::CONTROL)
    )
}
