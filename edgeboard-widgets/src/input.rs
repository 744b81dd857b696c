//! Single-line text editor state shared by the filter box and autocomplete.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Text content and cursor state for a single-line input.
///
/// The cursor is a character index into `text`. All editing operations are
/// char-boundary safe.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    text: String,
    cursor: usize,
}

/// Result of handling one key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    /// Text was modified.
    Changed,
    /// Enter was pressed.
    Submitted,
    /// Key was handled but text didn't change (cursor movement).
    Handled,
    /// Key was not handled, should be passed through.
    Ignored,
}

impl InputState {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self { text, cursor }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Replace the text, placing the cursor at the end.
    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.text.chars().count();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Handle a key press for text editing.
    pub fn handle_key(&mut self, key: KeyEvent) -> InputOutcome {
        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.insert_char(c);
                InputOutcome::Changed
            }

            KeyCode::Backspace => {
                if self.delete_back() {
                    InputOutcome::Changed
                } else {
                    InputOutcome::Handled
                }
            }

            KeyCode::Delete => {
                if self.delete_forward() {
                    InputOutcome::Changed
                } else {
                    InputOutcome::Handled
                }
            }

            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                InputOutcome::Handled
            }

            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(self.text.chars().count());
                InputOutcome::Handled
            }

            KeyCode::Home => {
                self.cursor = 0;
                InputOutcome::Handled
            }

            KeyCode::End => {
                self.cursor = self.text.chars().count();
                InputOutcome::Handled
            }

            KeyCode::Enter => InputOutcome::Submitted,

            _ => InputOutcome::Ignored,
        }
    }

    fn insert_char(&mut self, c: char) {
        let byte_pos = char_to_byte_index(&self.text, self.cursor);
        self.text.insert(byte_pos, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor. Returns true if text changed.
    fn delete_back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let start = char_to_byte_index(&self.text, self.cursor - 1);
        let end = char_to_byte_index(&self.text, self.cursor);
        self.text.replace_range(start..end, "");
        self.cursor -= 1;
        true
    }

    /// Delete the character at the cursor. Returns true if text changed.
    fn delete_forward(&mut self) -> bool {
        if self.cursor >= self.text.chars().count() {
            return false;
        }
        let start = char_to_byte_index(&self.text, self.cursor);
        let end = char_to_byte_index(&self.text, self.cursor + 1);
        self.text.replace_range(start..end, "");
        true
    }
}

/// Convert character index to byte index in a string.
fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn insert_and_delete_multibyte() {
        let mut input = InputState::new("né");
        assert_eq!(input.cursor(), 2);
        assert_eq!(input.handle_key(key(KeyCode::Char('t'))), InputOutcome::Changed);
        assert_eq!(input.text(), "nét");
        assert_eq!(input.handle_key(key(KeyCode::Backspace)), InputOutcome::Changed);
        assert_eq!(input.handle_key(key(KeyCode::Backspace)), InputOutcome::Changed);
        assert_eq!(input.text(), "n");
    }

    #[test]
    fn backspace_at_start_is_a_no_op() {
        let mut input = InputState::new("a");
        input.handle_key(key(KeyCode::Home));
        assert_eq!(input.handle_key(key(KeyCode::Backspace)), InputOutcome::Handled);
        assert_eq!(input.text(), "a");
    }

    #[test]
    fn delete_forward_in_middle() {
        let mut input = InputState::new("abc");
        input.handle_key(key(KeyCode::Home));
        input.handle_key(key(KeyCode::Right));
        assert_eq!(input.handle_key(key(KeyCode::Delete)), InputOutcome::Changed);
        assert_eq!(input.text(), "ac");
    }
}
