use crate::core::NodeId;
use crate::input::{Input, InputBase, KeyResult};
use crate::terminal::{KeyCode, KeyModifiers};
use crate::ui::view::ViewNode;
use unicode_width::UnicodeWidthChar;

/// Single-line editor. `cursor` counts chars, not bytes.
pub struct TextInput {
    base: InputBase,
    value: String,
    cursor: usize,
}

impl TextInput {
    pub fn new(id: impl Into<NodeId>, label: impl Into<String>) -> Self {
        Self {
            base: InputBase::new(id, label),
            value: String::new(),
            cursor: 0,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn char_len(&self) -> usize {
        self.value.chars().count()
    }

    fn byte_index(&self, char_pos: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    fn insert_char(&mut self, ch: char) {
        let at = self.byte_index(self.cursor);
        self.value.insert(at, ch);
        self.cursor += 1;
    }

    fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let at = self.byte_index(self.cursor - 1);
        self.value.remove(at);
        self.cursor -= 1;
    }

    fn delete(&mut self) {
        if self.cursor >= self.char_len() {
            return;
        }
        let at = self.byte_index(self.cursor);
        self.value.remove(at);
    }

    fn is_separator(ch: char) -> bool {
        ch.is_whitespace() || matches!(ch, '.' | '/' | ',' | '-' | '@')
    }

    /// Start of the word left of the cursor, skipping separators first.
    fn word_start_left(&self) -> usize {
        let chars: Vec<char> = self.value.chars().collect();
        let mut pos = self.cursor;
        while pos > 0 && Self::is_separator(chars[pos - 1]) {
            pos -= 1;
        }
        while pos > 0 && !Self::is_separator(chars[pos - 1]) {
            pos -= 1;
        }
        pos
    }

    fn word_end_right(&self) -> usize {
        let chars: Vec<char> = self.value.chars().collect();
        let mut pos = self.cursor;
        while pos < chars.len() && Self::is_separator(chars[pos]) {
            pos += 1;
        }
        while pos < chars.len() && !Self::is_separator(chars[pos]) {
            pos += 1;
        }
        pos
    }

    fn remove_chars(&mut self, from: usize, to: usize) {
        let start = self.byte_index(from);
        let end = self.byte_index(to);
        self.value.replace_range(start..end, "");
    }

    fn cursor_column(&self) -> usize {
        self.value
            .chars()
            .take(self.cursor)
            .map(|c| c.width().unwrap_or(0))
            .sum()
    }
}

impl Input for TextInput {
    fn id(&self) -> &NodeId {
        &self.base.id
    }

    fn label(&self) -> &str {
        &self.base.label
    }

    fn value(&self) -> String {
        self.value.clone()
    }

    fn set_value(&mut self, value: String) {
        self.cursor = value.chars().count();
        self.value = value;
    }

    fn is_focused(&self) -> bool {
        self.base.focused
    }

    fn set_focused(&mut self, focused: bool) {
        self.base.focused = focused;
    }

    fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> KeyResult {
        let word_wise = modifiers.contains(KeyModifiers::CONTROL);
        match code {
            KeyCode::Char(ch)
                if !modifiers.contains(KeyModifiers::CONTROL) && !modifiers.contains(KeyModifiers::ALT) =>
            {
                self.insert_char(ch);
                KeyResult::Handled
            }
            KeyCode::Backspace => {
                self.backspace();
                KeyResult::Handled
            }
            KeyCode::Delete => {
                self.delete();
                KeyResult::Handled
            }
            KeyCode::Left => {
                self.cursor = if word_wise {
                    self.word_start_left()
                } else {
                    self.cursor.saturating_sub(1)
                };
                KeyResult::Handled
            }
            KeyCode::Right => {
                self.cursor = if word_wise {
                    self.word_end_right()
                } else {
                    (self.cursor + 1).min(self.char_len())
                };
                KeyResult::Handled
            }
            KeyCode::Home => {
                self.cursor = 0;
                KeyResult::Handled
            }
            KeyCode::End => {
                self.cursor = self.char_len();
                KeyResult::Handled
            }
            KeyCode::Enter => KeyResult::Advance,
            _ => KeyResult::NotHandled,
        }
    }

    fn view(&self) -> ViewNode {
        ViewNode::text_box(self.base.id.clone(), self.value.clone())
            .with_focus(self.base.focused, Some(self.cursor_column()))
    }

    fn delete_word(&mut self) {
        let start = self.word_start_left();
        self.remove_chars(start, self.cursor);
        self.cursor = start;
    }

    fn delete_word_forward(&mut self) {
        let end = self.word_end_right();
        self.remove_chars(self.cursor, end);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> TextInput {
        let mut input = TextInput::new("email", "Email");
        for ch in text.chars() {
            input.handle_key(KeyCode::Char(ch), KeyModifiers::NONE);
        }
        input
    }

    #[test]
    fn typing_appends_and_moves_cursor() {
        let input = typed("kai");
        assert_eq!(input.value(), "kai");
        assert_eq!(input.cursor(), 3);
    }

    #[test]
    fn insert_in_middle_of_multibyte_text() {
        let mut input = typed("Zoë");
        input.handle_key(KeyCode::Left, KeyModifiers::NONE);
        input.handle_key(KeyCode::Char('x'), KeyModifiers::NONE);
        assert_eq!(input.value(), "Zoxë");
        input.handle_key(KeyCode::Delete, KeyModifiers::NONE);
        assert_eq!(input.value(), "Zox");
        input.handle_key(KeyCode::Backspace, KeyModifiers::NONE);
        assert_eq!(input.value(), "Zo");
    }

    #[test]
    fn control_chars_are_not_inserted() {
        let mut input = typed("ab");
        let result = input.handle_key(KeyCode::Char('w'), KeyModifiers::CONTROL);
        assert_eq!(result, KeyResult::NotHandled);
        assert_eq!(input.value(), "ab");
    }

    #[test]
    fn shifted_chars_are_inserted() {
        let mut input = TextInput::new("firstName", "First Name");
        input.handle_key(KeyCode::Char('J'), KeyModifiers::SHIFT);
        assert_eq!(input.value(), "J");
    }

    #[test]
    fn delete_word_stops_at_separators() {
        let mut input = typed("sayo0804@gmail.com");
        input.delete_word();
        assert_eq!(input.value(), "sayo0804@gmail.");
        input.delete_word();
        assert_eq!(input.value(), "sayo0804@");
        input.handle_key(KeyCode::Home, KeyModifiers::NONE);
        input.delete_word_forward();
        assert_eq!(input.value(), "@");
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn word_moves() {
        let mut input = typed("Thank you!");
        input.handle_key(KeyCode::Left, KeyModifiers::CONTROL);
        assert_eq!(input.cursor(), 6);
        input.handle_key(KeyCode::Left, KeyModifiers::CONTROL);
        assert_eq!(input.cursor(), 0);
        input.handle_key(KeyCode::Right, KeyModifiers::CONTROL);
        assert_eq!(input.cursor(), 5);
    }

    #[test]
    fn enter_advances() {
        let mut input = typed("x");
        assert_eq!(input.handle_key(KeyCode::Enter, KeyModifiers::NONE), KeyResult::Advance);
    }

    #[test]
    fn view_reports_cursor_only_when_focused() {
        let mut input = typed("abc");
        assert_eq!(input.view().cursor, None);
        input.set_focused(true);
        let view = input.view();
        assert_eq!(view.value.as_deref(), Some("abc"));
        assert_eq!(view.cursor, Some(3));
    }
}
