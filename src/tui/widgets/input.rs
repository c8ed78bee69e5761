//! Numeric input widget
//!
//! A single-line input that only accepts a decimal number, with cursor support

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};

/// Longest value the input will hold
const MAX_LEN: usize = 10;

/// A numeric text input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumberInput {
    /// Current text content
    pub content: String,
    /// Cursor position
    pub cursor: usize,
    /// Whether the input is focused
    pub focused: bool,
    /// Placeholder text
    pub placeholder: String,
    /// Unit shown after the value
    pub unit: String,
}

impl NumberInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the placeholder
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set the unit label
    pub fn unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    /// Replace the content and move the cursor to the end
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.cursor = self.content.len();
    }

    /// Whether `c` may be inserted at the cursor
    pub fn accepts(&self, c: char) -> bool {
        if self.content.len() >= MAX_LEN {
            return false;
        }
        c.is_ascii_digit() || (c == '.' && !self.content.contains('.'))
    }

    /// Insert a character at the cursor; returns whether it was accepted
    pub fn insert(&mut self, c: char) -> bool {
        if !self.accepts(c) {
            return false;
        }
        self.content.insert(self.cursor, c);
        self.cursor += 1;
        true
    }

    /// Delete character before cursor; returns whether anything changed
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        self.content.remove(self.cursor);
        true
    }

    /// Delete character at cursor; returns whether anything changed
    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.content.len() {
            return false;
        }
        self.content.remove(self.cursor);
        true
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.content.len() {
            self.cursor += 1;
        }
    }

    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.content.len();
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    pub fn value(&self) -> &str {
        &self.content
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

impl Widget for NumberInput {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let showing_placeholder = self.content.is_empty() && !self.focused;
        let (text, text_style) = if showing_placeholder {
            (self.placeholder.clone(), Style::default().fg(Color::DarkGray))
        } else {
            (self.content.clone(), Style::default().fg(Color::White))
        };

        // Center the value, leaving a cell for the cursor and room for the unit
        let unit_width = if self.unit.is_empty() { 0 } else { self.unit.len() + 1 };
        let text_width = text.len() + 1 + unit_width;
        let start = area.x + (area.width.saturating_sub(text_width as u16)) / 2;

        buf.set_string(start, area.y, &text, text_style);

        if self.focused {
            let cursor_x = start + self.cursor as u16;
            if cursor_x < area.x + area.width {
                let cursor_char = self.content.chars().nth(self.cursor).unwrap_or(' ');
                buf.set_string(
                    cursor_x,
                    area.y,
                    cursor_char.to_string(),
                    Style::default().fg(Color::Black).bg(Color::Cyan),
                );
            }
        }

        if !self.unit.is_empty() && !showing_placeholder {
            let unit_x = start + text.len() as u16 + 1;
            if unit_x < area.x + area.width {
                buf.set_string(
                    unit_x,
                    area.y,
                    &self.unit,
                    Style::default().fg(Color::Gray).add_modifier(Modifier::DIM),
                );
            }
        }

        // Underline the whole field
        if area.height > 1 {
            let rule = "─".repeat(area.width as usize);
            let rule_style = if self.focused {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            buf.set_string(area.x, area.y + 1, rule, rule_style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_only_one_decimal_point() {
        let mut input = NumberInput::new();
        assert!(input.insert('7'));
        assert!(input.insert('.'));
        assert!(!input.insert('.'));
        assert!(input.insert('5'));
        assert!(!input.insert('a'));
        assert!(!input.insert('-'));
        assert_eq!(input.value(), "7.5");
    }

    #[test]
    fn test_cursor_editing() {
        let mut input = NumberInput::new();
        input.set_content("805");
        input.move_left();
        assert!(input.backspace());
        assert_eq!(input.value(), "85");
        input.move_start();
        assert!(!input.backspace());
        assert!(input.delete());
        assert_eq!(input.value(), "5");
        input.move_end();
        assert_eq!(input.cursor, 1);
    }

    #[test]
    fn test_max_length() {
        let mut input = NumberInput::new();
        for _ in 0..MAX_LEN {
            assert!(input.insert('9'));
        }
        assert!(!input.insert('9'));
    }

    #[test]
    fn test_render_placeholder_when_empty() {
        let input = NumberInput::new().placeholder("e.g., 25").unit("%");
        let area = Rect::new(0, 0, 20, 2);
        let mut buf = Buffer::empty(area);
        input.render(area, &mut buf);

        let first_row: String = (0..20u16)
            .map(|x| buf[(x, 0u16)].symbol().to_string())
            .collect();
        assert!(first_row.contains("e.g., 25"));
        assert!(!first_row.contains('%'));
    }
}
