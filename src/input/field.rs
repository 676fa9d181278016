//! A small hand-rolled text input field.
//!
//! Single-line by default; `multiline()` enables newline insertion for
//! exercise editors and project submissions. Cursor math is char-indexed
//! with unicode-width used only at render time.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Default)]
pub struct InputField {
    chars: Vec<char>,
    cursor: usize,
    multiline: bool,
}

impl InputField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn multiline() -> Self {
        Self {
            multiline: true,
            ..Self::default()
        }
    }

    pub fn with_text(text: &str) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let cursor = chars.len();
        Self {
            chars,
            cursor,
            multiline: false,
        }
    }

    pub fn multiline_with_text(text: &str) -> Self {
        let mut field = Self::with_text(text);
        field.multiline = true;
        field
    }

    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn set_text(&mut self, text: &str) {
        self.chars = text.chars().collect();
        self.cursor = self.chars.len();
    }

    pub fn clear(&mut self) {
        self.chars.clear();
        self.cursor = 0;
    }

    /// Display width of the text left of the cursor, for terminal cursor
    /// positioning on single-line fields.
    pub fn cursor_width(&self) -> u16 {
        let before: String = self.chars[..self.cursor].iter().collect();
        before.width() as u16
    }

    /// Apply a key event. Returns true if the field changed or the cursor
    /// moved (caller marks the UI dirty).
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.chars.insert(self.cursor, c);
                self.cursor += 1;
                true
            }
            KeyCode::Enter if self.multiline => {
                self.chars.insert(self.cursor, '\n');
                self.cursor += 1;
                true
            }
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    self.chars.remove(self.cursor);
                    true
                } else {
                    false
                }
            }
            KeyCode::Delete => {
                if self.cursor < self.chars.len() {
                    self.chars.remove(self.cursor);
                    true
                } else {
                    false
                }
            }
            KeyCode::Left => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    true
                } else {
                    false
                }
            }
            KeyCode::Right => {
                if self.cursor < self.chars.len() {
                    self.cursor += 1;
                    true
                } else {
                    false
                }
            }
            KeyCode::Home => {
                self.cursor = self.line_start();
                true
            }
            KeyCode::End => {
                self.cursor = self.line_end();
                true
            }
            KeyCode::Up if self.multiline => self.move_vertical(-1),
            KeyCode::Down if self.multiline => self.move_vertical(1),
            _ => false,
        }
    }

    fn line_start(&self) -> usize {
        self.chars[..self.cursor]
            .iter()
            .rposition(|&c| c == '\n')
            .map(|i| i + 1)
            .unwrap_or(0)
    }

    fn line_end(&self) -> usize {
        self.chars[self.cursor..]
            .iter()
            .position(|&c| c == '\n')
            .map(|i| self.cursor + i)
            .unwrap_or(self.chars.len())
    }

    fn move_vertical(&mut self, delta: i64) -> bool {
        let col = self.cursor - self.line_start();
        let lines: Vec<&[char]> = self.chars.split(|&c| c == '\n').collect();
        let mut line_index = 0usize;
        let mut offset = 0usize;
        for (i, line) in lines.iter().enumerate() {
            if self.cursor <= offset + line.len() {
                line_index = i;
                break;
            }
            offset += line.len() + 1;
        }
        let target = line_index as i64 + delta;
        if target < 0 || target as usize >= lines.len() {
            return false;
        }
        let target = target as usize;
        let mut start = 0usize;
        for line in &lines[..target] {
            start += line.len() + 1;
        }
        self.cursor = start + col.min(lines[target].len());
        true
    }
}
