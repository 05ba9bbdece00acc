//! Minimal text editor for the email preview pane.
//!
//! Once a reveal completes, the preview becomes an editable buffer seeded
//! with the revealed text. Only character-level editing is supported; the
//! buffer is line-stored with a (row, col) cursor in char units.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Editable line buffer with a (row, col) cursor.
#[derive(Debug, Clone)]
pub struct Editor {
    lines: Vec<String>,
    cursor_row: usize,
    cursor_col: usize,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new("")
    }
}

impl Editor {
    /// Creates an editor seeded with the given text, cursor at the end.
    pub fn new(text: &str) -> Self {
        let lines: Vec<String> = if text.is_empty() {
            vec![String::new()]
        } else {
            text.split('\n').map(str::to_string).collect()
        };
        let cursor_row = lines.len() - 1;
        let cursor_col = lines[cursor_row].chars().count();
        Self {
            lines,
            cursor_row,
            cursor_col,
        }
    }

    /// Returns all lines in the buffer.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Returns the buffer contents as one string.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    /// Returns the cursor position as (row, col) in char units.
    pub fn cursor(&self) -> (usize, usize) {
        (self.cursor_row, self.cursor_col)
    }

    /// Handles a key press for basic editing.
    pub fn input(&mut self, key: KeyEvent) {
        if matches!(key.kind, KeyEventKind::Release) {
            return;
        }

        match key.code {
            KeyCode::Char(ch)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.insert_char(ch);
            }
            KeyCode::Enter => self.insert_newline(),
            KeyCode::Backspace => self.delete_prev_char(),
            KeyCode::Delete => self.delete_next_char(),
            KeyCode::Left => self.move_left(),
            KeyCode::Right => self.move_right(),
            KeyCode::Up => self.move_up(),
            KeyCode::Down => self.move_down(),
            KeyCode::Home => self.cursor_col = 0,
            KeyCode::End => self.cursor_col = self.line_len(self.cursor_row),
            _ => {}
        }
    }

    fn line_len(&self, row: usize) -> usize {
        self.lines[row].chars().count()
    }

    fn insert_char(&mut self, ch: char) {
        let row = self.cursor_row;
        let byte_idx = char_to_byte_index(&self.lines[row], self.cursor_col);
        self.lines[row].insert(byte_idx, ch);
        self.cursor_col += 1;
    }

    fn insert_newline(&mut self) {
        let row = self.cursor_row;
        let byte_idx = char_to_byte_index(&self.lines[row], self.cursor_col);
        let rest = self.lines[row].split_off(byte_idx);
        self.lines.insert(row + 1, rest);
        self.cursor_row = row + 1;
        self.cursor_col = 0;
    }

    fn delete_prev_char(&mut self) {
        if self.cursor_col > 0 {
            let row = self.cursor_row;
            let col = self.cursor_col - 1;
            let start = char_to_byte_index(&self.lines[row], col);
            let end = char_to_byte_index(&self.lines[row], col + 1);
            self.lines[row].replace_range(start..end, "");
            self.cursor_col = col;
            return;
        }

        if self.cursor_row == 0 {
            return;
        }

        let row = self.cursor_row;
        let prev_len = self.line_len(row - 1);
        let current = self.lines.remove(row);
        self.lines[row - 1].push_str(&current);
        self.cursor_row = row - 1;
        self.cursor_col = prev_len;
    }

    fn delete_next_char(&mut self) {
        let row = self.cursor_row;
        let len = self.line_len(row);

        if self.cursor_col >= len {
            if row + 1 < self.lines.len() {
                let next = self.lines.remove(row + 1);
                self.lines[row].push_str(&next);
            }
            return;
        }

        let start = char_to_byte_index(&self.lines[row], self.cursor_col);
        let end = char_to_byte_index(&self.lines[row], self.cursor_col + 1);
        self.lines[row].replace_range(start..end, "");
    }

    fn move_left(&mut self) {
        if self.cursor_col > 0 {
            self.cursor_col -= 1;
        } else if self.cursor_row > 0 {
            self.cursor_row -= 1;
            self.cursor_col = self.line_len(self.cursor_row);
        }
    }

    fn move_right(&mut self) {
        if self.cursor_col < self.line_len(self.cursor_row) {
            self.cursor_col += 1;
        } else if self.cursor_row + 1 < self.lines.len() {
            self.cursor_row += 1;
            self.cursor_col = 0;
        }
    }

    fn move_up(&mut self) {
        if self.cursor_row > 0 {
            self.cursor_row -= 1;
            self.cursor_col = self.cursor_col.min(self.line_len(self.cursor_row));
        }
    }

    fn move_down(&mut self) {
        if self.cursor_row + 1 < self.lines.len() {
            self.cursor_row += 1;
            self.cursor_col = self.cursor_col.min(self.line_len(self.cursor_row));
        }
    }
}

fn char_to_byte_index(line: &str, col: usize) -> usize {
    if col == 0 {
        return 0;
    }
    line.char_indices()
        .nth(col)
        .map_or(line.len(), |(i, _)| i)
}
