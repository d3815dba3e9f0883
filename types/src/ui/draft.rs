//! Editable text behind a number input.

use unicode_segmentation::UnicodeSegmentation;

/// Text buffer for a numeric field with grapheme-aware cursor movement.
///
/// Only ASCII digits, one decimal point and a leading minus sign are accepted,
/// so the text is always a prefix of something `f64::from_str` understands.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NumberDraft {
    text: String,
    cursor: usize,
}

impl NumberDraft {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.graphemes(true).count();
        Self { text, cursor }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Replace the whole text and park the cursor at the end.
    pub fn set_text(&mut self, text: impl Into<String>) {
        *self = Self::new(text);
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        let cursor_moved_right = self.cursor.saturating_add(1);
        self.cursor = self.clamp_cursor(cursor_moved_right);
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor = self.grapheme_count();
    }

    /// Insert `new_char` at the cursor if it keeps the text numeric.
    ///
    /// Returns whether the character was accepted.
    pub fn enter_char(&mut self, new_char: char) -> bool {
        let accepted = match new_char {
            '0'..='9' => true,
            '.' => !self.text.contains('.'),
            '-' => self.cursor == 0 && !self.text.starts_with('-'),
            _ => false,
        };
        if !accepted {
            return false;
        }
        let index = self.byte_index();
        self.text.insert(index, new_char);
        self.move_cursor_right();
        true
    }

    pub fn delete_char(&mut self) {
        if self.cursor == 0 {
            return;
        }

        let start = self.byte_index_at(self.cursor - 1);
        let end = self.byte_index_at(self.cursor);
        self.text.replace_range(start..end, "");
        self.move_cursor_left();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    fn byte_index(&self) -> usize {
        self.byte_index_at(self.cursor)
    }

    fn byte_index_at(&self, cursor: usize) -> usize {
        self.text
            .grapheme_indices(true)
            .nth(cursor)
            .map_or(self.text.len(), |(i, _)| i)
    }

    fn grapheme_count(&self) -> usize {
        self.text.graphemes(true).count()
    }

    fn clamp_cursor(&self, new_cursor_pos: usize) -> usize {
        new_cursor_pos.min(self.grapheme_count())
    }
}
