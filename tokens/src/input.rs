//! Editable chat input that shows recognized tokens as chips.
//!
//! The buffer is plain text. After every edit the chip view is derived again
//! from the whole buffer, so typing the closing bracket of `@File:[main.ts]`
//! turns the token into a chip, and breaking a token apart turns it back into
//! text. Chips behave as single units for cursor movement and deletion.

use std::ops::Range;
use std::sync::Arc;

use tracing::debug;

use crate::composition::Composition;
use crate::registry::TokenRegistry;
use crate::text_element::SubmittedMessage;

#[derive(Debug, Clone)]
pub struct TokenInput {
    registry: Arc<TokenRegistry>,
    text: String,
    /// Byte offset into `text`; always on a char boundary and never strictly
    /// inside a chip.
    cursor: usize,
}

impl TokenInput {
    pub fn new(registry: Arc<TokenRegistry>) -> Self {
        Self {
            registry,
            text: String::new(),
            cursor: 0,
        }
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

    /// Replaces the buffer and places the cursor at the end.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.text.len();
    }

    pub fn set_cursor(&mut self, pos: usize) {
        let mut pos = pos.min(self.text.len());
        while !self.text.is_char_boundary(pos) {
            pos -= 1;
        }
        self.cursor = pos;
        self.snap_cursor_out_of_chip();
    }

    pub fn insert_str(&mut self, text: &str) {
        self.text.insert_str(self.cursor, text);
        self.cursor += text.len();
        self.snap_cursor_out_of_chip();
    }

    pub fn move_left(&mut self) {
        if let Some(chip) = self.chip_ending_at(self.cursor) {
            self.cursor = chip.start;
        } else if let Some(ch) = self.text[..self.cursor].chars().next_back() {
            self.cursor -= ch.len_utf8();
        }
    }

    pub fn move_right(&mut self) {
        if let Some(chip) = self.chip_starting_at(self.cursor) {
            self.cursor = chip.end;
        } else if let Some(ch) = self.text[self.cursor..].chars().next() {
            self.cursor += ch.len_utf8();
        }
    }

    /// Deletes the chip or character before the cursor.
    pub fn backspace(&mut self) {
        let range = match self.chip_ending_at(self.cursor) {
            Some(chip) => chip,
            None => match self.text[..self.cursor].chars().next_back() {
                Some(ch) => self.cursor - ch.len_utf8()..self.cursor,
                None => return,
            },
        };
        self.remove_range(range);
    }

    /// Deletes the chip or character after the cursor.
    pub fn delete(&mut self) {
        let range = match self.chip_starting_at(self.cursor) {
            Some(chip) => chip,
            None => match self.text[self.cursor..].chars().next() {
                Some(ch) => self.cursor..self.cursor + ch.len_utf8(),
                None => return,
            },
        };
        self.remove_range(range);
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn composition(&self) -> Composition {
        self.registry.compose(&self.text)
    }

    /// Takes the current buffer as a message and clears the input.
    ///
    /// Whitespace-only input is not submitted and is left untouched.
    pub fn submit(&mut self) -> Option<SubmittedMessage> {
        if self.text.trim().is_empty() {
            return None;
        }
        let text_elements = self.composition().text_elements();
        let text = std::mem::take(&mut self.text);
        self.cursor = 0;
        debug!(
            len = text.len(),
            chips = text_elements.len(),
            "submitting chat input"
        );
        Some(SubmittedMessage {
            text,
            text_elements,
        })
    }

    fn remove_range(&mut self, range: Range<usize>) {
        self.cursor = range.start;
        self.text.replace_range(range, "");
        self.snap_cursor_out_of_chip();
    }

    fn chip_ranges(&self) -> Vec<Range<usize>> {
        self.registry
            .scan(&self.text)
            .map(|token| token.range())
            .collect()
    }

    fn chip_ending_at(&self, pos: usize) -> Option<Range<usize>> {
        self.chip_ranges().into_iter().find(|range| range.end == pos)
    }

    fn chip_starting_at(&self, pos: usize) -> Option<Range<usize>> {
        self.chip_ranges()
            .into_iter()
            .find(|range| range.start == pos)
    }

    fn snap_cursor_out_of_chip(&mut self) {
        if let Some(chip) = self
            .chip_ranges()
            .into_iter()
            .find(|range| range.start < self.cursor && self.cursor < range.end)
        {
            self.cursor = chip.end;
        }
    }
}
