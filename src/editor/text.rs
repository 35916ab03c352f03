/// New text items start out with this content, inviting the user to edit it.
pub const PLACEHOLDER_TEXT: &str = "You can edit me :)";

/// Half-open character range, `start <= end`, both within content bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionRange {
    pub start: usize,
    pub end: usize,
}

impl SelectionRange {
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }
}

/// A single editable text label anchored at its top-left corner.
///
/// Cursor and selection indices count characters, not bytes; every mutator
/// keeps the cursor inside `[0, len]` and the selection inside content
/// bounds, so an item can never hold an out-of-range insertion point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextItem {
    pub id: u64,
    pub x: i32,
    pub y: i32,
    pub content: String,
    cursor_index: usize,
    selection: Option<SelectionRange>,
}

impl TextItem {
    pub fn new(id: u64, x: i32, y: i32) -> Self {
        Self::with_text(id, x, y, PLACEHOLDER_TEXT)
    }

    pub fn with_text(id: u64, x: i32, y: i32, text: impl Into<String>) -> Self {
        let content = text.into();
        let cursor_index = content.chars().count();
        Self {
            id,
            x,
            y,
            content,
            cursor_index,
            selection: None,
        }
    }

    pub fn char_len(&self) -> usize {
        self.content.chars().count()
    }

    pub fn cursor_index(&self) -> usize {
        self.cursor_index.min(self.char_len())
    }

    pub fn selection(&self) -> Option<SelectionRange> {
        self.selection
    }

    pub fn select_all(&mut self) {
        let len = self.char_len();
        self.selection = if len == 0 {
            None
        } else {
            Some(SelectionRange::new(0, len))
        };
        self.cursor_index = len;
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Repositions the cursor, clamping to a valid insertion point.
    /// Clicking always clears the selection.
    pub fn set_cursor(&mut self, index: usize) {
        self.cursor_index = index.min(self.char_len());
        self.selection = None;
    }

    pub fn cursor_left(&mut self) -> bool {
        self.selection = None;
        if self.cursor_index() == 0 {
            return false;
        }
        self.cursor_index = self.cursor_index().saturating_sub(1);
        true
    }

    pub fn cursor_right(&mut self) -> bool {
        self.selection = None;
        if self.cursor_index() >= self.char_len() {
            return false;
        }
        self.cursor_index = self.cursor_index().saturating_add(1);
        true
    }

    pub fn cursor_home(&mut self) {
        self.cursor_index = 0;
        self.selection = None;
    }

    pub fn cursor_end(&mut self) {
        self.cursor_index = self.char_len();
        self.selection = None;
    }

    /// Inserts a character at the cursor. An active selection is replaced:
    /// deleted first, then the character lands where the selection started.
    pub fn insert_char(&mut self, c: char) {
        self.delete_selection();
        let byte_index = self.byte_index_for_cursor(self.cursor_index());
        self.content.insert(byte_index, c);
        self.cursor_index = self.cursor_index().saturating_add(1);
    }

    /// Deletes the selection if one exists, otherwise the character before
    /// the cursor. Returns false when there was nothing to delete.
    pub fn delete_backward(&mut self) -> bool {
        if self.delete_selection() {
            return true;
        }
        let cursor = self.cursor_index();
        if cursor == 0 {
            return false;
        }
        let start = self.byte_index_for_cursor(cursor - 1);
        let end = self.byte_index_for_cursor(cursor);
        self.content.drain(start..end);
        self.cursor_index = cursor - 1;
        true
    }

    /// Nearest character boundary for a pointer offset from the item's left
    /// edge, assuming fixed-width glyphs.
    pub fn cursor_index_near(&self, local_x: i32, glyph_width: u32) -> usize {
        if local_x <= 0 || glyph_width == 0 {
            return 0;
        }
        let glyph_width = i64::from(glyph_width);
        let nearest = (i64::from(local_x) + glyph_width / 2) / glyph_width;
        usize::try_from(nearest)
            .unwrap_or(usize::MAX)
            .min(self.char_len())
    }

    fn delete_selection(&mut self) -> bool {
        let Some(range) = self.selection.take() else {
            return false;
        };
        let len = self.char_len();
        let start = range.start.min(len);
        let end = range.end.min(len);
        if start < end {
            let byte_start = self.byte_index_for_cursor(start);
            let byte_end = self.byte_index_for_cursor(end);
            self.content.drain(byte_start..byte_end);
        }
        self.cursor_index = start;
        true
    }

    fn byte_index_for_cursor(&self, cursor_index: usize) -> usize {
        let cursor_index = cursor_index.min(self.char_len());
        self.content
            .char_indices()
            .nth(cursor_index)
            .map(|(index, _)| index)
            .unwrap_or(self.content.len())
    }
}
