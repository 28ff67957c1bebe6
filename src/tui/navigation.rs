//! Cursor and scroll window for list panes
//!
//! `ListCursor` tracks the selected row and the first visible row. Every
//! movement keeps the selection inside `0..count` and inside the visible
//! window of `height` rows.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListCursor {
    pub selected: usize,
    pub offset: usize,
}

impl ListCursor {
    /// Move down one row
    pub fn down(&mut self, count: usize, height: usize) {
        if count == 0 {
            return;
        }
        self.selected = (self.selected + 1).min(count - 1);
        self.follow_down(height);
    }

    /// Move up one row
    pub fn up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
        self.follow_up();
    }

    pub fn top(&mut self) {
        *self = Self::default();
    }

    pub fn bottom(&mut self, count: usize, height: usize) {
        if count == 0 {
            return;
        }
        self.selected = count - 1;
        self.follow_down(height);
    }

    /// Move down half a page
    pub fn page_down(&mut self, count: usize, height: usize) {
        if count == 0 {
            return;
        }
        self.selected = (self.selected + (height / 2).max(1)).min(count - 1);
        self.follow_down(height);
    }

    /// Move up half a page
    pub fn page_up(&mut self, height: usize) {
        self.selected = self.selected.saturating_sub((height / 2).max(1));
        self.follow_up();
    }

    fn follow_down(&mut self, height: usize) {
        let height = height.max(1);
        if self.selected >= self.offset + height {
            self.offset = self.selected + 1 - height;
        }
    }

    fn follow_up(&mut self) {
        if self.selected < self.offset {
            self.offset = self.selected;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_down_stops_at_last_row() {
        let mut cursor = ListCursor::default();
        for _ in 0..5 {
            cursor.down(3, 10);
        }
        assert_eq!(cursor.selected, 2);
        assert_eq!(cursor.offset, 0);
    }

    #[test]
    fn test_down_scrolls_window() {
        let mut cursor = ListCursor::default();
        for _ in 0..4 {
            cursor.down(10, 3);
        }
        assert_eq!(cursor, ListCursor { selected: 4, offset: 2 });

        cursor.up();
        cursor.up();
        cursor.up();
        assert_eq!(cursor, ListCursor { selected: 1, offset: 1 });
    }

    #[test]
    fn test_bottom_and_top() {
        let mut cursor = ListCursor::default();
        cursor.bottom(20, 5);
        assert_eq!(cursor, ListCursor { selected: 19, offset: 15 });
        cursor.top();
        assert_eq!(cursor, ListCursor::default());
    }

    #[test]
    fn test_paging() {
        let mut cursor = ListCursor::default();
        cursor.page_down(20, 10);
        assert_eq!(cursor.selected, 5);
        cursor.page_down(20, 10);
        assert_eq!(cursor, ListCursor { selected: 10, offset: 1 });
        cursor.page_up(10);
        assert_eq!(cursor, ListCursor { selected: 5, offset: 1 });
    }

    #[test]
    fn test_empty_list_is_noop() {
        let mut cursor = ListCursor::default();
        cursor.down(0, 5);
        cursor.bottom(0, 5);
        cursor.page_down(0, 5);
        assert_eq!(cursor, ListCursor::default());
    }
}
