//! Highlighted row in a navigable list

/// A row index that wraps at both ends of the list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListCursor {
    index: usize,
    len: usize,
}

impl ListCursor {
    /// Start at `initial`, clamped to the last row
    pub fn new(initial: usize, len: usize) -> Self {
        ListCursor {
            index: initial.min(len.saturating_sub(1)),
            len,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Move selection down
    pub fn next(&mut self) {
        if self.len == 0 {
            return;
        }
        self.index = (self.index + 1) % self.len;
    }

    /// Move selection up
    pub fn previous(&mut self) {
        if self.len == 0 {
            return;
        }
        self.index = if self.index == 0 {
            self.len - 1
        } else {
            self.index - 1
        };
    }
}
