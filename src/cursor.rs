/// Caret position in chars; `desired_col` remembers the column across short lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub line: usize,
    pub col: usize,
    pub desired_col: usize,
}

impl Cursor {
    pub fn new() -> Self {
        Self {
            line: 0,
            col: 0,
            desired_col: 0,
        }
    }

    pub fn at(line: usize, col: usize) -> Self {
        Self {
            line,
            col,
            desired_col: col,
        }
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new()
    }
}
