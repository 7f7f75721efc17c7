use unicode_width::UnicodeWidthChar;

/// Visible window onto the buffer: `offset_line` in lines, `offset_col` in chars,
/// `rows` and `cols` in terminal cells
pub struct Viewport {
    pub offset_line: usize,
    pub offset_col: usize,
    pub rows: usize,
    pub cols: usize,
}

/// Terminal cells taken by `c`; tabs draw as one space
pub fn char_width(c: char) -> usize {
    if c == '\t' {
        1
    } else {
        c.width().unwrap_or(0)
    }
}

/// Terminal cells taken by `text`
pub fn display_width(text: &str) -> usize {
    text.chars().map(char_width).sum()
}

impl Viewport {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            offset_line: 0,
            offset_col: 0,
            rows,
            cols,
        }
    }

    pub fn reset(&mut self) {
        self.offset_line = 0;
        self.offset_col = 0;
    }

    /// Scroll as little as possible to bring the cursor into view. `line` is the cursor's
    /// line and `cursor_col` its char column; the horizontal fit is measured in cells.
    pub fn scroll_to_cursor(&mut self, cursor_line: usize, line: &str, cursor_col: usize) {
        let rows = self.rows.max(1);
        let cols = self.cols.max(1);

        if cursor_line < self.offset_line {
            self.offset_line = cursor_line;
        } else if cursor_line >= self.offset_line + rows {
            self.offset_line = cursor_line + 1 - rows;
        }

        if cursor_col < self.offset_col {
            self.offset_col = cursor_col;
            return;
        }

        let widths: Vec<usize> = line
            .chars()
            .take(cursor_col)
            .skip(self.offset_col)
            .map(char_width)
            .collect();
        // One extra cell for the cursor itself
        let mut used = widths.iter().sum::<usize>() + 1;
        for width in widths {
            if used <= cols {
                break;
            }
            used -= width;
            self.offset_col += 1;
        }
    }
}
