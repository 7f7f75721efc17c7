use ropey::Rope;
use std::fs;
use std::ops::Range;
use std::path::{Path, PathBuf};
use thiserror::Error;
use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug, Error)]
pub enum BufferError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("File is not valid UTF-8")]
    InvalidEncoding(#[from] std::string::FromUtf8Error),
}

pub struct Buffer {
    pub rope: Rope,
    pub file_path: Option<PathBuf>,
    pub modified: bool,
}

impl Buffer {
    pub fn new() -> Self {
        Self {
            rope: Rope::from(""),
            file_path: None,
            modified: false,
        }
    }

    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            ..Self::new()
        }
    }
}

impl Default for Buffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Buffer {
    fn touch(&mut self) {
        self.modified = true;
    }

    /// Char index of (line, col), clamped into the buffer
    pub fn char_index(&self, line: usize, col: usize) -> usize {
        let line = line.min(self.line_count().saturating_sub(1));
        self.rope.line_to_char(line) + col.min(self.line_len(line))
    }

    /// (line, col) of a char index, clamped into the buffer
    pub fn position_of(&self, char_idx: usize) -> (usize, usize) {
        let char_idx = char_idx.min(self.rope.len_chars());
        let line = self.rope.char_to_line(char_idx);
        (line, char_idx - self.rope.line_to_char(line))
    }

    pub fn insert_at(&mut self, char_idx: usize, text: &str) {
        if text.is_empty() {
            return;
        }
        let char_idx = char_idx.min(self.rope.len_chars());
        self.rope.insert(char_idx, text);
        self.touch();
    }

    pub fn remove_range(&mut self, range: Range<usize>) {
        let range = self.clamp_range(range);
        if !range.is_empty() {
            self.rope.remove(range);
            self.touch();
        }
    }

    /// Replace a char range with `text`; returns the char range the new text occupies
    pub fn replace_range(&mut self, range: Range<usize>, text: &str) -> Range<usize> {
        let range = self.clamp_range(range);
        let start = range.start;
        self.rope.remove(range);
        self.rope.insert(start, text);
        self.touch();
        start..start + text.chars().count()
    }

    pub fn slice(&self, range: Range<usize>) -> String {
        let range = self.clamp_range(range);
        self.rope.slice(range).to_string()
    }

    fn clamp_range(&self, range: Range<usize>) -> Range<usize> {
        let len = self.rope.len_chars();
        let end = range.end.min(len);
        range.start.min(end)..end
    }

    /// Start of the grapheme cluster that ends at or contains `char_idx - 1`
    pub fn prev_grapheme_boundary(&self, char_idx: usize) -> usize {
        let char_idx = char_idx.min(self.rope.len_chars());
        if char_idx == 0 {
            return 0;
        }
        let line_idx = self.rope.char_to_line(char_idx - 1);
        let line_start = self.rope.line_to_char(line_idx);
        let offset = char_idx - line_start;
        let mut pos = 0;
        for cluster in self.rope.line(line_idx).to_string().graphemes(true) {
            let next = pos + cluster.chars().count();
            if next >= offset {
                break;
            }
            pos = next;
        }
        line_start + pos
    }

    /// End of the grapheme cluster that starts at or contains `char_idx`
    pub fn next_grapheme_boundary(&self, char_idx: usize) -> usize {
        let len = self.rope.len_chars();
        if char_idx >= len {
            return len;
        }
        let line_idx = self.rope.char_to_line(char_idx);
        let line_start = self.rope.line_to_char(line_idx);
        let offset = char_idx - line_start;
        let mut pos = 0;
        for cluster in self.rope.line(line_idx).to_string().graphemes(true) {
            pos += cluster.chars().count();
            if pos > offset {
                break;
            }
        }
        (line_start + pos).min(len)
    }

    /// Move `char_idx` back to the start of the grapheme cluster it falls inside
    pub fn grapheme_floor(&self, char_idx: usize) -> usize {
        let len = self.rope.len_chars();
        if char_idx == 0 || char_idx >= len {
            return char_idx.min(len);
        }
        self.prev_grapheme_boundary(self.next_grapheme_boundary(char_idx))
    }

    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Number of code points in the buffer
    pub fn char_count(&self) -> usize {
        self.rope.len_chars()
    }

    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    pub fn line(&self, line_idx: usize) -> Option<String> {
        if line_idx < self.rope.len_lines() {
            let line = self.rope.line(line_idx).to_string();
            Some(line.trim_end_matches(['\n', '\r']).to_string())
        } else {
            None
        }
    }

    /// Length of a line in chars, not counting its line break
    pub fn line_len(&self, line_idx: usize) -> usize {
        if line_idx < self.rope.len_lines() {
            let line = self.rope.line(line_idx);
            let mut len = line.len_chars();
            if len > 0 && line.char(len - 1) == '\n' {
                len -= 1;
                if len > 0 && line.char(len - 1) == '\r' {
                    len -= 1;
                }
            }
            len
        } else {
            0
        }
    }

    pub fn file_name(&self) -> Option<String> {
        self.file_path
            .as_deref()
            .and_then(Path::file_name)
            .map(|name| name.to_string_lossy().to_string())
    }

    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), BufferError> {
        let bytes = fs::read(path.as_ref())?;
        let content = String::from_utf8(bytes)?;
        self.rope = Rope::from_str(&content);
        self.file_path = Some(path.as_ref().to_path_buf());
        self.modified = false;
        log::info!("Loaded {} ({} chars)", path.as_ref().display(), self.char_count());
        Ok(())
    }

    pub fn save_to_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), BufferError> {
        fs::write(path.as_ref(), self.rope.to_string())?;
        self.file_path = Some(path.as_ref().to_path_buf());
        self.modified = false;
        log::info!("Saved {} ({} chars)", path.as_ref().display(), self.char_count());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_at() {
        let mut buffer = Buffer::new();
        buffer.insert_at(0, "a");
        assert_eq!(buffer.line(0).unwrap(), "a");
        assert!(buffer.modified);

        buffer.modified = false;
        buffer.insert_at(1, "");
        assert!(!buffer.modified);
        buffer.insert_at(99, "b");
        assert_eq!(buffer.text(), "ab");
    }

    #[test]
    fn test_edit_and_save() {
        use tempfile::NamedTempFile;
        let mut buffer = Buffer::new();
        buffer.insert_at(0, "Post");
        buffer.insert_at(buffer.char_index(0, 4), "!");
        let temp_file = NamedTempFile::new().unwrap();
        buffer.save_to_file(temp_file.path()).unwrap();
        assert!(!buffer.modified);
        let mut loaded_buffer = Buffer::new();
        loaded_buffer.load_from_file(temp_file.path()).unwrap();
        assert_eq!(loaded_buffer.text(), "Post!");
        assert!(!loaded_buffer.modified);
    }

    #[test]
    fn test_load_and_save_unicode() {
        use tempfile::NamedTempFile;
        let temp_file = NamedTempFile::new().unwrap();
        fs::write(temp_file.path(), "𝐇𝐞𝐥𝐥𝐨\nworld 🚀").unwrap();

        let mut buffer = Buffer::new();
        buffer.load_from_file(temp_file.path()).unwrap();
        assert_eq!(buffer.line_count(), 2);
        assert_eq!(buffer.line(0).unwrap(), "𝐇𝐞𝐥𝐥𝐨");
        assert_eq!(buffer.line_len(0), 5);
        assert_eq!(buffer.line(1).unwrap(), "world 🚀");
        assert_eq!(buffer.char_count(), 13);

        let save_file = NamedTempFile::new().unwrap();
        buffer.save_to_file(save_file.path()).unwrap();
        let content = fs::read_to_string(save_file.path()).unwrap();
        assert_eq!(content, "𝐇𝐞𝐥𝐥𝐨\nworld 🚀");
    }

    #[test]
    fn test_load_invalid_utf8() {
        use tempfile::NamedTempFile;
        let temp_file = NamedTempFile::new().unwrap();
        fs::write(temp_file.path(), b"\xff\xfe\x00\x00").unwrap();

        let mut buffer = Buffer::from_text("keep me");
        let err = buffer.load_from_file(temp_file.path()).unwrap_err();
        assert!(matches!(err, BufferError::InvalidEncoding(_)));
        assert_eq!(buffer.text(), "keep me");
    }

    #[test]
    fn test_load_missing_file() {
        let mut buffer = Buffer::new();
        let err = buffer
            .load_from_file("/nonexistent/postlette/file.txt")
            .unwrap_err();
        assert!(matches!(err, BufferError::Io(_)));
    }

    #[test]
    fn test_replace_range_reports_new_span() {
        let mut buffer = Buffer::from_text("Launch Day");
        let span = buffer.replace_range(0..6, "𝐋𝐚𝐮𝐧𝐜𝐡");
        assert_eq!(span, 0..6);
        assert_eq!(buffer.text(), "𝐋𝐚𝐮𝐧𝐜𝐡 Day");
        assert_eq!(buffer.slice(7..10), "Day");
        assert!(buffer.modified);
    }

    #[test]
    fn test_positions_round_trip() {
        let buffer = Buffer::from_text("ab\r\ncd\nef");
        assert_eq!(buffer.line_len(0), 2);
        assert_eq!(buffer.line(0).unwrap(), "ab");
        let idx = buffer.char_index(1, 1);
        assert_eq!(buffer.position_of(idx), (1, 1));
        // Out-of-range positions clamp instead of panicking
        assert_eq!(buffer.char_index(10, 10), buffer.char_count());
        assert_eq!(buffer.position_of(usize::MAX), (2, 2));
    }

    #[test]
    fn test_remove_range_clamps() {
        let mut buffer = Buffer::from_text("ab\ncd");
        buffer.remove_range(2..3);
        assert_eq!(buffer.text(), "abcd");
        buffer.remove_range(3..100);
        assert_eq!(buffer.text(), "abc");
        buffer.modified = false;
        buffer.remove_range(10..20);
        assert!(!buffer.modified);
    }

    #[test]
    fn test_grapheme_boundaries() {
        // Red heart with its emoji presentation selector is one cluster of two chars
        let buffer = Buffer::from_text("a\u{2764}\u{fe0f}b\r\nc");
        assert_eq!(buffer.next_grapheme_boundary(1), 3);
        assert_eq!(buffer.prev_grapheme_boundary(3), 1);
        assert_eq!(buffer.grapheme_floor(2), 1);
        assert_eq!(buffer.grapheme_floor(3), 3);
        // CRLF moves as one unit
        assert_eq!(buffer.next_grapheme_boundary(4), 6);
        assert_eq!(buffer.prev_grapheme_boundary(6), 4);
        assert_eq!(buffer.prev_grapheme_boundary(0), 0);
        assert_eq!(buffer.next_grapheme_boundary(7), 7);
    }
}
