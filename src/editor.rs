// src/editor.rs - Core editor coordinator

use std::ops::Range;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::buffer::{Buffer, BufferError};
use crate::clipboard::{ClipboardProvider, system_clipboard};
use crate::command::{Command, CommandParser, LineCommand};
use crate::config::DEFAULT_SEPARATOR;
use crate::cursor::Cursor;
use crate::emoji::EmojiPickerState;
use crate::lists::{self, Continuation, ListStyle};
use crate::mode::Mode;
use crate::selection::Selection;
use crate::style::{self, StyleTables, StyleVariant};
use crate::viewport::Viewport;

pub const APP_NAME: &str = "Postlette";
pub const EM_DASH: &str = "—";
pub const CONFIRM_DISCARD: &str = "Discard unsaved changes? (y/n)";
/// How long a status message stays up
pub const STATUS_TIMEOUT: Duration = Duration::from_secs(5);

/// Rows taken by the toolbar, status bar and command line
const CHROME_ROWS: usize = 3;

/// Destructive action waiting on the discard prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction {
    Open(PathBuf),
    Quit,
}

pub struct Editor {
    pub buffer: Buffer,
    pub cursor: Cursor,
    pub selection: Selection,
    pub mode: Mode,
    pub viewport: Viewport,
    pub tables: StyleTables,
    pub dark_mode: bool,
    pub separator: String,
    pub status_message: Option<String>,
    // Command line
    pub command_line: String,
    pub command_history: Vec<String>,
    pub command_history_index: usize,
    pub emoji_picker: Option<EmojiPickerState>,
    pub pending: Option<PendingAction>,
    status_since: Option<Instant>,
    clipboard: Box<dyn ClipboardProvider>,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(StyleTables::new())
    }
}

impl Editor {
    pub fn new(tables: StyleTables) -> Self {
        Self {
            buffer: Buffer::new(),
            cursor: Cursor::new(),
            selection: Selection::new(),
            mode: Mode::Edit,
            viewport: Viewport::new(20, 80),
            tables,
            dark_mode: false,
            separator: DEFAULT_SEPARATOR.to_string(),
            status_message: None,
            command_line: String::new(),
            command_history: Vec::new(),
            command_history_index: 0,
            emoji_picker: None,
            pending: None,
            status_since: None,
            clipboard: system_clipboard(),
        }
    }

    pub fn with_clipboard(mut self, clipboard: Box<dyn ClipboardProvider>) -> Self {
        self.clipboard = clipboard;
        self
    }

    pub fn clipboard_mut(&mut self) -> &mut dyn ClipboardProvider {
        self.clipboard.as_mut()
    }

    /// Run one command; returns true if the editor should quit
    pub fn execute_command(&mut self, cmd: Command) -> bool {
        // A new action in the text replaces whatever the last one reported
        if self.mode == Mode::Edit {
            self.clear_status();
        }
        let mut keep_desired_col = false;
        match cmd {
            Command::Quit => return self.request_quit(),
            Command::MoveLeft => {
                self.selection.clear();
                self.step_left();
            }
            Command::MoveRight => {
                self.selection.clear();
                self.step_right();
            }
            Command::MoveUp => {
                self.selection.clear();
                self.step_vertical(false);
                keep_desired_col = true;
            }
            Command::MoveDown => {
                self.selection.clear();
                self.step_vertical(true);
                keep_desired_col = true;
            }
            Command::MoveLineStart => {
                self.selection.clear();
                self.cursor.col = 0;
            }
            Command::MoveLineEnd => {
                self.selection.clear();
                self.cursor.col = self.buffer.line_len(self.cursor.line);
            }
            Command::MoveFileStart => {
                self.selection.clear();
                self.set_cursor_index(0);
            }
            Command::MoveFileEnd => {
                self.selection.clear();
                self.set_cursor_index(self.buffer.char_count());
            }
            Command::SelectLeft => {
                self.selection.begin(self.cursor_index());
                self.step_left();
            }
            Command::SelectRight => {
                self.selection.begin(self.cursor_index());
                self.step_right();
            }
            Command::SelectUp => {
                self.selection.begin(self.cursor_index());
                self.step_vertical(false);
                keep_desired_col = true;
            }
            Command::SelectDown => {
                self.selection.begin(self.cursor_index());
                self.step_vertical(true);
                keep_desired_col = true;
            }
            Command::SelectAll => self.select_all(),
            Command::InsertChar(c) => {
                if self.mode == Mode::EmojiPicker {
                    if let Some(picker) = &mut self.emoji_picker {
                        picker.push_query(c);
                    }
                } else {
                    self.insert_text_at_cursor(c.encode_utf8(&mut [0; 4]));
                }
            }
            Command::InsertNewline => self.insert_newline(),
            Command::DeleteChar => {
                if self.mode == Mode::EmojiPicker {
                    if let Some(picker) = &mut self.emoji_picker {
                        picker.pop_query();
                    }
                } else {
                    self.delete_backward();
                }
            }
            Command::DeleteForward => self.delete_forward(),
            Command::ApplyStyle(variant) => self.style_selection(variant),
            Command::InsertEmDash => self.insert_text_at_cursor(EM_DASH),
            Command::InsertSeparator => {
                let separator = self.separator.clone();
                self.insert_text_at_cursor(&separator);
            }
            Command::OpenEmojiPicker => self.open_emoji_picker(None),
            Command::EmojiLeft => self.with_picker(EmojiPickerState::move_left),
            Command::EmojiRight => self.with_picker(EmojiPickerState::move_right),
            Command::EmojiUp => self.with_picker(EmojiPickerState::move_up),
            Command::EmojiDown => self.with_picker(EmojiPickerState::move_down),
            Command::EmojiSelect => self.select_emoji(),
            Command::EmojiCancel => self.close_emoji_picker(),
            Command::EnterCommandMode => self.enter_command_mode(""),
            Command::PromptOpen => self.enter_command_mode("e "),
            Command::PromptSaveAs => self.enter_command_mode("saveas "),
            Command::SaveFile => {
                self.save();
            }
            Command::CopyAll => self.copy_all(),
            Command::ToggleTheme => self.toggle_theme(),
            Command::ConfirmYes => return self.confirm(true),
            Command::ConfirmNo => return self.confirm(false),
        }

        if !keep_desired_col {
            self.cursor.desired_col = self.cursor.col;
        }
        self.scroll_to_cursor();
        false
    }

    pub fn handle_resize(&mut self, rows: u16, cols: u16) {
        self.viewport.rows = (rows as usize).saturating_sub(CHROME_ROWS).max(1);
        self.viewport.cols = (cols as usize).max(1);
        self.scroll_to_cursor();
    }

    /// Keep the cursor cell on screen
    fn scroll_to_cursor(&mut self) {
        let line = self.buffer.line(self.cursor.line).unwrap_or_default();
        self.viewport
            .scroll_to_cursor(self.cursor.line, &line, self.cursor.col);
    }

    // --- Cursor and selection -------------------------------------------------

    pub fn cursor_index(&self) -> usize {
        self.buffer.char_index(self.cursor.line, self.cursor.col)
    }

    pub fn set_cursor_index(&mut self, char_idx: usize) {
        let (line, col) = self.buffer.position_of(char_idx);
        self.cursor.line = line;
        self.cursor.col = col.min(self.buffer.line_len(line));
        self.cursor.desired_col = self.cursor.col;
    }

    /// Selected char range, if any
    pub fn selection_range(&self) -> Option<Range<usize>> {
        self.selection.range(self.cursor_index())
    }

    pub fn selected_text(&self) -> Option<String> {
        self.selection_range().map(|range| self.buffer.slice(range))
    }

    /// Select `range` with the cursor at its end
    pub fn select_range(&mut self, range: Range<usize>) {
        self.selection.clear();
        self.selection.begin(range.start);
        self.set_cursor_index(range.end);
    }

    pub fn select_all(&mut self) {
        self.select_range(0..self.buffer.char_count());
    }

    /// One grapheme cluster left; emoji sequences and CRLF count as one
    fn step_left(&mut self) {
        let at = self.buffer.prev_grapheme_boundary(self.cursor_index());
        self.place_cursor(at);
    }

    fn step_right(&mut self) {
        let at = self.buffer.next_grapheme_boundary(self.cursor_index());
        self.place_cursor(at);
    }

    /// Move the cursor without touching `desired_col`
    fn place_cursor(&mut self, char_idx: usize) {
        let (line, col) = self.buffer.position_of(char_idx);
        self.cursor.line = line;
        self.cursor.col = col.min(self.buffer.line_len(line));
    }

    fn step_vertical(&mut self, down: bool) {
        if down {
            if self.cursor.line + 1 < self.buffer.line_count() {
                self.cursor.line += 1;
            }
        } else if self.cursor.line > 0 {
            self.cursor.line -= 1;
        }
        let col = self
            .cursor
            .desired_col
            .min(self.buffer.line_len(self.cursor.line));
        let at = self
            .buffer
            .grapheme_floor(self.buffer.char_index(self.cursor.line, col));
        self.place_cursor(at);
    }

    // --- Editing ----------------------------------------------------------------

    /// Remove the selected text; returns true if anything was selected
    fn delete_selection(&mut self) -> bool {
        match self.selection_range() {
            Some(range) => {
                let start = range.start;
                self.buffer.remove_range(range);
                self.selection.clear();
                self.set_cursor_index(start);
                true
            }
            None => {
                self.selection.clear();
                false
            }
        }
    }

    /// Insert `text` at the cursor, replacing any selection
    pub fn insert_text_at_cursor(&mut self, text: &str) {
        self.delete_selection();
        let at = self.cursor_index();
        self.buffer.insert_at(at, text);
        self.set_cursor_index(at + text.chars().count());
    }

    /// Enter, continuing or ending a list when the cursor sits at the end of a list line
    fn insert_newline(&mut self) {
        self.delete_selection();
        let line_len = self.buffer.line_len(self.cursor.line);
        if self.cursor.col == line_len
            && let Some(line) = self.buffer.line(self.cursor.line)
            && let Some(next) = lists::continuation(&line)
        {
            match next {
                Continuation::NextItem(prefix) => {
                    self.insert_text_at_cursor(&format!("\n{prefix}"));
                }
                Continuation::EndList { indent } => {
                    let start = self.buffer.char_index(self.cursor.line, 0);
                    let span = self.buffer.replace_range(start..start + line_len, &indent);
                    self.set_cursor_index(span.end);
                    self.insert_text_at_cursor("\n");
                }
            }
            return;
        }
        self.insert_text_at_cursor("\n");
    }

    fn delete_backward(&mut self) {
        if self.delete_selection() {
            return;
        }
        let at = self.cursor_index();
        let start = self.buffer.prev_grapheme_boundary(at);
        self.buffer.remove_range(start..at);
        self.set_cursor_index(start);
    }

    fn delete_forward(&mut self) {
        if self.delete_selection() {
            return;
        }
        let at = self.cursor_index();
        let end = self.buffer.next_grapheme_boundary(at);
        self.buffer.remove_range(at..end);
        self.set_cursor_index(at);
    }

    /// Style the selection in place and keep the styled text selected
    pub fn style_selection(&mut self, variant: StyleVariant) {
        let Some(range) = self.selection_range() else {
            self.set_status("Select text to style.");
            return;
        };

        let selected = self.buffer.slice(range.clone());
        let source = match variant {
            StyleVariant::Unstyle => lists::strip_prefixes(&selected),
            _ => selected,
        };
        let styled = style::apply(&source, variant, &self.tables);
        let span = self.buffer.replace_range(range, &styled);
        self.select_range(span);
        log::debug!("Applied {variant} to {} chars", styled.chars().count());
    }

    /// Prefix the selected lines, or the cursor line, with list markers
    pub fn insert_list(&mut self, list_style: ListStyle) {
        match self.selection_range() {
            Some(range) => {
                let lines = self.expand_to_lines(range);
                let text = self.buffer.slice(lines.clone());
                if let Some(listed) = lists::apply_list(&text, list_style) {
                    let span = self.buffer.replace_range(lines, &listed);
                    self.select_range(span);
                }
            }
            None => {
                let line_idx = self.cursor.line;
                let start = self.buffer.char_index(line_idx, 0);
                let line_len = self.buffer.line_len(line_idx);
                let line = self.buffer.line(line_idx).unwrap_or_default();
                let item = match lists::parse_line(&line) {
                    Some(parsed) => format!(
                        "{}{}{}",
                        parsed.indent,
                        list_style.prefix(0),
                        parsed.rest
                    ),
                    None => {
                        let body = line.trim_start();
                        let indent = &line[..line.len() - body.len()];
                        format!("{indent}{}{body}", list_style.prefix(0))
                    }
                };
                let span = self.buffer.replace_range(start..start + line_len, &item);
                self.set_cursor_index(span.end);
            }
        }
        self.set_status(list_style.label());
    }

    /// Grow `range` to whole lines; a range ending at a line start does not take that line
    fn expand_to_lines(&self, range: Range<usize>) -> Range<usize> {
        let (start_line, _) = self.buffer.position_of(range.start);
        let start = self.buffer.char_index(start_line, 0);
        let (end_line, end_col) = self.buffer.position_of(range.end);
        let end = if end_col == 0 && range.end > start {
            range.end
        } else {
            self.buffer
                .char_index(end_line, self.buffer.line_len(end_line))
        };
        start..end
    }

    // --- Emoji picker -------------------------------------------------------------

    pub fn open_emoji_picker(&mut self, query: Option<&str>) {
        self.emoji_picker = Some(EmojiPickerState::with_query(query.unwrap_or("")));
        self.mode = Mode::EmojiPicker;
    }

    pub fn close_emoji_picker(&mut self) {
        self.emoji_picker = None;
        self.mode = Mode::Edit;
    }

    fn with_picker(&mut self, action: fn(&mut EmojiPickerState)) {
        if let Some(picker) = &mut self.emoji_picker {
            action(picker);
        }
    }

    fn select_emoji(&mut self) {
        let Some(emoji) = self
            .emoji_picker
            .as_ref()
            .and_then(EmojiPickerState::selected)
            .map(|entry| entry.emoji)
        else {
            return;
        };
        self.close_emoji_picker();
        self.insert_text_at_cursor(emoji);
    }

    // --- Document lifecycle ---------------------------------------------------------

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.status_since = Some(Instant::now());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
        self.status_since = None;
    }

    /// Drop a status message older than `STATUS_TIMEOUT`; the discard prompt stays until
    /// answered. Returns true if a message was removed.
    pub fn expire_status(&mut self, now: Instant) -> bool {
        if self.mode == Mode::Confirm {
            return false;
        }
        match self.status_since {
            Some(since) if now.saturating_duration_since(since) >= STATUS_TIMEOUT => {
                self.clear_status();
                true
            }
            _ => false,
        }
    }

    pub fn char_count(&self) -> usize {
        self.buffer.char_count()
    }

    pub fn document_name(&self) -> String {
        self.buffer
            .file_name()
            .unwrap_or_else(|| "Untitled".to_string())
    }

    pub fn window_title(&self) -> String {
        let dirty = if self.buffer.modified { "*" } else { "" };
        format!("{APP_NAME} — {}{dirty}", self.document_name())
    }

    /// Start on `path`: open it if it exists, otherwise begin an empty document there
    pub fn start_with_path(&mut self, path: PathBuf) {
        if path.exists() {
            self.open_path(path);
        } else {
            log::info!("Starting new document at {}", path.display());
            self.buffer = Buffer::new();
            self.buffer.file_path = Some(path);
            self.reset_view();
        }
    }

    /// Open `path`, asking first if that would discard unsaved edits
    pub fn request_open(&mut self, path: PathBuf) {
        if self.buffer.modified {
            self.ask_discard(PendingAction::Open(path));
        } else {
            self.open_path(path);
        }
    }

    /// Replace the buffer with the file at `path`; returns true on success
    pub fn open_path(&mut self, path: PathBuf) -> bool {
        match self.buffer.load_from_file(&path) {
            Ok(()) => {
                self.reset_view();
                self.set_status(format!("Opened: {}", self.document_name()));
                true
            }
            Err(BufferError::InvalidEncoding(e)) => {
                log::warn!("{} is not UTF-8: {e}", path.display());
                self.set_status("Could not open file. Invalid encoding.");
                false
            }
            Err(e) => {
                log::warn!("Failed to open {}: {e}", path.display());
                self.set_status("Could not open file.");
                false
            }
        }
    }

    fn reset_view(&mut self) {
        self.cursor = Cursor::new();
        self.selection.clear();
        self.viewport.reset();
    }

    /// Save to the current path, or prompt for one; returns true if the file was written
    pub fn save(&mut self) -> bool {
        match self.buffer.file_path.clone() {
            Some(path) => self.save_to_path(path),
            None => {
                self.enter_command_mode("saveas ");
                false
            }
        }
    }

    /// Save under a new name, adding `.txt` when the name has no extension
    pub fn save_as(&mut self, path: PathBuf) -> bool {
        self.save_to_path(with_txt_extension(path))
    }

    pub fn save_to_path(&mut self, path: PathBuf) -> bool {
        match self.buffer.save_to_file(&path) {
            Ok(()) => {
                self.set_status(format!("Saved: {}", self.document_name()));
                true
            }
            Err(e) => {
                log::error!("Failed to save {}: {e}", path.display());
                self.set_status("Could not save file.");
                false
            }
        }
    }

    pub fn copy_all(&mut self) {
        let text = self.buffer.text();
        match self.clipboard.set_text(&text) {
            Ok(()) => self.set_status("Copied"),
            Err(e) => {
                log::warn!("Copy failed: {e}");
                self.set_status(format!("Could not copy: {e}"));
            }
        }
    }

    pub fn toggle_theme(&mut self) {
        self.dark_mode = !self.dark_mode;
        log::debug!("Dark mode: {}", self.dark_mode);
    }

    /// Quit now if nothing is unsaved, otherwise ask; returns true to quit
    pub fn request_quit(&mut self) -> bool {
        if self.buffer.modified {
            self.ask_discard(PendingAction::Quit);
            false
        } else {
            true
        }
    }

    fn ask_discard(&mut self, action: PendingAction) {
        self.pending = Some(action);
        self.mode = Mode::Confirm;
        self.set_status(CONFIRM_DISCARD);
    }

    /// Answer the discard prompt; returns true to quit
    pub fn confirm(&mut self, yes: bool) -> bool {
        self.mode = Mode::Edit;
        self.clear_status();
        match (self.pending.take(), yes) {
            (Some(PendingAction::Quit), true) => true,
            (Some(PendingAction::Open(path)), true) => {
                self.open_path(path);
                false
            }
            _ => false,
        }
    }

    // --- Command line -----------------------------------------------------------------

    /// Enter command mode with `prefill` already typed
    pub fn enter_command_mode(&mut self, prefill: &str) {
        self.mode = Mode::Command;
        self.command_line = prefill.to_string();
        self.command_history_index = self.command_history.len();
    }

    /// Handle command line input; returns true if the editor should quit
    pub fn handle_command_input(&mut self, c: char) -> bool {
        match c {
            '\n' | '\r' => {
                self.mode = Mode::Edit;
                let should_quit = self.execute_command_line();
                self.command_line.clear();
                return should_quit;
            }
            '\x08' | '\x7f' => {
                self.command_line.pop();
            }
            '\x1b' => {
                self.mode = Mode::Edit;
                self.command_line.clear();
            }
            c if !c.is_control() => self.command_line.push(c),
            _ => {}
        }
        false
    }

    pub fn history_prev(&mut self) {
        if self.command_history_index > 0 {
            self.command_history_index -= 1;
            self.command_line = self.command_history[self.command_history_index].clone();
        }
    }

    pub fn history_next(&mut self) {
        if self.command_history_index + 1 < self.command_history.len() {
            self.command_history_index += 1;
            self.command_line = self.command_history[self.command_history_index].clone();
        } else {
            self.command_history_index = self.command_history.len();
            self.command_line.clear();
        }
    }

    fn execute_command_line(&mut self) -> bool {
        let line = self.command_line.trim().to_string();
        if line.is_empty() {
            return false;
        }
        self.command_history.push(line.clone());
        self.command_history_index = self.command_history.len();

        match CommandParser::parse(&line) {
            Ok(cmd) => self.execute_line_command(cmd),
            Err(e) => {
                self.set_status(e.to_string());
                false
            }
        }
    }

    /// Run a parsed command line; returns true if the editor should quit
    pub fn execute_line_command(&mut self, cmd: LineCommand) -> bool {
        log::debug!("Command line: {cmd:?}");
        match cmd {
            LineCommand::Write(None) => {
                self.save();
            }
            LineCommand::Write(Some(path)) | LineCommand::SaveAs(path) => {
                self.save_as(path);
            }
            LineCommand::Edit(path) => self.request_open(path),
            LineCommand::Quit => return self.request_quit(),
            LineCommand::ForceQuit => return true,
            LineCommand::WriteQuit => return self.save(),
            LineCommand::Style(variant) => self.style_selection(variant),
            LineCommand::List(list_style) => self.insert_list(list_style),
            LineCommand::EmDash => self.insert_text_at_cursor(EM_DASH),
            LineCommand::Separator => {
                let separator = self.separator.clone();
                self.insert_text_at_cursor(&separator);
            }
            LineCommand::Emoji(query) => self.open_emoji_picker(query.as_deref()),
            LineCommand::Copy => self.copy_all(),
            LineCommand::Theme => self.toggle_theme(),
        }
        self.scroll_to_cursor();
        false
    }

    /// Get command line display text
    pub fn get_command_line_display(&self) -> String {
        if self.mode == Mode::Command {
            format!(":{}", self.command_line)
        } else {
            String::new()
        }
    }
}

fn with_txt_extension(path: PathBuf) -> PathBuf {
    if path.extension().is_some() {
        path
    } else {
        path.with_extension("txt")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;

    fn editor_with(text: &str) -> Editor {
        let mut editor = Editor::default().with_clipboard(Box::new(MemoryClipboard::default()));
        editor.buffer = Buffer::from_text(text);
        editor
    }

    #[test]
    fn test_style_without_selection_sets_status() {
        let mut editor = editor_with("Launch Day");
        editor.execute_command(Command::ApplyStyle(StyleVariant::Bold));
        assert_eq!(editor.buffer.text(), "Launch Day");
        assert_eq!(editor.status_message.as_deref(), Some("Select text to style."));
    }

    #[test]
    fn test_style_keeps_selection() {
        let mut editor = editor_with("Launch Day");
        editor.select_range(0..6);
        editor.execute_command(Command::ApplyStyle(StyleVariant::Bold));
        assert_eq!(editor.buffer.text(), "𝐋𝐚𝐮𝐧𝐜𝐡 Day");
        assert_eq!(editor.selection_range(), Some(0..6));
        assert!(editor.buffer.modified);

        editor.execute_command(Command::ApplyStyle(StyleVariant::Unstyle));
        assert_eq!(editor.buffer.text(), "Launch Day");
    }

    #[test]
    fn test_unstyle_strips_list_markers() {
        let mut editor = editor_with("• 𝐨𝐧𝐞\n2. two");
        editor.select_all();
        editor.style_selection(StyleVariant::Unstyle);
        assert_eq!(editor.buffer.text(), "one\ntwo");
    }

    #[test]
    fn test_typing_replaces_selection() {
        let mut editor = editor_with("hello world");
        editor.select_range(6..11);
        editor.execute_command(Command::InsertChar('X'));
        assert_eq!(editor.buffer.text(), "hello X");
        assert_eq!(editor.selection_range(), None);
        assert_eq!(editor.cursor_index(), 7);
    }

    #[test]
    fn test_shift_arrows_select_and_arrows_clear() {
        let mut editor = editor_with("abc\ndef");
        editor.execute_command(Command::SelectRight);
        editor.execute_command(Command::SelectRight);
        assert_eq!(editor.selected_text().as_deref(), Some("ab"));
        editor.execute_command(Command::SelectDown);
        assert_eq!(editor.selected_text().as_deref(), Some("abc\nde"));
        editor.execute_command(Command::MoveLeft);
        assert_eq!(editor.selection_range(), None);
    }

    #[test]
    fn test_backspace_and_delete() {
        let mut editor = editor_with("ab\r\ncd");
        editor.cursor = Cursor::at(1, 0);
        editor.execute_command(Command::DeleteChar);
        assert_eq!(editor.buffer.text(), "abcd");
        assert_eq!(editor.cursor, Cursor::at(0, 2));
        editor.execute_command(Command::DeleteForward);
        assert_eq!(editor.buffer.text(), "abd");
    }

    #[test]
    fn test_emoji_sequence_moves_and_deletes_as_one() {
        let mut editor = editor_with("");
        editor.open_emoji_picker(Some("red heart"));
        editor.execute_command(Command::EmojiSelect);
        assert_eq!(editor.buffer.text(), "\u{2764}\u{fe0f}");
        assert_eq!(editor.cursor_index(), 2);
        editor.execute_command(Command::DeleteChar);
        assert_eq!(editor.buffer.text(), "");

        let mut editor = editor_with("a\u{2764}\u{fe0f}b");
        editor.execute_command(Command::MoveLineEnd);
        editor.execute_command(Command::MoveLeft);
        assert_eq!(editor.cursor_index(), 3);
        editor.execute_command(Command::MoveLeft);
        assert_eq!(editor.cursor_index(), 1);
        editor.execute_command(Command::SelectRight);
        assert_eq!(editor.selection_range(), Some(1..3));
        editor.execute_command(Command::MoveLeft);
        editor.execute_command(Command::DeleteForward);
        assert_eq!(editor.buffer.text(), "ab");
    }

    #[test]
    fn test_vertical_move_never_splits_a_cluster() {
        let mut editor = editor_with("\u{2764}\u{fe0f}x\nabcd");
        editor.cursor = Cursor::at(1, 1);
        editor.execute_command(Command::MoveUp);
        assert_eq!(editor.cursor.line, 0);
        assert_eq!(editor.cursor.col, 0);
        editor.execute_command(Command::MoveDown);
        assert_eq!(editor.cursor, Cursor::at(1, 1));
    }

    #[test]
    fn test_status_clears_on_next_action() {
        let mut editor = editor_with("Launch");
        editor.execute_command(Command::ApplyStyle(StyleVariant::Bold));
        assert_eq!(editor.status_message.as_deref(), Some("Select text to style."));
        editor.select_all();
        editor.execute_command(Command::ApplyStyle(StyleVariant::Bold));
        assert_eq!(editor.buffer.text(), "𝐋𝐚𝐮𝐧𝐜𝐡");
        assert_eq!(editor.status_message, None);

        editor.execute_command(Command::CopyAll);
        editor.execute_command(Command::MoveLeft);
        assert_eq!(editor.status_message, None);
    }

    #[test]
    fn test_status_expires_except_discard_prompt() {
        let mut editor = editor_with("");
        editor.set_status("Copied");
        assert!(!editor.expire_status(Instant::now()));
        assert!(editor.expire_status(Instant::now() + STATUS_TIMEOUT));
        assert_eq!(editor.status_message, None);

        editor.execute_command(Command::InsertChar('x'));
        editor.execute_command(Command::Quit);
        assert!(!editor.expire_status(Instant::now() + STATUS_TIMEOUT * 2));
        assert_eq!(editor.status_message.as_deref(), Some(CONFIRM_DISCARD));
    }

    #[test]
    fn test_list_continuation_and_exit() {
        let mut editor = editor_with("1. first");
        editor.execute_command(Command::MoveLineEnd);
        editor.execute_command(Command::InsertNewline);
        assert_eq!(editor.buffer.text(), "1. first\n2. ");
        editor.execute_command(Command::InsertNewline);
        assert_eq!(editor.buffer.text(), "1. first\n\n");
        assert_eq!(editor.cursor, Cursor::at(2, 0));
    }

    #[test]
    fn test_list_on_cursor_line() {
        let mut editor = editor_with("  idea");
        editor.insert_list(ListStyle::Bullets);
        assert_eq!(editor.buffer.text(), "  • idea");
        editor.insert_list(ListStyle::Dashes);
        assert_eq!(editor.buffer.text(), "  - idea");
        assert_eq!(editor.status_message.as_deref(), Some("Dashed list"));
    }

    #[test]
    fn test_list_expands_partial_selection() {
        let mut editor = editor_with("alpha\nbeta\ngamma");
        editor.select_range(2..8);
        editor.insert_list(ListStyle::Numbers);
        assert_eq!(editor.buffer.text(), "1. alpha\n2. beta\ngamma");
    }

    #[test]
    fn test_inserts() {
        let mut editor = editor_with("");
        editor.separator = "~~~".to_string();
        editor.execute_command(Command::InsertEmDash);
        editor.execute_command(Command::InsertSeparator);
        assert_eq!(editor.buffer.text(), "—~~~");
        assert_eq!(editor.cursor_index(), 4);
    }

    #[test]
    fn test_emoji_picker_flow() {
        let mut editor = editor_with("Go ");
        editor.execute_command(Command::MoveLineEnd);
        editor.execute_command(Command::OpenEmojiPicker);
        assert_eq!(editor.mode, Mode::EmojiPicker);
        for c in "rocket".chars() {
            editor.execute_command(Command::InsertChar(c));
        }
        assert_eq!(editor.buffer.text(), "Go ");
        editor.execute_command(Command::EmojiSelect);
        assert_eq!(editor.buffer.text(), "Go 🚀");
        assert_eq!(editor.mode, Mode::Edit);
        assert!(editor.emoji_picker.is_none());

        editor.execute_command(Command::OpenEmojiPicker);
        editor.execute_command(Command::EmojiCancel);
        assert_eq!(editor.buffer.text(), "Go 🚀");
        assert_eq!(editor.mode, Mode::Edit);
    }

    #[test]
    fn test_quit_asks_when_dirty() {
        let mut editor = editor_with("");
        assert!(editor.execute_command(Command::Quit));

        editor.execute_command(Command::InsertChar('x'));
        assert!(!editor.execute_command(Command::Quit));
        assert_eq!(editor.mode, Mode::Confirm);
        assert_eq!(editor.status_message.as_deref(), Some(CONFIRM_DISCARD));
        assert!(!editor.execute_command(Command::ConfirmNo));
        assert_eq!(editor.mode, Mode::Edit);

        editor.execute_command(Command::Quit);
        assert!(editor.execute_command(Command::ConfirmYes));
    }

    #[test]
    fn test_window_title() {
        let mut editor = editor_with("");
        assert_eq!(editor.window_title(), "Postlette — Untitled");
        editor.buffer.file_path = Some(PathBuf::from("/tmp/post.txt"));
        editor.execute_command(Command::InsertChar('a'));
        assert_eq!(editor.window_title(), "Postlette — post.txt*");
    }

    #[test]
    fn test_copy_all() {
        let mut editor = editor_with("𝐁𝐨𝐥𝐝 news");
        editor.execute_command(Command::CopyAll);
        assert_eq!(editor.status_message.as_deref(), Some("Copied"));
        assert_eq!(editor.clipboard_mut().get_text().unwrap(), "𝐁𝐨𝐥𝐝 news");
    }

    #[test]
    fn test_save_without_path_prompts() {
        let mut editor = editor_with("draft");
        assert!(!editor.save());
        assert_eq!(editor.mode, Mode::Command);
        assert_eq!(editor.command_line, "saveas ");
    }

    #[test]
    fn test_txt_extension() {
        assert_eq!(
            with_txt_extension(PathBuf::from("notes")),
            PathBuf::from("notes.txt")
        );
        assert_eq!(
            with_txt_extension(PathBuf::from("notes.md")),
            PathBuf::from("notes.md")
        );
    }

    #[test]
    fn test_command_line_input() {
        let mut editor = editor_with("Launch");
        editor.select_all();
        editor.enter_command_mode("");
        for c in "bold\n".chars() {
            assert!(!editor.handle_command_input(c));
        }
        assert_eq!(editor.buffer.text(), "𝐋𝐚𝐮𝐧𝐜𝐡");
        assert_eq!(editor.mode, Mode::Edit);
        assert_eq!(editor.command_history, vec!["bold".to_string()]);

        editor.enter_command_mode("");
        for c in "frobnicate\n".chars() {
            editor.handle_command_input(c);
        }
        assert_eq!(
            editor.status_message.as_deref(),
            Some("Unknown command: frobnicate")
        );

        editor.enter_command_mode("");
        editor.history_prev();
        assert_eq!(editor.command_line, "frobnicate");
        editor.history_prev();
        assert_eq!(editor.command_line, "bold");
        editor.history_next();
        editor.history_next();
        assert_eq!(editor.command_line, "");
    }

    #[test]
    fn test_force_quit() {
        let mut editor = editor_with("");
        editor.execute_command(Command::InsertChar('x'));
        assert!(editor.execute_line_command(LineCommand::ForceQuit));
    }

    #[test]
    fn test_resize_leaves_room_for_chrome() {
        let mut editor = editor_with("");
        editor.handle_resize(24, 80);
        assert_eq!(editor.viewport.rows, 21);
        assert_eq!(editor.viewport.cols, 80);
        editor.handle_resize(2, 0);
        assert_eq!(editor.viewport.rows, 1);
    }
}
