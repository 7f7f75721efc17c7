// Common test utilities for editor-level tests

use postlette::buffer::Buffer;
use postlette::clipboard::MemoryClipboard;
use postlette::command::Command;
use postlette::editor::Editor;
use postlette::style::StyleTables;

/// Editor with an in-memory clipboard so tests never touch the desktop
#[allow(dead_code)]
pub fn create_editor() -> Editor {
    Editor::new(StyleTables::new()).with_clipboard(Box::new(MemoryClipboard::default()))
}

/// Editor holding `text`, cursor at the start, buffer not modified
#[allow(dead_code)]
pub fn create_editor_with_text(text: &str) -> Editor {
    let mut editor = create_editor();
    editor.buffer = Buffer::from_text(text);
    editor
}

/// Feed every char of `text` as a key press
#[allow(dead_code)]
pub fn type_text(editor: &mut Editor, text: &str) {
    for c in text.chars() {
        let cmd = if c == '\n' {
            Command::InsertNewline
        } else {
            Command::InsertChar(c)
        };
        editor.execute_command(cmd);
    }
}

/// Type a `:` command and press Enter; returns the quit signal
#[allow(dead_code)]
pub fn run_command_line(editor: &mut Editor, line: &str) -> bool {
    editor.enter_command_mode("");
    for c in line.chars() {
        editor.handle_command_input(c);
    }
    editor.handle_command_input('\n')
}
