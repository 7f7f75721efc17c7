// src/keymap.rs - Key bindings for each editor mode

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, KeyboardEnhancementFlags};

use crate::command::Command;
use crate::mode::Mode;
use crate::style::StyleVariant;

/// Pushed at startup so terminals with the kitty keyboard protocol report Ctrl+Shift chords
/// and Ctrl+I distinctly. Terminals without it ignore the request and rely on the Alt chords.
pub fn keyboard_enhancement_flags() -> KeyboardEnhancementFlags {
    KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
        | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
}

/// Map a key press to an editor command. Command-line typing is handled by the editor
/// directly and never reaches this function.
pub fn key_to_command(key_event: KeyEvent, mode: Mode) -> Option<Command> {
    match mode {
        Mode::Edit => edit_key(key_event),
        Mode::EmojiPicker => match key_event.code {
            KeyCode::Esc => Some(Command::EmojiCancel),
            KeyCode::Enter => Some(Command::EmojiSelect),
            KeyCode::Left => Some(Command::EmojiLeft),
            KeyCode::Right => Some(Command::EmojiRight),
            KeyCode::Up => Some(Command::EmojiUp),
            KeyCode::Down => Some(Command::EmojiDown),
            KeyCode::Backspace => Some(Command::DeleteChar),
            KeyCode::Char(c) if !has_command_modifier(key_event.modifiers) => {
                Some(Command::InsertChar(c))
            }
            _ => None,
        },
        Mode::Confirm => match key_event.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => Some(Command::ConfirmYes),
            _ => Some(Command::ConfirmNo),
        },
        Mode::Command => None,
    }
}

fn has_command_modifier(modifiers: KeyModifiers) -> bool {
    modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

fn edit_key(key_event: KeyEvent) -> Option<Command> {
    let modifiers = key_event.modifiers;
    let shift = modifiers.contains(KeyModifiers::SHIFT);
    let ctrl = modifiers.contains(KeyModifiers::CONTROL);
    let alt = modifiers.contains(KeyModifiers::ALT);

    match key_event.code {
        KeyCode::Char(c) if ctrl => {
            // Legacy terminals drop SHIFT for Ctrl chords but may report an uppercase char
            let shifted = shift || c.is_ascii_uppercase();
            ctrl_chord(c.to_ascii_lowercase(), shifted)
        }
        KeyCode::Char(c) if alt => alt_chord(c.to_ascii_lowercase()),
        KeyCode::Char(c) => Some(Command::InsertChar(c)),
        KeyCode::Tab => Some(Command::InsertChar('\t')),
        KeyCode::Enter => Some(Command::InsertNewline),
        KeyCode::Backspace => Some(Command::DeleteChar),
        KeyCode::Delete => Some(Command::DeleteForward),
        KeyCode::Esc => Some(Command::EnterCommandMode),

        KeyCode::Left if shift => Some(Command::SelectLeft),
        KeyCode::Right if shift => Some(Command::SelectRight),
        KeyCode::Up if shift => Some(Command::SelectUp),
        KeyCode::Down if shift => Some(Command::SelectDown),
        KeyCode::Left => Some(Command::MoveLeft),
        KeyCode::Right => Some(Command::MoveRight),
        KeyCode::Up => Some(Command::MoveUp),
        KeyCode::Down => Some(Command::MoveDown),
        KeyCode::Home if ctrl => Some(Command::MoveFileStart),
        KeyCode::End if ctrl => Some(Command::MoveFileEnd),
        KeyCode::Home => Some(Command::MoveLineStart),
        KeyCode::End => Some(Command::MoveLineEnd),
        _ => None,
    }
}

fn ctrl_chord(c: char, shifted: bool) -> Option<Command> {
    match (c, shifted) {
        ('b', false) => Some(Command::ApplyStyle(StyleVariant::Bold)),
        ('b', true) => Some(Command::ApplyStyle(StyleVariant::BoldItalic)),
        ('i', _) => Some(Command::ApplyStyle(StyleVariant::Italic)),
        ('u', true) => Some(Command::ApplyStyle(StyleVariant::Unstyle)),
        ('s', false) => Some(Command::SaveFile),
        ('s', true) => Some(Command::PromptSaveAs),
        ('c', true) => Some(Command::CopyAll),
        ('o', _) => Some(Command::PromptOpen),
        ('e', _) => Some(Command::OpenEmojiPicker),
        ('d', _) => Some(Command::InsertEmDash),
        ('r', _) => Some(Command::InsertSeparator),
        ('a', _) => Some(Command::SelectAll),
        ('t', _) => Some(Command::ToggleTheme),
        ('p', _) => Some(Command::EnterCommandMode),
        ('q', _) => Some(Command::Quit),
        _ => None,
    }
}

/// Alt fallbacks for chords most terminals cannot report
fn alt_chord(c: char) -> Option<Command> {
    match c {
        'b' => Some(Command::ApplyStyle(StyleVariant::BoldItalic)),
        'i' => Some(Command::ApplyStyle(StyleVariant::Italic)),
        'u' => Some(Command::ApplyStyle(StyleVariant::Unstyle)),
        's' => Some(Command::PromptSaveAs),
        'c' => Some(Command::CopyAll),
        _ => None,
    }
}
