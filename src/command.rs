use std::path::PathBuf;

use thiserror::Error;

use crate::lists::ListStyle;
use crate::style::StyleVariant;

/// Editor action produced by a key binding
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    MoveLineStart,
    MoveLineEnd,
    MoveFileStart,
    MoveFileEnd,
    SelectLeft,
    SelectRight,
    SelectUp,
    SelectDown,
    SelectAll,
    InsertChar(char),
    InsertNewline,
    DeleteChar,
    DeleteForward,
    ApplyStyle(StyleVariant),
    InsertEmDash,
    InsertSeparator,
    OpenEmojiPicker,
    EmojiLeft,
    EmojiRight,
    EmojiUp,
    EmojiDown,
    EmojiSelect,
    EmojiCancel,
    EnterCommandMode,
    PromptOpen,
    PromptSaveAs,
    SaveFile,
    CopyAll,
    ToggleTheme,
    ConfirmYes,
    ConfirmNo,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),

    #[error("{0}")]
    InvalidArgument(String),
}

/// A parsed `:` command line
#[derive(Debug, Clone, PartialEq)]
pub enum LineCommand {
    Write(Option<PathBuf>),
    SaveAs(PathBuf),
    Edit(PathBuf),
    Quit,
    ForceQuit,
    WriteQuit,
    Style(StyleVariant),
    List(ListStyle),
    EmDash,
    Separator,
    Emoji(Option<String>),
    Copy,
    Theme,
}

pub struct CommandParser;

impl CommandParser {
    /// Parse a command string (without the leading ':')
    pub fn parse(line: &str) -> Result<LineCommand, CommandError> {
        let trimmed = line.trim();
        let (name, arg) = match trimmed.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, Some(arg.trim()).filter(|a| !a.is_empty())),
            None => (trimmed, None),
        };

        match name {
            "w" | "write" => Ok(LineCommand::Write(arg.map(PathBuf::from))),
            "saveas" | "sav" => arg
                .map(|path| LineCommand::SaveAs(PathBuf::from(path)))
                .ok_or(CommandError::MissingArgument("file path")),
            "e" | "edit" | "open" => arg
                .map(|path| LineCommand::Edit(PathBuf::from(path)))
                .ok_or(CommandError::MissingArgument("file path")),
            "q" | "quit" => Ok(LineCommand::Quit),
            "q!" | "quit!" => Ok(LineCommand::ForceQuit),
            "wq" | "x" => Ok(LineCommand::WriteQuit),
            "style" => {
                let variant = arg.ok_or(CommandError::MissingArgument("style name"))?;
                variant
                    .parse()
                    .map(LineCommand::Style)
                    .map_err(|e| CommandError::InvalidArgument(e.to_string()))
            }
            "bold" => Ok(LineCommand::Style(StyleVariant::Bold)),
            "italic" => Ok(LineCommand::Style(StyleVariant::Italic)),
            "bolditalic" | "bold-italic" => Ok(LineCommand::Style(StyleVariant::BoldItalic)),
            "unstyle" => Ok(LineCommand::Style(StyleVariant::Unstyle)),
            "list" => {
                let style = arg.ok_or(CommandError::MissingArgument("list type"))?;
                style
                    .parse()
                    .map(LineCommand::List)
                    .map_err(|e| CommandError::InvalidArgument(e.to_string()))
            }
            "emdash" | "dash" => Ok(LineCommand::EmDash),
            "sep" | "separator" => Ok(LineCommand::Separator),
            "emoji" => Ok(LineCommand::Emoji(arg.map(str::to_string))),
            "copy" => Ok(LineCommand::Copy),
            "theme" => Ok(LineCommand::Theme),
            "" => Err(CommandError::MissingArgument("command")),
            other => Err(CommandError::UnknownCommand(other.to_string())),
        }
    }
}
