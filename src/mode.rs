#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Typing goes straight into the buffer
    Edit,
    /// Typing goes into the `:` command line
    Command,
    /// Waiting for y/n before discarding unsaved changes
    Confirm,
    EmojiPicker,
}

impl Mode {
    pub fn label(self) -> &'static str {
        match self {
            Mode::Edit => "EDIT",
            Mode::Command => "COMMAND",
            Mode::Confirm => "CONFIRM",
            Mode::EmojiPicker => "EMOJI",
        }
    }
}
