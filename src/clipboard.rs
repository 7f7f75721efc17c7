// clipboard.rs - Clipboard access for postlette
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("Clipboard support is not available in this build")]
    Unavailable,
    #[error("Clipboard is empty")]
    EmptyClipboard,
    #[error("System error: {0}")]
    SystemError(String),
}

/// Somewhere copied text can go
pub trait ClipboardProvider {
    fn get_text(&mut self) -> Result<String, ClipboardError>;
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The desktop clipboard, connected on first use so a headless session can still start
#[cfg(feature = "clipboard")]
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

#[cfg(feature = "clipboard")]
impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn connect(&mut self) -> Result<&mut arboard::Clipboard, ClipboardError> {
        if self.inner.is_none() {
            let clipboard = arboard::Clipboard::new()
                .map_err(|e| ClipboardError::SystemError(e.to_string()))?;
            log::debug!("Connected to system clipboard");
            self.inner = Some(clipboard);
        }
        self.inner
            .as_mut()
            .ok_or_else(|| ClipboardError::SystemError("clipboard not connected".to_string()))
    }
}

#[cfg(feature = "clipboard")]
impl ClipboardProvider for SystemClipboard {
    fn get_text(&mut self) -> Result<String, ClipboardError> {
        self.connect()?.get_text().map_err(|e| match e {
            arboard::Error::ContentNotAvailable => ClipboardError::EmptyClipboard,
            other => ClipboardError::SystemError(other.to_string()),
        })
    }

    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.connect()?
            .set_text(text)
            .map_err(|e| ClipboardError::SystemError(e.to_string()))
    }
}

/// Stand-in used when the `clipboard` feature is off
#[derive(Debug, Default)]
pub struct UnavailableClipboard;

impl ClipboardProvider for UnavailableClipboard {
    fn get_text(&mut self) -> Result<String, ClipboardError> {
        Err(ClipboardError::Unavailable)
    }

    fn set_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable)
    }
}

/// In-process clipboard, handy for tests and headless runs
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
}

impl ClipboardProvider for MemoryClipboard {
    fn get_text(&mut self) -> Result<String, ClipboardError> {
        self.contents.clone().ok_or(ClipboardError::EmptyClipboard)
    }

    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}

/// The best clipboard this build supports
pub fn system_clipboard() -> Box<dyn ClipboardProvider> {
    #[cfg(feature = "clipboard")]
    {
        Box::new(SystemClipboard::new())
    }
    #[cfg(not(feature = "clipboard"))]
    {
        Box::new(UnavailableClipboard)
    }
}
