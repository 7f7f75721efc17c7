// ui/theme.rs - Brand palettes for UI styling

use ratatui::style::Color;

pub const INK_NAVY: Color = Color::Rgb(15, 23, 42);
pub const PAPER: Color = Color::Rgb(248, 250, 252);
pub const SLATE: Color = Color::Rgb(51, 65, 85);
pub const POLISH_TEAL: Color = Color::Rgb(20, 184, 166);
pub const ACCENT_AMBER: Color = Color::Rgb(245, 158, 11);
pub const ERROR_ROSE: Color = Color::Rgb(225, 29, 72);
const WHITE: Color = Color::Rgb(255, 255, 255);

/// Theme configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub dark: bool,
    pub general: GeneralTheme,
    pub ui: UiTheme,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeneralTheme {
    pub background: Color,
    pub foreground: Color,
    pub placeholder: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UiTheme {
    pub toolbar_bg: Color,
    pub toolbar_fg: Color,
    pub toolbar_key: Color,
    pub status_bar_bg: Color,
    pub status_bar_fg: Color,
    pub cursor_bg: Color,
    pub cursor_fg: Color,
    pub selection_bg: Color,
    pub selection_fg: Color,
    pub focus: Color,
    pub warning: Color,
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

impl Theme {
    pub fn light() -> Self {
        Self {
            dark: false,
            general: GeneralTheme {
                background: WHITE,
                foreground: INK_NAVY,
                placeholder: SLATE,
            },
            ui: UiTheme {
                toolbar_bg: WHITE,
                toolbar_fg: INK_NAVY,
                toolbar_key: POLISH_TEAL,
                status_bar_bg: PAPER,
                status_bar_fg: SLATE,
                cursor_bg: INK_NAVY,
                cursor_fg: WHITE,
                selection_bg: POLISH_TEAL,
                selection_fg: WHITE,
                focus: POLISH_TEAL,
                warning: ACCENT_AMBER,
                error: ERROR_ROSE,
            },
        }
    }

    pub fn dark() -> Self {
        Self {
            dark: true,
            general: GeneralTheme {
                background: SLATE,
                foreground: PAPER,
                placeholder: Color::Rgb(148, 163, 184),
            },
            ui: UiTheme {
                toolbar_bg: INK_NAVY,
                toolbar_fg: PAPER,
                toolbar_key: POLISH_TEAL,
                status_bar_bg: INK_NAVY,
                status_bar_fg: PAPER,
                cursor_bg: PAPER,
                cursor_fg: INK_NAVY,
                selection_bg: POLISH_TEAL,
                selection_fg: INK_NAVY,
                focus: POLISH_TEAL,
                warning: ACCENT_AMBER,
                error: ERROR_ROSE,
            },
        }
    }

    pub fn for_mode(dark: bool) -> Self {
        if dark { Self::dark() } else { Self::light() }
    }

    /// Color for a status message; prompts and failures stand out
    pub fn message_color(&self, message: &str) -> Color {
        if message.starts_with("Could not") || message.starts_with("Unknown command") {
            self.ui.error
        } else if message.ends_with("(y/n)") || message.starts_with("Select text") {
            self.ui.warning
        } else {
            self.ui.status_bar_fg
        }
    }
}
