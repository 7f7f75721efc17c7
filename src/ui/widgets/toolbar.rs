// ui/widgets/toolbar.rs - Shortcut hint bar

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::ui::theme::Theme;

/// (keys, action) pairs in display order; the row is cut off at the terminal edge
pub const SHORTCUTS: &[(&str, &str)] = &[
    ("^B", "Bold"),
    ("^I/M-i", "Italic"),
    ("M-b", "Bold Italic"),
    ("M-u", "Unstyle"),
    ("^E", "Emoji"),
    ("^D", "Em dash"),
    ("^R", "Separator"),
    ("M-c", "Copy"),
    ("^O", "Open"),
    ("^S", "Save"),
    ("M-s", "Save as"),
    ("^T", "Theme"),
    ("^P", "Commands"),
    ("^Q", "Quit"),
];

pub struct Toolbar<'a> {
    pub theme: &'a Theme,
}

impl<'a> Toolbar<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    pub fn line(&self) -> Line<'static> {
        let base = Style::default()
            .bg(self.theme.ui.toolbar_bg)
            .fg(self.theme.ui.toolbar_fg);
        let key = base
            .fg(self.theme.ui.toolbar_key)
            .add_modifier(Modifier::BOLD);

        let mut spans = vec![Span::styled(" ", base)];
        for (keys, action) in SHORTCUTS {
            spans.push(Span::styled(*keys, key));
            spans.push(Span::styled(format!(" {action}  "), base));
        }
        Line::from(spans)
    }
}

impl Widget for Toolbar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(
            area,
            Style::default()
                .bg(self.theme.ui.toolbar_bg)
                .fg(self.theme.ui.toolbar_fg),
        );
        buf.set_line(area.x, area.y, &self.line(), area.width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toolbar_lists_every_shortcut() {
        let theme = Theme::dark();
        let line = Toolbar::new(&theme).line();
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        for (keys, action) in SHORTCUTS {
            assert!(text.contains(&format!("{keys} {action}")));
        }
    }
}
