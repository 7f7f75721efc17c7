// ui/widgets/status_bar.rs - Status bar widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::editor::Editor;
use crate::ui::theme::Theme;

/// Status bar widget showing mode, document title, the latest message and the char count
pub struct StatusBar<'a> {
    pub editor: &'a Editor,
    pub theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    pub fn new(editor: &'a Editor, theme: &'a Theme) -> Self {
        Self { editor, theme }
    }

    pub fn right_text(&self) -> String {
        format!(
            "Ln {}, Col {} | {} chars ",
            self.editor.cursor.line + 1,
            self.editor.cursor.col + 1,
            self.editor.char_count()
        )
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let base = Style::default()
            .bg(self.theme.ui.status_bar_bg)
            .fg(self.theme.ui.status_bar_fg);
        buf.set_style(area, base);

        let mut spans = vec![
            Span::styled(
                format!(" {} ", self.editor.mode.label()),
                base.fg(self.theme.ui.focus).add_modifier(Modifier::BOLD),
            ),
            Span::styled(self.editor.window_title(), base),
        ];
        if let Some(message) = &self.editor.status_message {
            spans.push(Span::styled(" | ", base));
            spans.push(Span::styled(
                message.clone(),
                base.fg(self.theme.message_color(message)),
            ));
        }

        let left = Line::from(spans);
        let right = self.right_text();
        let right_width = right.chars().count() as u16;
        buf.set_line(area.x, area.y, &left, area.width);

        // The counter wins when space runs out
        if right_width < area.width {
            let x = area.x + area.width - right_width;
            buf.set_string(x, area.y, right, base);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Buffer as TextBuffer;

    fn row_text(buf: &Buffer, width: u16) -> String {
        (0..width).map(|x| buf.get(x, 0).symbol().to_string()).collect()
    }

    #[test]
    fn test_status_shows_title_message_and_count() {
        let mut editor = Editor::default();
        editor.buffer = TextBuffer::from_text("𝐁𝐨𝐥𝐝");
        editor.set_status("Copied");
        let theme = Theme::light();
        let area = Rect::new(0, 0, 80, 1);
        let mut buf = Buffer::empty(area);
        StatusBar::new(&editor, &theme).render(area, &mut buf);

        let text = row_text(&buf, 80);
        assert!(text.starts_with(" EDIT Postlette — Untitled | Copied"));
        assert!(text.trim_end().ends_with("4 chars"));
    }
}
