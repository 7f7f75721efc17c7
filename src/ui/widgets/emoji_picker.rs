// ui/widgets/emoji_picker.rs - Emoji picker overlay

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Widget},
};

use crate::emoji::{COLUMNS, EmojiPickerState};
use crate::ui::theme::Theme;

/// Terminal cells per grid cell: a two-cell emoji plus padding
const CELL_WIDTH: u16 = 4;
/// Grid rows shown at once
pub const VISIBLE_ROWS: usize = 6;
/// Search line, hint line and the border
const CHROME_HEIGHT: u16 = 4;

pub struct EmojiPickerWidget<'a> {
    pub state: &'a EmojiPickerState,
    pub theme: &'a Theme,
}

impl<'a> EmojiPickerWidget<'a> {
    pub fn new(state: &'a EmojiPickerState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    /// Centered overlay area, clipped to `screen`
    pub fn calculate_area(screen: Rect) -> Rect {
        let width = (COLUMNS as u16 * CELL_WIDTH + 2).min(screen.width);
        let height = (VISIBLE_ROWS as u16 + CHROME_HEIGHT).min(screen.height);
        Rect {
            x: screen.x + (screen.width - width) / 2,
            y: screen.y + (screen.height - height) / 2,
            width,
            height,
        }
    }
}

impl Widget for EmojiPickerWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let base = Style::default()
            .bg(self.theme.general.background)
            .fg(self.theme.general.foreground);
        let selected = Style::default()
            .bg(self.theme.ui.selection_bg)
            .fg(self.theme.ui.selection_fg);

        Clear.render(area, buf);
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Emoji ")
            .border_style(base.fg(self.theme.ui.focus))
            .style(base);
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let search = if self.state.query.is_empty() {
            Line::from(Span::styled(
                "Search emoji...",
                base.fg(self.theme.general.placeholder)
                    .add_modifier(Modifier::ITALIC),
            ))
        } else {
            Line::from(Span::styled(format!("/{}", self.state.query), base))
        };
        buf.set_line(inner.x, inner.y, &search, inner.width);

        let grid_top = inner.y + 1;
        let grid_rows = inner.height.saturating_sub(2);
        if self.state.row_count() == 0 {
            if grid_rows > 0 {
                buf.set_string(inner.x, grid_top, "No matches", base);
            }
        } else {
            for row in 0..grid_rows as usize {
                let grid_row = self.state.scroll_row + row;
                let first = grid_row * COLUMNS;
                if first >= self.state.filtered.len() {
                    break;
                }
                let last = (first + COLUMNS).min(self.state.filtered.len());
                let spans: Vec<Span> = (first..last)
                    .map(|idx| {
                        let style = if idx == self.state.selected_index {
                            selected
                        } else {
                            base
                        };
                        Span::styled(format!(" {} ", self.state.filtered[idx].emoji), style)
                    })
                    .collect();
                buf.set_line(inner.x, grid_top + row as u16, &Line::from(spans), inner.width);
            }
        }

        let hint = match self.state.selected() {
            Some(entry) => format!("{}  Enter insert, Esc cancel", entry.name()),
            None => "Esc cancel".to_string(),
        };
        let hint_y = inner.y + inner.height - 1;
        if hint_y > inner.y {
            buf.set_string(
                inner.x,
                hint_y,
                hint,
                base.fg(self.theme.general.placeholder),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_is_centered_and_clipped() {
        let area = EmojiPickerWidget::calculate_area(Rect::new(0, 0, 80, 24));
        assert_eq!(area.width, 34);
        assert_eq!(area.height, 10);
        assert_eq!(area.x, 23);
        assert_eq!(area.y, 7);

        let tiny = EmojiPickerWidget::calculate_area(Rect::new(0, 0, 10, 5));
        assert_eq!(tiny, Rect::new(0, 0, 10, 5));
    }

    #[test]
    fn test_render_shows_query_and_hint() {
        let state = EmojiPickerState::with_query("rocket");
        let theme = Theme::light();
        let screen = Rect::new(0, 0, 80, 24);
        let area = EmojiPickerWidget::calculate_area(screen);
        let mut buf = Buffer::empty(screen);
        EmojiPickerWidget::new(&state, &theme).render(area, &mut buf);

        let search_row: String = (area.x + 1..area.x + 10)
            .map(|x| buf.get(x, area.y + 1).symbol().to_string())
            .collect();
        assert_eq!(search_row, "/rocket  ");
        let hint_row: String = (area.x + 1..area.x + 7)
            .map(|x| buf.get(x, area.y + area.height - 2).symbol().to_string())
            .collect();
        assert_eq!(hint_row, "rocket");
    }
}
