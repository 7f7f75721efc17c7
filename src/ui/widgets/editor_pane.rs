// ui/widgets/editor_pane.rs - Editor pane widget

use std::ops::Range;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::editor::Editor;
use crate::ui::theme::Theme;
use crate::viewport::display_width;

pub const PLACEHOLDER: &str = "Start typing your post...";

/// Editor pane widget that renders the post text with its selection
pub struct EditorPane<'a> {
    pub editor: &'a Editor,
    pub theme: &'a Theme,
}

impl<'a> EditorPane<'a> {
    pub fn new(editor: &'a Editor, theme: &'a Theme) -> Self {
        Self { editor, theme }
    }

    /// Screen column of the cursor relative to the pane, in terminal cells
    pub fn cursor_x(editor: &Editor) -> u16 {
        let line = editor.buffer.line(editor.cursor.line).unwrap_or_default();
        let before: String = line
            .chars()
            .skip(editor.viewport.offset_col)
            .take(editor.cursor.col.saturating_sub(editor.viewport.offset_col))
            .collect();
        u16::try_from(display_width(&before)).unwrap_or(u16::MAX)
    }
}

/// Tabs draw as a single space so cell widths stay predictable
fn display_char(c: char) -> char {
    if c == '\t' { ' ' } else { c }
}

/// Split the visible part of a line into runs of selected and unselected text
pub fn line_spans(
    line: &str,
    line_start: usize,
    offset_col: usize,
    selection: Option<&Range<usize>>,
    base: Style,
    selected: Style,
) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    let mut run = String::new();
    let mut run_selected = false;

    for (col, c) in line.chars().enumerate().skip(offset_col) {
        let is_selected = selection.is_some_and(|range| range.contains(&(line_start + col)));
        if is_selected != run_selected && !run.is_empty() {
            let style = if run_selected { selected } else { base };
            spans.push(Span::styled(std::mem::take(&mut run), style));
        }
        run_selected = is_selected;
        run.push(display_char(c));
    }

    if !run.is_empty() {
        let style = if run_selected { selected } else { base };
        spans.push(Span::styled(run, style));
    }
    spans
}

impl Widget for EditorPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let base = Style::default()
            .bg(self.theme.general.background)
            .fg(self.theme.general.foreground);
        let selected = Style::default()
            .bg(self.theme.ui.selection_bg)
            .fg(self.theme.ui.selection_fg);

        // Clear entire editor area so stale glyphs never linger after a file switch
        buf.set_style(area, base);
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                buf.get_mut(x, y).set_char(' ');
            }
        }

        if self.editor.buffer.char_count() == 0 {
            let placeholder = Line::from(Span::styled(
                PLACEHOLDER,
                base.fg(self.theme.general.placeholder)
                    .add_modifier(Modifier::ITALIC),
            ));
            buf.set_line(area.x, area.y, &placeholder, area.width);
            return;
        }

        let selection = self.editor.selection_range();
        let viewport = &self.editor.viewport;
        for row in 0..area.height {
            let line_idx = viewport.offset_line + row as usize;
            let Some(line) = self.editor.buffer.line(line_idx) else {
                break;
            };
            let line_start = self.editor.buffer.char_index(line_idx, 0);
            let spans = line_spans(
                &line,
                line_start,
                viewport.offset_col,
                selection.as_ref(),
                base,
                selected,
            );
            buf.set_line(area.x, area.y + row, &Line::from(spans), area.width);
        }
    }
}
