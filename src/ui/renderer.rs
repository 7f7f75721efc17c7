// ui/renderer.rs - Ratatui-based renderer for the editor

use std::io::{self, Stdout};

use crossterm::terminal::SetTitle;
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
};

use crate::editor::{CONFIRM_DISCARD, Editor};
use crate::mode::Mode;
use crate::ui::theme::Theme;
use crate::ui::widgets::editor_pane::EditorPane;
use crate::ui::widgets::emoji_picker::{EmojiPickerWidget, VISIBLE_ROWS};
use crate::ui::widgets::status_bar::StatusBar;
use crate::ui::widgets::toolbar::Toolbar;

/// Screen regions, top to bottom
pub struct ScreenLayout {
    pub toolbar: Rect,
    pub editor: Rect,
    pub status_bar: Rect,
    pub command_line: Rect,
}

impl ScreenLayout {
    pub fn new(size: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Toolbar
                Constraint::Min(1),    // Editor area
                Constraint::Length(1), // Status bar
                Constraint::Length(1), // Command line
            ])
            .split(size);
        Self {
            toolbar: chunks[0],
            editor: chunks[1],
            status_bar: chunks[2],
            command_line: chunks[3],
        }
    }
}

/// Ratatui-based renderer for the editor
pub struct TuiRenderer {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    last_title: Option<String>,
}

impl TuiRenderer {
    pub fn new() -> io::Result<Self> {
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;
        Ok(Self {
            terminal,
            last_title: None,
        })
    }

    /// Draw the editor UI and keep the terminal title in sync with the document
    pub fn draw(&mut self, editor: &mut Editor) -> io::Result<()> {
        let title = editor.window_title();
        if self.last_title.as_deref() != Some(title.as_str()) {
            crossterm::execute!(self.terminal.backend_mut(), SetTitle(&title))?;
            self.last_title = Some(title);
        }

        let theme = Theme::for_mode(editor.dark_mode);
        self.terminal.draw(|f| render_frame(f, editor, &theme))?;
        Ok(())
    }
}

/// Render one frame; shared by the terminal renderer and tests
pub fn render_frame(f: &mut Frame, editor: &mut Editor, theme: &Theme) {
    let size = f.size();
    let layout = ScreenLayout::new(size);

    f.render_widget(Toolbar::new(theme), layout.toolbar);
    f.render_widget(EditorPane::new(editor, theme), layout.editor);
    f.render_widget(StatusBar::new(editor, theme), layout.status_bar);

    let line_style = Style::default()
        .bg(theme.general.background)
        .fg(theme.general.foreground);
    f.buffer_mut().set_style(layout.command_line, line_style);

    match editor.mode {
        Mode::Command => {
            let command_text = editor.get_command_line_display();
            let width = Span::raw(command_text.as_str()).width() as u16;
            f.buffer_mut().set_line(
                layout.command_line.x,
                layout.command_line.y,
                &Line::from(Span::styled(command_text, line_style)),
                layout.command_line.width,
            );
            if width < layout.command_line.width {
                f.set_cursor(layout.command_line.x + width, layout.command_line.y);
            }
        }
        Mode::Confirm => {
            f.buffer_mut().set_string(
                layout.command_line.x,
                layout.command_line.y,
                CONFIRM_DISCARD,
                line_style.fg(theme.ui.warning),
            );
        }
        Mode::EmojiPicker => {
            if let Some(picker) = &mut editor.emoji_picker {
                picker.scroll_into_view(VISIBLE_ROWS);
                let area = EmojiPickerWidget::calculate_area(layout.editor);
                f.render_widget(EmojiPickerWidget::new(picker, theme), area);
            }
            f.buffer_mut().set_string(
                layout.command_line.x,
                layout.command_line.y,
                "Type to search, arrows to move, Enter to insert, Esc to cancel",
                line_style.fg(theme.general.placeholder),
            );
        }
        Mode::Edit => {
            let row = editor
                .cursor
                .line
                .saturating_sub(editor.viewport.offset_line) as u16;
            let col = EditorPane::cursor_x(editor);
            if row < layout.editor.height && col < layout.editor.width {
                f.set_cursor(layout.editor.x + col, layout.editor.y + row);
            }
        }
    }
}
