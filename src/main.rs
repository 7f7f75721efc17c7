use std::fs::OpenOptions;
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{Context, bail};
use crossterm::{
    event::{
        Event, KeyCode, KeyEvent, KeyEventKind, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags, read,
    },
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use postlette::cli;
use postlette::config::PostletteConfig;
use postlette::keymap::{key_to_command, keyboard_enhancement_flags};
use postlette::style::StyleTables;
use postlette::ui::renderer::TuiRenderer;
use postlette::ui::{detect_system_theme, resolve_dark_mode};
use postlette::{editor::Editor, mode::Mode};

/// Application entry point: parse arguments, load the config, set up logging and the terminal,
/// open the requested file and run the event loop until the editor asks to quit.
///
/// The terminal is restored before returning, including when the event loop fails.
fn main() -> anyhow::Result<()> {
    let cli_args = cli::parse_args();
    if cli_args.is_directory() {
        bail!("'{}' is a directory", cli_args.file.as_deref().unwrap_or(Path::new(".")).display());
    }

    let config = PostletteConfig::load(cli_args.config.as_deref())?;
    let log_file = cli_args.log_file.clone().or_else(|| config.log_file.clone());
    init_logging(log_file.as_deref())?;

    let mut editor = Editor::new(StyleTables::new());
    editor.separator = config.separator.clone();
    let theme_mode = cli_args.theme.unwrap_or(config.theme);
    editor.dark_mode = resolve_dark_mode(theme_mode, detect_system_theme());
    if let Some(path) = cli_args.file.clone() {
        editor.start_with_path(path);
    }
    log::info!("Starting {}", editor.window_title());

    // Enable raw mode and enter alternate screen
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    crossterm::execute!(stdout, EnterAlternateScreen)?;
    // Without this, Ctrl+Shift+B reaches us as Ctrl+B
    let enhanced = match crossterm::execute!(
        stdout,
        PushKeyboardEnhancementFlags(keyboard_enhancement_flags())
    ) {
        Ok(()) => true,
        Err(e) => {
            log::warn!("Keyboard enhancement unavailable: {e}");
            false
        }
    };

    let result = run(&mut editor);

    // Leave alternate screen and disable raw mode
    if enhanced {
        crossterm::execute!(stdout, PopKeyboardEnhancementFlags)?;
    }
    crossterm::execute!(stdout, LeaveAlternateScreen)?;
    disable_raw_mode()?;
    result
}

/// Logs go to a file because the terminal is busy drawing the editor
fn init_logging(log_file: Option<&Path>) -> anyhow::Result<()> {
    let mut builder = env_logger::Builder::new();
    match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            builder
                .filter_level(log::LevelFilter::Warn)
                .parse_default_env()
                .target(env_logger::Target::Pipe(Box::new(file)));
        }
        None => {
            builder.filter_level(log::LevelFilter::Error);
        }
    }
    builder.init();
    Ok(())
}

fn run(editor: &mut Editor) -> anyhow::Result<()> {
    let mut renderer = TuiRenderer::new()?;
    let (cols, rows) = crossterm::terminal::size()?;
    editor.handle_resize(rows, cols);

    // Frame rate limiting constants
    const TARGET_FPS: u64 = 60;
    const FRAME_DURATION: Duration = Duration::from_micros(1_000_000 / TARGET_FPS);
    // How often to wake up while a status message is waiting to expire
    const STATUS_TICK: Duration = Duration::from_millis(250);

    // Event loop with frame rate limiting
    let mut last_frame_time = Instant::now();
    let mut needs_redraw = true;

    loop {
        // Only render if needed and enough time has elapsed since last frame
        if needs_redraw && last_frame_time.elapsed() >= FRAME_DURATION {
            renderer.draw(editor)?;
            last_frame_time = Instant::now();
            needs_redraw = false;
        }

        if editor.expire_status(Instant::now()) {
            needs_redraw = true;
        }

        // Poll with a timeout while a redraw or a status expiry is pending, otherwise block
        let timeout = if needs_redraw {
            Some(FRAME_DURATION.saturating_sub(last_frame_time.elapsed()))
        } else if editor.status_message.is_some() {
            Some(STATUS_TICK)
        } else {
            None
        };
        let event = match timeout {
            Some(timeout) => {
                if crossterm::event::poll(timeout)? {
                    Some(read()?)
                } else {
                    None
                }
            }
            None => Some(read()?),
        };

        match event {
            Some(Event::Key(key_event)) if key_event.kind == KeyEventKind::Press => {
                if handle_key(editor, key_event) {
                    break;
                }
                needs_redraw = true;
            }
            Some(Event::Resize(cols, rows)) => {
                editor.handle_resize(rows, cols);
                needs_redraw = true;
            }
            Some(_) | None => {}
        }
    }

    log::info!("Exiting");
    Ok(())
}

/// Route a key press to the command line or the keymap; returns true to quit
fn handle_key(editor: &mut Editor, key_event: KeyEvent) -> bool {
    if editor.mode == Mode::Command {
        return match key_event.code {
            KeyCode::Char(c) => editor.handle_command_input(c),
            KeyCode::Enter => editor.handle_command_input('\n'),
            KeyCode::Backspace => editor.handle_command_input('\x7f'),
            KeyCode::Esc => editor.handle_command_input('\x1b'),
            KeyCode::Up => {
                editor.history_prev();
                false
            }
            KeyCode::Down => {
                editor.history_next();
                false
            }
            _ => false,
        };
    }

    match key_to_command(key_event, editor.mode) {
        Some(cmd) => editor.execute_command(cmd),
        None => false,
    }
}
