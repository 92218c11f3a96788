//! Terminal management and main run loop

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use lounge_core::LoungeConfig;
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::debug;

use crate::app::App;
use crate::event::{handle_key, poll_event, HandleResult};
use crate::theme::Theme;
use crate::ui;

/// Initialize the terminal for TUI mode
fn init_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore the terminal to normal mode
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Run the TUI application
pub fn run(config: &LoungeConfig, theme: Theme) -> Result<()> {
    let mut terminal = init_terminal()?;

    let mut app = App::new(config, theme);
    let tick = Duration::from_millis(config.general.tick_rate_ms);

    let result = run_loop(&mut terminal, &mut app, tick);

    // Restore terminal (even if loop failed)
    restore_terminal(&mut terminal)?;

    result
}

/// Main event loop
fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    tick: Duration,
) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Some(event) = poll_event(tick)? {
            match event {
                Event::Key(key) => match handle_key(app, key) {
                    HandleResult::Quit => break,
                    HandleResult::Continue => {}
                },
                // Click activation is a no-op by contract; mouse events
                // are captured and dropped.
                Event::Mouse(mouse) => {
                    debug!(?mouse, "mouse event ignored");
                }
                Event::Resize(_, _) => {
                    // Terminal resized, will be handled on next draw
                }
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
