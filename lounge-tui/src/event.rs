//! Event handling: terminal keys become host focus events.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use lounge_core::{Direction, NavEntry};

use crate::app::App;

/// Poll for events with timeout
pub fn poll_event(timeout: Duration) -> std::io::Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Result of handling a key event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleResult {
    /// Continue running
    Continue,
    /// Quit the application
    Quit,
}

/// Handle a key event.
///
/// Arrows and hjkl are the remote's d-pad, Enter/Space its OK button,
/// the number keys its shortcut buttons. Everything else falls through.
pub fn handle_key(app: &mut App, key: KeyEvent) -> HandleResult {
    // Global quit shortcuts (Ctrl+C, Ctrl+Q)
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if let KeyCode::Char('c') | KeyCode::Char('q') = key.code {
            return HandleResult::Quit;
        }
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return HandleResult::Quit,

        // D-pad
        KeyCode::Char('h') | KeyCode::Left => app.move_focus(Direction::Left),
        KeyCode::Char('j') | KeyCode::Down => app.move_focus(Direction::Down),
        KeyCode::Char('k') | KeyCode::Up => app.move_focus(Direction::Up),
        KeyCode::Char('l') | KeyCode::Right => app.move_focus(Direction::Right),

        // OK button; a no-op by contract
        KeyCode::Enter | KeyCode::Char(' ') => app.activate(),

        // Region jump
        KeyCode::Tab => app.toggle_region(),

        // First/last card of the active row
        KeyCode::Home => app.cursor_home(),
        KeyCode::End => app.cursor_end(),

        // Shortcut buttons: jump straight to a drawer entry
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            if let Some(entry) = NavEntry::from_index(index) {
                app.focus_entry(entry);
            }
        }

        _ => {}
    }

    HandleResult::Continue
}
