//! Application state for the terminal front end.
//!
//! All navigation semantics live in [`lounge_core::Screen`]; this type
//! wraps it with presentation-only state (row scroll offsets, a status
//! line) and the dimensions read from the config.

use lounge_core::config::{CardConfig, UiConfig};
use lounge_core::{Direction, LoungeConfig, NavEntry, Region, RowId, Screen};

use crate::theme::Theme;

/// Main application state
#[derive(Debug)]
pub struct App {
    /// The navigation model; every focus event goes through here
    pub screen: Screen,
    /// Active color palette
    pub theme: Theme,
    /// Region widths and content padding
    pub ui: UiConfig,
    /// Card geometry
    pub cards: CardConfig,
    /// Leftmost visible card per row; the render pass clamps the right
    /// edge to the actual width
    pub row_scroll: [usize; 2],
    /// Status message (shown in status bar)
    pub status_message: Option<String>,
    /// Whether the app should quit
    pub should_quit: bool,
}

impl App {
    pub fn new(config: &LoungeConfig, theme: Theme) -> Self {
        let mut app = Self {
            screen: Screen::new(),
            theme,
            ui: config.ui.clone(),
            cards: config.cards.clone(),
            row_scroll: [0; 2],
            status_message: None,
            should_quit: false,
        };
        app.announce_catalog();
        app
    }

    /// Set status message
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some(msg.into());
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    // === Focus events, forwarded to the model ===

    pub fn move_focus(&mut self, direction: Direction) {
        let before = self.screen.navigations();
        self.screen.move_focus(direction);
        self.after_event(before);
    }

    /// Click / OK. Selection is focus-driven, so this changes nothing.
    pub fn activate(&mut self) {
        self.screen.activate();
    }

    pub fn focus_entry(&mut self, entry: NavEntry) {
        let before = self.screen.navigations();
        self.screen.focus_entry(entry);
        self.after_event(before);
    }

    pub fn toggle_region(&mut self) {
        let before = self.screen.navigations();
        self.screen.toggle_region();
        self.after_event(before);
    }

    pub fn cursor_home(&mut self) {
        self.screen.cursor_home();
        self.follow_cursor();
    }

    pub fn cursor_end(&mut self) {
        self.screen.cursor_end();
        self.follow_cursor();
    }

    // === Presentation bookkeeping ===

    fn after_event(&mut self, navigations_before: u64) {
        if self.screen.navigations() != navigations_before {
            // The view remounted; both rows start over at the left.
            self.row_scroll = [0; 2];
            self.announce_catalog();
        }
        self.follow_cursor();
    }

    fn announce_catalog(&mut self) {
        self.set_status(format!("Browsing {}", self.screen.owner()));
    }

    /// Keep the focused card inside the window on the left edge; the
    /// right edge depends on the terminal width and is clamped by
    /// [`row_offset`](Self::row_offset) at render time.
    fn follow_cursor(&mut self) {
        if let Some((row, cursor)) = self.screen.focused_card() {
            let scroll = &mut self.row_scroll[row.index()];
            if cursor < *scroll {
                *scroll = cursor;
            }
        }
    }

    /// How many cards fit in a row of the given inner width
    pub fn cards_per_row(&self, width: u16) -> usize {
        let step = (self.cards.width + self.cards.gap) as usize;
        if step == 0 {
            return 0;
        }
        // The last card needs no trailing gap.
        (width as usize + self.cards.gap as usize) / step
    }

    /// Scroll offset the render pass should use for a row, keeping that
    /// row's cursor inside `visible` cards
    pub fn row_offset(&self, row: RowId, visible: usize) -> usize {
        let scroll = self.row_scroll[row.index()];
        if visible == 0 {
            return scroll;
        }
        let cursor = self.screen.view().cursor(row);
        if cursor >= scroll + visible {
            cursor + 1 - visible
        } else {
            scroll
        }
    }

    /// Whether the drawer renders as the icon rail
    pub fn drawer_collapsed(&self) -> bool {
        self.screen.region() != Region::Drawer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(&LoungeConfig::default(), Theme::default())
    }

    #[test]
    fn test_start_state_announces_first_catalog() {
        let app = app();
        assert_eq!(app.screen.owner(), NavEntry::Tidal);
        assert_eq!(app.status_message.as_deref(), Some("Browsing Tidal"));
        assert!(!app.drawer_collapsed());
    }

    #[test]
    fn test_activation_changes_nothing() {
        let mut app = app();
        let before = app.screen.clone();
        app.activate();
        assert_eq!(app.screen, before);

        app.move_focus(Direction::Right);
        let before = app.screen.clone();
        app.activate();
        assert_eq!(app.screen, before);
    }

    #[test]
    fn test_navigation_resets_scroll_and_updates_status() {
        let mut app = app();
        app.move_focus(Direction::Right);
        app.cursor_end();
        app.row_scroll = [1, 1];

        // Leftward escape from card 0 remounts the view.
        app.cursor_home();
        app.move_focus(Direction::Left);
        assert_eq!(app.screen.region(), Region::Drawer);
        assert_eq!(app.row_scroll, [0, 0]);
        assert_eq!(app.status_message.as_deref(), Some("Browsing Tidal"));
    }

    #[test]
    fn test_row_offset_clamps_right_edge() {
        let mut app = app();
        app.move_focus(Direction::Right);
        app.cursor_end();
        // Cursor on card 2 with one visible slot: the window slides.
        assert_eq!(app.row_offset(RowId::Top, 1), 2);
        // With room for all three cards it stays put.
        assert_eq!(app.row_offset(RowId::Top, 3), 0);
    }

    #[test]
    fn test_cards_per_row_uses_configured_geometry() {
        let app = app();
        // Defaults: 20 wide + 2 gap.
        assert_eq!(app.cards_per_row(20), 1);
        assert_eq!(app.cards_per_row(42), 2);
        assert_eq!(app.cards_per_row(66), 3);
        assert_eq!(app.cards_per_row(0), 0);
    }

    #[test]
    fn test_drawer_collapses_when_content_holds_focus() {
        let mut app = app();
        app.toggle_region();
        assert!(app.drawer_collapsed());
        app.toggle_region();
        assert!(!app.drawer_collapsed());
    }
}
