//! The single screen: a navigation drawer beside a content area, and
//! the focus wiring between them.
//!
//! Everything the host platform would normally decide (who holds focus,
//! where a directional exit lands) is explicit state here, so the whole
//! behavioral contract runs and tests without a terminal attached. The
//! front end maps keys to [`Direction`] values and renders what it
//! reads back.

use tracing::debug;

use crate::catalog::Catalog;
use crate::escape::{Direction, EscapeRule, ExitTarget};
use crate::focus::{FocusHandle, FocusOwner, FocusRegistry};
use crate::nav::NavEntry;

/// Which of the two composed regions holds input focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Region {
    #[default]
    Drawer,
    Content,
}

/// The two stacked card rows. Both render the selected catalog; the
/// doubling is presentational, not two data sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowId {
    #[default]
    Top,
    Bottom,
}

impl RowId {
    /// Rows in top-to-bottom order
    pub const ALL: [RowId; 2] = [RowId::Top, RowId::Bottom];

    pub fn index(self) -> usize {
        match self {
            RowId::Top => 0,
            RowId::Bottom => 1,
        }
    }
}

/// One mounted content view.
///
/// Captures, at mount time, the entry it belongs to and the escape rule
/// bound to that entry's handle. Row cursors start on the leftmost card
/// and live only as long as the mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentView {
    entry: NavEntry,
    escape: EscapeRule,
    active_row: RowId,
    cursors: [usize; RowId::ALL.len()],
}

impl ContentView {
    fn mount(entry: NavEntry, focus: &FocusRegistry) -> Self {
        Self {
            entry,
            escape: EscapeRule::to(focus.handle(entry)),
            active_row: RowId::Top,
            cursors: [0; RowId::ALL.len()],
        }
    }

    /// The entry whose catalog this view shows
    pub fn entry(&self) -> NavEntry {
        self.entry
    }

    /// The leftward escape binding captured at mount
    pub fn escape(&self) -> EscapeRule {
        self.escape
    }

    /// The row that would receive focus inside the content area
    pub fn active_row(&self) -> RowId {
        self.active_row
    }

    /// A row's cursor position (leftmost card is 0)
    pub fn cursor(&self, row: RowId) -> usize {
        self.cursors[row.index()]
    }
}

/// The navigation controller for the one screen of the application.
///
/// Owns the focus registry, the selection context, the mounted content
/// view and the region that currently holds host focus. All transitions
/// are synchronous; there is exactly one writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    focus: FocusRegistry,
    owner: FocusOwner,
    region: Region,
    view: ContentView,
    navigations: u64,
}

impl Screen {
    /// Build the screen in its start state: handles minted, the first
    /// drawer entry focused and selected, its catalog mounted. The
    /// initial mount is not counted as an event-driven navigation.
    pub fn new() -> Self {
        let mut focus = FocusRegistry::new();
        let owner = FocusOwner::new();
        let entry = owner.current();
        focus.focus_gained(entry);
        let view = ContentView::mount(entry, &focus);
        Self {
            focus,
            owner,
            region: Region::Drawer,
            view,
            navigations: 0,
        }
    }

    // === Inbound events ===

    /// Directional input from the host.
    pub fn move_focus(&mut self, direction: Direction) {
        match self.region {
            Region::Drawer => self.move_in_drawer(direction),
            Region::Content => self.move_in_content(direction),
        }
    }

    /// Click / OK on whatever holds focus. Selection is focus-driven
    /// only, so activation changes nothing in either region.
    pub fn activate(&self) {
        debug!(region = ?self.region, "activation ignored");
    }

    /// Host-initiated focus jump straight to a drawer entry (the front
    /// end maps number keys here; a remote's shortcut buttons are the
    /// analog). Runs the same lost/gained pair as any other arrival.
    pub fn focus_entry(&mut self, entry: NavEntry) {
        self.focus_drawer_entry(entry);
    }

    /// Host focus jump between the two regions.
    pub fn toggle_region(&mut self) {
        match self.region {
            Region::Drawer => self.enter_content(),
            Region::Content => self.focus_drawer_entry(self.owner.current()),
        }
    }

    /// Jump the active row's cursor to its first card
    pub fn cursor_home(&mut self) {
        if self.region == Region::Content {
            self.view.cursors[self.view.active_row.index()] = 0;
        }
    }

    /// Jump the active row's cursor to its last card
    pub fn cursor_end(&mut self) {
        if self.region == Region::Content {
            let last = self.catalog().len().saturating_sub(1);
            self.view.cursors[self.view.active_row.index()] = last;
        }
    }

    // === Read surface ===

    /// The selected drawer entry
    pub fn owner(&self) -> NavEntry {
        self.owner.current()
    }

    /// The region holding host focus
    pub fn region(&self) -> Region {
        self.region
    }

    /// The mounted content view
    pub fn view(&self) -> &ContentView {
        &self.view
    }

    /// The visible catalog (always the selected entry's)
    pub fn catalog(&self) -> Catalog {
        Catalog::of(self.view.entry)
    }

    /// Count of navigations fired by focus events since startup
    pub fn navigations(&self) -> u64 {
        self.navigations
    }

    /// Whether a drawer entry's focus flag is set
    pub fn is_entry_focused(&self, entry: NavEntry) -> bool {
        self.focus.is_focused(entry)
    }

    /// The handle minted for a drawer entry
    pub fn handle(&self, entry: NavEntry) -> FocusHandle {
        self.focus.handle(entry)
    }

    /// The focused card, when the content area holds focus
    pub fn focused_card(&self) -> Option<(RowId, usize)> {
        match self.region {
            Region::Content => {
                let row = self.view.active_row;
                Some((row, self.view.cursor(row)))
            }
            Region::Drawer => None,
        }
    }

    // === Transitions ===

    fn move_in_drawer(&mut self, direction: Direction) {
        match direction {
            Direction::Up => {
                if let Some(target) = self.owner.current().prev() {
                    self.focus_drawer_entry(target);
                }
            }
            Direction::Down => {
                if let Some(target) = self.owner.current().next() {
                    self.focus_drawer_entry(target);
                }
            }
            Direction::Right => self.enter_content(),
            // Screen edge; there is nothing left of the drawer.
            Direction::Left => {}
        }
    }

    fn move_in_content(&mut self, direction: Direction) {
        let row = self.view.active_row;
        let cursor = self.view.cursor(row);
        let last = self.catalog().len().saturating_sub(1);
        match direction {
            Direction::Left if cursor > 0 => {
                self.view.cursors[row.index()] = cursor - 1;
            }
            Direction::Right if cursor < last => {
                self.view.cursors[row.index()] = cursor + 1;
            }
            Direction::Up if row == RowId::Bottom => {
                self.view.active_row = RowId::Top;
            }
            Direction::Down if row == RowId::Top => {
                self.view.active_row = RowId::Bottom;
            }
            // Focus wants to leave the content area.
            _ => self.exit_query(direction),
        }
    }

    /// Land host focus on a drawer entry: the previously focused entry
    /// gets its lost event, then the target its gained event. The
    /// gained guard decides whether navigation fires.
    fn focus_drawer_entry(&mut self, target: NavEntry) {
        if self.region == Region::Drawer {
            let current = self.owner.current();
            if current != target {
                self.focus.focus_lost(current);
            }
        }
        self.region = Region::Drawer;
        if self.focus.focus_gained(target) {
            self.owner.select(target);
            self.navigate(target);
        }
    }

    /// Focus moves rightward out of the drawer into the top row. The
    /// drawer entry's flag clears; selection does not change.
    fn enter_content(&mut self) {
        self.focus.focus_lost(self.owner.current());
        self.region = Region::Content;
        debug!(entry = %self.view.entry, "focus entered content area");
    }

    /// Ask the mounted view's escape rule where an exit should land. A
    /// resolved handle pulls focus back to its drawer entry; `Default`
    /// finds nothing beyond the screen edge in this layout, so focus
    /// stays where it is.
    fn exit_query(&mut self, direction: Direction) {
        match self.view.escape.resolve(direction) {
            ExitTarget::Handle(handle) => {
                if let Some(entry) = self.focus.entry_of(handle) {
                    debug!(?direction, entry = %entry, "exit resolved to drawer handle");
                    self.focus_drawer_entry(entry);
                }
            }
            ExitTarget::Default => {
                debug!(?direction, "exit fell through to host default");
            }
        }
    }

    /// Outbound navigation: remount the content view for an entry. The
    /// escape rule captures the entry's own handle here; this is the
    /// binding site the return-to-drawer contract depends on.
    fn navigate(&mut self, entry: NavEntry) {
        self.view = ContentView::mount(entry, &self.focus);
        self.navigations += 1;
        debug!(entry = %entry, total = self.navigations, "navigate");
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_state() {
        let screen = Screen::new();
        assert_eq!(screen.owner(), NavEntry::Tidal);
        assert_eq!(screen.region(), Region::Drawer);
        assert!(screen.is_entry_focused(NavEntry::Tidal));
        assert_eq!(screen.catalog().entry(), NavEntry::Tidal);
        assert_eq!(screen.navigations(), 0);
    }

    #[test]
    fn test_catalog_follows_selection() {
        let mut screen = Screen::new();
        for entry in NavEntry::ALL {
            screen.focus_entry(entry);
            assert_eq!(screen.owner(), entry);
            assert_eq!(screen.catalog().entry(), entry);
            assert_eq!(screen.view().entry(), entry);
        }

        // Concrete case: selecting Spotify while Deezer is active.
        screen.focus_entry(NavEntry::Deezer);
        screen.focus_entry(NavEntry::Spotify);
        assert_eq!(screen.catalog().entry(), NavEntry::Spotify);
    }

    #[test]
    fn test_escape_binds_the_mounted_entrys_handle() {
        let mut screen = Screen::new();
        for entry in NavEntry::ALL {
            screen.focus_entry(entry);
            let bound = screen.view().escape().target();
            assert_eq!(bound, screen.handle(entry));
            for other in NavEntry::ALL {
                if other != entry {
                    assert_ne!(bound, screen.handle(other));
                }
            }
        }
    }

    #[test]
    fn test_repeated_focus_navigates_once() {
        let mut screen = Screen::new();
        screen.focus_entry(NavEntry::Spotify);
        assert_eq!(screen.navigations(), 1);

        // Redundant focus event on the already-focused entry.
        screen.focus_entry(NavEntry::Spotify);
        assert_eq!(screen.navigations(), 1);
    }

    #[test]
    fn test_entering_content_clears_drawer_flag() {
        let mut screen = Screen::new();
        screen.move_focus(Direction::Right);
        assert_eq!(screen.region(), Region::Content);
        assert!(!screen.is_entry_focused(NavEntry::Tidal));
        // Entering the content area is not a navigation and does not
        // change the selection.
        assert_eq!(screen.owner(), NavEntry::Tidal);
        assert_eq!(screen.navigations(), 0);
        assert_eq!(screen.focused_card(), Some((RowId::Top, 0)));
    }

    #[test]
    fn test_leftward_escape_returns_to_selected_entry() {
        let mut screen = Screen::new();
        screen.move_focus(Direction::Down);
        assert_eq!(screen.owner(), NavEntry::Spotify);
        assert_eq!(screen.navigations(), 1);

        screen.move_focus(Direction::Right);
        let resolved = screen.view().escape().resolve(Direction::Left);
        assert_eq!(
            resolved,
            ExitTarget::Handle(screen.handle(NavEntry::Spotify))
        );

        // Leftmost card, leftward input: escape fires and focus lands
        // back on Spotify. The flag was cleared on the way out, so the
        // arrival navigates again.
        screen.move_focus(Direction::Left);
        assert_eq!(screen.region(), Region::Drawer);
        assert_eq!(screen.owner(), NavEntry::Spotify);
        assert!(screen.is_entry_focused(NavEntry::Spotify));
        assert_eq!(screen.navigations(), 2);
    }

    #[test]
    fn test_nonleft_boundaries_keep_focus_inside() {
        let mut screen = Screen::new();
        screen.move_focus(Direction::Right);

        // Up at the top row: default exit, nothing above.
        screen.move_focus(Direction::Up);
        assert_eq!(screen.region(), Region::Content);
        assert_eq!(screen.view().active_row(), RowId::Top);

        // Right at the last card: default exit, nothing to the right.
        let last = screen.catalog().len() - 1;
        screen.cursor_end();
        screen.move_focus(Direction::Right);
        assert_eq!(screen.region(), Region::Content);
        assert_eq!(screen.view().cursor(RowId::Top), last);

        // Down at the bottom row: default exit, nothing below.
        screen.move_focus(Direction::Down);
        screen.move_focus(Direction::Down);
        assert_eq!(screen.region(), Region::Content);
        assert_eq!(screen.view().active_row(), RowId::Bottom);
    }

    #[test]
    fn test_activation_is_a_noop() {
        let mut screen = Screen::new();
        let before = screen.clone();
        screen.activate();
        assert_eq!(screen, before);

        screen.move_focus(Direction::Right);
        let before = screen.clone();
        screen.activate();
        assert_eq!(screen, before);
    }

    #[test]
    fn test_rows_keep_independent_cursors() {
        let mut screen = Screen::new();
        screen.move_focus(Direction::Right);
        screen.move_focus(Direction::Right);
        assert_eq!(screen.view().cursor(RowId::Top), 1);

        screen.move_focus(Direction::Down);
        screen.move_focus(Direction::Right);
        screen.move_focus(Direction::Right);
        assert_eq!(screen.view().cursor(RowId::Bottom), 2);

        screen.move_focus(Direction::Up);
        assert_eq!(screen.focused_card(), Some((RowId::Top, 1)));
        screen.move_focus(Direction::Down);
        assert_eq!(screen.focused_card(), Some((RowId::Bottom, 2)));
    }

    #[test]
    fn test_remount_resets_cursors() {
        let mut screen = Screen::new();
        screen.move_focus(Direction::Right);
        screen.move_focus(Direction::Right);
        screen.move_focus(Direction::Down);
        screen.move_focus(Direction::Right);

        // Escape to the drawer remounts the view; cursors start over.
        screen.move_focus(Direction::Up);
        screen.move_focus(Direction::Left);
        screen.move_focus(Direction::Left);
        assert_eq!(screen.region(), Region::Drawer);
        assert_eq!(screen.view().cursor(RowId::Top), 0);
        assert_eq!(screen.view().cursor(RowId::Bottom), 0);
        assert_eq!(screen.view().active_row(), RowId::Top);
    }

    #[test]
    fn test_drawer_clamps_at_ends() {
        let mut screen = Screen::new();
        screen.move_focus(Direction::Up);
        assert_eq!(screen.owner(), NavEntry::Tidal);
        assert_eq!(screen.navigations(), 0);

        screen.focus_entry(NavEntry::Deezer);
        let count = screen.navigations();
        screen.move_focus(Direction::Down);
        assert_eq!(screen.owner(), NavEntry::Deezer);
        assert_eq!(screen.navigations(), count);
    }

    #[test]
    fn test_drawer_left_is_screen_edge() {
        let mut screen = Screen::new();
        let before = screen.clone();
        screen.move_focus(Direction::Left);
        assert_eq!(screen, before);
    }

    #[test]
    fn test_toggle_region_round_trip() {
        let mut screen = Screen::new();
        screen.toggle_region();
        assert_eq!(screen.region(), Region::Content);
        assert!(!screen.is_entry_focused(NavEntry::Tidal));

        screen.toggle_region();
        assert_eq!(screen.region(), Region::Drawer);
        assert!(screen.is_entry_focused(NavEntry::Tidal));
        // Landing back on the entry re-fires its gained path.
        assert_eq!(screen.navigations(), 1);
    }

    #[test]
    fn test_cursor_home_and_end() {
        let mut screen = Screen::new();
        // Ignored while the drawer holds focus.
        screen.cursor_end();
        assert_eq!(screen.view().cursor(RowId::Top), 0);

        screen.move_focus(Direction::Right);
        screen.cursor_end();
        assert_eq!(
            screen.view().cursor(RowId::Top),
            screen.catalog().len() - 1
        );
        screen.cursor_home();
        assert_eq!(screen.view().cursor(RowId::Top), 0);
    }
}
