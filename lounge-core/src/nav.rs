//! The closed set of drawer destinations.

/// One selectable destination in the side navigation drawer.
///
/// The set is closed: adding a service means adding a variant here and
/// its item list in `catalog`. Declaration order is drawer order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum NavEntry {
    #[default]
    Tidal,
    Spotify,
    Deezer,
}

impl NavEntry {
    /// All entries in drawer order
    pub const ALL: [NavEntry; 3] = [NavEntry::Tidal, NavEntry::Spotify, NavEntry::Deezer];

    /// Display name shown next to the icon
    pub fn title(self) -> &'static str {
        match self {
            NavEntry::Tidal => "Tidal",
            NavEntry::Spotify => "Spotify",
            NavEntry::Deezer => "Deezer",
        }
    }

    /// Single-cell glyph shown in the drawer (and alone when collapsed)
    pub fn icon(self) -> &'static str {
        match self {
            NavEntry::Tidal => "⌂",
            NavEntry::Spotify => "♥",
            NavEntry::Deezer => "⚙",
        }
    }

    /// Position in drawer order
    pub fn index(self) -> usize {
        match self {
            NavEntry::Tidal => 0,
            NavEntry::Spotify => 1,
            NavEntry::Deezer => 2,
        }
    }

    /// Entry at a drawer position, if one exists
    pub fn from_index(index: usize) -> Option<NavEntry> {
        NavEntry::ALL.get(index).copied()
    }

    /// Neighbor below in drawer order; `None` at the bottom
    pub fn next(self) -> Option<NavEntry> {
        NavEntry::from_index(self.index() + 1)
    }

    /// Neighbor above in drawer order; `None` at the top
    pub fn prev(self) -> Option<NavEntry> {
        self.index().checked_sub(1).and_then(NavEntry::from_index)
    }
}

impl std::fmt::Display for NavEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}
