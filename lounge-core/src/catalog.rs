//! Static card catalogs, one per drawer entry.

use crate::nav::NavEntry;

/// A single card: a name over a one-line description. Immutable,
/// compiled in; there is no fetching layer behind these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogItem {
    pub name: &'static str,
    pub description: &'static str,
}

const TIDAL_ITEMS: [CatalogItem; 3] = [
    CatalogItem {
        name: "Tidal Item 1",
        description: "Tidal desc 1",
    },
    CatalogItem {
        name: "Tidal Item 2",
        description: "Tidal desc 2",
    },
    CatalogItem {
        name: "Tidal Item 3",
        description: "Tidal desc 3",
    },
];

const SPOTIFY_ITEMS: [CatalogItem; 3] = [
    CatalogItem {
        name: "Spotify Item 1",
        description: "Spotify desc 1",
    },
    CatalogItem {
        name: "Spotify Item 2",
        description: "Spotify desc 2",
    },
    CatalogItem {
        name: "Spotify Item 3",
        description: "Spotify desc 3",
    },
];

const DEEZER_ITEMS: [CatalogItem; 3] = [
    CatalogItem {
        name: "Deezer Item 1",
        description: "Deezer desc 1",
    },
    CatalogItem {
        name: "Deezer Item 2",
        description: "Deezer desc 2",
    },
    CatalogItem {
        name: "Deezer Item 3",
        description: "Deezer desc 3",
    },
];

/// Ordered, immutable item list belonging to one drawer entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Catalog {
    entry: NavEntry,
    items: &'static [CatalogItem],
}

impl Catalog {
    /// The catalog associated with an entry.
    ///
    /// Total by construction: the mapping is a match over a closed enum,
    /// so no lookup can fail at runtime.
    pub fn of(entry: NavEntry) -> Catalog {
        let items: &'static [CatalogItem] = match entry {
            NavEntry::Tidal => &TIDAL_ITEMS,
            NavEntry::Spotify => &SPOTIFY_ITEMS,
            NavEntry::Deezer => &DEEZER_ITEMS,
        };
        Catalog { entry, items }
    }

    /// The entry this catalog belongs to
    pub fn entry(&self) -> NavEntry {
        self.entry
    }

    /// Items in display order
    pub fn items(&self) -> &'static [CatalogItem] {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Item at a row position, if in bounds
    pub fn get(&self, index: usize) -> Option<&'static CatalogItem> {
        self.items.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_entry_has_a_catalog() {
        for entry in NavEntry::ALL {
            let catalog = Catalog::of(entry);
            assert_eq!(catalog.entry(), entry);
            assert_eq!(catalog.len(), 3);
            assert!(!catalog.is_empty());
        }
    }

    #[test]
    fn test_items_belong_to_their_service() {
        let catalog = Catalog::of(NavEntry::Spotify);
        for item in catalog.items() {
            assert!(item.name.starts_with("Spotify"));
            assert!(item.description.starts_with("Spotify"));
        }
    }

    #[test]
    fn test_get_respects_bounds() {
        let catalog = Catalog::of(NavEntry::Deezer);
        assert_eq!(catalog.get(0).map(|i| i.name), Some("Deezer Item 1"));
        assert_eq!(catalog.get(catalog.len()), None);
    }
}
