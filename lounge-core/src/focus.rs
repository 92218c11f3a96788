//! Focus bookkeeping for the drawer: minted handles, per-entry focus
//! records, and the selection context that decides which catalog is
//! visible.

use std::collections::BTreeMap;

use crate::nav::NavEntry;

/// Opaque address of one drawer entry as a focus target.
///
/// Handles are minted once, when the registry is built, and stay valid
/// for the registry's whole life. A content view captures one at mount
/// time; a leftward escape resolves back to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FocusHandle(u32);

/// Per-entry record: the minted handle plus whether the entry currently
/// holds focus. The two travel together so they cannot drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct EntryFocus {
    handle: FocusHandle,
    focused: bool,
}

/// Focus state for every drawer entry, keyed by the entry itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusRegistry {
    // Holds a record for every NavEntry from construction on; nothing
    // is ever removed, so keyed lookups below are total.
    entries: BTreeMap<NavEntry, EntryFocus>,
}

impl FocusRegistry {
    /// Register every drawer entry and mint its handle. Called once,
    /// when the drawer is constructed.
    pub fn new() -> Self {
        let entries = NavEntry::ALL
            .iter()
            .enumerate()
            .map(|(i, &entry)| {
                let record = EntryFocus {
                    handle: FocusHandle(i as u32),
                    focused: false,
                };
                (entry, record)
            })
            .collect();
        Self { entries }
    }

    /// The handle minted for an entry
    pub fn handle(&self, entry: NavEntry) -> FocusHandle {
        self.entries[&entry].handle
    }

    /// Reverse lookup: which entry a handle addresses. This is how the
    /// host lands focus after an escape resolves to a handle.
    pub fn entry_of(&self, handle: FocusHandle) -> Option<NavEntry> {
        self.entries
            .iter()
            .find(|(_, record)| record.handle == handle)
            .map(|(&entry, _)| entry)
    }

    /// Whether an entry's focus flag is currently set
    pub fn is_focused(&self, entry: NavEntry) -> bool {
        self.entries[&entry].focused
    }

    /// An entry reached focused state.
    ///
    /// Returns `true` when navigation must fire, i.e. the flag was
    /// clear. A redundant gained event on an already-marked entry is a
    /// no-op returning `false`; this guard is what keeps transient
    /// focus-change re-fires from triggering navigation twice.
    pub fn focus_gained(&mut self, entry: NavEntry) -> bool {
        let record = self
            .entries
            .get_mut(&entry)
            .filter(|record| !record.focused);
        match record {
            Some(record) => {
                record.focused = true;
                true
            }
            None => false,
        }
    }

    /// An entry left focused state. Clears the flag; a no-op (returning
    /// `false`) when the flag already reads unfocused.
    pub fn focus_lost(&mut self, entry: NavEntry) -> bool {
        let record = self.entries.get_mut(&entry).filter(|record| record.focused);
        match record {
            Some(record) => {
                record.focused = false;
                true
            }
            None => false,
        }
    }
}

impl Default for FocusRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// The selection context: the single drawer entry whose catalog is
/// visible.
///
/// The drawer writes it on its focus-gained path and nothing else does;
/// content views only read it, capturing the value once when they
/// mount. Starts at the first entry in drawer order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FocusOwner {
    current: NavEntry,
}

impl FocusOwner {
    pub fn new() -> Self {
        Self::default()
    }

    /// The selected entry
    pub fn current(&self) -> NavEntry {
        self.current
    }

    /// Record a new selection. Only the drawer's focus-gained path
    /// should call this.
    pub fn select(&mut self, entry: NavEntry) {
        self.current = entry;
    }
}
