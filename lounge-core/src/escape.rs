//! Directional focus-exit resolution for the content area.
//!
//! When focus is about to leave the content area the host asks, with a
//! requested direction, where it should go. The answer is either a
//! concrete drawer handle (leftward, back to the entry that opened this
//! view) or the host's default search. The rule is a plain value with a
//! pure resolve function, so the contract is testable without any view
//! tree behind it.

use crate::focus::FocusHandle;

/// Requested focus direction, as delivered by the host input system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Where a focus-exit query resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitTarget {
    /// Land focus on this drawer handle
    Handle(FocusHandle),
    /// No override; the host's default focus search applies
    Default,
}

/// Leftward escape binding for one mounted content view.
///
/// Bound to the handle of the drawer entry that was selected when the
/// view became visible. Binding any other entry's handle would send
/// focus to the wrong drawer row; the binding site in the controller is
/// the one place this can go wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EscapeRule {
    target: FocusHandle,
}

impl EscapeRule {
    /// Bind a rule to the handle focus should return to
    pub fn to(target: FocusHandle) -> Self {
        Self { target }
    }

    /// The bound handle
    pub fn target(&self) -> FocusHandle {
        self.target
    }

    /// Resolve an exit query: leftward goes to the bound handle, every
    /// other direction falls through to the host default.
    pub fn resolve(&self, direction: Direction) -> ExitTarget {
        match direction {
            Direction::Left => ExitTarget::Handle(self.target),
            _ => ExitTarget::Default,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::focus::FocusRegistry;
    use crate::nav::NavEntry;

    #[test]
    fn test_left_resolves_to_bound_handle() {
        let registry = FocusRegistry::new();
        let handle = registry.handle(NavEntry::Spotify);
        let rule = EscapeRule::to(handle);

        assert_eq!(rule.resolve(Direction::Left), ExitTarget::Handle(handle));
    }

    #[test]
    fn test_other_directions_fall_through() {
        let registry = FocusRegistry::new();
        let rule = EscapeRule::to(registry.handle(NavEntry::Tidal));

        for direction in [Direction::Up, Direction::Down, Direction::Right] {
            assert_eq!(rule.resolve(direction), ExitTarget::Default);
        }
    }

    #[test]
    fn test_never_resolves_another_entrys_handle() {
        let registry = FocusRegistry::new();
        let rule = EscapeRule::to(registry.handle(NavEntry::Deezer));

        match rule.resolve(Direction::Left) {
            ExitTarget::Handle(handle) => {
                assert_ne!(handle, registry.handle(NavEntry::Tidal));
                assert_ne!(handle, registry.handle(NavEntry::Spotify));
                assert_eq!(handle, registry.handle(NavEntry::Deezer));
            }
            ExitTarget::Default => panic!("leftward exit must resolve to a handle"),
        }
    }
}
