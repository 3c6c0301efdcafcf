//! Ouvrage expansion state management.
//!
//! Tracks which ouvrage lines are expanded, i.e. which component rows are
//! visible in the line table. The set lives for one viewing session: it is
//! created empty and cleared whenever an order is loaded or replaced.
//!
//! Every mutation bumps a revision counter. Readers that derive data from
//! the expansion set (the visible-row cache) compare revisions instead of
//! subscribing to change events; the next read after a toggle recomputes.

use ouvrage::LineId;
use std::collections::HashSet;

/// State related to ouvrage line expansion.
///
/// Responsibilities:
/// - Tracking which ouvrage lines are expanded
/// - Providing intent-revealing expansion queries
/// - Managing bulk expansion operations
#[derive(Debug, Clone, Default)]
pub struct ExpansionState {
    /// Set of expanded ouvrage line ids
    expanded: HashSet<LineId>,
    /// Bumped on every mutation; consumed by derived-data caches
    revision: u64,
}

impl ExpansionState {
    /// Creates a new expansion state with nothing expanded.
    pub fn new() -> Self {
        Self::default()
    }

    // ===== Expansion Queries =====

    /// Returns whether the given ouvrage line is expanded.
    pub fn is_expanded(&self, line_id: LineId) -> bool {
        self.expanded.contains(&line_id)
    }

    /// Returns a reference to the set of expanded line ids.
    pub fn expanded_set(&self) -> &HashSet<LineId> {
        &self.expanded
    }

    /// Current revision; changes whenever the set changes.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    // ===== Expansion Mutations =====

    /// Toggles the expansion of the given ouvrage line.
    ///
    /// Inserts the id if absent, removes it if present. Applying the same
    /// toggle twice returns the set to its prior contents.
    ///
    /// # Returns
    /// `true` if the line is expanded after the toggle.
    pub fn toggle(&mut self, line_id: LineId) -> bool {
        self.revision += 1;
        if self.expanded.remove(&line_id) {
            false
        } else {
            self.expanded.insert(line_id);
            true
        }
    }

    /// Expands every id in the given collection.
    pub fn expand_all(&mut self, line_ids: impl IntoIterator<Item = LineId>) {
        self.revision += 1;
        self.expanded.extend(line_ids);
    }

    /// Collapses the given line if it was expanded.
    pub fn collapse(&mut self, line_id: LineId) {
        if self.expanded.remove(&line_id) {
            self.revision += 1;
        }
    }

    /// Collapses everything.
    pub fn clear(&mut self) {
        self.revision += 1;
        self.expanded.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let state = ExpansionState::new();
        assert!(state.expanded_set().is_empty());
        assert!(!state.is_expanded(1));
    }

    #[test]
    fn toggle_inserts_then_removes() {
        let mut state = ExpansionState::new();
        assert!(state.toggle(1));
        assert!(state.is_expanded(1));
        assert!(!state.toggle(1));
        assert!(!state.is_expanded(1));
    }

    #[test]
    fn double_toggle_restores_prior_contents() {
        let mut state = ExpansionState::new();
        state.toggle(1);
        state.toggle(5);
        let before: Vec<_> = {
            let mut v: Vec<_> = state.expanded_set().iter().copied().collect();
            v.sort();
            v
        };

        state.toggle(9);
        state.toggle(9);

        let mut after: Vec<_> = state.expanded_set().iter().copied().collect();
        after.sort();
        assert_eq!(before, after);
    }

    #[test]
    fn mutations_bump_revision() {
        let mut state = ExpansionState::new();
        let r0 = state.revision();
        state.toggle(1);
        let r1 = state.revision();
        assert_ne!(r0, r1);
        state.expand_all([2, 3]);
        let r2 = state.revision();
        assert_ne!(r1, r2);
        state.clear();
        assert_ne!(r2, state.revision());
    }

    #[test]
    fn collapse_of_collapsed_line_is_a_noop() {
        let mut state = ExpansionState::new();
        let r0 = state.revision();
        state.collapse(7);
        assert_eq!(r0, state.revision());
    }

    #[test]
    fn expand_all_then_clear() {
        let mut state = ExpansionState::new();
        state.expand_all([1, 2, 3]);
        assert!(state.is_expanded(2));
        state.clear();
        assert!(state.expanded_set().is_empty());
    }
}
