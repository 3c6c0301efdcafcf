//! Cached visible-row derivation.
//!
//! The visible row list is a pure function of the loaded order and the
//! expansion set. Recomputing it on every frame would be wasteful, so the
//! cache stores the last result together with the revision numbers it was
//! computed from and recomputes only when either changes. Toggling an
//! ouvrage bumps the expansion revision, which makes the next read of
//! `visible_rows` re-derive the list.

use crate::domain::row_filter;
use crate::state::{ExpansionState, OrderState};

/// Cache for the derived visible-row index list.
#[derive(Debug, Default)]
pub struct RowCache {
    rows: Vec<usize>,
    /// Expansion revision the cached rows were computed at.
    expansion_revision: Option<u64>,
    /// Order generation the cached rows were computed at.
    order_generation: Option<u64>,
}

impl RowCache {
    /// Creates a new empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops the cached rows; the next read recomputes.
    pub fn invalidate(&mut self) {
        self.rows.clear();
        self.expansion_revision = None;
        self.order_generation = None;
    }

    /// Returns the visible row indices, recomputing if stale.
    pub fn visible_rows(&mut self, order: &OrderState, expansion: &ExpansionState) -> &[usize] {
        let current = (Some(expansion.revision()), Some(order.generation()));
        if (self.expansion_revision, self.order_generation) != current {
            self.rows = match order.order() {
                Some(o) => row_filter::visible_row_indices(o, expansion.expanded_set()),
                None => Vec::new(),
            };
            (self.expansion_revision, self.order_generation) = current;
        }
        &self.rows
    }

    /// Number of rows in the cached result (0 when never computed).
    pub fn visible_count(&self) -> usize {
        self.rows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ouvrage::parse_order;

    fn loaded_state() -> OrderState {
        let order = parse_order(
            r#"{
                "name": "SO-CACHE",
                "lines": [
                    {"id": 1, "product": "Ouvrage A", "is_ouvrage": true},
                    {"id": 2, "product": "A1", "parent": 1},
                    {"id": 3, "product": "Plain"}
                ]
            }"#,
        )
        .unwrap();
        let mut state = OrderState::new();
        state.load_order(order, None);
        state
    }

    #[test]
    fn recomputes_after_toggle() {
        let order = loaded_state();
        let mut expansion = ExpansionState::new();
        let mut cache = RowCache::new();

        assert_eq!(cache.visible_rows(&order, &expansion), &[0, 2]);

        expansion.toggle(1);
        assert_eq!(cache.visible_rows(&order, &expansion), &[0, 1, 2]);

        expansion.toggle(1);
        assert_eq!(cache.visible_rows(&order, &expansion), &[0, 2]);
    }

    #[test]
    fn reuses_result_for_same_revisions() {
        let order = loaded_state();
        let expansion = ExpansionState::new();
        let mut cache = RowCache::new();

        let first: Vec<usize> = cache.visible_rows(&order, &expansion).to_vec();
        let second: Vec<usize> = cache.visible_rows(&order, &expansion).to_vec();
        assert_eq!(first, second);
        assert_eq!(cache.visible_count(), 2);
    }

    #[test]
    fn empty_without_order() {
        let order = OrderState::new();
        let expansion = ExpansionState::new();
        let mut cache = RowCache::new();
        assert!(cache.visible_rows(&order, &expansion).is_empty());
    }

    #[test]
    fn invalidate_forces_recompute() {
        let order = loaded_state();
        let expansion = ExpansionState::new();
        let mut cache = RowCache::new();

        let _ = cache.visible_rows(&order, &expansion);
        cache.invalidate();
        assert_eq!(cache.visible_count(), 0);
        assert_eq!(cache.visible_rows(&order, &expansion), &[0, 2]);
    }
}
