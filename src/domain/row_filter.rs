//! Row visibility filtering for the line table.
//!
//! The line table renders the order's lines in document order, but component
//! rows are only shown while their parent ouvrage row is expanded. This
//! module implements that policy as a pure, order-preserving filter over the
//! already-materialized line list; the expansion set itself lives in
//! [`crate::state::ExpansionState`].
//!
//! Visibility looks exactly one level up: a line with no parent reference is
//! always visible, a line with a parent reference is visible iff that parent
//! id is in the expanded set. Deeper nesting does not occur in valid orders
//! (BoM validation rejects it) and is not interpreted here.

use ouvrage::{LineId, Order, OrderLine};
use std::collections::HashSet;

/// Returns whether a single line is visible under the given expansion set.
pub fn is_row_visible(line: &OrderLine, expanded: &HashSet<LineId>) -> bool {
    match line.parent.id() {
        None => true,
        Some(parent_id) => expanded.contains(&parent_id),
    }
}

/// Computes the indices of the visible lines, preserving document order.
///
/// The input order's line list already reflects any upstream sorting; this
/// never reorders, it only drops component rows whose parent is collapsed.
pub fn visible_row_indices(order: &Order, expanded: &HashSet<LineId>) -> Vec<usize> {
    order
        .lines
        .iter()
        .enumerate()
        .filter(|(_, line)| is_row_visible(line, expanded))
        .map(|(index, _)| index)
        .collect()
}
