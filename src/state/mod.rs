//! State management modules for the ouvrage viewer.
//!
//! This module contains state-only logic (no UI concerns):
//! - Order state (loaded order, file path)
//! - Expansion state (which ouvrage lines are expanded)
//! - Selection state (selected line)
//! - Theme state (theme manager, current theme)
//! - Layout state (panel split, column widths)

mod order_state;
mod expansion;
mod selection;
mod theme_state;
mod layout_state;

pub use order_state::OrderState;
pub use expansion::ExpansionState;
pub use selection::SelectionState;
pub use theme_state::ThemeState;
pub use layout_state::{LayoutState, LINE_TABLE_COLUMNS};
