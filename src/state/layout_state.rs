//! UI layout state management.
//!
//! This module encapsulates all state related to UI layout: the details
//! panel split and the line table column widths. Column widths persist
//! across sessions through the settings coordinator.

use serde::{Deserialize, Serialize};

/// Number of columns in the line table:
/// [Product, Qty, UoM, Unit Price, Disc %, Subtotal, Margin].
pub const LINE_TABLE_COLUMNS: usize = 7;

/// State related to UI layout and sizing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutState {
    /// Width fraction of the details side panel (0.0 to 1.0)
    details_split_ratio: f32,
    /// Horizontal indentation of component rows, in points
    indent_width: f32,
    /// Column widths for the line table
    column_widths: [f32; LINE_TABLE_COLUMNS],
}

impl Default for LayoutState {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutState {
    /// Creates a new layout state with default values.
    pub fn new() -> Self {
        Self {
            details_split_ratio: 0.28,
            indent_width: 24.0,
            column_widths: Self::default_column_widths(),
        }
    }

    /// Creates a new layout state with custom column widths.
    pub fn with_column_widths(column_widths: [f32; LINE_TABLE_COLUMNS]) -> Self {
        Self {
            column_widths,
            ..Self::new()
        }
    }

    /// Default widths ordered as
    /// [Product, Qty, UoM, Unit Price, Disc %, Subtotal, Margin].
    pub fn default_column_widths() -> [f32; LINE_TABLE_COLUMNS] {
        [280.0, 70.0, 50.0, 90.0, 60.0, 100.0, 110.0]
    }

    /// Returns the details panel split ratio.
    pub fn details_split_ratio(&self) -> f32 {
        self.details_split_ratio
    }

    /// Returns the component row indentation in points.
    pub fn indent_width(&self) -> f32 {
        self.indent_width
    }

    /// Returns the column widths array.
    pub fn column_widths(&self) -> &[f32; LINE_TABLE_COLUMNS] {
        &self.column_widths
    }

    /// Mutable access to the column widths (for resize handling).
    pub fn column_widths_mut(&mut self) -> &mut [f32; LINE_TABLE_COLUMNS] {
        &mut self.column_widths
    }
}
