//! Centralized application state for the ouvrage viewer.
//!
//! This module composes focused state components that each manage one
//! aspect of the application's state:
//! - Keeps invariants local within each component
//! - Allows borrow-checker friendly access to different state aspects
//! - Provides intent-revealing methods for state mutations

use crate::cache::RowCache;
use crate::state::{ExpansionState, LayoutState, OrderState, SelectionState, ThemeState};
use crate::ui::configurator::ConfiguratorDraft;

/// Main application state composed of focused state components.
pub struct AppState {
    // ===== Focused State Components =====
    /// Loaded order and file state
    pub order: OrderState,

    /// Ouvrage expansion state
    pub expansion: ExpansionState,

    /// Selected line state
    pub selection: SelectionState,

    /// Theme and styling state
    pub theme: ThemeState,

    /// UI layout state
    pub layout: LayoutState,

    // ===== Top-Level State =====
    /// Current error message to display (if any)
    pub error_message: Option<String>,

    /// Derived visible-row cache
    pub row_cache: RowCache,

    /// Open configurator window, if any
    pub configurator: Option<ConfiguratorDraft>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates a new application state with default values.
    pub fn new() -> Self {
        Self {
            order: OrderState::new(),
            expansion: ExpansionState::new(),
            selection: SelectionState::new(),
            theme: ThemeState::new(),
            layout: LayoutState::new(),
            error_message: None,
            row_cache: RowCache::new(),
            configurator: None,
        }
    }

    /// Creates a new AppState with theme and layout settings loaded from storage.
    pub fn with_theme_and_layout(
        theme_name: String,
        column_widths: [f32; crate::state::LINE_TABLE_COLUMNS],
    ) -> Self {
        Self {
            theme: ThemeState::with_theme(theme_name),
            layout: LayoutState::with_column_widths(column_widths),
            ..Self::new()
        }
    }

    // ===== High-Level Coordination Methods =====

    /// Resets the order-related state when loading a new order.
    ///
    /// Expansion never survives a reload: the expanded set is scoped to one
    /// viewing session of one order.
    pub fn reset_order_state(&mut self) {
        self.order.clear();
        self.expansion.clear();
        self.selection.clear();
        self.row_cache.invalidate();
        self.configurator = None;
        self.error_message = None;
    }
}
