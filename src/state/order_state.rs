//! Loaded order state management.
//!
//! This module encapsulates all state related to the currently loaded
//! order: the order data itself and the file it came from.

use ouvrage::Order;
use std::path::PathBuf;

/// State related to the loaded order document.
///
/// Responsibilities:
/// - Managing order data lifetime
/// - Tracking source file path (None for demo orders)
/// - Tracking a generation number so derived caches can detect reloads
#[derive(Default)]
pub struct OrderState {
    /// The currently loaded order (if any)
    order: Option<Order>,
    /// Path to the currently loaded file (None for demo orders)
    file_path: Option<PathBuf>,
    /// Bumped on every load/clear/structural edit
    generation: u64,
}

impl OrderState {
    /// Creates a new order state with no loaded order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a new order.
    ///
    /// # Arguments
    /// * `order` - The order to load (already linked)
    /// * `path` - Optional file path (None for demo orders)
    pub fn load_order(&mut self, order: Order, path: Option<PathBuf>) {
        self.order = Some(order);
        self.file_path = path;
        self.generation += 1;
    }

    /// Clears all order state.
    pub fn clear(&mut self) {
        self.order = None;
        self.file_path = None;
        self.generation += 1;
    }

    /// Returns a reference to the loaded order, if any.
    pub fn order(&self) -> Option<&Order> {
        self.order.as_ref()
    }

    /// Mutable access for edits (configurator saves); bumps the generation.
    pub fn order_mut(&mut self) -> Option<&mut Order> {
        self.generation += 1;
        self.order.as_mut()
    }

    /// Returns the file path of the loaded order, if any.
    pub fn file_path(&self) -> Option<&PathBuf> {
        self.file_path.as_ref()
    }

    /// Current generation; changes whenever the order is replaced or edited.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ouvrage::generate_demo_order;

    #[test]
    fn load_and_clear_bump_generation() {
        let mut state = OrderState::new();
        let g0 = state.generation();
        state.load_order(generate_demo_order(), None);
        assert!(state.order().is_some());
        assert_ne!(g0, state.generation());

        let g1 = state.generation();
        state.clear();
        assert!(state.order().is_none());
        assert_ne!(g1, state.generation());
    }

    #[test]
    fn mutable_access_bumps_generation() {
        let mut state = OrderState::new();
        state.load_order(generate_demo_order(), None);
        let g = state.generation();
        let _ = state.order_mut();
        assert_ne!(g, state.generation());
    }
}
