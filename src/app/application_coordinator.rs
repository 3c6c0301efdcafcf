//! Application-level coordination and workflow management.
//!
//! Handles high-level application operations like order loading, expansion
//! toggling, and applying configurator edits.

use crate::app::AppState;
use crate::io::{AsyncLoader, LoadResult};
use crate::ui::configurator::ConfiguratorDraft;
use ouvrage::LineId;
use std::path::PathBuf;

/// Coordinates application-level operations and workflows.
///
/// This struct is responsible for:
/// - Managing order loading workflows
/// - Handling loading completion
/// - Translating UI interactions into state mutations
pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Initiates asynchronous order file loading.
    ///
    /// Immediately clears previous order data to show the loading indicator.
    pub fn open_file(
        state: &mut AppState,
        loader: &mut AsyncLoader,
        path: PathBuf,
        ctx: &egui::Context,
    ) {
        state.reset_order_state();
        loader.start_file_load(path, ctx);
    }

    /// Checks for loading completion and applies results to application state.
    ///
    /// Called once per frame in the update loop.
    /// Returns true if a load operation completed (success or error).
    pub fn check_loading_completion(state: &mut AppState, loader: &mut AsyncLoader) -> bool {
        match loader.check_completion() {
            LoadResult::Success { order, path } => {
                state.order.load_order(order, path);
                state.error_message = None;
                state.expansion.clear();
                state.selection.clear();
                state.row_cache.invalidate();
                // A draft opened against the previous order must not edit a
                // line of the new one that happens to share its id.
                state.configurator = None;
                true
            }
            LoadResult::Error(error_msg) => {
                state.error_message = Some(format!("Error loading order: {}", error_msg));
                state.order.clear();
                true
            }
            LoadResult::None => false,
        }
    }

    /// Generates and loads the demo order in-memory.
    pub fn open_demo_order(state: &mut AppState, loader: &mut AsyncLoader) {
        match loader.load_demo_order() {
            Ok(order) => {
                state.reset_order_state();
                state.order.load_order(order, None);
            }
            Err(e) => {
                state.error_message = Some(format!("Error generating demo order: {}", e));
            }
        }
    }

    /// Handles line selection in the table.
    pub fn handle_line_selection(state: &mut AppState, line_id: LineId) {
        state.selection.select_line(line_id);
    }

    /// Handles the expand/collapse toggle on an ouvrage row.
    ///
    /// Lines with hidden structure never toggle: their components stay
    /// collapsed whatever the caller observed in the UI.
    pub fn handle_ouvrage_toggle(state: &mut AppState, line_id: LineId) {
        let hide_structure = state
            .order
            .order()
            .and_then(|o| o.line(line_id))
            .is_some_and(|l| l.hide_structure);
        if hide_structure {
            return;
        }
        state.expansion.toggle(line_id);
    }

    /// Expands every ouvrage line of the loaded order.
    pub fn handle_expand_all(state: &mut AppState) {
        let ids = match state.order.order() {
            Some(order) => order
                .ouvrage_ids()
                .into_iter()
                .filter(|&id| {
                    order.line(id).is_some_and(|l| !l.hide_structure)
                })
                .collect::<Vec<_>>(),
            None => return,
        };
        state.expansion.expand_all(ids);
    }

    /// Collapses every ouvrage line.
    pub fn handle_collapse_all(state: &mut AppState) {
        state.expansion.clear();
    }

    /// Opens the configurator window for an ouvrage line.
    pub fn open_configurator(state: &mut AppState, line_id: LineId) {
        if let Some(order) = state.order.order() {
            if let Some(line) = order.line(line_id) {
                if line.is_ouvrage {
                    state.configurator = Some(ConfiguratorDraft::from_line(line));
                }
            }
        }
    }

    /// Applies a saved configurator draft to the order.
    ///
    /// Quantity changes scale component quantities proportionally; enabling
    /// hide-structure also collapses the line so the components disappear
    /// immediately.
    pub fn apply_configurator(state: &mut AppState, draft: &ConfiguratorDraft) {
        let Some(new_qty) = draft.parsed_quantity() else {
            state.error_message = Some(format!("Invalid quantity: {}", draft.quantity_text));
            return;
        };

        if let Some(order) = state.order.order_mut() {
            order.set_ouvrage_quantity(draft.line_id, new_qty);
            if let Some(index) = order.line_index(draft.line_id) {
                order.lines[index].hide_prices = draft.hide_prices;
                order.lines[index].hide_structure = draft.hide_structure;
            }
        }

        if draft.hide_structure {
            state.expansion.collapse(draft.line_id);
        }
        state.row_cache.invalidate();
        state.error_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ouvrage::generate_demo_order;

    fn loaded_app() -> AppState {
        let mut state = AppState::new();
        state.order.load_order(generate_demo_order(), None);
        state
    }

    #[test]
    fn toggle_expands_then_collapses() {
        let mut state = loaded_app();
        let id = state.order.order().unwrap().ouvrage_ids()[0];

        ApplicationCoordinator::handle_ouvrage_toggle(&mut state, id);
        assert!(state.expansion.is_expanded(id));
        ApplicationCoordinator::handle_ouvrage_toggle(&mut state, id);
        assert!(!state.expansion.is_expanded(id));
    }

    #[test]
    fn hidden_structure_lines_do_not_toggle() {
        let mut state = loaded_app();
        let hidden_id = state
            .order
            .order()
            .unwrap()
            .lines
            .iter()
            .find(|l| l.is_ouvrage && l.hide_structure)
            .map(|l| l.id)
            .expect("demo order has a hide_structure ouvrage");

        ApplicationCoordinator::handle_ouvrage_toggle(&mut state, hidden_id);
        assert!(!state.expansion.is_expanded(hidden_id));
    }

    #[test]
    fn expand_all_skips_hidden_structure() {
        let mut state = loaded_app();
        ApplicationCoordinator::handle_expand_all(&mut state);

        let order = state.order.order().unwrap();
        for line in &order.lines {
            if line.is_ouvrage {
                assert_eq!(state.expansion.is_expanded(line.id), !line.hide_structure);
            }
        }
    }

    #[test]
    fn configurator_save_scales_and_collapses() {
        let mut state = loaded_app();
        let id = state
            .order
            .order()
            .unwrap()
            .lines
            .iter()
            .find(|l| l.is_ouvrage && !l.hide_structure)
            .map(|l| l.id)
            .unwrap();
        let old_qty = state.order.order().unwrap().line(id).unwrap().quantity;
        let old_comp_qty: Vec<f64> = state
            .order
            .order()
            .unwrap()
            .components(id)
            .map(|c| c.quantity)
            .collect();

        state.expansion.toggle(id);
        ApplicationCoordinator::open_configurator(&mut state, id);
        let mut draft = state.configurator.take().unwrap();
        draft.quantity_text = format!("{}", old_qty * 2.0);
        draft.hide_structure = true;
        ApplicationCoordinator::apply_configurator(&mut state, &draft);

        let order = state.order.order().unwrap();
        assert_eq!(order.line(id).unwrap().quantity, old_qty * 2.0);
        for (component, old) in order.components(id).zip(old_comp_qty) {
            assert!((component.quantity - old * 2.0).abs() < 1e-9);
        }
        assert!(order.line(id).unwrap().hide_structure);
        assert!(!state.expansion.is_expanded(id));
    }

    #[test]
    fn load_completion_closes_open_configurator() {
        let mut state = loaded_app();
        let id = state.order.order().unwrap().ouvrage_ids()[0];
        ApplicationCoordinator::open_configurator(&mut state, id);
        assert!(state.configurator.is_some());

        let path = std::env::temp_dir()
            .join(format!("ouvrage-coordinator-{}.json", std::process::id()));
        std::fs::write(
            &path,
            serde_json::to_string(&generate_demo_order()).unwrap(),
        )
        .unwrap();

        let mut loader = AsyncLoader::new();
        let ctx = egui::Context::default();
        loader.start_file_load(path.clone(), &ctx);

        let mut completed = false;
        for _ in 0..200 {
            if ApplicationCoordinator::check_loading_completion(&mut state, &mut loader) {
                completed = true;
                break;
            }
            std::thread::sleep(std::time::Duration::from_millis(10));
        }
        std::fs::remove_file(&path).ok();

        assert!(completed, "background load did not complete");
        assert!(state.order.order().is_some());
        assert!(state.configurator.is_none());
    }

    #[test]
    fn configurator_rejects_bad_quantity() {
        let mut state = loaded_app();
        let id = state.order.order().unwrap().ouvrage_ids()[0];
        ApplicationCoordinator::open_configurator(&mut state, id);
        let mut draft = state.configurator.take().unwrap();
        draft.quantity_text = "abc".to_string();
        ApplicationCoordinator::apply_configurator(&mut state, &draft);
        assert!(state.error_message.as_deref().unwrap().contains("Invalid quantity"));
    }
}
