//! Header panel UI rendering
//!
//! Handles the top menu bar with file controls, expansion controls, and the
//! theme selector.

use eframe::egui;
use std::path::PathBuf;

use crate::app::AppState;
use crate::io::AsyncLoader;

/// Result of user interaction with the header panel
pub enum HeaderInteraction {
    /// User picked an order file to open
    OpenFileRequested(PathBuf),
    /// User clicked "Demo Order"
    OpenDemoOrderRequested,
    /// User clicked "Expand All"
    ExpandAllRequested,
    /// User clicked "Collapse All"
    CollapseAllRequested,
}

/// Renders the application header with file, expansion and theme controls.
pub fn render_header(
    ui: &mut egui::Ui,
    state: &mut AppState,
    loader: &AsyncLoader,
) -> Option<HeaderInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        if ui.button("📁 Open Order").clicked() {
            let mut dialog = rfd::FileDialog::new().add_filter("Order Files", &["json"]);

            if let Ok(cwd) = std::env::current_dir() {
                dialog = dialog.set_directory(cwd);
            }

            if let Some(path) = dialog.pick_file() {
                interaction = Some(HeaderInteraction::OpenFileRequested(path));
            }
        }

        if ui.button("🧾 Demo Order").clicked() {
            interaction = Some(HeaderInteraction::OpenDemoOrderRequested);
        }

        ui.separator();

        let has_order = state.order.order().is_some();
        if ui.add_enabled(has_order, egui::Button::new("⏷ Expand All")).clicked() {
            interaction = Some(HeaderInteraction::ExpandAllRequested);
        }
        if ui.add_enabled(has_order, egui::Button::new("⏵ Collapse All")).clicked() {
            interaction = Some(HeaderInteraction::CollapseAllRequested);
        }

        ui.separator();

        // Theme selector
        let theme_names: Vec<String> = state
            .theme
            .theme_manager()
            .list_themes()
            .iter()
            .map(|s| s.to_string())
            .collect();
        let mut selected = state.theme.current_theme_name().to_string();
        egui::ComboBox::from_label("Theme")
            .selected_text(selected.clone())
            .show_ui(ui, |ui| {
                for name in &theme_names {
                    ui.selectable_value(&mut selected, name.clone(), name);
                }
            });
        if selected != state.theme.current_theme_name() {
            state.theme.set_theme(selected);
        }

        if loader.is_loading() {
            ui.separator();
            ui.spinner();
            ui.label("Loading order...");
        }
    });

    interaction
}
