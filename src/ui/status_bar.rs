//! Status bar UI rendering
//!
//! Handles the bottom status bar displaying order metadata and totals.

use eframe::egui;
use egui::RichText;
use ouvrage::ThemeColors;

use crate::app::AppState;
use crate::utils::{format_memory_mb, format_money, get_current_memory_mb};

/// Renders the status panel at the bottom of the window with order metadata.
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState, theme_colors: &ThemeColors) {
    ui.horizontal(|ui| {
        // Always show memory usage first
        let memory_text = format_memory_mb(get_current_memory_mb());
        ui.label(RichText::new(&memory_text).strong());

        if let Some(order) = state.order.order() {
            ui.label(RichText::new("|").strong());

            let source = if state.order.file_path().is_none() {
                "demo".to_string()
            } else {
                state
                    .order
                    .file_path()
                    .and_then(|p| p.file_name())
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default()
            };

            ui.label(RichText::new(format!(
                "{} | {} | {} | Ouvrages: {} | Components: {} | Visible rows: {}",
                order.name,
                order.customer,
                source,
                order.ouvrage_count(),
                order.component_count(),
                state.row_cache.visible_count(),
            )).strong());

            ui.label(RichText::new("|").strong());
            ui.label(
                RichText::new(format!(
                    "Total HT: {}",
                    format_money(order.amount_untaxed(), &order.currency)
                ))
                .strong()
                .color(theme_colors.accent),
            );
        } else {
            ui.label(RichText::new("| No order loaded").strong());
        }

        if let Some(error) = &state.error_message {
            ui.label(RichText::new("|").strong());
            ui.label(RichText::new(error).strong().color(theme_colors.error));
        }
    });
}
