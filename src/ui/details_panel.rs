//! Details panel UI rendering
//!
//! Shows the selected order line: pricing, margin, and for ouvrage lines
//! the component breakdown and hide flags.

use eframe::egui;
use egui::{RichText, ScrollArea};
use ouvrage::{LineId, ThemeColors};

use crate::app::AppState;
use crate::utils::{format_money, format_percent, format_quantity};

/// Result of user interaction with the details panel.
pub enum DetailsPanelInteraction {
    /// The configure button was clicked for an ouvrage line
    ConfigureRequested { line_id: LineId },
}

/// Renders the details panel for the selected line.
pub fn render_details_panel(
    ui: &mut egui::Ui,
    state: &AppState,
    theme_colors: &ThemeColors,
) -> Option<DetailsPanelInteraction> {
    let (order, selected_id) = match (state.order.order(), state.selection.selected_line_id()) {
        (Some(order), Some(id)) => (order, id),
        _ => {
            ui.label(RichText::new("No line selected").color(theme_colors.text_dim));
            return None;
        }
    };
    let Some(line) = order.line(selected_id) else {
        ui.label(RichText::new("No line selected").color(theme_colors.text_dim));
        return None;
    };

    let mut interaction = None;

    ui.label(RichText::new(&line.product).strong());
    if !line.description.is_empty() {
        ui.label(RichText::new(&line.description).color(theme_colors.text_dim));
    }
    ui.separator();

    ScrollArea::vertical()
        .id_salt("details_scroll_area")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            egui::Grid::new("details_fields").num_columns(2).show(ui, |ui| {
                ui.label("Quantity:");
                ui.label(format!("{} {}", format_quantity(line.quantity), line.uom));
                ui.end_row();

                ui.label("Unit price:");
                ui.label(format_money(line.price_unit, &order.currency));
                ui.end_row();

                if line.discount != 0.0 {
                    ui.label("Discount:");
                    ui.label(format_percent(line.discount));
                    ui.end_row();
                }

                ui.label("Subtotal:");
                ui.label(format_money(line.price_subtotal(), &order.currency));
                ui.end_row();

                if !line.is_ouvrage {
                    ui.label("Unit cost:");
                    ui.label(format_money(line.cost, &order.currency));
                    ui.end_row();
                }

                if let Some(margin) = order.line_margin(line.id) {
                    let color = if margin.amount < 0.0 {
                        theme_colors.margin_negative
                    } else {
                        theme_colors.margin_positive
                    };
                    ui.label("Margin:");
                    ui.colored_label(
                        color,
                        format!(
                            "{} ({})",
                            format_money(margin.amount, &order.currency),
                            format_percent(margin.percent)
                        ),
                    );
                    ui.end_row();
                }
            });

            if line.is_ouvrage {
                ui.add_space(8.0);
                ui.label(RichText::new("Ouvrage").strong());

                egui::Grid::new("details_ouvrage").num_columns(2).show(ui, |ui| {
                    if let Some(code) = &line.bom_code {
                        ui.label("BoM:");
                        ui.label(code);
                        ui.end_row();
                    }

                    ui.label("Components:");
                    ui.label(order.component_indices(line.id).len().to_string());
                    ui.end_row();

                    ui.label("Prices hidden:");
                    ui.label(if line.hide_prices { "yes" } else { "no" });
                    ui.end_row();

                    ui.label("Structure hidden:");
                    ui.label(if line.hide_structure { "yes" } else { "no" });
                    ui.end_row();
                });

                ui.add_space(4.0);
                if ui.button("⚙ Configure").clicked() {
                    interaction = Some(DetailsPanelInteraction::ConfigureRequested { line_id: line.id });
                }
            } else if let Some(parent_id) = line.parent.id() {
                ui.add_space(8.0);
                if let Some(parent) = order.line(parent_id) {
                    ui.label(
                        RichText::new(format!("Component of: {}", parent.product))
                            .color(theme_colors.text_dim),
                    );
                } else {
                    ui.label(
                        RichText::new(format!("Component of line {parent_id} (missing)"))
                            .color(theme_colors.error),
                    );
                }
            }
        });

    interaction
}
