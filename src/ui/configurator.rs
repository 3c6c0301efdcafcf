//! Ouvrage configurator window.
//!
//! Modal-style window for editing an ouvrage line: ordered quantity and the
//! hide-prices / hide-structure flags, with a read-only preview of the
//! component lines and their margins. Saving goes through the application
//! coordinator, which applies quantity scaling to the components.

use eframe::egui;
use egui::RichText;
use ouvrage::{LineId, Order, ThemeColors};

use crate::utils::{format_money, format_percent, format_quantity};

/// Edit buffer for one open configurator window.
#[derive(Debug, Clone)]
pub struct ConfiguratorDraft {
    pub line_id: LineId,
    pub product: String,
    pub bom_code: Option<String>,
    /// Text buffer for the quantity field; validated on save.
    pub quantity_text: String,
    pub hide_prices: bool,
    pub hide_structure: bool,
}

impl ConfiguratorDraft {
    /// Builds a draft pre-filled from the ouvrage line.
    pub fn from_line(line: &ouvrage::OrderLine) -> Self {
        Self {
            line_id: line.id,
            product: line.product.clone(),
            bom_code: line.bom_code.clone(),
            quantity_text: format_quantity(line.quantity),
            hide_prices: line.hide_prices,
            hide_structure: line.hide_structure,
        }
    }

    /// Parses the quantity buffer; None when not a valid non-negative number.
    pub fn parsed_quantity(&self) -> Option<f64> {
        match self.quantity_text.trim().parse::<f64>() {
            Ok(qty) if qty.is_finite() && qty >= 0.0 => Some(qty),
            _ => None,
        }
    }
}

/// Result of user interaction with the configurator window.
pub enum ConfiguratorInteraction {
    /// User clicked Save; the draft should be applied
    Saved(ConfiguratorDraft),
    /// User closed or cancelled the window
    Cancelled,
}

/// Renders the configurator window for the given draft.
///
/// The caller owns the draft (taken out of app state) and puts it back
/// unless an interaction ends the editing session.
pub fn render_configurator(
    ctx: &egui::Context,
    draft: &mut ConfiguratorDraft,
    order: &Order,
    theme_colors: &ThemeColors,
) -> Option<ConfiguratorInteraction> {
    let mut interaction = None;
    let mut open = true;

    egui::Window::new("Configuration Ouvrage")
        .id(egui::Id::new("ouvrage_configurator"))
        .open(&mut open)
        .collapsible(false)
        .resizable(true)
        .show(ctx, |ui| {
            ui.label(RichText::new(&draft.product).strong());
            if let Some(code) = &draft.bom_code {
                ui.label(RichText::new(format!("Nomenclature: {code}")).color(theme_colors.text_dim));
            }
            ui.separator();

            ui.horizontal(|ui| {
                ui.label("Quantité:");
                let response = egui::TextEdit::singleline(&mut draft.quantity_text)
                    .desired_width(80.0)
                    .show(ui);
                if response.response.changed() && draft.parsed_quantity().is_none() {
                    ui.colored_label(theme_colors.error, "invalid");
                }
            });

            ui.checkbox(&mut draft.hide_prices, "Masquer les prix des composants");
            ui.checkbox(&mut draft.hide_structure, "Masquer la structure");

            ui.separator();
            ui.label(RichText::new("Composants").strong());

            egui::Grid::new("configurator_components")
                .num_columns(5)
                .striped(true)
                .show(ui, |ui| {
                    ui.label(RichText::new("Produit").strong());
                    ui.label(RichText::new("Qté").strong());
                    ui.label(RichText::new("PU").strong());
                    ui.label(RichText::new("Coût").strong());
                    ui.label(RichText::new("Marge").strong());
                    ui.end_row();

                    for component in order.components(draft.line_id) {
                        let margin = order
                            .line_margin(component.id)
                            .map(|m| format!("{} ({})", format_money(m.amount, &order.currency), format_percent(m.percent)))
                            .unwrap_or_default();
                        ui.label(&component.product);
                        ui.label(format_quantity(component.quantity));
                        ui.label(format_money(component.price_unit, &order.currency));
                        ui.label(format_money(component.cost, &order.currency));
                        ui.label(margin);
                        ui.end_row();
                    }
                });

            ui.separator();
            ui.horizontal(|ui| {
                let save_enabled = draft.parsed_quantity().is_some();
                if ui.add_enabled(save_enabled, egui::Button::new("Enregistrer")).clicked() {
                    interaction = Some(ConfiguratorInteraction::Saved(draft.clone()));
                }
                if ui.button("Annuler").clicked() {
                    interaction = Some(ConfiguratorInteraction::Cancelled);
                }
            });
        });

    if !open && interaction.is_none() {
        interaction = Some(ConfiguratorInteraction::Cancelled);
    }

    interaction
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ConfiguratorDraft {
        ConfiguratorDraft {
            line_id: 1,
            product: "Ouvrage A".to_string(),
            bom_code: None,
            quantity_text: "2".to_string(),
            hide_prices: false,
            hide_structure: false,
        }
    }

    #[test]
    fn quantity_parses_valid_numbers() {
        let mut d = draft();
        assert_eq!(d.parsed_quantity(), Some(2.0));
        d.quantity_text = " 3.5 ".to_string();
        assert_eq!(d.parsed_quantity(), Some(3.5));
    }

    #[test]
    fn quantity_rejects_garbage() {
        let mut d = draft();
        for text in ["", "abc", "-1", "NaN", "inf"] {
            d.quantity_text = text.to_string();
            assert_eq!(d.parsed_quantity(), None, "{text:?} should not parse");
        }
    }
}
