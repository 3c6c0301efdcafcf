//! Order line table UI rendering
//!
//! Renders the order's lines in document order. Ouvrage rows carry an
//! expand/collapse control; their component rows are indented and only
//! present while the parent is expanded (the visible set comes from the row
//! cache, which re-derives it whenever the expansion state changes).

use eframe::egui;
use egui::{RichText, ScrollArea};
use ouvrage::{LineId, Order, OrderLine, ThemeColors};

use crate::app::AppState;
use crate::state::LayoutState;
use crate::utils::{format_money, format_percent, format_quantity};

/// Result of line table interactions that need to be handled by the application.
pub enum LinesPanelInteraction {
    /// A line row was clicked
    LineSelected { line_id: LineId },
    /// An ouvrage row's expand control was clicked
    OuvrageToggled { line_id: LineId },
    /// The configure button of an ouvrage row was clicked
    ConfigureRequested { line_id: LineId },
}

/// Renders the complete line table with header and scrolling content.
pub fn render_lines_panel(
    ui: &mut egui::Ui,
    state: &mut AppState,
    theme_colors: &ThemeColors,
) -> Option<LinesPanelInteraction> {
    if state.order.order().is_none() {
        ui.label("No order loaded");
        return None;
    }

    render_column_headers(ui, &mut state.layout, theme_colors);
    ui.separator();

    let widths = *state.layout.column_widths();
    let indent = state.layout.indent_width();

    // Copy the visible indices out so the row loop can freely read the order.
    let visible: Vec<usize> = state
        .row_cache
        .visible_rows(&state.order, &state.expansion)
        .to_vec();

    let mut interaction: Option<LinesPanelInteraction> = None;

    ScrollArea::vertical()
        .id_salt("lines_scroll_area")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            let order = match state.order.order() {
                Some(o) => o,
                None => return,
            };

            for index in visible {
                let line = &order.lines[index];
                let row_interaction = render_line_row(
                    ui,
                    order,
                    line,
                    &widths,
                    indent,
                    state.selection.is_selected(line.id),
                    state.expansion.is_expanded(line.id),
                    theme_colors,
                );
                if row_interaction.is_some() {
                    interaction = row_interaction;
                }
            }
        });

    interaction
}

/// Renders the resizable column headers for the line table.
///
/// Each column boundary carries a drag handle; dragging writes the new width
/// straight into the layout state, which persists with the other settings.
fn render_column_headers(ui: &mut egui::Ui, layout: &mut LayoutState, theme_colors: &ThemeColors) {
    const LABELS: [&str; crate::state::LINE_TABLE_COLUMNS] =
        ["Product", "Qty", "UoM", "Unit Price", "Disc %", "Subtotal", "Margin"];
    const MIN_COLUMN_WIDTH: f32 = 40.0;

    let header_height = 20.0;
    let start_pos = ui.cursor().min;

    // Reserve space for the entire header row.
    ui.allocate_exact_size(
        egui::vec2(ui.available_width(), header_height),
        egui::Sense::hover(),
    );

    let font_id = egui::FontId::proportional(13.0);

    // The expand control column is fixed width.
    let mut x_offset = 26.0;

    for (i, label) in LABELS.iter().enumerate() {
        let width = layout.column_widths()[i];

        ui.painter().text(
            egui::pos2(start_pos.x + x_offset + 4.0, start_pos.y + header_height / 2.0),
            egui::Align2::LEFT_CENTER,
            *label,
            font_id.clone(),
            ui.visuals().strong_text_color(),
        );

        x_offset += width;

        // Column resize handle
        let handle_rect = egui::Rect::from_center_size(
            egui::pos2(start_pos.x + x_offset, start_pos.y + header_height / 2.0),
            egui::vec2(8.0, header_height),
        );
        let handle_id = ui.id().with(format!("column_resize_{i}"));
        let handle_response = ui.interact(handle_rect, handle_id, egui::Sense::drag());

        if handle_response.dragged() {
            let delta = handle_response.drag_delta().x;
            layout.column_widths_mut()[i] = (width + delta).max(MIN_COLUMN_WIDTH);
        }

        let handle_color = if handle_response.hovered() || handle_response.dragged() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::ResizeHorizontal);
            theme_colors.accent
        } else {
            theme_colors.border
        };
        ui.painter().rect_filled(handle_rect.shrink(2.0), 0.0, handle_color);
    }
}

/// True when the component's parent ouvrage hides component prices.
fn prices_hidden(order: &Order, line: &OrderLine) -> bool {
    line.parent
        .id()
        .and_then(|parent_id| order.line(parent_id))
        .is_some_and(|parent| parent.hide_prices)
}

#[allow(clippy::too_many_arguments)]
fn render_line_row(
    ui: &mut egui::Ui,
    order: &Order,
    line: &OrderLine,
    widths: &[f32; crate::state::LINE_TABLE_COLUMNS],
    indent: f32,
    is_selected: bool,
    is_expanded: bool,
    theme_colors: &ThemeColors,
) -> Option<LinesPanelInteraction> {
    let mut interaction = None;

    let row_fill = if is_selected {
        theme_colors.selection
    } else if line.is_ouvrage {
        theme_colors.ouvrage_row
    } else if line.is_component() {
        theme_colors.component_row
    } else {
        theme_colors.panel_background
    };

    let frame_response = egui::Frame::default().fill(row_fill).show(ui, |ui| {
        ui.horizontal(|ui| {
            // Expand control column
            if line.is_ouvrage && !line.hide_structure {
                let arrow = if is_expanded { "⏷" } else { "⏵" };
                if ui.small_button(arrow).clicked() {
                    interaction = Some(LinesPanelInteraction::OuvrageToggled { line_id: line.id });
                }
            } else {
                ui.add_space(26.0);
            }

            if line.is_component() {
                ui.add_space(indent);
            }

            // Product cell doubles as the selection target.
            let product_text = if line.is_ouvrage {
                RichText::new(&line.product).strong()
            } else {
                RichText::new(&line.product)
            };
            let product_width = (widths[0] - if line.is_component() { indent } else { 0.0 }).max(40.0);
            let response = ui.add_sized(
                [product_width, 18.0],
                egui::SelectableLabel::new(is_selected, product_text),
            );
            if response.clicked() {
                interaction = Some(LinesPanelInteraction::LineSelected { line_id: line.id });
            }

            let hidden = prices_hidden(order, line);
            let cell = |ui: &mut egui::Ui, width: f32, text: String, color: Option<egui::Color32>| {
                let rich = match color {
                    Some(c) => RichText::new(text).color(c),
                    None => RichText::new(text),
                };
                ui.add_sized([width, 18.0], egui::Label::new(rich));
            };

            cell(ui, widths[1], format_quantity(line.quantity), None);
            cell(ui, widths[2], line.uom.clone(), Some(theme_colors.text_dim));

            if hidden {
                for width in &widths[3..] {
                    cell(ui, *width, "—".to_string(), Some(theme_colors.text_dim));
                }
            } else {
                cell(ui, widths[3], format_money(line.price_unit, &order.currency), None);
                let discount = if line.discount != 0.0 {
                    format_percent(line.discount)
                } else {
                    String::new()
                };
                cell(ui, widths[4], discount, Some(theme_colors.text_dim));
                cell(ui, widths[5], format_money(line.price_subtotal(), &order.currency), None);

                if let Some(margin) = order.line_margin(line.id) {
                    let color = if margin.amount < 0.0 {
                        theme_colors.margin_negative
                    } else {
                        theme_colors.margin_positive
                    };
                    cell(
                        ui,
                        widths[6],
                        format!(
                            "{} ({})",
                            format_money(margin.amount, &order.currency),
                            format_percent(margin.percent)
                        ),
                        Some(color),
                    );
                }
            }

            // Configure control, ouvrage rows only
            if line.is_ouvrage && ui.small_button("⚙").clicked() {
                interaction = Some(LinesPanelInteraction::ConfigureRequested { line_id: line.id });
            }
        });
    });

    // Clicking anywhere else on the row also selects it.
    if interaction.is_none()
        && frame_response
            .response
            .interact(egui::Sense::click())
            .clicked()
    {
        interaction = Some(LinesPanelInteraction::LineSelected { line_id: line.id });
    }

    interaction
}
