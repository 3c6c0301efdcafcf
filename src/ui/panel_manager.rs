//! Panel orchestration and layout management.
//!
//! Coordinates all UI panels (header, lines table, details, status) and the
//! configurator window, and funnels their interactions to the application
//! coordinator.

use eframe::egui;
use ouvrage::LineId;

use crate::app::AppState;
use crate::io::AsyncLoader;
use crate::ui::configurator::{self, ConfiguratorDraft, ConfiguratorInteraction};
use crate::ui::{details_panel, header, lines_panel, status_bar};

/// Result of panel interactions that need to be handled by the application coordinator.
pub enum PanelInteraction {
    /// User requested to open an order file
    OpenFileRequested(std::path::PathBuf),
    /// User requested the demo order
    OpenDemoOrderRequested,
    /// User requested expanding all ouvrages
    ExpandAllRequested,
    /// User requested collapsing all ouvrages
    CollapseAllRequested,
    /// A line was selected
    LineSelected { line_id: LineId },
    /// An ouvrage row's expansion was toggled
    OuvrageToggled { line_id: LineId },
    /// The configurator was requested for an ouvrage line
    ConfigureRequested { line_id: LineId },
    /// The configurator was saved
    ConfiguratorSaved(ConfiguratorDraft),
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// This is the main entry point for rendering the entire UI, called from
    /// the eframe::App::update() implementation.
    pub fn render_all_panels(
        ctx: &egui::Context,
        state: &mut AppState,
        loader: &AsyncLoader,
    ) -> Option<PanelInteraction> {
        let mut interaction: Option<PanelInteraction> = None;

        let theme_colors = state
            .theme
            .theme_manager()
            .get_theme(state.theme.current_theme_name())
            .map(|t| t.colors.clone())
            .unwrap_or_else(|| state.theme.theme_manager().current_theme().colors.clone());

        // Header panel at the top
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            if let Some(header_interaction) = header::render_header(ui, state, loader) {
                interaction = Some(match header_interaction {
                    header::HeaderInteraction::OpenFileRequested(path) => {
                        PanelInteraction::OpenFileRequested(path)
                    }
                    header::HeaderInteraction::OpenDemoOrderRequested => {
                        PanelInteraction::OpenDemoOrderRequested
                    }
                    header::HeaderInteraction::ExpandAllRequested => {
                        PanelInteraction::ExpandAllRequested
                    }
                    header::HeaderInteraction::CollapseAllRequested => {
                        PanelInteraction::CollapseAllRequested
                    }
                });
            }
        });

        // Status panel at the very bottom
        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            status_bar::render_status_bar(ui, state, &theme_colors);
        });

        // Right panel: selected line details
        let details_frame = egui::Frame::default()
            .inner_margin(egui::Margin::same(4))
            .fill(ctx.style().visuals.panel_fill);

        egui::SidePanel::right("details_panel")
            .default_width(ctx.content_rect().width() * state.layout.details_split_ratio())
            .resizable(true)
            .frame(details_frame)
            .show(ctx, |ui| {
                ui.heading("Line Details");
                ui.separator();

                if let Some(details_interaction) =
                    details_panel::render_details_panel(ui, state, &theme_colors)
                {
                    interaction = Some(match details_interaction {
                        details_panel::DetailsPanelInteraction::ConfigureRequested { line_id } => {
                            PanelInteraction::ConfigureRequested { line_id }
                        }
                    });
                }
            });

        // Central panel: order lines
        let lines_frame = egui::Frame::default()
            .inner_margin(egui::Margin::same(4))
            .fill(ctx.style().visuals.panel_fill);

        egui::CentralPanel::default().frame(lines_frame).show(ctx, |ui| {
            ui.heading("Order Lines");
            ui.separator();

            if let Some(lines_interaction) =
                lines_panel::render_lines_panel(ui, state, &theme_colors)
            {
                interaction = Some(match lines_interaction {
                    lines_panel::LinesPanelInteraction::LineSelected { line_id } => {
                        PanelInteraction::LineSelected { line_id }
                    }
                    lines_panel::LinesPanelInteraction::OuvrageToggled { line_id } => {
                        PanelInteraction::OuvrageToggled { line_id }
                    }
                    lines_panel::LinesPanelInteraction::ConfigureRequested { line_id } => {
                        PanelInteraction::ConfigureRequested { line_id }
                    }
                });
            }
        });

        // Configurator window (floats above the panels while open)
        if let Some(mut draft) = state.configurator.take() {
            let configurator_interaction = state
                .order
                .order()
                .and_then(|order| {
                    configurator::render_configurator(ctx, &mut draft, order, &theme_colors)
                });

            match configurator_interaction {
                Some(ConfiguratorInteraction::Saved(saved)) => {
                    interaction = Some(PanelInteraction::ConfiguratorSaved(saved));
                }
                Some(ConfiguratorInteraction::Cancelled) => {}
                None => {
                    // Still editing; put the draft back
                    state.configurator = Some(draft);
                }
            }
        }

        interaction
    }
}
