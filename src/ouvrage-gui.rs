//! Ouvrage Devis Viewer GUI Application
//!
//! Interactive viewer for sales quotes containing ouvrages (composite work
//! items) built with the egui framework. The viewer features:
//! - A line table with collapsible ouvrage groups (component rows are shown
//!   only while their parent ouvrage row is expanded)
//! - Margin and total computation that excludes ouvrage double counting
//! - An ouvrage configurator for quantity scaling and hide flags
//! - Asynchronous order file loading with a loading indicator
//! - Multiple theme support with persistent preferences

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;
use std::path::PathBuf;

mod utils;
mod cache;
mod domain;
mod io;
mod app;
mod ui;
mod state;

use app::{AppState, ApplicationCoordinator, SettingsCoordinator, ThemeCoordinator};
use io::AsyncLoader;
use ui::panel_manager::PanelManager;

const COLUMN_WIDTHS_KEY: &str = "column_widths";

/// Main application entry point that initializes and launches the viewer GUI.
fn main() -> eframe::Result {
    // Parse command-line arguments to check for an initial order to load
    let initial_file = std::env::args().nth(1).map(PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 720.0])
            .with_title("Ouvrage Devis Viewer"),
        ..Default::default()
    };

    eframe::run_native(
        "Ouvrage Devis Viewer",
        options,
        Box::new(move |cc| Ok(Box::new(OuvrageViewerApp::new(cc, initial_file)))),
    )
}

/// The main ouvrage viewer application.
///
/// Delegates most functionality to coordinators:
/// - `ApplicationCoordinator` handles order loading and interaction logic
/// - `ThemeCoordinator` handles theme persistence and application
/// - `PanelManager` handles UI panel layout and rendering
struct OuvrageViewerApp {
    /// Centralized application state
    state: AppState,
    /// Asynchronous order file loader
    loader: AsyncLoader,
    /// Optional file to load on first frame
    pending_file_load: Option<PathBuf>,
}

impl OuvrageViewerApp {
    /// Creates a new viewer instance with theme and layout settings loaded
    /// from persistent storage. Optionally accepts an initial order path to
    /// load on startup.
    fn new(cc: &eframe::CreationContext, initial_file: Option<PathBuf>) -> Self {
        let current_theme_name = ThemeCoordinator::load_theme_from_storage(cc.storage);

        let column_widths: [f32; state::LINE_TABLE_COLUMNS] = SettingsCoordinator::load_setting_or(
            cc.storage,
            COLUMN_WIDTHS_KEY,
            state::LayoutState::default_column_widths(),
        );

        Self {
            state: AppState::with_theme_and_layout(current_theme_name, column_widths),
            loader: AsyncLoader::new(),
            pending_file_load: initial_file,
        }
    }

    /// Handles panel interactions by delegating to ApplicationCoordinator.
    fn handle_panel_interaction(
        &mut self,
        interaction: ui::panel_manager::PanelInteraction,
        ctx: &egui::Context,
    ) {
        match interaction {
            ui::panel_manager::PanelInteraction::OpenFileRequested(path) => {
                ApplicationCoordinator::open_file(&mut self.state, &mut self.loader, path, ctx);
            }
            ui::panel_manager::PanelInteraction::OpenDemoOrderRequested => {
                ApplicationCoordinator::open_demo_order(&mut self.state, &mut self.loader);
            }
            ui::panel_manager::PanelInteraction::ExpandAllRequested => {
                ApplicationCoordinator::handle_expand_all(&mut self.state);
            }
            ui::panel_manager::PanelInteraction::CollapseAllRequested => {
                ApplicationCoordinator::handle_collapse_all(&mut self.state);
            }
            ui::panel_manager::PanelInteraction::LineSelected { line_id } => {
                ApplicationCoordinator::handle_line_selection(&mut self.state, line_id);
            }
            ui::panel_manager::PanelInteraction::OuvrageToggled { line_id } => {
                ApplicationCoordinator::handle_ouvrage_toggle(&mut self.state, line_id);
            }
            ui::panel_manager::PanelInteraction::ConfigureRequested { line_id } => {
                ApplicationCoordinator::open_configurator(&mut self.state, line_id);
            }
            ui::panel_manager::PanelInteraction::ConfiguratorSaved(draft) => {
                ApplicationCoordinator::apply_configurator(&mut self.state, &draft);
            }
        }
    }
}

impl eframe::App for OuvrageViewerApp {
    /// Called when the app is being shut down - ensures preferences are saved.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        ThemeCoordinator::save_theme_to_storage(storage, self.state.theme.current_theme_name());
        SettingsCoordinator::save_setting(storage, COLUMN_WIDTHS_KEY, self.state.layout.column_widths());
    }

    /// Main update loop that renders all UI panels and handles application state.
    ///
    /// 1. Check for async loading completion
    /// 2. Apply theme
    /// 3. Load initial file if specified via command line
    /// 4. Render all panels via PanelManager
    /// 5. Handle panel interactions
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ApplicationCoordinator::check_loading_completion(&mut self.state, &mut self.loader);

        ThemeCoordinator::apply_current_theme(ctx, &self.state);

        if let Some(path) = self.pending_file_load.take() {
            ApplicationCoordinator::open_file(&mut self.state, &mut self.loader, path, ctx);
        }

        if let Some(interaction) = PanelManager::render_all_panels(ctx, &mut self.state, &self.loader) {
            self.handle_panel_interaction(interaction, ctx);
        }
    }
}
