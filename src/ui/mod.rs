//! UI panel rendering modules for the ouvrage viewer.

pub mod panel_manager;
pub mod header;
pub mod lines_panel;
pub mod details_panel;
pub mod status_bar;
pub mod configurator;
