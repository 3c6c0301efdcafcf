//! Theme support for the ouvrage viewer GUI.
//!
//! Color schemes are cut for a financial line table: row tints for ouvrage
//! and component rows, margin colors, and a dim color for prices hidden by
//! the hide-prices flag. Built-in themes: Light, Dark, Dracula.

use egui::Color32;
use std::collections::HashMap;

/// Color palette for a theme.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Background colors
    pub background: Color32,
    pub panel_background: Color32,

    // Foreground colors
    pub text: Color32,
    pub text_dim: Color32,

    // Interactive colors
    pub selection: Color32,
    pub hover: Color32,
    pub border: Color32,

    // Line table colors
    /// Fill behind ouvrage (group header) rows.
    pub ouvrage_row: Color32,
    /// Fill behind component rows.
    pub component_row: Color32,
    /// Positive margins.
    pub margin_positive: Color32,
    /// Negative margins.
    pub margin_negative: Color32,
    /// Accent for totals and the selected ouvrage group.
    pub accent: Color32,
    /// Errors in the status bar.
    pub error: Color32,
}

/// A theme definition with metadata and color palette.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub description: String,
    pub colors: ThemeColors,
}

/// Registry of available themes with a current selection.
pub struct ThemeManager {
    themes: HashMap<String, Theme>,
    current_theme_name: String,
}

impl ThemeManager {
    /// Creates a manager initialized with all built-in themes.
    pub fn new() -> Self {
        let mut themes = HashMap::new();

        themes.insert("Light".to_string(), light_theme());
        themes.insert("Dark".to_string(), dark_theme());
        themes.insert("Dracula".to_string(), dracula_theme());

        Self {
            themes,
            current_theme_name: "Dark".to_string(),
        }
    }

    pub fn get_theme(&self, name: &str) -> Option<&Theme> {
        self.themes.get(name)
    }

    /// All theme names, sorted.
    pub fn list_themes(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.themes.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }

    pub fn current_theme(&self) -> &Theme {
        // The current name is only ever set through set_current_theme.
        &self.themes[&self.current_theme_name]
    }

    pub fn set_current_theme(&mut self, name: &str) -> Result<(), String> {
        if self.themes.contains_key(name) {
            self.current_theme_name = name.to_string();
            Ok(())
        } else {
            Err(format!("Theme '{}' not found", name))
        }
    }

    /// Applies a theme's colors to egui visuals.
    pub fn apply_theme(&self, theme: &Theme, visuals: &mut egui::Visuals) {
        let colors = &theme.colors;

        visuals.panel_fill = colors.panel_background;
        visuals.extreme_bg_color = colors.background;
        visuals.faint_bg_color = colors.hover;

        visuals.override_text_color = Some(colors.text);

        visuals.selection.bg_fill = colors.selection;
        visuals.selection.stroke.color = colors.accent;

        visuals.widgets.noninteractive.bg_fill = colors.panel_background;
        visuals.widgets.inactive.bg_fill = colors.hover;
        visuals.widgets.hovered.bg_fill = colors.hover;
        visuals.widgets.active.bg_fill = colors.selection;

        visuals.hyperlink_color = colors.accent;
        visuals.error_fg_color = colors.error;
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

fn light_theme() -> Theme {
    Theme {
        name: "Light".to_string(),
        description: "Light theme for print-like review".to_string(),
        colors: ThemeColors {
            background: Color32::from_rgb(255, 255, 255),
            panel_background: Color32::from_rgb(248, 248, 248),
            text: Color32::from_rgb(20, 20, 20),
            text_dim: Color32::from_rgb(130, 130, 130),
            selection: Color32::from_rgb(180, 200, 255),
            hover: Color32::from_rgb(224, 224, 224),
            border: Color32::from_rgb(160, 160, 160),
            ouvrage_row: Color32::from_rgb(226, 235, 248),
            component_row: Color32::from_rgb(244, 246, 250),
            margin_positive: Color32::from_rgb(30, 130, 50),
            margin_negative: Color32::from_rgb(190, 40, 40),
            accent: Color32::from_rgb(40, 100, 200),
            error: Color32::from_rgb(200, 40, 40),
        },
    }
}

fn dark_theme() -> Theme {
    Theme {
        name: "Dark".to_string(),
        description: "Default dark theme".to_string(),
        colors: ThemeColors {
            background: Color32::from_rgb(22, 22, 22),
            panel_background: Color32::from_rgb(39, 39, 39),
            text: Color32::from_rgb(235, 235, 235),
            text_dim: Color32::from_rgb(150, 150, 150),
            selection: Color32::from_rgb(50, 80, 120),
            hover: Color32::from_rgb(70, 70, 70),
            border: Color32::from_rgb(100, 100, 100),
            ouvrage_row: Color32::from_rgb(46, 58, 74),
            component_row: Color32::from_rgb(46, 46, 46),
            margin_positive: Color32::from_rgb(46, 204, 113),
            margin_negative: Color32::from_rgb(231, 76, 60),
            accent: Color32::from_rgb(52, 152, 219),
            error: Color32::from_rgb(231, 76, 60),
        },
    }
}

/// Official colors from: https://draculatheme.com/spec
fn dracula_theme() -> Theme {
    Theme {
        name: "Dracula".to_string(),
        description: "Official Dracula color palette".to_string(),
        colors: ThemeColors {
            background: hex_to_color32("#21222c"),
            panel_background: hex_to_color32("#282a36"),
            text: hex_to_color32("#f8f8f2"),
            text_dim: hex_to_color32("#6272a4"),
            selection: hex_to_color32("#44475a"),
            hover: hex_to_color32("#44475a"),
            border: hex_to_color32("#6272a4"),
            ouvrage_row: hex_to_color32("#343746"),
            component_row: hex_to_color32("#2b2d3a"),
            margin_positive: hex_to_color32("#50fa7b"),
            margin_negative: hex_to_color32("#ff5555"),
            accent: hex_to_color32("#bd93f9"),
            error: hex_to_color32("#ff5555"),
        },
    }
}

/// Converts a hex color string (like "#282a36") to Color32.
pub fn hex_to_color32(hex: &str) -> Color32 {
    let hex = hex.trim_start_matches('#');

    if hex.len() == 6 {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Color32::from_rgb(r, g, b)
    } else {
        Color32::from_rgb(0, 0, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_themes_are_registered() {
        let manager = ThemeManager::new();
        assert_eq!(manager.list_themes(), vec!["Dark", "Dracula", "Light"]);
        assert_eq!(manager.current_theme().name, "Dark");
    }

    #[test]
    fn set_current_theme_rejects_unknown() {
        let mut manager = ThemeManager::new();
        assert!(manager.set_current_theme("Light").is_ok());
        assert_eq!(manager.current_theme().name, "Light");
        assert!(manager.set_current_theme("Solarized").is_err());
        assert_eq!(manager.current_theme().name, "Light");
    }

    #[test]
    fn hex_parsing() {
        assert_eq!(hex_to_color32("#ff5555"), Color32::from_rgb(255, 85, 85));
        assert_eq!(hex_to_color32("21222c"), Color32::from_rgb(33, 34, 44));
        assert_eq!(hex_to_color32("#bad"), Color32::from_rgb(0, 0, 0));
    }
}
