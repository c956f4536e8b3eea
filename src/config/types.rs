// Configuration type definitions

use ratatui::style::Color;
use serde::Deserialize;

use crate::autocomplete::FieldSettings;

const DEFAULT_LIST_HEIGHT: u16 = 8;

/// Terminal presentation settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Colour name understood by ratatui ("cyan", "lightgreen", "#ff8800", ...)
    pub accent: String,
    /// Maximum number of suggestion rows shown at once
    pub list_height: u16,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        ThemeConfig {
            accent: "cyan".to_string(),
            list_height: DEFAULT_LIST_HEIGHT,
        }
    }
}

impl ThemeConfig {
    /// Accent colour, falling back to cyan for unknown names
    pub fn accent_color(&self) -> Color {
        self.accent.parse().unwrap_or(Color::Cyan)
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub field: FieldSettings,
    #[serde(default)]
    pub theme: ThemeConfig,
}
