use std::fs;

use ratatui::style::Color;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::session::drill::Feedback;

#[derive(Embed)]
#[folder = "assets/themes/"]
struct ThemeAssets;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ThemeColors {
    pub bg: String,
    pub fg: String,
    pub dim: String,
    pub accent: String,
    pub accent_alt: String,
    pub border: String,
    pub header_bg: String,
    pub header_fg: String,
    pub word: String,
    pub hint: String,
    pub bar_filled: String,
    pub bar_empty: String,
    pub error: String,
    pub warning: String,
    pub success: String,
}

impl Theme {
    pub fn load(name: &str) -> Option<Self> {
        let user_theme_path = Config::config_dir()
            .join("themes")
            .join(format!("{name}.toml"));
        if let Ok(content) = fs::read_to_string(&user_theme_path) {
            match toml::from_str::<Theme>(&content) {
                Ok(theme) => return Some(theme),
                Err(err) => log::warn!("ignoring {}: {err}", user_theme_path.display()),
            }
        }

        let file = ThemeAssets::get(&format!("{name}.toml"))?;
        let content = std::str::from_utf8(file.data.as_ref()).ok()?;
        toml::from_str::<Theme>(content).ok()
    }

    pub fn available_themes() -> Vec<String> {
        let mut names: Vec<String> = ThemeAssets::iter()
            .filter_map(|f| f.strip_suffix(".toml").map(str::to_string))
            .collect();
        if let Ok(entries) = fs::read_dir(Config::config_dir().join("themes")) {
            for entry in entries.flatten() {
                let file_name = entry.file_name();
                if let Some(name) = file_name.to_str().and_then(|n| n.strip_suffix(".toml")) {
                    if !names.iter().any(|n| n == name) {
                        names.push(name.to_string());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::load("neon").unwrap_or_else(|| Self {
            name: "default".to_string(),
            colors: ThemeColors::default(),
        })
    }
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            bg: "#0b0f19".to_string(),
            fg: "#f0f0f0".to_string(),
            dim: "#4a5568".to_string(),
            accent: "#4ecdc4".to_string(),
            accent_alt: "#ff6b6b".to_string(),
            border: "#2a3441".to_string(),
            header_bg: "#111827".to_string(),
            header_fg: "#f0f0f0".to_string(),
            word: "#f0f0f0".to_string(),
            hint: "#ffe66d".to_string(),
            bar_filled: "#4ecdc4".to_string(),
            bar_empty: "#1f2937".to_string(),
            error: "#ff6b6b".to_string(),
            warning: "#ffa94d".to_string(),
            success: "#4ecdc4".to_string(),
        }
    }
}

impl ThemeColors {
    pub fn parse_color(hex: &str) -> Color {
        let hex = hex.trim_start_matches('#');
        if hex.len() == 6 && hex.is_ascii() {
            if let (Ok(r), Ok(g), Ok(b)) = (
                u8::from_str_radix(&hex[0..2], 16),
                u8::from_str_radix(&hex[2..4], 16),
                u8::from_str_radix(&hex[4..6], 16),
            ) {
                return Color::Rgb(r, g, b);
            }
        }
        Color::White
    }

    pub fn bg(&self) -> Color { Self::parse_color(&self.bg) }
    pub fn fg(&self) -> Color { Self::parse_color(&self.fg) }
    pub fn dim(&self) -> Color { Self::parse_color(&self.dim) }
    pub fn accent(&self) -> Color { Self::parse_color(&self.accent) }
    pub fn accent_alt(&self) -> Color { Self::parse_color(&self.accent_alt) }
    pub fn border(&self) -> Color { Self::parse_color(&self.border) }
    pub fn header_bg(&self) -> Color { Self::parse_color(&self.header_bg) }
    pub fn header_fg(&self) -> Color { Self::parse_color(&self.header_fg) }
    pub fn word(&self) -> Color { Self::parse_color(&self.word) }
    pub fn hint(&self) -> Color { Self::parse_color(&self.hint) }
    pub fn bar_filled(&self) -> Color { Self::parse_color(&self.bar_filled) }
    pub fn bar_empty(&self) -> Color { Self::parse_color(&self.bar_empty) }
    pub fn error(&self) -> Color { Self::parse_color(&self.error) }
    pub fn warning(&self) -> Color { Self::parse_color(&self.warning) }
    pub fn success(&self) -> Color { Self::parse_color(&self.success) }

    /// Color for something highlighted by the active flash, or `base` when none.
    pub fn flash_or(&self, flash: Option<Feedback>, base: Color) -> Color {
        match flash {
            Some(Feedback::Correct) => self.success(),
            Some(Feedback::Incorrect) => self.error(),
            None => base,
        }
    }

    /// Accuracy color bands used by the scoreboard and summary.
    pub fn accuracy(&self, accuracy: u32) -> Color {
        if accuracy >= 80 {
            self.success()
        } else if accuracy >= 50 {
            self.warning()
        } else {
            self.error()
        }
    }
}
