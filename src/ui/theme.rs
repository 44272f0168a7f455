use std::fs;

use ratatui::style::{Color, Modifier, Style};
use rust_embed::Embed;
use serde::{Deserialize, Serialize};

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
    pub directory: String,
    pub special: String,
    pub file: String,
}

impl Theme {
    pub fn load(name: &str) -> Option<Self> {
        // Try user themes dir
        if let Some(config_dir) = dirs::config_dir() {
            let user_theme_path = config_dir
                .join("ted")
                .join("themes")
                .join(format!("{name}.toml"));
            if let Ok(content) = fs::read_to_string(&user_theme_path) {
                if let Ok(theme) = toml::from_str::<Theme>(&content) {
                    return Some(theme);
                }
            }
        }

        // Try bundled themes
        let filename = format!("{name}.toml");
        if let Some(file) = ThemeAssets::get(&filename) {
            if let Ok(content) = std::str::from_utf8(file.data.as_ref()) {
                if let Ok(theme) = toml::from_str::<Theme>(content) {
                    return Some(theme);
                }
            }
        }

        None
    }

    #[allow(dead_code)]
    pub fn available_themes() -> Vec<String> {
        ThemeAssets::iter()
            .filter_map(|f| f.strip_suffix(".toml").map(|n| n.to_string()))
            .collect()
    }

    /// Terminal default colors only; highlights still read through reverse
    /// video. Used when colors are disabled.
    pub fn monochrome() -> Self {
        Self {
            name: "monochrome".to_string(),
            colors: ThemeColors {
                bg: "default".to_string(),
                fg: "default".to_string(),
                directory: "default".to_string(),
                special: "default".to_string(),
                file: "default".to_string(),
            },
        }
    }

    /// Border, headers, and overlay fill.
    pub fn base(&self) -> Style {
        Style::default().fg(self.colors.fg()).bg(self.colors.bg())
    }

    /// Drop-down pane fill: base colors in reverse video.
    pub fn menu(&self) -> Style {
        self.base().add_modifier(Modifier::REVERSED)
    }

    pub fn directory(&self) -> Style {
        Style::default()
            .fg(self.colors.directory())
            .bg(self.colors.bg())
    }

    pub fn special(&self) -> Style {
        Style::default()
            .fg(self.colors.special())
            .bg(self.colors.bg())
    }

    pub fn file(&self) -> Style {
        Style::default().fg(self.colors.file()).bg(self.colors.bg())
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::load("default").unwrap_or_else(Self::monochrome)
    }
}

/// Style patch that flips a region into reverse video, keeping its colors.
pub fn reverse_on() -> Style {
    Style::new().add_modifier(Modifier::REVERSED)
}

/// Patch undoing [`reverse_on`].
pub fn reverse_off() -> Style {
    Style::new().remove_modifier(Modifier::REVERSED)
}

impl ThemeColors {
    /// Accepts named ANSI colors, "default" for the terminal's own, and
    /// `#rrggbb` hex.
    pub fn parse_color(value: &str) -> Color {
        let named = match value.to_ascii_lowercase().as_str() {
            "default" => Some(Color::Reset),
            "black" => Some(Color::Black),
            "red" => Some(Color::Red),
            "green" => Some(Color::Green),
            "yellow" => Some(Color::Yellow),
            "blue" => Some(Color::Blue),
            "magenta" => Some(Color::Magenta),
            "cyan" => Some(Color::Cyan),
            "white" => Some(Color::White),
            "gray" | "grey" => Some(Color::Gray),
            _ => None,
        };
        if let Some(color) = named {
            return color;
        }

        let hex = value.trim_start_matches('#');
        if hex.len() == 6 {
            if let (Ok(r), Ok(g), Ok(b)) = (
                u8::from_str_radix(&hex[0..2], 16),
                u8::from_str_radix(&hex[2..4], 16),
                u8::from_str_radix(&hex[4..6], 16),
            ) {
                return Color::Rgb(r, g, b);
            }
        }
        Color::Reset
    }

    pub fn bg(&self) -> Color {
        Self::parse_color(&self.bg)
    }
    pub fn fg(&self) -> Color {
        Self::parse_color(&self.fg)
    }
    pub fn directory(&self) -> Color {
        Self::parse_color(&self.directory)
    }
    pub fn special(&self) -> Color {
        Self::parse_color(&self.special)
    }
    pub fn file(&self) -> Color {
        Self::parse_color(&self.file)
    }
}
