//! Theme management and ANSI escape sequence generation.
//!
//! This module defines the color scheme system for the plugin, supporting
//! both built-in themes (Catppuccin variants) and custom themes loaded from
//! TOML files. It provides utilities for converting hex colors to ANSI
//! escape sequences.
//!
//! # Built-in Themes
//!
//! - `catppuccin-mocha`: Dark theme with warm tones (default)
//! - `catppuccin-latte`: Light theme with soft pastels
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! tab_active_fg = "#1e1e2e"
//! tab_active_bg = "#89b4fa"
//! error_fg = "#f38ba8"
//! warning_fg = "#fab387"
//! score_low_fg = "#f38ba8"
//! score_medium_fg = "#f9e2af"
//! score_high_fg = "#a6e3a1"
//! supporting_fg = "#a6e3a1"
//! contradicting_fg = "#f38ba8"
//! ```

use crate::domain::{Result, ScoreTier, TruthLensError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Color scheme configuration for UI rendering.
///
/// Contains theme metadata and color definitions. Can be loaded from
/// built-in themes or custom TOML files.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements.
///
/// All colors are specified as hex strings (e.g., "#cdd6f4"). Optional
/// fields default to `None`, allowing themes to opt out of certain styling.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Header text color.
    pub header_fg: String,
    /// Optional header background color.
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Normal text color.
    pub text_normal: String,
    /// Dimmed text color (footer, gauge track, secondary info).
    pub text_dim: String,

    /// Border and separator line color.
    pub border: String,

    /// Active tab foreground color.
    pub tab_active_fg: String,
    /// Active tab background color.
    pub tab_active_bg: String,

    /// Validation and failure message color.
    pub error_fg: String,
    /// Manipulation warning color.
    pub warning_fg: String,

    /// Gauge and verdict color for scores below 40.
    pub score_low_fg: String,
    /// Gauge and verdict color for scores from 40 to 79.
    pub score_medium_fg: String,
    /// Gauge and verdict color for scores of 80 and above.
    pub score_high_fg: String,

    /// Marker color for sources that support the claim.
    pub supporting_fg: String,
    /// Marker color for sources that contradict the claim.
    pub contradicting_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Supported names: `catppuccin-mocha`, `catppuccin-latte`.
    ///
    /// # Returns
    ///
    /// - `Some(Theme)` if the theme name is recognized
    /// - `None` if the theme name is unknown
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a theme error if the file cannot be read or the TOML content
    /// cannot be parsed (invalid syntax, missing fields, type mismatches).
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| TruthLensError::Theme(format!("failed to read theme file: {e}")))?;

        toml::from_str(&contents)
            .map_err(|e| TruthLensError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// Returns the gauge and verdict color for a score tier.
    #[must_use]
    pub fn tier_fg(&self, tier: ScoreTier) -> &str {
        match tier {
            ScoreTier::Low => &self.colors.score_low_fg,
            ScoreTier::Medium => &self.colors.score_medium_fg,
            ScoreTier::High => &self.colors.score_high_fg,
        }
    }

    /// Converts a hex color to RGB tuple.
    ///
    /// Strips `#` prefix if present, validates length, and parses hex
    /// digits. Returns `(255, 255, 255)` (white) on parse errors.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// Generates an ANSI 24-bit foreground color escape sequence.
    ///
    /// Converts a hex color to RGB and formats as `\x1b[38;2;r;g;bm`.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// Generates an ANSI 24-bit background color escape sequence.
    ///
    /// Converts a hex color to RGB and formats as `\x1b[48;2;r;g;bm`.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    /// Returns the ANSI bold escape sequence (`\x1b[1m`).
    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    /// Returns the ANSI dim escape sequence (`\x1b[2m`).
    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Returns the ANSI reset escape sequence (`\x1b[0m`).
    ///
    /// Clears all styling (colors, bold, dim, etc.).
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns the default theme (Catppuccin Mocha).
    ///
    /// # Panics
    ///
    /// Panics if the built-in theme fails to parse (should never occur).
    fn default() -> Self {
        Self::from_name("catppuccin-mocha")
            .expect("built-in catppuccin-mocha theme should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_themes_parse() {
        assert_eq!(
            Theme::from_name("catppuccin-mocha").unwrap().name,
            "catppuccin-mocha"
        );
        assert_eq!(
            Theme::from_name("catppuccin-latte").unwrap().name,
            "catppuccin-latte"
        );
        assert!(Theme::from_name("no-such-theme").is_none());
    }

    #[test]
    fn tier_colors_map_to_palette() {
        let theme = Theme::default();
        assert_eq!(theme.tier_fg(ScoreTier::Low), theme.colors.score_low_fg);
        assert_eq!(theme.tier_fg(ScoreTier::High), theme.colors.score_high_fg);
    }

    #[test]
    fn fg_emits_truecolor_sequence() {
        assert_eq!(Theme::fg("#ff0000"), "\u{001b}[38;2;255;0;0m");
        // Malformed hex falls back to white rather than erroring.
        assert_eq!(Theme::fg("oops"), "\u{001b}[38;2;255;255;255m");
    }

    #[test]
    fn from_file_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(toml::to_string(&Theme::default()).unwrap().as_bytes())
            .unwrap();

        let theme = Theme::from_file(&path).unwrap();
        assert_eq!(theme.name, "catppuccin-mocha");
    }

    #[test]
    fn from_file_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme.toml");
        std::fs::write(&path, "not toml at all [").unwrap();
        assert!(Theme::from_file(&path).is_err());
    }
}
