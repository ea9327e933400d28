//! Board colors and ANSI styling.
//!
//! A [`Theme`] is a named palette of hex colors. Four Catppuccin flavours are
//! compiled in from `themes/`; any other palette can be loaded from a TOML
//! file with the same keys:
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! selection_fg = "#1e1e2e"
//! selection_bg = "#f5c2e7"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! tab_active_fg = "#1e1e2e"
//! tab_active_bg = "#89b4fa"
//! modal_border = "#f5c2e7"
//! input_focus = "#f9e2af"
//! status_available = "#a6e3a1"
//! status_other = "#fab387"
//! banner_success = "#a6e3a1"
//! banner_error = "#f38ba8"
//! empty_state_fg = "#89b4fa"
//! ```
//!
//! `header_bg` is optional. Colors are emitted as 24-bit SGR sequences:
//!
//! ```rust
//! use donation_board::ui::theme::Theme;
//!
//! let theme = Theme::from_name("catppuccin-latte").expect("built-in theme");
//! let status = Theme::fg(theme.status_color("available"));
//! println!("{status}Available{}", Theme::reset());
//! ```

use crate::domain::error::{DonationBoardError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the theme used when none is configured.
pub const DEFAULT_THEME: &str = "catppuccin-mocha";

/// Compiled-in palettes, by name.
const BUILT_IN_THEMES: &[(&str, &str)] = &[
    ("catppuccin-mocha", include_str!("../../themes/catppuccin-mocha.toml")),
    ("catppuccin-latte", include_str!("../../themes/catppuccin-latte.toml")),
    ("catppuccin-frappe", include_str!("../../themes/catppuccin-frappe.toml")),
    ("catppuccin-macchiato", include_str!("../../themes/catppuccin-macchiato.toml")),
];

const ESC: &str = "\u{1b}[";

/// A named palette.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// Hex colors (`#rrggbb`) for each part of the board.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThemeColors {
    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,

    pub selection_fg: String,
    pub selection_bg: String,

    pub text_normal: String,
    /// Footer, table headers and other secondary text.
    pub text_dim: String,

    pub border: String,

    /// Active filter tab.
    pub tab_active_fg: String,
    pub tab_active_bg: String,

    /// Frame of the detail modal and the submission form.
    pub modal_border: String,
    /// Marker and text color of the focused form field.
    pub input_focus: String,

    /// Status column color for `available` items.
    pub status_available: String,
    /// Status column color for every other status.
    pub status_other: String,

    pub banner_success: String,
    pub banner_error: String,

    pub empty_state_fg: String,
}

impl Theme {
    /// Names accepted by [`Theme::from_name`].
    pub fn built_in_names() -> impl Iterator<Item = &'static str> {
        BUILT_IN_THEMES.iter().map(|(name, _)| *name)
    }

    /// Looks up a compiled-in palette. `None` for unknown names.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        BUILT_IN_THEMES
            .iter()
            .find(|(built_in, _)| *built_in == name)
            .and_then(|(_, source)| toml::from_str(source).ok())
    }

    /// Reads a palette from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`DonationBoardError::Theme`] if the file cannot be read or
    /// is not a complete palette.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|e| {
            DonationBoardError::Theme(format!("cannot read {}: {e}", path.display()))
        })?;

        toml::from_str(&source).map_err(|e| {
            DonationBoardError::Theme(format!("invalid theme {}: {e}", path.display()))
        })
    }

    /// Color for the status column, keyed by normalized status token.
    #[must_use]
    pub fn status_color(&self, status_token: &str) -> &str {
        match status_token {
            "available" => self.colors.status_available.as_str(),
            _ => self.colors.status_other.as_str(),
        }
    }

    /// 24-bit foreground color. Malformed hex renders white.
    ///
    /// ```rust
    /// use donation_board::ui::theme::Theme;
    ///
    /// assert_eq!(Theme::fg("#ff0080"), "\u{1b}[38;2;255;0;128m");
    /// ```
    #[must_use]
    pub fn fg(hex: &str) -> String {
        Rgb::parse(hex).unwrap_or(Rgb::WHITE).sgr(38)
    }

    /// 24-bit background color. Malformed hex renders white.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        Rgb::parse(hex).unwrap_or(Rgb::WHITE).sgr(48)
    }

    /// Bold text.
    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{1b}[1m"
    }

    /// Faint text, used for secondary hints.
    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{1b}[2m"
    }

    /// Clears every style set so far.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{1b}[0m"
    }
}

impl Default for Theme {
    /// # Panics
    ///
    /// Panics if the compiled-in default palette does not parse.
    fn default() -> Self {
        Self::from_name(DEFAULT_THEME).expect("compiled-in default theme parses")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Rgb(u8, u8, u8);

impl Rgb {
    const WHITE: Self = Self(255, 255, 255);

    fn parse(hex: &str) -> Option<Self> {
        let digits = hex.trim().strip_prefix('#').unwrap_or(hex.trim());
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        Some(Self(channel(0)?, channel(2)?, channel(4)?))
    }

    /// `38` selects foreground, `48` background.
    fn sgr(self, target: u8) -> String {
        let Self(r, g, b) = self;
        format!("{ESC}{target};2;{r};{g};{b}m")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn every_builtin_theme_parses() {
        for name in Theme::built_in_names() {
            let theme = Theme::from_name(name).unwrap_or_else(|| panic!("{name} should parse"));
            assert_eq!(theme.name, name);
        }
        assert!(Theme::from_name("solarized").is_none());
    }

    #[test]
    fn status_color_distinguishes_available() {
        let theme = Theme::default();
        assert_eq!(theme.status_color("available"), theme.colors.status_available);
        assert_eq!(theme.status_color("on-hold"), theme.colors.status_other);
    }

    #[test]
    fn loads_custom_theme_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        let mut theme = Theme::default();
        theme.name = "custom".to_string();
        theme.colors.border = "#000000".to_string();
        let toml = toml::to_string(&theme).expect("serializes");
        file.write_all(toml.as_bytes()).expect("writes");

        let loaded = Theme::from_file(file.path()).expect("loads");
        assert_eq!(loaded.name, "custom");
        assert_eq!(loaded.colors.border, "#000000");
    }

    #[test]
    fn broken_theme_file_is_a_theme_error() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(b"name = 3").expect("writes");

        assert!(matches!(
            Theme::from_file(file.path()),
            Err(DonationBoardError::Theme(_))
        ));
        assert!(matches!(
            Theme::from_file("/nonexistent/theme.toml"),
            Err(DonationBoardError::Theme(_))
        ));
    }

    #[test]
    fn invalid_hex_falls_back_to_white() {
        assert_eq!(Theme::fg("nope"), "\u{1b}[38;2;255;255;255m");
        assert_eq!(Theme::bg("#12345g"), "\u{1b}[48;2;255;255;255m");
        assert_eq!(Rgb::parse("1e1e2e"), Some(Rgb(0x1e, 0x1e, 0x2e)));
    }
}
