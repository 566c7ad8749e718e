//! Theme configuration
//!
//! Maps style codes to terminal colors and attributes. The theme is an
//! immutable value built once at startup: built-in defaults, optionally
//! overridden by a TOML file (`~/.notedown-theme.toml`, or a path given
//! with `--theme`).
//!
//! Example theme file:
//! ```text
//! [header1]
//! color = "magenta"
//! bold = true
//!
//! [unimportant]
//! dim = true
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{NotedownError, Result};
use crate::syntax::StyleCode;

/// Terminal colors (ANSI 16-color palette for compatibility)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    #[default]
    Default,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl Color {
    /// Parse a color from its name (for theme file loading)
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "default" => Some(Color::Default),
            "black" => Some(Color::Black),
            "red" => Some(Color::Red),
            "green" => Some(Color::Green),
            "yellow" => Some(Color::Yellow),
            "blue" => Some(Color::Blue),
            "magenta" => Some(Color::Magenta),
            "cyan" => Some(Color::Cyan),
            "white" => Some(Color::White),
            "bright-black" | "grey" | "gray" => Some(Color::BrightBlack),
            "bright-red" => Some(Color::BrightRed),
            "bright-green" => Some(Color::BrightGreen),
            "bright-yellow" => Some(Color::BrightYellow),
            "bright-blue" => Some(Color::BrightBlue),
            "bright-magenta" => Some(Color::BrightMagenta),
            "bright-cyan" => Some(Color::BrightCyan),
            "bright-white" => Some(Color::BrightWhite),
            _ => None,
        }
    }
}

/// Text style attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    /// Foreground color
    pub fg: Color,
    /// Background color
    pub bg: Color,
    /// Bold text
    pub bold: bool,
    /// Italic text
    pub italic: bool,
    /// Underlined text
    pub underline: bool,
    /// Dim/faint text
    pub dim: bool,
}

impl Style {
    /// Create a style with just foreground color
    pub fn fg(color: Color) -> Self {
        Self {
            fg: color,
            ..Default::default()
        }
    }

    /// Builder: set bold
    pub fn with_bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Builder: set italic
    pub fn with_italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Builder: set underline
    pub fn with_underline(mut self) -> Self {
        self.underline = true;
        self
    }

    /// Builder: set dim
    pub fn with_dim(mut self) -> Self {
        self.dim = true;
        self
    }

    /// Check if this is the default (no styling)
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// Style mapping for every style code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    default: Style,
    header1: Style,
    header2: Style,
    header3: Style,
    unimportant: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            default: Style::default(),
            header1: Style::fg(Color::Magenta).with_bold(),
            header2: Style::fg(Color::Blue).with_bold(),
            header3: Style::fg(Color::Cyan).with_bold(),
            unimportant: Style::default().with_dim(),
        }
    }
}

impl Theme {
    /// A theme with no styling at all (for `--no-color` output)
    pub fn plain() -> Self {
        Self {
            default: Style::default(),
            header1: Style::default(),
            header2: Style::default(),
            header3: Style::default(),
            unimportant: Style::default(),
        }
    }

    /// Get the style for a style code
    pub fn style_for(&self, code: StyleCode) -> Style {
        match code {
            StyleCode::Default => self.default,
            StyleCode::Header1 => self.header1,
            StyleCode::Header2 => self.header2,
            StyleCode::Header3 => self.header3,
            StyleCode::Unimportant => self.unimportant,
        }
    }

    /// Get the theme file path
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(windows)]
        {
            std::env::var("USERPROFILE")
                .ok()
                .map(|home| PathBuf::from(home).join(".notedown-theme.toml"))
        }

        #[cfg(not(windows))]
        {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(".notedown-theme.toml"))
        }
    }

    /// Load the theme, falling back silently to defaults
    pub fn load() -> Self {
        let mut theme = Theme::default();

        if let Some(path) = Self::config_path() {
            if let Ok(contents) = fs::read_to_string(&path) {
                if let Ok(table) = contents.parse::<toml::Table>() {
                    theme.apply(&table);
                }
            }
        }

        theme
    }

    /// Load a theme from an explicit file, reporting failures
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let table = contents
            .parse::<toml::Table>()
            .map_err(|e| NotedownError::Theme(e.to_string()))?;
        let mut theme = Theme::default();
        theme.apply(&table);
        Ok(theme)
    }

    /// Apply overrides from a parsed theme table
    ///
    /// Unknown sections, keys, and color names are ignored so that an
    /// outdated theme file still loads.
    fn apply(&mut self, table: &toml::Table) {
        apply_section(&mut self.default, table, "default");
        apply_section(&mut self.header1, table, "header1");
        apply_section(&mut self.header2, table, "header2");
        apply_section(&mut self.header3, table, "header3");
        apply_section(&mut self.unimportant, table, "unimportant");
    }
}

/// Apply one `[section]` of the theme file onto a style
fn apply_section(style: &mut Style, table: &toml::Table, section: &str) {
    let section = match table.get(section).and_then(|v| v.as_table()) {
        Some(s) => s,
        None => return,
    };

    if let Some(name) = section.get("color").and_then(|v| v.as_str()) {
        if let Some(color) = Color::from_name(name) {
            style.fg = color;
        }
    }
    if let Some(name) = section.get("background").and_then(|v| v.as_str()) {
        if let Some(color) = Color::from_name(name) {
            style.bg = color;
        }
    }
    if let Some(value) = section.get("bold").and_then(|v| v.as_bool()) {
        style.bold = value;
    }
    if let Some(value) = section.get("italic").and_then(|v| v.as_bool()) {
        style.italic = value;
    }
    if let Some(value) = section.get("underline").and_then(|v| v.as_bool()) {
        style.underline = value;
    }
    if let Some(value) = section.get("dim").and_then(|v| v.as_bool()) {
        style.dim = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme() {
        let theme = Theme::default();
        assert!(theme.style_for(StyleCode::Default).is_default());
        assert!(theme.style_for(StyleCode::Header1).bold);
        assert_eq!(theme.style_for(StyleCode::Header1).fg, Color::Magenta);
        assert!(theme.style_for(StyleCode::Unimportant).dim);
    }

    #[test]
    fn test_plain_theme() {
        let theme = Theme::plain();
        assert!(theme.style_for(StyleCode::Header1).is_default());
        assert!(theme.style_for(StyleCode::Unimportant).is_default());
    }

    #[test]
    fn test_apply_overrides() {
        let contents = r#"
[header1]
color = "red"
bold = false
underline = true

[unimportant]
color = "grey"
"#;
        let table = contents.parse::<toml::Table>().unwrap();
        let mut theme = Theme::default();
        theme.apply(&table);

        let h1 = theme.style_for(StyleCode::Header1);
        assert_eq!(h1.fg, Color::Red);
        assert!(!h1.bold);
        assert!(h1.underline);

        let dim = theme.style_for(StyleCode::Unimportant);
        assert_eq!(dim.fg, Color::BrightBlack);
        // Untouched attributes keep their defaults
        assert!(dim.dim);
        // Unmentioned sections stay at defaults
        assert_eq!(theme.style_for(StyleCode::Header2), Theme::default().style_for(StyleCode::Header2));
    }

    #[test]
    fn test_unknown_values_ignored() {
        let contents = r#"
[header2]
color = "not-a-color"
glitter = true

[nonsense]
color = "red"
"#;
        let table = contents.parse::<toml::Table>().unwrap();
        let mut theme = Theme::default();
        theme.apply(&table);
        assert_eq!(theme, Theme::default());
    }

    #[test]
    fn test_color_from_name() {
        assert_eq!(Color::from_name("magenta"), Some(Color::Magenta));
        assert_eq!(Color::from_name("Bright-Cyan"), Some(Color::BrightCyan));
        assert_eq!(Color::from_name("gray"), Some(Color::BrightBlack));
        assert_eq!(Color::from_name("mauve"), None);
    }
}
