//! Styled terminal output for highlighted documents
//!
//! The terminal surface plays the host-surface role: it owns the
//! high-water mark, asks the restyle driver for one bounded range at a
//! time, and applies the resulting paint instructions as crossterm
//! color/attribute runs.

use std::io::Write;

use crossterm::{
    queue,
    style::{Attribute, Color as CtColor, Print, SetAttribute, SetBackgroundColor, SetForegroundColor},
};
use unicode_width::UnicodeWidthChar;

use crate::error::Result;
use crate::syntax::{Paint, RestyleDriver};
use crate::theme::{Color, Style, Theme};

/// How far past the high-water mark each restyle request asks for
const RESTYLE_CHUNK: usize = 4096;

/// Terminal-backed host surface
pub struct TerminalSurface<W: Write> {
    out: W,
    theme: Theme,
    /// Truncate rendered lines to this display width when set
    width: Option<usize>,
    /// Current display column of the output cursor
    column: usize,
}

impl<W: Write> TerminalSurface<W> {
    /// Create a surface writing to `out`
    pub fn new(out: W, theme: Theme) -> Self {
        Self {
            out,
            theme,
            width: None,
            column: 0,
        }
    }

    /// Builder: clip rendered lines to a display width
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    /// Render a whole document through sequential restyle passes
    ///
    /// Passes are serialized here: one request at a time, each resuming
    /// at the high-water mark the previous pass returned.
    pub fn render(&mut self, document: &str, driver: &RestyleDriver) -> Result<()> {
        let mut high_water_mark = 0;
        while high_water_mark < document.len() {
            let requested = (high_water_mark + RESTYLE_CHUNK).min(document.len());
            let pass = driver.restyle(document, high_water_mark, requested);
            for paint in &pass.paints {
                self.apply_style(document, paint, high_water_mark)?;
            }
            if pass.high_water_mark <= high_water_mark {
                break;
            }
            high_water_mark = pass.high_water_mark;
        }
        self.out.flush()?;
        Ok(())
    }

    /// Apply one paint instruction
    ///
    /// The part of the paint below the current high-water mark is the
    /// re-derived prefix of the pass and has already been presented, so
    /// it is skipped; zero-length paints are no-ops.
    fn apply_style(&mut self, document: &str, paint: &Paint, high_water_mark: usize) -> Result<()> {
        let start = paint.start.max(high_water_mark);
        let end = paint.end();
        if start >= end {
            return Ok(());
        }

        let style = self.theme.style_for(paint.code);
        self.set_style(&style)?;
        self.write_clipped(&document[start..end])?;
        if !style.is_default() {
            queue!(self.out, SetAttribute(Attribute::Reset))?;
        }
        Ok(())
    }

    /// Queue the escape codes for a style
    fn set_style(&mut self, style: &Style) -> Result<()> {
        if style.fg != Color::Default {
            queue!(self.out, SetForegroundColor(to_crossterm(style.fg)))?;
        }
        if style.bg != Color::Default {
            queue!(self.out, SetBackgroundColor(to_crossterm(style.bg)))?;
        }
        if style.bold {
            queue!(self.out, SetAttribute(Attribute::Bold))?;
        }
        if style.italic {
            queue!(self.out, SetAttribute(Attribute::Italic))?;
        }
        if style.underline {
            queue!(self.out, SetAttribute(Attribute::Underlined))?;
        }
        if style.dim {
            queue!(self.out, SetAttribute(Attribute::Dim))?;
        }
        Ok(())
    }

    /// Write text, clipping each visual line to the surface width
    fn write_clipped(&mut self, text: &str) -> Result<()> {
        for (i, part) in text.split('\n').enumerate() {
            if i > 0 {
                queue!(self.out, Print("\n"))?;
                self.column = 0;
            }
            if part.is_empty() {
                continue;
            }
            match self.width {
                Some(max) => {
                    let budget = max.saturating_sub(self.column);
                    let (visible, _) = truncate_to_width(part, budget);
                    if !visible.is_empty() {
                        queue!(self.out, Print(visible))?;
                    }
                    // Column keeps advancing past the clip so later paints
                    // on the same line stay suppressed
                    self.column += part_width(part);
                }
                None => {
                    queue!(self.out, Print(part))?;
                }
            }
        }
        Ok(())
    }
}

/// Longest prefix of `s` that fits in `max_width` display columns
///
/// Returns the prefix and the width it occupies.
fn truncate_to_width(s: &str, max_width: usize) -> (&str, usize) {
    let mut width = 0;
    for (idx, ch) in s.char_indices() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(1);
        if width + ch_width > max_width {
            return (&s[..idx], width);
        }
        width += ch_width;
    }
    (s, width)
}

/// Display width of a line fragment
fn part_width(s: &str) -> usize {
    s.chars()
        .map(|ch| UnicodeWidthChar::width(ch).unwrap_or(1))
        .sum()
}

/// Map a theme color onto the crossterm palette
fn to_crossterm(color: Color) -> CtColor {
    match color {
        Color::Default => CtColor::Reset,
        Color::Black => CtColor::Black,
        Color::Red => CtColor::DarkRed,
        Color::Green => CtColor::DarkGreen,
        Color::Yellow => CtColor::DarkYellow,
        Color::Blue => CtColor::DarkBlue,
        Color::Magenta => CtColor::DarkMagenta,
        Color::Cyan => CtColor::DarkCyan,
        Color::White => CtColor::Grey,
        Color::BrightBlack => CtColor::DarkGrey,
        Color::BrightRed => CtColor::Red,
        Color::BrightGreen => CtColor::Green,
        Color::BrightYellow => CtColor::Yellow,
        Color::BrightBlue => CtColor::Blue,
        Color::BrightMagenta => CtColor::Magenta,
        Color::BrightCyan => CtColor::Cyan,
        Color::BrightWhite => CtColor::White,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::markdown_table;

    fn driver() -> RestyleDriver {
        RestyleDriver::new(markdown_table().unwrap())
    }

    fn render_to_vec(document: &str, theme: Theme, width: Option<usize>) -> Vec<u8> {
        let mut surface = TerminalSurface::new(Vec::new(), theme);
        if let Some(w) = width {
            surface = surface.with_width(w);
        }
        surface.render(document, &driver()).unwrap();
        surface.out
    }

    #[test]
    fn test_plain_render_is_identity() {
        // With no styling the rendered bytes are exactly the document
        let doc = "# Title\nbody text\n## Sub\nmore";
        let out = render_to_vec(doc, Theme::plain(), None);
        assert_eq!(out, doc.as_bytes());
    }

    #[test]
    fn test_styled_render_keeps_text() {
        let doc = "# Title\nbody";
        let out = render_to_vec(doc, Theme::default(), None);
        let rendered = String::from_utf8(out).unwrap();
        assert!(rendered.contains("Title"));
        assert!(rendered.contains("body"));
        // Escape codes make the output longer than the raw document
        assert!(rendered.len() > doc.len());
    }

    #[test]
    fn test_empty_document() {
        let out = render_to_vec("", Theme::default(), None);
        assert!(out.is_empty());
    }

    #[test]
    fn test_width_clipping() {
        let doc = "hello world\nhi\n";
        let out = render_to_vec(doc, Theme::plain(), Some(5));
        assert_eq!(out, b"hello\nhi\n");
    }

    #[test]
    fn test_clip_spans_whole_line() {
        // A heading whose markup fills the budget leaves no room for the
        // content paint on the same line
        let doc = "## Sub\nx";
        let out = render_to_vec(doc, Theme::plain(), Some(2));
        assert_eq!(out, b"##\nx");
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("hello", 10), ("hello", 5));
        assert_eq!(truncate_to_width("hello", 3), ("hel", 3));
        assert_eq!(truncate_to_width("hello", 0), ("", 0));
        // Wide characters occupy two columns and never get split
        assert_eq!(truncate_to_width("\u{65e5}\u{672c}", 3), ("\u{65e5}", 2));
    }
}
