//! Incremental restyle driver
//!
//! Bridges the editor's "this range needs styling" requests to tokenizer
//! runs. Every rule in the shipped table is intra-line, so re-lexing from
//! the start of the line containing the last styled offset always
//! reproduces the classification of everything at or after it; text
//! before that line is never re-examined.

use super::rules::MatcherTable;
use super::span::SpanKind;
use super::tokenizer::{floor_char_boundary, Tokenizer};

/// Visual style codes understood by the host surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleCode {
    Default,
    Header1,
    Header2,
    Header3,
    Unimportant,
}

impl StyleCode {
    /// Map a span kind to its style code
    pub fn for_kind(kind: SpanKind) -> Self {
        match kind {
            SpanKind::Plain => StyleCode::Default,
            SpanKind::Header1 => StyleCode::Header1,
            SpanKind::Header2 => StyleCode::Header2,
            SpanKind::Header3 => StyleCode::Header3,
            SpanKind::Unimportant => StyleCode::Unimportant,
        }
    }
}

/// One paint instruction for the host surface
///
/// A zero-length paint is valid and means "nothing to draw".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paint {
    /// Byte offset where the styled run starts
    pub start: usize,
    /// Length of the styled run in bytes
    pub len: usize,
    /// Style to apply
    pub code: StyleCode,
}

impl Paint {
    /// Byte offset just past the styled run
    pub fn end(&self) -> usize {
        self.start + self.len
    }
}

/// Result of one restyle pass
#[derive(Debug)]
pub struct RestylePass {
    /// Offset the tokenizer actually restarted from (a line start)
    pub anchor: usize,
    /// Offset up to which the document is now styled
    pub high_water_mark: usize,
    /// Paint instructions covering `[anchor, high_water_mark)` in
    /// increasing offset order with no gaps and no overlaps
    pub paints: Vec<Paint>,
}

/// Drives the tokenizer over the smallest safe range for a restyle request
///
/// Owns the matcher table; one driver serves any number of sequential
/// passes over a document.
pub struct RestyleDriver {
    table: MatcherTable,
}

impl RestyleDriver {
    /// Create a driver around a validated matcher table
    pub fn new(table: MatcherTable) -> Self {
        Self { table }
    }

    /// Get the driver's matcher table
    pub fn table(&self) -> &MatcherTable {
        &self.table
    }

    /// Restyle `[last_styled, requested_end)` of the document
    ///
    /// Out-of-range offsets are clamped, never fatal. Work is bounded by
    /// the line containing `last_styled` plus the requested range: the
    /// tokenizer runs from the start of that line and never scans past
    /// the end of the line containing `requested_end`.
    pub fn restyle(&self, document: &str, last_styled: usize, requested_end: usize) -> RestylePass {
        let last_styled = floor_char_boundary(document, last_styled);
        let requested_end = floor_char_boundary(document, requested_end);
        let anchor = start_of_line(document, last_styled);

        if requested_end <= anchor {
            return RestylePass {
                anchor,
                high_water_mark: last_styled,
                paints: Vec::new(),
            };
        }

        // No rule matches across a line boundary, so nothing past the end
        // of the line containing `requested_end` can affect the result.
        let horizon = end_of_line(document, requested_end);
        let window = &document[..horizon];

        let mut paints = Vec::new();
        let mut cursor = anchor;
        for span in Tokenizer::new(&self.table, window, anchor) {
            if span.start >= requested_end {
                break;
            }
            debug_assert_eq!(span.start, cursor);
            let end = span.end.min(requested_end);
            paints.push(Paint {
                start: span.start,
                len: end - span.start,
                code: StyleCode::for_kind(span.kind),
            });
            cursor = end;
        }
        debug_assert_eq!(cursor, requested_end);

        RestylePass {
            anchor,
            high_water_mark: requested_end,
            paints,
        }
    }
}

/// Offset of the start of the line containing `offset`
pub fn start_of_line(document: &str, offset: usize) -> usize {
    let offset = offset.min(document.len());
    match document[..offset].rfind('\n') {
        Some(newline) => newline + 1,
        None => 0,
    }
}

/// Offset just past the line containing `offset`, including its newline
fn end_of_line(document: &str, offset: usize) -> usize {
    match document[offset..].find('\n') {
        Some(newline) => offset + newline + 1,
        None => document.len(),
    }
}
