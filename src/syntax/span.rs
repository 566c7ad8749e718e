//! Classified spans of document text
//!
//! A span is the unit the tokenizer produces: a half-open byte interval
//! over the document paired with a semantic kind.

/// Semantic classification of a span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanKind {
    /// Ordinary text with no markup significance
    Plain,
    /// Level-1 heading content
    Header1,
    /// Level-2 heading content
    Header2,
    /// Level-3 heading content
    Header3,
    /// Markup syntax characters (the `#` prefix of a heading)
    Unimportant,
}

impl SpanKind {
    /// Get a human-readable name for this kind
    pub fn name(&self) -> &'static str {
        match self {
            SpanKind::Plain => "Plain",
            SpanKind::Header1 => "Header1",
            SpanKind::Header2 => "Header2",
            SpanKind::Header3 => "Header3",
            SpanKind::Unimportant => "Unimportant",
        }
    }
}

/// A classified half-open interval `[start, end)` of the document
///
/// Offsets are byte offsets and always fall on character boundaries.
/// Spans are produced fresh by each tokenizer run and owned by the
/// consumer of that run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Classification of this interval
    pub kind: SpanKind,
    /// Byte offset where this span starts (inclusive)
    pub start: usize,
    /// Byte offset where this span ends (exclusive)
    pub end: usize,
}

impl Span {
    /// Create a new span
    pub fn new(kind: SpanKind, start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Self { kind, start, end }
    }

    /// Get the length of this span in bytes
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Check if span is empty (a zero-length span is a no-op paint)
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Check if this span contains a byte position
    pub fn contains(&self, pos: usize) -> bool {
        pos >= self.start && pos < self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_len() {
        let span = Span::new(SpanKind::Plain, 3, 10);
        assert_eq!(span.len(), 7);
        assert!(!span.is_empty());
    }

    #[test]
    fn test_span_empty() {
        let span = Span::new(SpanKind::Header1, 5, 5);
        assert_eq!(span.len(), 0);
        assert!(span.is_empty());
        assert!(!span.contains(5));
    }

    #[test]
    fn test_span_contains() {
        let span = Span::new(SpanKind::Unimportant, 5, 10);
        assert!(!span.contains(4));
        assert!(span.contains(5));
        assert!(span.contains(9));
        assert!(!span.contains(10));
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(SpanKind::Plain.name(), "Plain");
        assert_eq!(SpanKind::Header3.name(), "Header3");
        assert_eq!(SpanKind::Unimportant.name(), "Unimportant");
    }
}
