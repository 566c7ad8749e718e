//! Streaming tokenizer
//!
//! Lazily partitions a document from an anchor offset to the end into a
//! gap-free sequence of classified spans. A tokenizer run is one pass:
//! the iterator is finite and a second pass needs a fresh instance, which
//! is cheap because no index is kept between runs.

use std::collections::VecDeque;

use super::rules::{MatcherRule, MatcherTable};
use super::span::{Span, SpanKind};

/// Floor a byte offset to the nearest character boundary at or before it
pub(crate) fn floor_char_boundary(s: &str, offset: usize) -> usize {
    let mut offset = offset.min(s.len());
    while offset > 0 && !s.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}

/// One tokenizer run over `[anchor, document.len())`
///
/// Invariant: the yielded spans are contiguous and gap-free. The first
/// span starts at the anchor, each span begins where the previous one
/// ended, and the last span ends at the document end.
pub struct Tokenizer<'a> {
    table: &'a MatcherTable,
    document: &'a str,
    position: usize,
    pending: VecDeque<Span>,
}

impl<'a> Tokenizer<'a> {
    /// Start a run at `anchor` (clamped to the document and floored to a
    /// character boundary)
    pub fn new(table: &'a MatcherTable, document: &'a str, anchor: usize) -> Self {
        Self {
            table,
            document,
            position: floor_char_boundary(document, anchor),
            pending: VecDeque::new(),
        }
    }

    /// Query every rule and keep the closest match
    ///
    /// Ties on the start offset go to the rule appearing earlier in the
    /// table, so only a strictly closer match replaces the current best.
    ///
    /// A zero-width match can never advance the cursor, so it is treated
    /// as no match at all. Table validation rejects patterns that are
    /// nullable on the empty haystack, but constructs like `\b` pass that
    /// probe and still only ever match zero-width; without this guard
    /// such a rule would pin the stream at one position forever.
    fn next_match(&self) -> Option<(usize, usize, &'a MatcherRule)> {
        let mut best: Option<(usize, usize, &'a MatcherRule)> = None;
        for rule in self.table.rules() {
            if let Some((start, end)) = rule.search(self.document, self.position) {
                if end <= start {
                    continue;
                }
                if best.map_or(true, |(best_start, _, _)| start < best_start) {
                    best = Some((start, end, rule));
                }
            }
        }
        best
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Span;

    fn next(&mut self) -> Option<Span> {
        if let Some(span) = self.pending.pop_front() {
            return Some(span);
        }

        if self.position >= self.document.len() {
            return None;
        }

        let (start, end, rule) = match self.next_match() {
            Some(m) => m,
            None => {
                // Nothing matches: the rest of the document is plain text
                let span = Span::new(SpanKind::Plain, self.position, self.document.len());
                self.position = self.document.len();
                return Some(span);
            }
        };

        let mut parts = Vec::with_capacity(4);
        if start > self.position {
            parts.push(Span::new(SpanKind::Plain, self.position, start));
        }

        // Clamp the skip counts so the partition stays contiguous even if
        // a rule's skips exceed the match length; the classified span may
        // then be zero-length, which consumers treat as a no-op.
        let inner_start = (start + rule.prefix_skip).min(end);
        let inner_end = (end - rule.suffix_skip.min(end - start)).max(inner_start);
        if inner_start > start {
            parts.push(Span::new(SpanKind::Unimportant, start, inner_start));
        }
        parts.push(Span::new(rule.kind, inner_start, inner_end));
        if inner_end < end {
            parts.push(Span::new(SpanKind::Unimportant, inner_end, end));
        }

        self.position = end;

        let head = parts.remove(0);
        self.pending.extend(parts);
        Some(head)
    }
}
