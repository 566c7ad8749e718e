//! Pattern rules for heading classification
//!
//! This module defines the matcher rules the tokenizer queries and the
//! ordered table they live in. Rules are immutable, process-wide
//! configuration: the table is built once at startup and passed by
//! reference into every tokenizer run.

use regex::Regex;

use crate::error::{NotedownError, Result};
use super::span::SpanKind;

/// A single lexical rule
///
/// Matches a contiguous run of text and assigns a span kind to it.
/// `prefix_skip`/`suffix_skip` count bytes of markup syntax at the ends
/// of a match that are classified `Unimportant` instead of the rule's kind.
pub struct MatcherRule {
    /// Name for debugging and error reporting
    pub name: String,
    /// Kind assigned to the inner (content) part of a match
    pub kind: SpanKind,
    /// Compiled regex pattern
    pattern: Regex,
    /// Markup bytes at the start of a match
    pub prefix_skip: usize,
    /// Markup bytes at the end of a match
    pub suffix_skip: usize,
}

impl MatcherRule {
    /// Create a new rule from a pattern string
    pub fn new(
        name: &str,
        pattern: &str,
        kind: SpanKind,
        prefix_skip: usize,
        suffix_skip: usize,
    ) -> Result<Self> {
        let pattern = Regex::new(pattern).map_err(|source| NotedownError::InvalidPattern {
            name: name.to_string(),
            source,
        })?;
        Ok(Self {
            name: name.to_string(),
            kind,
            pattern,
            prefix_skip,
            suffix_skip,
        })
    }

    /// Find the first match at or after `start`
    ///
    /// Uses `find_at` rather than slicing so that `(?m)^` anchors see the
    /// surrounding context: an interior offset only counts as a line start
    /// if it actually follows a newline.
    pub fn search(&self, text: &str, start: usize) -> Option<(usize, usize)> {
        if start >= text.len() {
            return None;
        }
        self.pattern.find_at(text, start).map(|m| (m.start(), m.end()))
    }

    /// Check whether the pattern can match a zero-length range
    fn matches_empty(&self) -> bool {
        self.pattern.find("").is_some()
    }
}

/// An ordered, immutable set of matcher rules
///
/// Table order is significant: when two rules match at the same offset,
/// the one appearing earlier in the table wins.
pub struct MatcherTable {
    rules: Vec<MatcherRule>,
}

impl MatcherTable {
    /// Build a table, validating every rule
    ///
    /// A rule whose pattern can match a zero-length range is rejected here:
    /// it would pin the tokenizer at one position forever. This is the only
    /// condition that aborts startup.
    pub fn new(rules: Vec<MatcherRule>) -> Result<Self> {
        for rule in &rules {
            if rule.matches_empty() {
                return Err(NotedownError::ZeroWidthPattern(rule.name.clone()));
            }
        }
        Ok(Self { rules })
    }

    /// Get the rules in table order
    pub fn rules(&self) -> &[MatcherRule] {
        &self.rules
    }

    /// Number of rules in the table
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the table has no rules
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_search() {
        let rule = MatcherRule::new("digits", r"\d+", SpanKind::Plain, 0, 0).unwrap();
        assert_eq!(rule.search("abc 123 def", 0), Some((4, 7)));
        assert_eq!(rule.search("abc 123 def", 5), Some((5, 7)));
        assert_eq!(rule.search("no numbers", 0), None);
        assert_eq!(rule.search("123", 3), None);
    }

    #[test]
    fn test_search_anchor_context() {
        // An interior offset is not a line start unless a newline precedes it
        let rule = MatcherRule::new("anchored", r"(?m)^#", SpanKind::Header1, 1, 0).unwrap();
        assert_eq!(rule.search("ab#cd", 2), None);
        assert_eq!(rule.search("ab\n#cd", 2), Some((3, 4)));
        assert_eq!(rule.search("#cd", 0), Some((0, 1)));
    }

    #[test]
    fn test_invalid_pattern() {
        let err = MatcherRule::new("broken", r"([unclosed", SpanKind::Plain, 0, 0);
        assert!(matches!(err, Err(NotedownError::InvalidPattern { .. })));
    }

    #[test]
    fn test_table_rejects_zero_width() {
        let rules = vec![
            MatcherRule::new("ok", r"#+", SpanKind::Header1, 1, 0).unwrap(),
            MatcherRule::new("nullable", r"x*", SpanKind::Plain, 0, 0).unwrap(),
        ];
        let err = MatcherTable::new(rules);
        assert!(matches!(err, Err(NotedownError::ZeroWidthPattern(name)) if name == "nullable"));
    }

    #[test]
    fn test_table_preserves_order() {
        let rules = vec![
            MatcherRule::new("first", r"a", SpanKind::Header1, 0, 0).unwrap(),
            MatcherRule::new("second", r"b", SpanKind::Header2, 0, 0).unwrap(),
        ];
        let table = MatcherTable::new(rules).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.rules()[0].name, "first");
        assert_eq!(table.rules()[1].name, "second");
    }
}
