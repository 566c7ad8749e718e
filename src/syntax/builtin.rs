//! Built-in Markdown rule set
//!
//! Heading levels 1-3 only. A heading is a line beginning with 1-3 `#`
//! characters not immediately followed by another `#`, extending to the
//! end of the line (the newline belongs to the heading span) or the end
//! of the document. The `#` run itself is markup, counted by
//! `prefix_skip` and classified `Unimportant`.

use crate::error::Result;
use super::rules::{MatcherRule, MatcherTable};
use super::span::SpanKind;

/// Create the Markdown matcher table
///
/// The `regex` crate has no lookahead, so "`#` not followed by `#`" is
/// spelled as an optional `[^#\n]`-led tail: a bare `#` line still counts
/// as a heading, while a longer `#` run falls through to the next level
/// or to no match at all.
pub fn markdown_table() -> Result<MatcherTable> {
    let rules = vec![
        MatcherRule::new(
            "header1",
            r"(?m)^#(?:[^#\n].*)?(?:\n|\z)",
            SpanKind::Header1,
            1,
            0,
        )?,
        MatcherRule::new(
            "header2",
            r"(?m)^##(?:[^#\n].*)?(?:\n|\z)",
            SpanKind::Header2,
            2,
            0,
        )?,
        MatcherRule::new(
            "header3",
            r"(?m)^###(?:[^#\n].*)?(?:\n|\z)",
            SpanKind::Header3,
            3,
            0,
        )?,
    ];
    MatcherTable::new(rules)
}
