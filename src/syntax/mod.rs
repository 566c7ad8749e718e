//! Incremental lexical analysis for live Markdown highlighting
//!
//! The pipeline: a [`MatcherTable`] of pattern rules feeds a streaming
//! [`Tokenizer`] that partitions document text into classified [`Span`]s,
//! and a [`RestyleDriver`] turns "this range needs styling" requests into
//! paint instructions for the host surface.

mod builtin;
mod restyle;
mod rules;
mod span;
mod tokenizer;

pub use builtin::markdown_table;
pub use restyle::{start_of_line, Paint, RestyleDriver, RestylePass, StyleCode};
pub use rules::{MatcherRule, MatcherTable};
pub use span::{Span, SpanKind};
pub use tokenizer::Tokenizer;
