//! Natural-language query routing.
//!
//! Maps one free-text question to exactly one intent and produces a
//! formatted text answer over a record snapshot. Classification is a
//! deterministic, ordered, first-match-wins keyword check, not a learned
//! model: a query satisfying several keyword sets resolves to whichever
//! rule is tested first.

mod extract;
mod router;
mod types;

pub use extract::{EntityExtractor, PatternExtractor};
pub use router::{QueryRouter, HELP_TEXT};
pub use types::QueryIntent;
