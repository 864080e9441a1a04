//! CLI command handlers and output formatting.

pub mod commands;
pub mod output;
