//! Rewrites flat JSON response assertions in Go handler tests into assertions
//! against the `{"success": ..., "data"|"error": ...}` envelope.
pub mod cli;
pub mod config;
pub mod fsutil;
pub mod rewrite;
pub mod rules;

pub use rewrite::{rewrite, RewriteReport, Rewritten, RuleOutcome};
pub use rules::{builtin_rules, RewriteRule};
