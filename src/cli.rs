//! CLI argument parsing for the response-assertion rewriter.
use clap::Parser;
use std::path::PathBuf;

/// Rewrite flat response assertions in a Go test file to the wrapped envelope.
#[derive(Parser, Debug)]
#[command(
    name = "respwrap",
    version,
    about = "Rewrite flat response assertions to the success/error envelope",
    after_help = "Examples:\n  respwrap                                   Rewrite the configured default target\n  respwrap internal/user/handler_test.go     Rewrite one file in place\n  respwrap --dry-run handler_test.go         Report per-rule counts without writing\n  respwrap --config respwrap.json            Use a custom error-status list"
)]
pub struct RootArgs {
    /// Test file to rewrite in place (defaults to the configured target)
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// JSON config with default_target and error_statuses
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Compute the rewrite and report counts without touching the file
    #[arg(long)]
    pub dry_run: bool,

    /// Emit debug logging to stderr
    #[arg(long)]
    pub verbose: bool,
}
