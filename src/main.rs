use anyhow::Result;
use clap::Parser;
use respwrap::cli::RootArgs;
use respwrap::config::load_config;
use respwrap::fsutil::{read_document, write_document};
use respwrap::{builtin_rules, rewrite};
use tracing_subscriber::EnvFilter;

/// Log filter directive read from the environment (e.g. `RESPWRAP_LOG=debug`).
const LOG_ENV: &str = "RESPWRAP_LOG";

fn main() -> Result<()> {
    let args = RootArgs::parse();
    init_logging(args.verbose);
    run(args)
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(args: RootArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let target = args.path.unwrap_or_else(|| config.default_target.clone());
    let rules = builtin_rules(&config)?;

    let document = read_document(&target)?;
    let rewritten = rewrite(&document, &rules);
    tracing::info!(
        path = %target.display(),
        replaced = rewritten.report.total(),
        changed = rewritten.changed,
        "rewrite computed"
    );

    if args.dry_run {
        println!("Would fix {}", target.display());
        for outcome in &rewritten.report.outcomes {
            println!("  {}: {}", outcome.rule, outcome.replaced);
        }
        return Ok(());
    }

    write_document(&target, &rewritten.text)?;
    println!("Fixed {}", target.display());
    Ok(())
}
