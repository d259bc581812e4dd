//! CLI entrypoint for `helpful-merge`.

use std::io::Write;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use helpful_merge_cli::cli::Args;
use helpful_merge_cli::error::CliError;
use helpful_merge_cli::{output, pipeline};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // Nothing useful remains to report if stderr is gone.
            let _ignored = writeln!(std::io::stderr().lock(), "helpful-merge: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), CliError> {
    let args = Args::parse();
    let localizer = Arc::new(pipeline::localizer(&args)?);
    let merged = pipeline::run(&args, localizer)?;
    let rendered = output::render(&merged, args.is_compact)?;
    match &args.out {
        Some(path) => output::write_file(path, &rendered),
        None => output::write_to(std::io::stdout().lock(), &rendered),
    }
}
