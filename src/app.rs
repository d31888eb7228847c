//! Application orchestrator.
//! Interprets the command line, initializes logging, runs the rewrite over
//! every path and maps the aggregate result onto the exit status.

use clap::error::ErrorKind;
use std::process::ExitCode;
use tracing::debug;

use filerewrite::cli::{self, Invocation};
use filerewrite::output as out;
use filerewrite::rewrite_paths;

use crate::logging::init_tracing;

const EXIT_FAILURE: u8 = 1;

/// Run the CLI application.
pub fn run(invocation: Invocation) -> ExitCode {
    let args = match invocation {
        Invocation::Run(args) => args,
        Invocation::Usage => {
            out::print_usage(&cli::usage());
            return ExitCode::from(EXIT_FAILURE);
        }
        Invocation::Clap(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(EXIT_FAILURE),
            };
        }
    };

    let cfg = args.to_config();

    // Hold the guard for the whole run so the file appender is flushed at the end.
    let guard = match init_tracing(&cfg.log_level, cfg.log_file.as_deref(), cfg.json) {
        Ok(g) => g,
        Err(e) => {
            out::print_error(&format!("Failed to initialize logging: {e}"));
            return ExitCode::from(EXIT_FAILURE);
        }
    };

    debug!("Starting filerewrite: {:?}", args);

    let summary = rewrite_paths(&args.paths, &cfg.rewrite_options(), &cfg.observer());

    drop(guard);
    ExitCode::from(summary.exit_code())
}
