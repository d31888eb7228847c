//! CLI definition and parsing.
//! Defines Args and maps an invocation onto a run, a usage message, or a clap error.
//!
//! Notes:
//! - `-h`/`--help` and an empty path list both print usage to stderr and exit 1.
//! - `--log-level` wins over `-q`.
//! - Everything after `--` is a path, even if it starts with `-`.

use clap::{ArgAction, CommandFactory, Parser, ValueHint};
use std::ffi::OsString;
use std::path::PathBuf;

use crate::config::types::{Config, LogLevel};
use crate::rewrite::Durability;

/// Rewrite files in place while preserving their access and modification times.
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Rewrite files in place, byte for byte, preserving atime/mtime",
    override_usage = "filerewrite [-v] [OPTIONS] [--] <FILE>...",
    after_help = "Use `--` before file names that start with a dash.",
    disable_help_flag = true
)]
pub struct Args {
    /// Trace every read, write and timestamp restore.
    #[arg(short, long, help = "Trace every read, write and timestamp restore")]
    pub verbose: bool,

    /// Only report errors (shorthand for `--log-level quiet`).
    #[arg(short, long, help = "Only report errors")]
    pub quiet: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(long, value_name = "LEVEL", help = "Set log level: quiet, normal, info, debug")]
    pub log_level: Option<LogLevel>,

    /// Emit logs in structured JSON.
    #[arg(long, help = "Emit logs in structured JSON")]
    pub json: bool,

    /// Also append logs to this file.
    #[arg(long, value_name = "PATH", value_hint = ValueHint::FilePath, help = "Also append logs to this file")]
    pub log_file: Option<PathBuf>,

    /// Flush rewritten data to stable storage before restoring timestamps.
    #[arg(long, help = "fsync rewritten data before restoring timestamps")]
    pub sync: bool,

    #[arg(short = 'h', long = "help", action = ArgAction::SetTrue, help = "Print usage and exit")]
    pub help: bool,

    /// Files to rewrite, processed in order.
    #[arg(value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub paths: Vec<PathBuf>,
}

/// What the binary should do with its command line.
#[derive(Debug)]
pub enum Invocation {
    Run(Args),
    /// `-h` or no paths given.
    Usage,
    /// Parse failure, `--version`, and friends; clap decides the stream.
    Clap(clap::Error),
}

impl Args {
    /// Effective log level derived from flags.
    /// Precedence: --log-level > --quiet > default.
    pub fn effective_log_level(&self) -> LogLevel {
        if let Some(level) = &self.log_level {
            return level.clone();
        }
        if self.quiet {
            return LogLevel::Quiet;
        }
        LogLevel::default()
    }

    pub fn to_config(&self) -> Config {
        Config {
            log_level: self.effective_log_level(),
            verbose: self.verbose,
            json: self.json,
            log_file: self.log_file.clone(),
            durability: if self.sync {
                Durability::Sync
            } else {
                Durability::Cache
            },
        }
    }
}

pub fn interpret<I, T>(argv: I) -> Invocation
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Args::try_parse_from(argv) {
        Ok(args) if args.help || args.paths.is_empty() => Invocation::Usage,
        Ok(args) => Invocation::Run(args),
        Err(e) => Invocation::Clap(e),
    }
}

/// Full help text, printed on `-h` or when no files are given.
pub fn usage() -> String {
    Args::command().render_help().to_string()
}

pub fn parse() -> Invocation {
    interpret(std::env::args_os())
}
