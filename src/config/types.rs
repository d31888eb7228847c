//! Core configuration types.
//! - Config holds runtime settings with sensible defaults.
//! - LogLevel represents verbosity with simple parsing helpers.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::rewrite::{Durability, RewriteOptions, TracingObserver};

/// Program-defined verbosity levels exposed to users.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Only errors
    Quiet,
    /// Errors, warnings and verbose traces when requested (default)
    #[default]
    Normal,
    /// Adds internal diagnostics
    Info,
    /// Debug/trace
    Debug,
}

impl LogLevel {
    /// Parse common string names into our LogLevel (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "quiet" | "error" | "none" => Some(LogLevel::Quiet),
            "normal" | "warn" => Some(LogLevel::Normal),
            "info" | "detailed" => Some(LogLevel::Info),
            "debug" | "trace" => Some(LogLevel::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Quiet => "quiet",
            LogLevel::Normal => "normal",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        };
        f.write_str(s)
    }
}

impl FromStr for LogLevel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid log level: '{s}'"))
    }
}

/// Runtime configuration used by the rewriter.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Console verbosity
    pub log_level: LogLevel,
    /// Trace every read, write and timestamp restore
    pub verbose: bool,
    /// Emit structured JSON log lines
    pub json: bool,
    /// Optional path to a log file
    pub log_file: Option<PathBuf>,
    /// Flush rewritten data to stable storage before restoring timestamps
    pub durability: Durability,
}

impl Config {
    pub fn rewrite_options(&self) -> RewriteOptions {
        RewriteOptions {
            durability: self.durability,
            ..RewriteOptions::default()
        }
    }

    /// Observer carrying this run's verbosity into the rewrite loop.
    pub fn observer(&self) -> TracingObserver {
        TracingObserver::new(self.verbose)
    }
}
