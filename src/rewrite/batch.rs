//! Sequential driver over a list of paths.

use std::path::Path;
use tracing::{debug, error};

use super::file::{rewrite_file, RewriteReport};
use super::observer::RewriteObserver;
use super::RewriteOptions;
use crate::errors::RewriteError;

/// Aggregate outcome of a run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub rewritten: usize,
    pub skipped: usize,
    pub failed: usize,
    /// Total bytes rewritten across successful files.
    pub bytes: u64,
}

impl RunSummary {
    /// True only if every path was rewritten.
    pub fn success(&self) -> bool {
        self.skipped == 0 && self.failed == 0
    }

    pub fn exit_code(&self) -> u8 {
        if self.success() { 0 } else { 1 }
    }

    /// Count one file's outcome, logging it if it failed.
    pub fn record(&mut self, outcome: &Result<RewriteReport, RewriteError>) {
        match outcome {
            Ok(report) => {
                debug!(
                    path = %report.path.display(),
                    bytes = report.bytes,
                    cycles = report.cycles,
                    short_writes = report.short_writes,
                    "Rewrite completed"
                );
                self.rewritten += 1;
                self.bytes += report.bytes;
            }
            Err(e) => {
                report_failure(e);
                if e.is_skip() {
                    self.skipped += 1;
                } else {
                    self.failed += 1;
                }
            }
        }
    }
}

/// Rewrite each path in order. A failure is reported and the run moves on
/// to the next path; it never aborts the remaining work.
pub fn rewrite_paths<I, P>(
    paths: I,
    opts: &RewriteOptions,
    observer: &dyn RewriteObserver,
) -> RunSummary
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut summary = RunSummary::default();

    for path in paths {
        summary.record(&rewrite_file(path.as_ref(), opts, observer));
    }

    debug!(
        rewritten = summary.rewritten,
        skipped = summary.skipped,
        failed = summary.failed,
        bytes = summary.bytes,
        "Run finished"
    );
    summary
}

fn report_failure(e: &RewriteError) {
    let code = e.code();
    let kind = e.kind();
    let path = e.path().display();
    match e.offset() {
        Some(offset) => error!(code, kind, path = %path, offset, "{e}"),
        None => error!(code, kind, path = %path, "{e}"),
    }
}
