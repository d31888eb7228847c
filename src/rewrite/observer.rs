//! Progress reporting for a rewrite.
//!
//! The rewrite loop reports each step to an injected observer instead of
//! consulting process-wide state, so callers (and tests) pick the verbosity
//! per invocation.

use std::path::Path;
use tracing::{info, warn};

/// Callbacks fired by [`crate::rewrite::rewrite_file`]. All default to no-ops.
pub trait RewriteObserver {
    fn rewriting(&self, _path: &Path) {}
    fn read(&self, _path: &Path, _offset: u64, _len: usize) {}
    fn wrote(&self, _path: &Path, _offset: u64, _len: usize) {}
    fn short_write(&self, _path: &Path, _offset: u64, _wrote: usize, _requested: usize) {}
    fn synced(&self, _path: &Path) {}
    fn times_restored(&self, _path: &Path) {}
}

/// Observer that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl RewriteObserver for NoopObserver {}

/// Emits `tracing` events. Step traces are only emitted when `verbose`;
/// short writes are always reported as warnings.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver {
    verbose: bool,
}

impl TracingObserver {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl RewriteObserver for TracingObserver {
    fn rewriting(&self, path: &Path) {
        if self.verbose {
            info!("Rewriting {}...", path.display());
        }
    }

    fn read(&self, path: &Path, offset: u64, len: usize) {
        if self.verbose {
            info!(offset, bytes = len, "Read {} from {} at offset {}.", len, path.display(), offset);
        }
    }

    fn wrote(&self, path: &Path, offset: u64, len: usize) {
        if self.verbose {
            info!(offset, bytes = len, "Wrote {} to {} at offset {}.", len, path.display(), offset);
        }
    }

    fn short_write(&self, path: &Path, offset: u64, wrote: usize, requested: usize) {
        warn!(
            offset,
            wrote,
            requested,
            "Short write to {} at offset {} (wrote {} instead of {}).",
            path.display(),
            offset,
            wrote,
            requested
        );
    }

    fn synced(&self, path: &Path) {
        if self.verbose {
            info!("Synced {} to stable storage.", path.display());
        }
    }

    fn times_restored(&self, path: &Path) {
        if self.verbose {
            info!("Restored access and modification times on {}.", path.display());
        }
    }
}
