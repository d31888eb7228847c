//! Single-file rewrite: open, snapshot, copy, restore, close.

use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::copy::copy_in_place;
use super::observer::RewriteObserver;
use super::positional::RewriteHandle;
use super::snapshot::{EntryKind, FileSnapshot};
use super::{Durability, RewriteOptions};
use crate::errors::RewriteError;
use crate::platform::{is_directory_open_error, open_rw_nofollow};

/// Outcome of a successful rewrite.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RewriteReport {
    pub path: PathBuf,
    pub bytes: u64,
    pub cycles: u64,
    pub short_writes: u64,
}

/// Rewrite `path` onto itself and restore its access/modification times.
///
/// Content is already rewritten when a timestamp restore fails; the call
/// still reports failure because preserving timestamps is part of the contract.
pub fn rewrite_file(
    path: &Path,
    opts: &RewriteOptions,
    observer: &dyn RewriteObserver,
) -> Result<RewriteReport, RewriteError> {
    observer.rewriting(path);

    let file = open_for_rewrite(path)?;
    let snapshot = FileSnapshot::capture(&file, path)?;
    rewrite_handle(file, path, &snapshot, opts, observer)
}

/// Rewrite through an already opened handle whose metadata is `snapshot`.
///
/// The handle is taken by value and closed on every return path, the
/// skip included.
pub fn rewrite_handle<H: RewriteHandle>(
    handle: H,
    path: &Path,
    snapshot: &FileSnapshot,
    opts: &RewriteOptions,
    observer: &dyn RewriteObserver,
) -> Result<RewriteReport, RewriteError> {
    if !snapshot.is_regular() {
        return Err(RewriteError::NotRegularFile {
            path: path.to_path_buf(),
            kind: snapshot.kind,
        });
    }
    debug!(path = %path.display(), len = snapshot.len, "Captured snapshot");

    // No point allocating a full chunk for a small file; the loop still
    // runs to EOF if the file grows underneath us.
    let len_hint = usize::try_from(snapshot.len).unwrap_or(usize::MAX).max(1);
    let mut buf = vec![0u8; opts.chunk_size.max(1).min(len_hint)];
    let stats = copy_in_place(&handle, path, &mut buf, observer)?;

    if opts.durability == Durability::Sync {
        handle.sync_data().map_err(|source| RewriteError::Sync {
            path: path.to_path_buf(),
            source,
        })?;
        observer.synced(path);
    }

    snapshot.restore_times(&handle, path)?;
    observer.times_restored(path);

    Ok(RewriteReport {
        path: path.to_path_buf(),
        bytes: stats.bytes,
        cycles: stats.cycles,
        short_writes: stats.short_writes,
    })
}

fn open_for_rewrite(path: &Path) -> Result<File, RewriteError> {
    open_rw_nofollow(path).map_err(|source| {
        if is_directory_open_error(&source) {
            RewriteError::NotRegularFile {
                path: path.to_path_buf(),
                kind: EntryKind::Directory,
            }
        } else {
            RewriteError::Open {
                path: path.to_path_buf(),
                source,
            }
        }
    })
}
