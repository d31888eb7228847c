//! Typed error definitions for filerewrite.
//! Every failure is scoped to a single file; the driver reports it and moves on.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::rewrite::EntryKind;

#[derive(Debug, Error)]
pub enum RewriteError {
    #[error("Unable to open {}: {}", .path.display(), describe(.source))]
    Open { path: PathBuf, source: io::Error },

    #[error("Unable to stat {}: {}", .path.display(), describe(.source))]
    Stat { path: PathBuf, source: io::Error },

    #[error("{} is not a regular file ({kind}), skipping", .path.display())]
    NotRegularFile { path: PathBuf, kind: EntryKind },

    #[error("Read from {} at offset {offset} failed: {}", .path.display(), describe(.source))]
    Read {
        path: PathBuf,
        offset: u64,
        source: io::Error,
    },

    #[error("Write {} at offset {offset} failed: {}", .path.display(), describe(.source))]
    Write {
        path: PathBuf,
        offset: u64,
        source: io::Error,
    },

    #[error("Wrote nothing to {} at offset {offset}", .path.display())]
    ZeroWrite { path: PathBuf, offset: u64 },

    #[error("Unable to sync {}: {}", .path.display(), describe(.source))]
    Sync { path: PathBuf, source: io::Error },

    #[error("Unable to restore access and modification times on {}: {}", .path.display(), describe(.source))]
    RestoreTimes { path: PathBuf, source: io::Error },
}

impl RewriteError {
    /// Stable numeric code for structured logs.
    pub fn code(&self) -> u16 {
        match self {
            RewriteError::Open { .. } => 10,
            RewriteError::Stat { .. } => 11,
            RewriteError::NotRegularFile { .. } => 12,
            RewriteError::Read { .. } => 20,
            RewriteError::Write { .. } => 21,
            RewriteError::ZeroWrite { .. } => 22,
            RewriteError::Sync { .. } => 23,
            RewriteError::RestoreTimes { .. } => 30,
        }
    }

    /// Short snake_case tag used as the `kind` field in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            RewriteError::Open { .. } => "open",
            RewriteError::Stat { .. } => "stat",
            RewriteError::NotRegularFile { .. } => "not_regular_file",
            RewriteError::Read { .. } => "read",
            RewriteError::Write { .. } => "write",
            RewriteError::ZeroWrite { .. } => "zero_write",
            RewriteError::Sync { .. } => "sync",
            RewriteError::RestoreTimes { .. } => "restore_times",
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            RewriteError::Open { path, .. }
            | RewriteError::Stat { path, .. }
            | RewriteError::NotRegularFile { path, .. }
            | RewriteError::Read { path, .. }
            | RewriteError::Write { path, .. }
            | RewriteError::ZeroWrite { path, .. }
            | RewriteError::Sync { path, .. }
            | RewriteError::RestoreTimes { path, .. } => path.as_path(),
        }
    }

    /// Offset at which the copy loop stopped, for read/write failures.
    pub fn offset(&self) -> Option<u64> {
        match self {
            RewriteError::Read { offset, .. }
            | RewriteError::Write { offset, .. }
            | RewriteError::ZeroWrite { offset, .. } => Some(*offset),
            _ => None,
        }
    }

    /// A skip is reported distinctly from I/O failures.
    pub fn is_skip(&self) -> bool {
        matches!(self, RewriteError::NotRegularFile { .. })
    }
}

/// Render an io::Error with a platform-aware hint and the raw OS code.
pub fn describe(e: &io::Error) -> String {
    let mut msg = e.to_string();

    if let Some(code) = e.raw_os_error() {
        #[cfg(unix)]
        {
            match code {
                libc::ELOOP => {
                    msg.push_str(" (refusing to follow a symbolic link)");
                }
                libc::EACCES | libc::EPERM => {
                    msg.push_str(" (permission denied; read and write access is required)");
                }
                libc::EROFS => {
                    msg.push_str(" (read-only filesystem; cannot rewrite here)");
                }
                libc::ENOSPC => {
                    msg.push_str(" (insufficient space on device)");
                }
                libc::ETXTBSY => {
                    msg.push_str(" (text file busy; the file is being executed)");
                }
                libc::EISDIR => {
                    msg.push_str(" (path is a directory)");
                }
                _ => {}
            }
        }
        #[cfg(windows)]
        {
            match code {
                5 => msg.push_str(" (access denied; check permissions)"), // ERROR_ACCESS_DENIED
                32 => msg.push_str(" (sharing violation; file is in use)"), // ERROR_SHARING_VIOLATION
                112 => msg.push_str(" (insufficient disk space)"),         // ERROR_DISK_FULL
                19 => msg.push_str(" (write protected media)"),            // ERROR_WRITE_PROTECT
                _ => {}
            }
        }
        msg.push_str(&format!(" [os code: {}]", code));
    } else if e.kind() == io::ErrorKind::PermissionDenied {
        msg.push_str(" (permission denied; read and write access is required)");
    }

    msg
}
