//! Metadata snapshot taken once through the open handle.

use filetime::FileTime;
use std::fmt;
use std::fs::{self, File};
use std::path::Path;

use super::positional::RewriteHandle;
use crate::errors::RewriteError;

/// File type as seen by `fstat`, named for diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryKind {
    Regular,
    Directory,
    Symlink,
    Fifo,
    Socket,
    CharDevice,
    BlockDevice,
    Other,
}

impl EntryKind {
    pub fn from_file_type(ft: fs::FileType) -> Self {
        if ft.is_file() {
            return EntryKind::Regular;
        }
        if ft.is_dir() {
            return EntryKind::Directory;
        }
        if ft.is_symlink() {
            return EntryKind::Symlink;
        }
        #[cfg(unix)]
        {
            use std::os::unix::fs::FileTypeExt;
            if ft.is_fifo() {
                return EntryKind::Fifo;
            }
            if ft.is_socket() {
                return EntryKind::Socket;
            }
            if ft.is_char_device() {
                return EntryKind::CharDevice;
            }
            if ft.is_block_device() {
                return EntryKind::BlockDevice;
            }
        }
        EntryKind::Other
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EntryKind::Regular => "regular file",
            EntryKind::Directory => "directory",
            EntryKind::Symlink => "symbolic link",
            EntryKind::Fifo => "named pipe",
            EntryKind::Socket => "socket",
            EntryKind::CharDevice => "character device",
            EntryKind::BlockDevice => "block device",
            EntryKind::Other => "unknown file type",
        };
        f.write_str(s)
    }
}

/// Type, size and timestamps captured before the copy loop starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FileSnapshot {
    pub kind: EntryKind,
    pub len: u64,
    pub accessed: FileTime,
    pub modified: FileTime,
}

impl FileSnapshot {
    /// Stat the open handle (never the path, which may have been swapped).
    pub fn capture(file: &File, path: &Path) -> Result<Self, RewriteError> {
        let meta = file.metadata().map_err(|source| RewriteError::Stat {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_metadata(&meta))
    }

    pub fn from_metadata(meta: &fs::Metadata) -> Self {
        Self {
            kind: EntryKind::from_file_type(meta.file_type()),
            len: meta.len(),
            accessed: FileTime::from_last_access_time(meta),
            modified: FileTime::from_last_modification_time(meta),
        }
    }

    pub fn is_regular(&self) -> bool {
        self.kind == EntryKind::Regular
    }

    /// Put the captured atime/mtime back on the file behind `handle`.
    pub fn restore_times<H>(&self, handle: &H, path: &Path) -> Result<(), RewriteError>
    where
        H: RewriteHandle + ?Sized,
    {
        handle
            .set_times(self.accessed, self.modified)
            .map_err(|source| RewriteError::RestoreTimes {
                path: path.to_path_buf(),
                source,
            })
    }
}
