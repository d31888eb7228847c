//! Windows implementations of platform helpers (best-effort).
//!
//! Notes:
//! - Reparse points are opened as themselves (FILE_FLAG_OPEN_REPARSE_POINT)
//!   and then refused, which mirrors O_NOFOLLOW on Unix.
//! - Directories cannot be opened without FILE_FLAG_BACKUP_SEMANTICS, so
//!   they fail at open time with ERROR_ACCESS_DENIED.

use std::fs::{File, OpenOptions};
use std::io;
use std::os::windows::fs::OpenOptionsExt;
use std::path::Path;
use windows_sys::Win32::Storage::FileSystem::FILE_FLAG_OPEN_REPARSE_POINT;

pub fn open_rw_nofollow(path: &Path) -> io::Result<File> {
    let f = OpenOptions::new()
        .read(true)
        .write(true)
        .custom_flags(FILE_FLAG_OPEN_REPARSE_POINT)
        .open(path)?;
    if f.metadata()?.file_type().is_symlink() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "refusing to follow a symbolic link",
        ));
    }
    Ok(f)
}

/// Directories surface as plain access-denied open errors on Windows.
pub fn is_directory_open_error(_e: &io::Error) -> bool {
    false
}

/// Open log file for appending (no symlink defense available via std on Windows).
pub fn open_log_file_secure_append(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}
