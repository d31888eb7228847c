//! Platform-specific helpers.
//! This module hides OS differences (Unix/Windows) behind a uniform API so
//! the rest of the codebase can remain platform-agnostic.

#[cfg(unix)]
mod unix;
#[cfg(not(unix))]
mod windows;

#[cfg(unix)]
pub use unix::{is_directory_open_error, open_log_file_secure_append, open_rw_nofollow};

#[cfg(not(unix))]
pub use windows::{is_directory_open_error, open_log_file_secure_append, open_rw_nofollow};
