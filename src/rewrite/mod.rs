//! In-place rewrite of regular files.
//!
//! A rewrite opens the file read-write without following a final symlink,
//! snapshots its metadata through the handle, copies every byte onto itself
//! with offset-addressed reads and writes, and finally restores the
//! snapshot's access and modification times through the same handle.

mod batch;
mod copy;
mod file;
mod observer;
mod positional;
mod snapshot;

pub use batch::{rewrite_paths, RunSummary};
pub use copy::{copy_in_place, CopyStats};
pub use file::{rewrite_file, rewrite_handle, RewriteReport};
pub use observer::{NoopObserver, RewriteObserver, TracingObserver};
pub use positional::{ReadWriteAt, RewriteHandle};
pub use snapshot::{EntryKind, FileSnapshot};

/// Size of one read/write cycle.
pub const CHUNK_SIZE: usize = 8 * 1024 * 1024;

/// What happens to rewritten data before timestamps are restored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Durability {
    /// Leave written data in the OS page cache.
    #[default]
    Cache,
    /// `sync_data` the handle after the copy loop.
    Sync,
}

/// Per-invocation knobs for [`rewrite_file`].
#[derive(Clone, Copy, Debug)]
pub struct RewriteOptions {
    /// Upper bound on bytes moved per cycle; zero is treated as one.
    pub chunk_size: usize,
    pub durability: Durability,
}

impl Default for RewriteOptions {
    fn default() -> Self {
        Self {
            chunk_size: CHUNK_SIZE,
            durability: Durability::Cache,
        }
    }
}
