//! Core library for `filerewrite`.
//!
//! Rewrites regular files onto themselves, byte for byte, using
//! offset-addressed reads and writes, then restores the access and
//! modification times captured before the rewrite. Useful for forcing a
//! physical rewrite (copy-on-write, recompression, re-encryption, block
//! relocation) without changing what other tools can observe.

pub mod cli;
pub mod config;
pub mod errors;
pub mod output;
pub mod platform;
pub mod rewrite;

pub use config::{path_has_symlink_ancestor, Config, LogLevel};
pub use errors::RewriteError;
pub use rewrite::{
    copy_in_place, rewrite_file, rewrite_handle, rewrite_paths, CopyStats, Durability, EntryKind,
    FileSnapshot, NoopObserver, ReadWriteAt, RewriteHandle, RewriteObserver, RewriteOptions,
    RewriteReport, RunSummary, TracingObserver, CHUNK_SIZE,
};
