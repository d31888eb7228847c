//! Runtime configuration.
//! Settings come only from the command line; nothing is read from disk or the environment.

pub mod paths;
pub mod types;

pub use paths::path_has_symlink_ancestor;
pub use types::{Config, LogLevel};
