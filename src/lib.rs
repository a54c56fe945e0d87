//! Core library for `cpdir`.
//!
//! Copies the contents of one directory tree into another, already existing,
//! directory. Two operations make up the API:
//!
//! - [`copy_file`]: stream one regular file to a destination path.
//! - [`copy_dir_contents`] / [`copy_dir_contents_with`]: mirror every
//!   directory and regular file under a source root beneath a destination root.
//!
//! The library only emits `tracing` events; installing a subscriber is up to
//! the caller (the `cpdir` binary does it in its logging module).

pub mod cli;
pub mod config;
pub mod errors;
pub mod fs_ops;
pub mod output;

pub use config::{Config, CopyOptions, ErrorPolicy, LogLevel, SpecialFilePolicy};
pub use errors::{CpdirError, Role};
pub use fs_ops::{
    CopyReport, EntryKind, OtherKind, copy_dir_contents, copy_dir_contents_with, copy_file,
};
