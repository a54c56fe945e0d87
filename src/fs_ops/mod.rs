//! Filesystem operations: single-file copy and directory-contents copy.

mod entry;
pub mod helpers;
mod io_copy;
mod report;
mod tree;

pub use entry::{EntryKind, OtherKind};
pub use io_copy::copy_file;
pub use report::CopyReport;
pub use tree::{copy_dir_contents, copy_dir_contents_with};
