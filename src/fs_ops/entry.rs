//! Classification of traversal entries.
//! The tree copier dispatches on `EntryKind` instead of "directory or not",
//! so anything that is neither a directory nor a regular file is handled explicitly.

use std::fmt;
use std::fs::FileType;

/// Kind of filesystem entry seen during a walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    RegularFile,
    Other(OtherKind),
}

/// Non-regular entries; never copied as plain files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OtherKind {
    Symlink,
    Fifo,
    Socket,
    BlockDevice,
    CharDevice,
    Unknown,
}

impl EntryKind {
    /// Classify a file type without following symlinks.
    pub fn of(ft: &FileType) -> Self {
        if ft.is_dir() {
            EntryKind::Directory
        } else if ft.is_file() {
            EntryKind::RegularFile
        } else if ft.is_symlink() {
            EntryKind::Other(OtherKind::Symlink)
        } else {
            EntryKind::Other(special_kind(ft))
        }
    }
}

#[cfg(unix)]
fn special_kind(ft: &FileType) -> OtherKind {
    use std::os::unix::fs::FileTypeExt;
    if ft.is_fifo() {
        OtherKind::Fifo
    } else if ft.is_socket() {
        OtherKind::Socket
    } else if ft.is_block_device() {
        OtherKind::BlockDevice
    } else if ft.is_char_device() {
        OtherKind::CharDevice
    } else {
        OtherKind::Unknown
    }
}

#[cfg(not(unix))]
fn special_kind(_ft: &FileType) -> OtherKind {
    OtherKind::Unknown
}

impl fmt::Display for OtherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OtherKind::Symlink => "symlink",
            OtherKind::Fifo => "fifo",
            OtherKind::Socket => "socket",
            OtherKind::BlockDevice => "block device",
            OtherKind::CharDevice => "character device",
            OtherKind::Unknown => "special file",
        };
        f.write_str(s)
    }
}
