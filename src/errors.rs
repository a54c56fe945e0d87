//! Typed error definitions for cpdir.
//! Each variant maps to one well-known failure mode so logs and tests can match on it.

use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::fs_ops::OtherKind;
use crate::fs_ops::helpers::hint;

/// Which root a precondition failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Source,
    Destination,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Role::Source => "source",
            Role::Destination => "destination",
        })
    }
}

fn under(path: &Option<PathBuf>) -> String {
    match path {
        Some(p) => format!(" under '{}'", p.display()),
        None => String::new(),
    }
}

#[derive(Debug, Error)]
pub enum CpdirError {
    #[error("cannot stat {role} '{}': {source}{}", .path.display(), hint(.source))]
    Stat {
        role: Role,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{role} '{}' is not a directory", .path.display())]
    NotADirectory { role: Role, path: PathBuf },

    #[error("cannot open '{}' for reading: {source}{}", .path.display(), hint(.source))]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot create file '{}': {source}{}", .path.display(), hint(.source))]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot create directory '{}': {source}{}", .path.display(), hint(.source))]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("copy '{}' -> '{}' failed: {source}{}", .src.display(), .dest.display(), hint(.source))]
    Copy {
        src: PathBuf,
        dest: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot read directory entry{}: {source}", under(.path))]
    Walk {
        path: Option<PathBuf>,
        #[source]
        source: walkdir::Error,
    },

    #[error("'{}' and '{}' are the same file", .src.display(), .dest.display())]
    SameFile { src: PathBuf, dest: PathBuf },

    #[error("destination '{}' is inside source '{}'", .dest.display(), .src.display())]
    DestInsideSource { src: PathBuf, dest: PathBuf },

    #[error("refusing to copy {kind} '{}'", .path.display())]
    SpecialFile { path: PathBuf, kind: OtherKind },

    #[error("{failed} entries failed to copy; first error: {first}")]
    Incomplete {
        failed: usize,
        first: Box<CpdirError>,
    },
}

impl CpdirError {
    /// Stable short identifier, used as a structured log field.
    pub fn code(&self) -> &'static str {
        match self {
            CpdirError::Stat { .. } => "stat_error",
            CpdirError::NotADirectory { .. } => "not_a_directory",
            CpdirError::Open { .. } => "open_error",
            CpdirError::Create { .. } => "create_error",
            CpdirError::CreateDir { .. } => "create_dir_error",
            CpdirError::Copy { .. } => "io_error",
            CpdirError::Walk { .. } => "walk_error",
            CpdirError::SameFile { .. } => "same_file",
            CpdirError::DestInsideSource { .. } => "dest_inside_source",
            CpdirError::SpecialFile { .. } => "special_file",
            CpdirError::Incomplete { .. } => "incomplete",
        }
    }

    /// Underlying I/O error kind, if this failure came from the OS.
    /// For `Incomplete`, reports the kind of the first recorded failure.
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            CpdirError::Stat { source, .. }
            | CpdirError::Open { source, .. }
            | CpdirError::Create { source, .. }
            | CpdirError::CreateDir { source, .. }
            | CpdirError::Copy { source, .. } => Some(source.kind()),
            CpdirError::Walk { source, .. } => source.io_error().map(io::Error::kind),
            CpdirError::Incomplete { first, .. } => first.io_kind(),
            CpdirError::NotADirectory { .. }
            | CpdirError::SameFile { .. }
            | CpdirError::DestInsideSource { .. }
            | CpdirError::SpecialFile { .. } => None,
        }
    }

    /// True when the failure means a required path does not exist.
    pub fn is_not_found(&self) -> bool {
        self.io_kind() == Some(io::ErrorKind::NotFound)
    }
}
