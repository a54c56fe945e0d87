//! I/O error hints.
//!
//! Maps an `io::ErrorKind` to a short actionable suffix that error messages
//! append after the OS message. Unknown kinds produce an empty suffix.
//!
//! Usage:
//!   #[error("cannot open '{}': {source}{}", .path.display(), hint(.source))]

use std::io;

/// Return a hint suffix (including its leading separator) for the given error.
pub fn hint(e: &io::Error) -> &'static str {
    match e.kind() {
        io::ErrorKind::PermissionDenied => "; permission denied, check ownership and access mode",
        io::ErrorKind::NotFound => "; path not found, verify it exists",
        io::ErrorKind::AlreadyExists => "; already exists, remove it or pick another name",
        io::ErrorKind::NotADirectory => "; a path component is not a directory",
        io::ErrorKind::IsADirectory => "; path is a directory, expected a file",
        io::ErrorKind::StorageFull => "; insufficient space on device",
        io::ErrorKind::ReadOnlyFilesystem => "; read-only filesystem, cannot write here",
        io::ErrorKind::InvalidFilename => "; filename or path too long or invalid",
        io::ErrorKind::ResourceBusy => "; resource busy, ensure no other process holds it",
        io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut => {
            "; busy or timed out, retry once the other writer finishes"
        }
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_kinds_have_hints() {
        let e = io::Error::from(io::ErrorKind::PermissionDenied);
        assert!(hint(&e).contains("permission denied"));
        let e = io::Error::from(io::ErrorKind::NotFound);
        assert!(hint(&e).starts_with("; "));
    }

    #[test]
    fn unknown_kind_is_silent() {
        let e = io::Error::other("boom");
        assert_eq!(hint(&e), "");
    }
}
