//! Single-file streaming copy.
//!
//! - Opens the source read-only and creates (or truncates) the destination.
//! - Buffered I/O with large (1 MiB) buffers to reduce syscall count.
//! - Never creates parent directories; the caller owns the directory layout.
//! - Refuses to copy a file onto itself (same path, or a hard link to it),
//!   since creating the destination would truncate the source first.
//!
//! Snapshot semantics: the source is read once from start to EOF; bytes appended
//! concurrently may or may not be included. On failure the destination is left
//! as-is (possibly truncated or partial); there is no rollback. The destination
//! gets the default creation mode, source permissions are not mirrored.

use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;
use tracing::trace;

use crate::errors::CpdirError;

const BUF_SIZE: usize = 1024 * 1024; // 1 MiB buffers

/// Copy the byte content of `src` to `dest`, returning the number of bytes written.
///
/// Both handles are owned locals, so they are closed on every return path.
pub fn copy_file(src: &Path, dest: &Path) -> Result<u64, CpdirError> {
    let src_f = File::open(src).map_err(|source| CpdirError::Open {
        path: src.to_path_buf(),
        source,
    })?;

    if is_same_file(src, dest) {
        return Err(CpdirError::SameFile {
            src: src.to_path_buf(),
            dest: dest.to_path_buf(),
        });
    }

    let dst_f = File::create(dest).map_err(|source| CpdirError::Create {
        path: dest.to_path_buf(),
        source,
    })?;

    let copy_err = |source: io::Error| CpdirError::Copy {
        src: src.to_path_buf(),
        dest: dest.to_path_buf(),
        source,
    };

    let mut reader = BufReader::with_capacity(BUF_SIZE, src_f);
    let mut writer = BufWriter::with_capacity(BUF_SIZE, dst_f);
    let bytes = io::copy(&mut reader, &mut writer).map_err(copy_err)?;
    writer.flush().map_err(copy_err)?;

    trace!(src = %src.display(), dest = %dest.display(), bytes, "copied file");
    Ok(bytes)
}

/// True when `dest` already exists and refers to the same file as `src`.
fn is_same_file(src: &Path, dest: &Path) -> bool {
    let (Ok(a), Ok(b)) = (fs::metadata(src), fs::metadata(dest)) else {
        return false;
    };
    #[cfg(unix)]
    {
        use std::os::unix::fs::MetadataExt;
        a.dev() == b.dev() && a.ino() == b.ino()
    }
    #[cfg(not(unix))]
    {
        let _ = (a, b);
        matches!(
            (fs::canonicalize(src), fs::canonicalize(dest)),
            (Ok(x), Ok(y)) if x == y
        )
    }
}
