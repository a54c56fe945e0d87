//! Directory-contents copy.
//!
//! Validates both roots, then walks the source depth-first (pre-order, so a
//! directory is created before anything inside it is copied) and mirrors each
//! entry at `dest.join(relative_path)`. The source root itself is not an entry
//! and the destination root is never created here. A destination equal to, or
//! nested inside, the source is rejected up front: the walk would otherwise
//! truncate source files or keep finding the directories it just created.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, trace, warn};
use walkdir::{DirEntry, WalkDir};

use crate::config::{CopyOptions, ErrorPolicy, SpecialFilePolicy};
use crate::errors::{CpdirError, Role};

use super::entry::EntryKind;
use super::io_copy::copy_file;
use super::report::CopyReport;

/// Copy everything under `src` into the existing directory `dest` using default options.
pub fn copy_dir_contents(src: &Path, dest: &Path) -> Result<CopyReport, CpdirError> {
    copy_dir_contents_with(src, dest, &CopyOptions::default())
}

/// Copy everything under `src` into the existing directory `dest`.
///
/// Root checks run first and always abort before anything is written. Per-entry
/// failures follow `opts.error_policy`: `FailFast` returns the first one,
/// `BestEffort` logs each, keeps going and returns `CpdirError::Incomplete`.
pub fn copy_dir_contents_with(
    src: &Path,
    dest: &Path,
    opts: &CopyOptions,
) -> Result<CopyReport, CpdirError> {
    ensure_dir(Role::Source, src)?;
    ensure_dir(Role::Destination, dest)?;
    ensure_disjoint(src, dest)?;

    debug!(
        src = %src.display(),
        dest = %dest.display(),
        error_policy = %opts.error_policy,
        special_files = %opts.special_files,
        "copying directory contents"
    );

    let mut report = CopyReport::default();
    let mut first_err: Option<CpdirError> = None;

    let walker = WalkDir::new(src)
        .min_depth(1)
        .follow_links(opts.special_files == SpecialFilePolicy::Follow);

    for item in walker {
        let outcome = item
            .map_err(|e| CpdirError::Walk {
                path: e.path().map(Path::to_path_buf),
                source: e,
            })
            .and_then(|entry| copy_entry(&entry, src, dest, opts, &mut report));

        if let Err(e) = outcome {
            match opts.error_policy {
                ErrorPolicy::FailFast => return Err(e),
                ErrorPolicy::BestEffort => {
                    warn!(code = e.code(), error = %e, "entry failed; continuing");
                    report.failed += 1;
                    first_err.get_or_insert(e);
                }
            }
        }
    }

    if let Some(first) = first_err {
        return Err(CpdirError::Incomplete {
            failed: report.failed,
            first: Box::new(first),
        });
    }

    info!(
        src = %src.display(),
        dest = %dest.display(),
        files = report.files_copied,
        dirs = report.dirs_created,
        bytes = report.bytes_copied,
        skipped = report.skipped,
        "copied directory contents"
    );
    Ok(report)
}

/// Require `path` to exist (following links) and be a directory.
fn ensure_dir(role: Role, path: &Path) -> Result<(), CpdirError> {
    let meta = fs::metadata(path).map_err(|source| CpdirError::Stat {
        role,
        path: path.to_path_buf(),
        source,
    })?;
    if !meta.is_dir() {
        return Err(CpdirError::NotADirectory {
            role,
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

/// Reject a destination that is the source itself or lies beneath it (after resolving links).
fn ensure_disjoint(src: &Path, dest: &Path) -> Result<(), CpdirError> {
    let canonical = |role, path: &Path| {
        fs::canonicalize(path).map_err(|source| CpdirError::Stat {
            role,
            path: path.to_path_buf(),
            source,
        })
    };
    let src_c = canonical(Role::Source, src)?;
    let dest_c = canonical(Role::Destination, dest)?;
    if dest_c.starts_with(&src_c) {
        return Err(CpdirError::DestInsideSource {
            src: src.to_path_buf(),
            dest: dest.to_path_buf(),
        });
    }
    Ok(())
}

/// Destination counterpart of `path`: `dest_root` joined with `path` relative to `src_root`.
pub(crate) fn map_to_dest(src_root: &Path, dest_root: &Path, path: &Path) -> Option<PathBuf> {
    path.strip_prefix(src_root).ok().map(|rel| dest_root.join(rel))
}

fn copy_entry(
    entry: &DirEntry,
    src: &Path,
    dest: &Path,
    opts: &CopyOptions,
    report: &mut CopyReport,
) -> Result<(), CpdirError> {
    let path = entry.path();
    let Some(target) = map_to_dest(src, dest, path) else {
        debug!(path = %path.display(), "entry outside source root; ignoring");
        return Ok(());
    };

    match EntryKind::of(&entry.file_type()) {
        EntryKind::Directory => {
            fs::create_dir_all(&target).map_err(|source| CpdirError::CreateDir {
                path: target.clone(),
                source,
            })?;
            trace!(dir = %target.display(), "created directory");
            report.dirs_created += 1;
        }
        EntryKind::RegularFile => {
            report.bytes_copied += copy_file(path, &target)?;
            report.files_copied += 1;
        }
        EntryKind::Other(kind) => match opts.special_files {
            SpecialFilePolicy::Reject => {
                return Err(CpdirError::SpecialFile {
                    path: path.to_path_buf(),
                    kind,
                });
            }
            SpecialFilePolicy::Skip | SpecialFilePolicy::Follow => {
                warn!(path = %path.display(), %kind, "skipping non-regular entry");
                report.skipped += 1;
            }
        },
    }
    Ok(())
}
