//! Summary counters returned by a tree copy.

use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyReport {
    /// Directories created (or already present) under the destination.
    pub dirs_created: usize,
    pub files_copied: usize,
    pub bytes_copied: u64,
    /// Symlinks and special files that were not copied.
    pub skipped: usize,
    /// Entries that failed under `ErrorPolicy::BestEffort`.
    pub failed: usize,
}

impl fmt::Display for CopyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Copied {} files ({} bytes), created {} directories",
            self.files_copied, self.bytes_copied, self.dirs_created
        )?;
        if self.skipped > 0 {
            write!(f, ", skipped {} special entries", self.skipped)?;
        }
        Ok(())
    }
}
