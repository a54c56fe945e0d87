//! CLI definition and parsing.
//! Defines Args and provides parse() for command-line handling.
//!
//! Notes:
//! - --debug is a shorthand for --log-level debug.
//! - Flags override values taken from CPDIR_* environment variables.

use clap::{Parser, ValueHint};
use std::path::PathBuf;

use crate::config::types::{Config, ErrorPolicy, LogLevel, SpecialFilePolicy};

/// Copy the contents of SOURCE into the existing directory DEST.
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Copy a directory's contents into another directory"
)]
pub struct Args {
    /// Directory whose contents are copied.
    #[arg(value_name = "SOURCE", value_hint = ValueHint::DirPath)]
    pub source: PathBuf,

    /// Existing directory that receives the copy.
    #[arg(value_name = "DEST", value_hint = ValueHint::DirPath)]
    pub dest: PathBuf,

    /// What to do when an entry fails: fail-fast or best-effort.
    #[arg(long, value_name = "POLICY", help = "On entry failure: fail-fast (default) or best-effort")]
    pub error_policy: Option<ErrorPolicy>,

    /// What to do with symlinks and special files: skip, reject or follow.
    #[arg(long, value_name = "POLICY", help = "Symlinks/special files: skip (default), reject or follow")]
    pub special_files: Option<SpecialFilePolicy>,

    /// Create DEST (and parents) if it does not exist yet.
    #[arg(short = 'p', long, help = "Create DEST if it is missing")]
    pub create_dest: bool,

    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(
        short = 'd',
        long,
        help = "Enable debug logging (shorthand for --log-level debug)"
    )]
    pub debug: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(long, help = "Set log level: quiet, normal, info, debug")]
    pub log_level: Option<String>,

    /// Append logs to this file in addition to stderr.
    #[arg(long, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub log_file: Option<PathBuf>,

    /// Emit logs in structured JSON (includes timestamp, level, and structured fields).
    #[arg(long, help = "Emit logs in structured JSON")]
    pub json: bool,
}

impl Args {
    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > None (use config default).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level.as_deref().and_then(LogLevel::parse)
    }

    /// Apply CLI overrides to a loaded Config (in-place). No-ops for unset flags.
    pub fn apply_overrides(&self, cfg: &mut Config) {
        if let Some(level) = self.effective_log_level() {
            cfg.log_level = level;
        }
        if let Some(p) = &self.log_file {
            cfg.log_file = Some(p.clone());
        }
        if self.json {
            cfg.json = true;
        }
        if self.create_dest {
            cfg.create_dest = true;
        }
        if let Some(p) = self.error_policy {
            cfg.options.error_policy = p;
        }
        if let Some(p) = self.special_files {
            cfg.options.special_files = p;
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
