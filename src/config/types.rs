//! Core configuration types.
//! - CopyOptions selects the traversal policies for a tree copy.
//! - Config holds the binary's runtime settings with sensible defaults.
//! - LogLevel represents verbosity with simple parsing helpers.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Program-defined verbosity levels exposed to users/config.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Only errors
    Quiet,
    /// Informational output (default)
    #[default]
    Normal,
    /// More info (like verbose)
    Info,
    /// Debug/trace
    Debug,
}

impl LogLevel {
    /// Parse common string names into our LogLevel (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "quiet" | "error" | "none" => Some(LogLevel::Quiet),
            "normal" => Some(LogLevel::Normal),
            "info" | "verbose" | "detailed" => Some(LogLevel::Info),
            "debug" | "trace" => Some(LogLevel::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Quiet => "quiet",
            LogLevel::Normal => "normal",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        };
        f.write_str(s)
    }
}

impl FromStr for LogLevel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid log level: '{s}'"))
    }
}

/// What a tree copy does when an individual entry fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Stop at the first failing entry and return its error.
    #[default]
    FailFast,
    /// Log each failure, keep walking, then report the first failure.
    BestEffort,
}

impl ErrorPolicy {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "fail-fast" | "failfast" | "strict" => Some(ErrorPolicy::FailFast),
            "best-effort" | "besteffort" | "continue" => Some(ErrorPolicy::BestEffort),
            _ => None,
        }
    }
}

impl fmt::Display for ErrorPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ErrorPolicy::FailFast => "fail-fast",
            ErrorPolicy::BestEffort => "best-effort",
        })
    }
}

impl FromStr for ErrorPolicy {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid error policy: '{s}'"))
    }
}

/// Handling of symlinks, FIFOs, sockets and device nodes found under the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpecialFilePolicy {
    /// Do not copy them; log and count them as skipped.
    #[default]
    Skip,
    /// Treat them as an error for that entry.
    Reject,
    /// Follow symlinks (links to files become plain files); other specials are skipped.
    Follow,
}

impl SpecialFilePolicy {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "skip" | "ignore" => Some(SpecialFilePolicy::Skip),
            "reject" | "error" => Some(SpecialFilePolicy::Reject),
            "follow" | "dereference" => Some(SpecialFilePolicy::Follow),
            _ => None,
        }
    }
}

impl fmt::Display for SpecialFilePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SpecialFilePolicy::Skip => "skip",
            SpecialFilePolicy::Reject => "reject",
            SpecialFilePolicy::Follow => "follow",
        })
    }
}

impl FromStr for SpecialFilePolicy {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid special-file policy: '{s}'"))
    }
}

/// Policies applied by `copy_dir_contents_with`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CopyOptions {
    pub error_policy: ErrorPolicy,
    pub special_files: SpecialFilePolicy,
}

/// Runtime configuration used by the binary.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Console verbosity
    pub log_level: LogLevel,
    /// Optional path to a log file
    pub log_file: Option<PathBuf>,
    /// Emit JSON log lines instead of compact text
    pub json: bool,
    /// Create the destination root before copying
    pub create_dest: bool,
    /// Traversal policies
    pub options: CopyOptions,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_strict_and_skip() {
        let opts = CopyOptions::default();
        assert_eq!(opts.error_policy, ErrorPolicy::FailFast);
        assert_eq!(opts.special_files, SpecialFilePolicy::Skip);
        assert_eq!(Config::default().log_level, LogLevel::Normal);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(ErrorPolicy::parse("Best-Effort"), Some(ErrorPolicy::BestEffort));
        assert_eq!(ErrorPolicy::parse("STRICT"), Some(ErrorPolicy::FailFast));
        assert_eq!(SpecialFilePolicy::parse("Follow"), Some(SpecialFilePolicy::Follow));
        assert_eq!(LogLevel::parse("TRACE"), Some(LogLevel::Debug));
        assert!("sometimes".parse::<ErrorPolicy>().is_err());
    }

    #[test]
    fn display_round_trips_through_parse() {
        for p in [ErrorPolicy::FailFast, ErrorPolicy::BestEffort] {
            assert_eq!(p.to_string().parse::<ErrorPolicy>().unwrap(), p);
        }
        for p in [
            SpecialFilePolicy::Skip,
            SpecialFilePolicy::Reject,
            SpecialFilePolicy::Follow,
        ] {
            assert_eq!(p.to_string().parse::<SpecialFilePolicy>().unwrap(), p);
        }
    }
}
