//! Environment overrides for Config.
//!
//! Recognised variables (all optional, values are case-insensitive):
//!  - CPDIR_LOG_LEVEL      quiet | normal | info | debug
//!  - CPDIR_LOG_FILE       path to an append-only log file (empty = none)
//!  - CPDIR_ERROR_POLICY   fail-fast | best-effort
//!  - CPDIR_SPECIAL_FILES  skip | reject | follow
//!
//! Unset variables leave the default in place; malformed values are errors
//! rather than being silently ignored.

use anyhow::{Result, anyhow};
use std::path::PathBuf;

use super::types::{Config, ErrorPolicy, LogLevel, SpecialFilePolicy};

pub const ENV_LOG_LEVEL: &str = "CPDIR_LOG_LEVEL";
pub const ENV_LOG_FILE: &str = "CPDIR_LOG_FILE";
pub const ENV_ERROR_POLICY: &str = "CPDIR_ERROR_POLICY";
pub const ENV_SPECIAL_FILES: &str = "CPDIR_SPECIAL_FILES";

impl Config {
    /// Build a Config from defaults plus the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|k| std::env::var(k).ok())
    }

    /// Build a Config from defaults plus values provided by `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut cfg = Config::default();

        if let Some(v) = lookup(ENV_LOG_LEVEL) {
            cfg.log_level = LogLevel::parse(v.trim())
                .ok_or_else(|| anyhow!("{ENV_LOG_LEVEL}: invalid log level '{v}'"))?;
        }
        if let Some(v) = lookup(ENV_LOG_FILE) {
            let v = v.trim();
            if !v.is_empty() {
                cfg.log_file = Some(PathBuf::from(v));
            }
        }
        if let Some(v) = lookup(ENV_ERROR_POLICY) {
            cfg.options.error_policy = ErrorPolicy::parse(v.trim())
                .ok_or_else(|| anyhow!("{ENV_ERROR_POLICY}: invalid error policy '{v}'"))?;
        }
        if let Some(v) = lookup(ENV_SPECIAL_FILES) {
            cfg.options.special_files = SpecialFilePolicy::parse(v.trim())
                .ok_or_else(|| anyhow!("{ENV_SPECIAL_FILES}: invalid special-file policy '{v}'"))?;
        }

        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k: &str| map.get(k).cloned()
    }

    #[test]
    fn empty_env_gives_defaults() {
        let cfg = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg.log_level, LogLevel::Normal);
        assert!(cfg.log_file.is_none());
        assert_eq!(cfg.options.error_policy, ErrorPolicy::FailFast);
    }

    #[test]
    fn values_are_applied() {
        let cfg = Config::from_lookup(lookup(&[
            (ENV_LOG_LEVEL, "debug"),
            (ENV_LOG_FILE, " /tmp/cpdir.log "),
            (ENV_ERROR_POLICY, "best-effort"),
            (ENV_SPECIAL_FILES, "reject"),
        ]))
        .unwrap();
        assert_eq!(cfg.log_level, LogLevel::Debug);
        assert_eq!(cfg.log_file, Some(PathBuf::from("/tmp/cpdir.log")));
        assert_eq!(cfg.options.error_policy, ErrorPolicy::BestEffort);
        assert_eq!(cfg.options.special_files, SpecialFilePolicy::Reject);
    }

    #[test]
    fn empty_log_file_means_none() {
        let cfg = Config::from_lookup(lookup(&[(ENV_LOG_FILE, "  ")])).unwrap();
        assert!(cfg.log_file.is_none());
    }

    #[test]
    fn malformed_value_is_an_error() {
        let err = Config::from_lookup(lookup(&[(ENV_SPECIAL_FILES, "maybe")])).unwrap_err();
        assert!(err.to_string().contains(ENV_SPECIAL_FILES));
    }
}
