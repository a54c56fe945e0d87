//! Application orchestrator.
//! Loads config from the environment, applies CLI overrides, initializes logging,
//! and invokes the directory-contents copy.

use anyhow::{Context, Result};
use tracing::{debug, error, info};

use cpdir::cli::Args;
use cpdir::output as out;
use cpdir::{Config, copy_dir_contents_with};

use crate::logging::init_tracing;

/// Run the CLI application.
pub fn run(args: Args) -> Result<()> {
    let mut cfg = Config::from_env().context("invalid CPDIR_* environment")?;
    args.apply_overrides(&mut cfg);

    // Held until return so the file appender flushes.
    let _guard = init_tracing(&cfg.log_level, cfg.log_file.as_deref(), cfg.json)
        .context("failed to initialize logging")?;

    debug!(?args, ?cfg, "starting cpdir");

    if cfg.create_dest && !args.dest.is_dir() {
        std::fs::create_dir_all(&args.dest).with_context(|| {
            format!("failed to create destination '{}'", args.dest.display())
        })?;
        info!(dest = %args.dest.display(), "created destination directory");
    }

    match copy_dir_contents_with(&args.source, &args.dest, &cfg.options) {
        Ok(report) => {
            out::print_success(&report.to_string());
            Ok(())
        }
        Err(e) => {
            error!(
                code = e.code(),
                kind = ?e.io_kind(),
                src = %args.source.display(),
                dest = %args.dest.display(),
                "Copy failed"
            );
            Err(e.into())
        }
    }
}
