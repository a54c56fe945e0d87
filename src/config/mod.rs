//! Config module.
//! Provides configuration types and the environment override layer.

pub mod env;
pub mod types;

pub use env::{ENV_ERROR_POLICY, ENV_LOG_FILE, ENV_LOG_LEVEL, ENV_SPECIAL_FILES};
pub use types::{Config, CopyOptions, ErrorPolicy, LogLevel, SpecialFilePolicy};
