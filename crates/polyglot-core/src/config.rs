//! Shared defaults and environment variable names.
//!
//! Keeps the constants used by the CLI and the core in one place so no
//! crate redefines them.

use std::path::PathBuf;

/// Environment variable names.
pub mod env_vars {
    /// Overrides the directory searched for compiled modules.
    pub const MODULE_DIR: &str = "POLYGLOT_MODULE_DIR";
    /// Switches log output to JSON when set to a truthy value.
    pub const LOG_JSON: &str = "POLYGLOT_LOG_JSON";
}

/// Built-in defaults.
pub mod defaults {
    /// Language used when the user does not pass one.
    pub const LANGUAGE: &str = "english";
    /// Directory searched for compiled modules.
    pub const MODULE_DIR: &str = "./modules";
}

/// Resolve the module directory: explicit flag, then environment, then
/// the built-in default.
pub fn module_dir(flag: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = flag {
        return dir;
    }
    if let Ok(dir) = std::env::var(env_vars::MODULE_DIR) {
        if !dir.is_empty() {
            return PathBuf::from(dir);
        }
    }
    PathBuf::from(defaults::MODULE_DIR)
}
