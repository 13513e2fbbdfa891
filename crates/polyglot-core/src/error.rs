//! Error taxonomy for module resolution and loading.
//!
//! Every variant is terminal: the caller reports it and exits. Nothing
//! here is retried or recovered.

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, GreeterError>;

/// Errors surfaced while resolving, opening or invoking a module.
#[derive(Debug, Error)]
pub enum GreeterError {
    /// The selector is not in the registry.
    #[error("unknown language: {0}")]
    UnknownLanguage(String),

    /// The module path does not exist.
    #[error("module not found: {0}")]
    NotFound(String),

    /// The path exists but is not a loadable module file.
    #[error("not a loadable module: {0}")]
    InvalidFormat(String),

    /// The runtime refused to open the module.
    #[error("failed to open module: {0}")]
    OpenFailed(String),

    /// A required exported symbol is missing.
    #[error("symbol not found: {0}")]
    SymbolNotFound(String),

    /// The module was compiled against a different ABI revision.
    #[error("incompatible module ABI: expected {expected}, got {got}")]
    IncompatibleAbi { expected: u32, got: u32 },

    /// The exported value does not satisfy the Greet capability.
    #[error("unexpected export from module: the Greet capability is not satisfied")]
    CapabilityMismatch,
}
