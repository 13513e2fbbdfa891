//! Core loading machinery for polyglot greeter modules.
//!
//! This crate resolves a language selector to a module path
//! ([`ModuleRegistry`]), opens the module, looks up its exported
//! descriptor, narrows it to the `Greet` capability and hands back an
//! invocable handle ([`ModuleLoader`]). Every failure along that path
//! is terminal and mapped to one [`GreeterError`] variant.

pub mod config;
pub mod error;
pub mod loader;
pub mod registry;

pub use error::{GreeterError, Result};
pub use loader::{platform_extension, LoadedGreeter, ModuleInfo, ModuleLoader};
pub use registry::ModuleRegistry;

/// Re-exports commonly used types.
pub mod prelude {
    pub use crate::config::{defaults, env_vars};
    pub use crate::error::{GreeterError, Result};
    pub use crate::loader::{LoadedGreeter, ModuleInfo, ModuleLoader};
    pub use crate::registry::ModuleRegistry;
}
