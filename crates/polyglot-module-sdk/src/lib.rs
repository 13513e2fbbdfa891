//! Polyglot Module SDK
//!
//! This SDK provides the types and macros for building greeter modules
//! that the `polyglot` host can load at runtime.
//!
//! A module is a cdylib that exports a [`GreeterDescriptor`] through a
//! pair of C-ABI functions. The host opens the library, checks the ABI
//! revision, and narrows the descriptor to the [`Greet`] capability
//! before invoking it.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use polyglot_module_sdk::prelude::*;
//!
//! struct Greeting;
//!
//! impl Greet for Greeting {
//!     fn greet(&self) {
//!         println!("Hello Universe");
//!     }
//! }
//!
//! export_greeter!(language: "english", greeter: Greeting);
//! ```

pub mod macros;
pub mod types;

pub use types::{Greet, GreeterDescriptor, CAP_GREET, GREETER_ABI_VERSION};

/// Re-exports commonly used items for module authors.
pub mod prelude {
    pub use crate::export_greeter;
    pub use crate::types::{Greet, GreeterDescriptor, CAP_GREET, GREETER_ABI_VERSION};
}
