//! English greeter module.
//!
//! Compiled as a cdylib and loaded by the polyglot host at runtime.

use polyglot_module_sdk::prelude::*;

/// Greeting printed by this module.
const MESSAGE: &str = "Hello Universe";

struct Greeting;

impl Greet for Greeting {
    fn greet(&self) {
        println!("{}", MESSAGE);
    }
}

export_greeter!(language: "english", greeter: Greeting);
