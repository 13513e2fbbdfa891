//! Swedish greeter module.

use polyglot_module_sdk::prelude::*;

/// Greeting printed by this module.
const MESSAGE: &str = "Hej Universum";

struct Greeting;

impl Greet for Greeting {
    fn greet(&self) {
        println!("{}", MESSAGE);
    }
}

export_greeter!(language: "swedish", greeter: Greeting);
