//! Chinese greeter module.

use polyglot_module_sdk::prelude::*;

/// Greeting printed by this module.
const MESSAGE: &str = "你好宇宙";

struct Greeting;

impl Greet for Greeting {
    fn greet(&self) {
        println!("{}", MESSAGE);
    }
}

export_greeter!(language: "chinese", greeter: Greeting);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_text() {
        assert_eq!(MESSAGE, "你好宇宙");
    }

    #[test]
    fn test_descriptor_exports_greet_capability() {
        let descriptor = unsafe { &*greeter_descriptor() };
        assert!(descriptor.supports_greet());
        assert_eq!(unsafe { descriptor.language() }, Some("chinese"));
    }
}
