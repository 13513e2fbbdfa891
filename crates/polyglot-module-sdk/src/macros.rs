//! Macros for exporting the greeter entry points from a module crate.

/// Export the FFI surface of a greeter module.
///
/// Generates the three exported functions the host looks up:
/// `greeter_abi_version`, `greeter_descriptor` and `greeter_invoke`.
/// `$greeter` is an expression producing a value implementing
/// [`Greet`](crate::Greet); it is constructed fresh on every
/// invocation.
///
/// # Example
///
/// ```rust,ignore
/// use polyglot_module_sdk::prelude::*;
///
/// struct Greeting;
///
/// impl Greet for Greeting {
///     fn greet(&self) {
///         println!("Hello Universe");
///     }
/// }
///
/// export_greeter!(language: "english", greeter: Greeting);
/// ```
#[macro_export]
macro_rules! export_greeter {
    (language: $lang:expr, greeter: $greeter:expr $(,)?) => {
        /// ABI revision this module was compiled against.
        #[no_mangle]
        pub extern "C" fn greeter_abi_version() -> u32 {
            $crate::GREETER_ABI_VERSION
        }

        /// Invoke the greet capability.
        #[no_mangle]
        pub extern "C" fn greeter_invoke() {
            let greeter = $greeter;
            $crate::Greet::greet(&greeter);
        }

        /// Export the module descriptor.
        #[no_mangle]
        pub extern "C" fn greeter_descriptor() -> *const $crate::GreeterDescriptor {
            static DESCRIPTOR: $crate::GreeterDescriptor = $crate::GreeterDescriptor {
                abi_version: $crate::GREETER_ABI_VERSION,
                language: $lang.as_ptr(),
                language_len: $lang.len(),
                capabilities: $crate::CAP_GREET,
                greet: Some(greeter_invoke),
            };
            &DESCRIPTOR
        }
    };
}
