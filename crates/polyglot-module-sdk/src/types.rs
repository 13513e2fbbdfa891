//! Capability contract shared by the host and loadable modules.

/// Current greeter ABI revision.
///
/// The host refuses to dereference a descriptor from a module compiled
/// against a different revision.
pub const GREETER_ABI_VERSION: u32 = 1;

/// Capability bit: the module can greet.
pub const CAP_GREET: u64 = 1;

/// One-method greeting capability.
///
/// The only observable effect of [`Greet::greet`] is a single
/// human-readable line on standard output. No return value is
/// consulted.
pub trait Greet {
    /// Emit the module's greeting.
    fn greet(&self);
}

/// C-compatible descriptor exported by every greeter module.
///
/// Modules expose this through two exported functions:
/// - `greeter_abi_version() -> u32`
/// - `greeter_descriptor() -> *const GreeterDescriptor`
///
/// Use [`export_greeter!`](crate::export_greeter) to generate both.
#[repr(C)]
pub struct GreeterDescriptor {
    /// ABI revision the module was compiled against.
    pub abi_version: u32,

    /// Language name advertised by the module (UTF-8, not NUL-terminated).
    pub language: *const u8,

    /// Language name length in bytes.
    pub language_len: usize,

    /// Capability bits (see [`CAP_GREET`]).
    pub capabilities: u64,

    /// Entry point for the greet capability.
    pub greet: Option<extern "C" fn()>,
}

// SAFETY: The descriptor is only read, never modified.
unsafe impl Sync for GreeterDescriptor {}

impl GreeterDescriptor {
    /// Whether this descriptor satisfies the [`Greet`] capability.
    ///
    /// This is the narrowing step: a checked, boolean outcome rather
    /// than a fatal error when the module exports something else.
    pub fn supports_greet(&self) -> bool {
        self.abi_version == GREETER_ABI_VERSION
            && self.capabilities & CAP_GREET != 0
            && self.greet.is_some()
    }

    /// Decode the language name advertised by the module.
    ///
    /// Returns `None` when the pointer is null or the bytes are not
    /// valid UTF-8.
    ///
    /// # Safety
    /// `language` must either be null or point to `language_len` bytes
    /// that stay valid for the lifetime of the loaded module.
    pub unsafe fn language(&self) -> Option<&str> {
        if self.language.is_null() {
            return None;
        }
        let bytes = unsafe { std::slice::from_raw_parts(self.language, self.language_len) };
        std::str::from_utf8(bytes).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    extern "C" fn noop_greet() {}

    fn descriptor(language: &'static str) -> GreeterDescriptor {
        GreeterDescriptor {
            abi_version: GREETER_ABI_VERSION,
            language: language.as_ptr(),
            language_len: language.len(),
            capabilities: CAP_GREET,
            greet: Some(noop_greet),
        }
    }

    #[test]
    fn test_descriptor_supports_greet() {
        assert!(descriptor("english").supports_greet());
    }

    #[test]
    fn test_missing_greet_fn_is_rejected() {
        let mut desc = descriptor("english");
        desc.greet = None;
        assert!(!desc.supports_greet());
    }

    #[test]
    fn test_cleared_capability_bit_is_rejected() {
        let mut desc = descriptor("english");
        desc.capabilities = 0;
        assert!(!desc.supports_greet());
    }

    #[test]
    fn test_foreign_abi_is_rejected() {
        let mut desc = descriptor("english");
        desc.abi_version = GREETER_ABI_VERSION + 1;
        assert!(!desc.supports_greet());
    }

    #[test]
    fn test_language_decoding() {
        let desc = descriptor("chinese");
        assert_eq!(unsafe { desc.language() }, Some("chinese"));
    }

    #[test]
    fn test_null_language_decodes_to_none() {
        let mut desc = descriptor("english");
        desc.language = std::ptr::null();
        assert_eq!(unsafe { desc.language() }, None);
    }
}
