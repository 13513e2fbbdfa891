//! Native module loader using libloading.
//!
//! Opens a compiled greeter module (.so, .dylib, .dll), resolves its
//! exported entry points and narrows the exported descriptor to the
//! `Greet` capability. Each failure point (open, lookup, assertion)
//! maps to its own [`GreeterError`] variant.

use std::path::{Path, PathBuf};

use libloading::{Library, Symbol};
use serde::Serialize;

use polyglot_module_sdk::{GreeterDescriptor, GREETER_ABI_VERSION};

use crate::error::{GreeterError, Result};

/// Exported function reporting the module's ABI revision.
const SYM_ABI_VERSION: &[u8] = b"greeter_abi_version";

/// Exported function resolving to the module's descriptor.
const SYM_DESCRIPTOR: &[u8] = b"greeter_descriptor";

type AbiVersionFn = unsafe extern "C" fn() -> u32;
type DescriptorFn = unsafe extern "C" fn() -> *const GreeterDescriptor;

/// Shared library extension for the current platform.
pub fn platform_extension() -> &'static str {
    if cfg!(target_os = "windows") {
        "dll"
    } else if cfg!(target_os = "macos") {
        "dylib"
    } else {
        "so"
    }
}

/// File name of a module with the given library stem, following the
/// platform's naming convention (e.g. `libeng_greeter.so`).
pub fn library_file_name(stem: &str) -> String {
    if cfg!(target_os = "windows") {
        format!("{}.{}", stem, platform_extension())
    } else {
        format!("lib{}.{}", stem, platform_extension())
    }
}

/// Metadata reported by a successfully loaded module.
#[derive(Debug, Clone, Serialize)]
pub struct ModuleInfo {
    /// Language the module greets in.
    pub language: String,

    /// Path the module was loaded from.
    pub path: PathBuf,

    /// ABI revision the module was compiled against.
    pub abi_version: u32,
}

/// A loaded module narrowed to the `Greet` capability.
///
/// The library handle is kept alive for as long as this value exists;
/// there is no explicit unload.
pub struct LoadedGreeter {
    /// The loaded library (kept to prevent unloading).
    _library: Library,

    info: ModuleInfo,

    greet_fn: extern "C" fn(),
}

impl LoadedGreeter {
    /// Metadata for this module.
    pub fn info(&self) -> &ModuleInfo {
        &self.info
    }

    /// Invoke the greet capability. The module writes its greeting to
    /// standard output; no return value is consulted.
    pub fn greet(&self) {
        (self.greet_fn)();
    }
}

/// Narrow an exported descriptor to the `Greet` capability.
///
/// A checked, non-fatal outcome: a module exporting something else
/// yields an error, never undefined behavior.
pub fn assert_capability(descriptor: &GreeterDescriptor) -> Result<()> {
    if descriptor.abi_version != GREETER_ABI_VERSION {
        return Err(GreeterError::IncompatibleAbi {
            expected: GREETER_ABI_VERSION,
            got: descriptor.abi_version,
        });
    }
    if !descriptor.supports_greet() {
        return Err(GreeterError::CapabilityMismatch);
    }
    Ok(())
}

/// Loader for native greeter modules.
pub struct ModuleLoader;

impl ModuleLoader {
    /// Create a new module loader.
    pub fn new() -> Self {
        Self
    }

    /// Load a greeter module from a file path.
    pub fn load(&self, path: &Path) -> Result<LoadedGreeter> {
        if !path.exists() {
            return Err(GreeterError::NotFound(path.display().to_string()));
        }
        if !path.is_file() {
            return Err(GreeterError::InvalidFormat(format!(
                "{} is not a file",
                path.display()
            )));
        }

        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        if ext != platform_extension() {
            return Err(GreeterError::InvalidFormat(format!(
                "{} does not have the expected .{} extension",
                path.display(),
                platform_extension()
            )));
        }

        let library = unsafe {
            Library::new(path).map_err(|e| GreeterError::OpenFailed(e.to_string()))?
        };

        // Check the ABI revision before trusting the descriptor layout.
        let abi_version = unsafe {
            let symbol: Symbol<AbiVersionFn> = library.get(SYM_ABI_VERSION).map_err(|_| {
                GreeterError::SymbolNotFound("greeter_abi_version".to_string())
            })?;
            symbol()
        };
        if abi_version != GREETER_ABI_VERSION {
            return Err(GreeterError::IncompatibleAbi {
                expected: GREETER_ABI_VERSION,
                got: abi_version,
            });
        }

        let descriptor: &GreeterDescriptor = unsafe {
            let symbol: Symbol<DescriptorFn> = library.get(SYM_DESCRIPTOR).map_err(|_| {
                GreeterError::SymbolNotFound("greeter_descriptor".to_string())
            })?;
            let raw = symbol();
            if raw.is_null() {
                return Err(GreeterError::CapabilityMismatch);
            }
            &*raw
        };

        assert_capability(descriptor)?;

        let language = unsafe { descriptor.language() }
            .ok_or_else(|| {
                GreeterError::InvalidFormat("module did not report a language".to_string())
            })?
            .to_string();
        let greet_fn = descriptor.greet.ok_or(GreeterError::CapabilityMismatch)?;

        tracing::debug!(language = %language, path = %path.display(), "loaded greeter module");

        Ok(LoadedGreeter {
            info: ModuleInfo {
                language,
                path: path.to_path_buf(),
                abi_version,
            },
            greet_fn,
            _library: library,
        })
    }

    /// Discover greeter modules in a directory.
    ///
    /// Files that fail to load are logged and skipped; discovery never
    /// fails as a whole.
    pub fn discover(&self, dir: &Path) -> Vec<ModuleInfo> {
        let mut modules = Vec::new();

        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().and_then(|e| e.to_str()) != Some(platform_extension()) {
                    continue;
                }
                match self.load(&path) {
                    Ok(greeter) => {
                        tracing::info!(language = %greeter.info().language, "discovered greeter module");
                        modules.push(greeter.info().clone());
                    }
                    Err(e) => {
                        tracing::warn!(path = %path.display(), error = %e, "skipping module");
                    }
                }
            }
        }

        modules
    }
}

impl Default for ModuleLoader {
    fn default() -> Self {
        Self::new()
    }
}
