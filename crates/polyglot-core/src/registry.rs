//! Registry mapping language selectors to module paths.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::config::defaults;
use crate::error::{GreeterError, Result};
use crate::loader::library_file_name;

/// Maps a language selector to the compiled module that greets in it.
///
/// Seeded with the built-in languages; new ones are added with
/// [`register`](ModuleRegistry::register) instead of growing a
/// hardcoded switch.
pub struct ModuleRegistry {
    /// Directory holding the compiled modules.
    module_dir: PathBuf,

    /// Selector -> library stem (e.g. "english" -> "eng_greeter").
    entries: BTreeMap<String, String>,
}

impl ModuleRegistry {
    /// Create a registry over the given module directory with the
    /// built-in languages registered.
    pub fn new(module_dir: impl Into<PathBuf>) -> Self {
        let mut registry = Self {
            module_dir: module_dir.into(),
            entries: BTreeMap::new(),
        };
        registry.register("english", "eng_greeter");
        registry.register("chinese", "chi_greeter");
        registry.register("swedish", "swe_greeter");
        registry
    }

    /// Register a language selector for a module library stem.
    pub fn register(&mut self, language: impl Into<String>, stem: impl Into<String>) {
        self.entries.insert(language.into(), stem.into());
    }

    /// Resolve a selector to the path of its module.
    ///
    /// Fails with [`GreeterError::UnknownLanguage`] without touching
    /// the filesystem.
    pub fn resolve(&self, language: &str) -> Result<PathBuf> {
        let stem = self
            .entries
            .get(language)
            .ok_or_else(|| GreeterError::UnknownLanguage(language.to_string()))?;
        Ok(self.module_dir.join(library_file_name(stem)))
    }

    /// Registered language selectors, in sorted order.
    pub fn languages(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    /// The directory modules are resolved against.
    pub fn module_dir(&self) -> &Path {
        &self.module_dir
    }
}

impl Default for ModuleRegistry {
    fn default() -> Self {
        Self::new(defaults::MODULE_DIR)
    }
}
