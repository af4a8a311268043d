mod catalog;
mod error;
mod flags;
pub mod registry;
mod result;


pub use catalog::{format_wildcards, CatalogEntry, WILDCARD_SEPARATOR};
pub use error::{ErrorSeverity, LoadError, LoadErrorKind};
pub use flags::ParserFlags;
pub use registry::ParserRegistry;
pub use result::{LoadResult, Loaded};

use std::path::Path;

/// Core trait that all format handlers must implement
pub trait Parser: Send + Sync {
    /// Stable, human-readable name used in catalogs and messages
    fn name(&self) -> &str;

    /// Lowercase extensions (no leading dot) this parser claims right now
    ///
    /// May be empty when a runtime precondition is unmet. The parser then
    /// stays registered but is never selected.
    fn extensions(&self) -> &[&'static str];

    /// Declared structural capabilities
    fn flags(&self) -> ParserFlags;

    /// Parse the file at `path`
    ///
    /// # Returns
    /// The document plus any warnings, or a single fatal error
    fn load(&self, path: &Path) -> LoadResult;

    fn has_flag(&self, flag: ParserFlags) -> bool {
        self.flags().contains(flag)
    }

    /// Whether `ext` is among the currently active extensions
    fn claims(&self, ext: &str) -> bool {
        let ext = normalize_extension(ext);
        self.extensions().iter().any(|e| e.eq_ignore_ascii_case(&ext))
    }
}

/// Lowercase and strip a leading dot: `".RTF"` -> `"rtf"`
pub fn normalize_extension(ext: &str) -> String {
    ext.trim().trim_start_matches('.').to_lowercase()
}

/// Normalized extension of a path, if it has one
pub fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(normalize_extension)
        .filter(|e| !e.is_empty())
}
