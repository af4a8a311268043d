use super::{
    extension_of, format_wildcards, normalize_extension, CatalogEntry, LoadError, LoadResult,
    Parser,
};
use once_cell::sync::OnceCell;
use std::path::Path;
use tracing::debug;

static GLOBAL: OnceCell<ParserRegistry> = OnceCell::new();

/// Ordered collection of every known parser
///
/// Registration order is the lookup tie-break: when two active parsers
/// claim the same extension, the one registered first wins.
pub struct ParserRegistry {
    parsers: Vec<Box<dyn Parser>>,
}

impl ParserRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            parsers: Vec::new(),
        }
    }

    /// Create a registry holding the built-in parsers
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        crate::parsers::register_builtin(&mut registry);
        registry
    }

    /// Append a parser
    ///
    /// No uniqueness check happens here; active extensions are only known
    /// at lookup time.
    ///
    /// # Example
    /// ```ignore
    /// registry.register(TextParser::new());
    /// registry.register(HtmlParser::new());
    /// ```
    pub fn register(&mut self, parser: impl Parser + 'static) {
        self.register_boxed(Box::new(parser));
    }

    pub fn register_boxed(&mut self, parser: Box<dyn Parser>) {
        debug!(parser = parser.name(), index = self.parsers.len(), "registered parser");
        self.parsers.push(parser);
    }

    /// Every registered parser in registration order, active or not
    pub fn all(&self) -> impl Iterator<Item = &dyn Parser> {
        self.parsers.iter().map(|p| &**p)
    }

    /// Number of registered parsers, including inactive ones
    pub fn parser_count(&self) -> usize {
        self.parsers.len()
    }

    /// First parser, in registration order, currently claiming `ext`
    ///
    /// Matching is case-insensitive and ignores a leading dot.
    pub fn find_by_extension(&self, ext: &str) -> Option<&dyn Parser> {
        let ext = normalize_extension(ext);
        if ext.is_empty() {
            return None;
        }
        let found = self.all().find(|p| p.claims(&ext));
        debug!(extension = %ext, parser = ?found.map(|p| p.name()), "parser lookup");
        found
    }

    /// Select a parser from a file path's extension
    pub fn find_for_path(&self, path: &Path) -> Option<&dyn Parser> {
        extension_of(path).and_then(|ext| self.find_by_extension(&ext))
    }

    /// One entry per parser with at least one active extension
    pub fn catalog(&self) -> Vec<CatalogEntry> {
        self.all()
            .filter_map(|p| {
                let extensions = p.extensions();
                if extensions.is_empty() {
                    None
                } else {
                    Some(CatalogEntry::new(p.name(), extensions))
                }
            })
            .collect()
    }

    /// File-dialog filter string, e.g. `Text Files (*.txt)|*.txt|...`
    pub fn supported_wildcards(&self) -> String {
        format_wildcards(&self.catalog())
    }

    /// Every active extension, deduplicated, in registration order
    pub fn supported_extensions(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for parser in self.all() {
            for ext in parser.extensions() {
                let ext = ext.to_lowercase();
                if !seen.contains(&ext) {
                    seen.push(ext);
                }
            }
        }
        seen
    }

    /// Select a parser for `path` and load it
    pub fn load(&self, path: &Path) -> LoadResult {
        let parser = self.find_for_path(path).ok_or_else(|| {
            let message = match extension_of(path) {
                Some(ext) => format!("no parser available for .{} files", ext),
                None => "file has no extension".to_string(),
            };
            LoadError::input(message).with_path(path)
        })?;
        debug!(path = %path.display(), parser = parser.name(), "loading");
        parser.load(path)
    }
}

impl Default for ParserRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Install a custom process-wide registry
///
/// Must run before the first call to [`global`]; otherwise the registry is
/// handed back unchanged.
pub fn install(registry: ParserRegistry) -> Result<(), ParserRegistry> {
    GLOBAL.set(registry)
}

/// The process-wide registry, built with the built-in parsers on first use
pub fn global() -> &'static ParserRegistry {
    GLOBAL.get_or_init(ParserRegistry::with_builtin)
}

/// Shorthand for `global().find_by_extension(ext)`
pub fn find_parser_by_extension(ext: &str) -> Option<&'static dyn Parser> {
    global().find_by_extension(ext)
}

/// Shorthand for `global().supported_wildcards()`
pub fn supported_wildcards() -> String {
    global().supported_wildcards()
}
