use std::fmt;

/// Separator between clauses and between label and pattern
pub const WILDCARD_SEPARATOR: char = '|';

/// One file-dialog filter clause: a format name and its active extensions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub name: String,
    pub extensions: Vec<String>,
}

impl CatalogEntry {
    pub fn new<S: AsRef<str>>(name: impl Into<String>, extensions: &[S]) -> Self {
        Self {
            name: name.into(),
            extensions: extensions
                .iter()
                .map(|e| e.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// `*.ext1;*.ext2`
    pub fn pattern(&self) -> String {
        self.extensions
            .iter()
            .map(|e| format!("*.{}", e))
            .collect::<Vec<_>>()
            .join(";")
    }

    /// `Name (*.ext1;*.ext2)`
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.pattern())
    }
}

impl fmt::Display for CatalogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.label(), WILDCARD_SEPARATOR, self.pattern())
    }
}

/// Join entries into a `Label|pattern|Label2|pattern2` filter string
///
/// Entries without extensions are skipped.
pub fn format_wildcards(entries: &[CatalogEntry]) -> String {
    entries
        .iter()
        .filter(|e| !e.extensions.is_empty())
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(&WILDCARD_SEPARATOR.to_string())
}
