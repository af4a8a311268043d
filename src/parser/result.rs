use super::LoadError;
use crate::document::Document;

/// Outcome of a successful load
///
/// `warnings` only ever holds warning-severity errors; a fatal error is
/// returned as the `Err` side of [`LoadResult`] instead.
#[derive(Debug, Clone, PartialEq)]
pub struct Loaded {
    pub document: Document,
    pub warnings: Vec<LoadError>,
}

/// Result of [`Parser::load`](super::Parser::load)
pub type LoadResult = Result<Loaded, LoadError>;

impl Loaded {
    /// A document with nothing to report
    pub fn clean(document: Document) -> Self {
        Self {
            document,
            warnings: Vec::new(),
        }
    }

    /// Attach a non-fatal problem
    ///
    /// Error-severity values are downgraded by rebuilding them as degraded
    /// warnings so the invariant above holds.
    pub fn with_warning(mut self, warning: LoadError) -> Self {
        let warning = if warning.is_warning() {
            warning
        } else {
            let rebuilt = LoadError::degraded(warning.message());
            match warning.file_path() {
                Some(path) => rebuilt.with_path(path),
                None => rebuilt,
            }
        };
        self.warnings.push(warning);
        self
    }

    pub fn is_degraded(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn into_document(self) -> Document {
        self.document
    }
}

impl From<Document> for Loaded {
    fn from(document: Document) -> Self {
        Self::clean(document)
    }
}
