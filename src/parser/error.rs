use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Whether a failure stopped the load or only degraded the result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorSeverity {
    /// No usable document was produced
    Error,
    /// A document was produced but is incomplete or approximate
    Warning,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorSeverity::Error => f.write_str("error"),
            ErrorSeverity::Warning => f.write_str("warning"),
        }
    }
}

/// Where in the ingestion flow a failure came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadErrorKind {
    /// A required external dependency is missing or broken
    Environment,
    /// The source file is unreadable or unparseable
    Input,
    /// Content was recovered but a declared feature could not be extracted
    Degraded,
    /// The external converter or the delegated parser failed
    Pipeline,
}

impl LoadErrorKind {
    fn default_severity(self) -> ErrorSeverity {
        match self {
            LoadErrorKind::Degraded => ErrorSeverity::Warning,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Structured failure returned by [`Parser::load`](super::Parser::load)
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("{}", display(.file_path, .message))]
pub struct LoadError {
    message: String,
    file_path: Option<PathBuf>,
    severity: ErrorSeverity,
    kind: LoadErrorKind,
}

impl LoadError {
    /// Create an error with an explicit severity
    ///
    /// Warnings are [`LoadErrorKind::Degraded`]; errors are
    /// [`LoadErrorKind::Input`].
    pub fn new(message: impl Into<String>, severity: ErrorSeverity) -> Self {
        let kind = match severity {
            ErrorSeverity::Error => LoadErrorKind::Input,
            ErrorSeverity::Warning => LoadErrorKind::Degraded,
        };
        Self::of_kind(kind, message)
    }

    fn of_kind(kind: LoadErrorKind, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            file_path: None,
            severity: kind.default_severity(),
            kind,
        }
    }

    pub fn environment(message: impl Into<String>) -> Self {
        Self::of_kind(LoadErrorKind::Environment, message)
    }

    pub fn input(message: impl Into<String>) -> Self {
        Self::of_kind(LoadErrorKind::Input, message)
    }

    pub fn pipeline(message: impl Into<String>) -> Self {
        Self::of_kind(LoadErrorKind::Pipeline, message)
    }

    /// Non-fatal: attached to a document that was still produced
    pub fn degraded(message: impl Into<String>) -> Self {
        Self::of_kind(LoadErrorKind::Degraded, message)
    }

    /// Attach the originating file path
    pub fn with_path(mut self, path: impl AsRef<Path>) -> Self {
        self.file_path = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    pub fn severity(&self) -> ErrorSeverity {
        self.severity
    }

    pub fn kind(&self) -> LoadErrorKind {
        self.kind
    }

    pub fn is_warning(&self) -> bool {
        self.severity == ErrorSeverity::Warning
    }

    /// `"{path}: {message}"` when a path is known, otherwise the bare message
    pub fn display_message(&self) -> String {
        display(&self.file_path, &self.message)
    }
}

fn display(file_path: &Option<PathBuf>, message: &str) -> String {
    match file_path {
        Some(path) => format!("{}: {}", path.display(), message),
        None => message.to_string(),
    }
}
