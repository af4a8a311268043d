use crate::convert::{ConvertError, Converter, ScratchDir};
use crate::parser::{LoadError, LoadResult, Parser, ParserFlags};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

/// A parser that converts its input with an external tool first
///
/// The converter writes an intermediate file into a private scratch slot;
/// the delegate parses that file and its result is returned unchanged. The
/// slot, and everything in it, is removed before `load` returns on every
/// path. While the converter is unavailable the parser claims no
/// extensions.
pub struct TranscodingParser {
    name: &'static str,
    extensions: &'static [&'static str],
    intermediate: &'static str,
    converter: Arc<dyn Converter>,
    delegate: Box<dyn Parser>,
    scratch: ScratchDir,
}

impl TranscodingParser {
    /// # Arguments
    /// * `intermediate` - Extension the converter is asked to produce (e.g. "html")
    /// * `delegate` - Parser for the intermediate format
    pub fn new(
        name: &'static str,
        extensions: &'static [&'static str],
        intermediate: &'static str,
        converter: Arc<dyn Converter>,
        delegate: Box<dyn Parser>,
        scratch: ScratchDir,
    ) -> Self {
        Self {
            name,
            extensions,
            intermediate,
            converter,
            delegate,
            scratch,
        }
    }

    pub fn intermediate(&self) -> &str {
        self.intermediate
    }

    pub fn scratch(&self) -> &ScratchDir {
        &self.scratch
    }

    fn unavailable(&self) -> LoadError {
        LoadError::environment(format!(
            "{} is not installed or not on PATH; it is required to open {}",
            self.converter.program(),
            self.name
        ))
    }
}

impl Parser for TranscodingParser {
    fn name(&self) -> &str {
        self.name
    }

    fn extensions(&self) -> &[&'static str] {
        if self.converter.is_available() {
            self.extensions
        } else {
            &[]
        }
    }

    fn flags(&self) -> ParserFlags {
        self.delegate.flags()
    }

    fn load(&self, path: &Path) -> LoadResult {
        if !path.is_file() {
            return Err(LoadError::input("file not found").with_path(path));
        }
        if !self.converter.is_available() {
            return Err(self.unavailable().with_path(path));
        }

        let slot = self.scratch.claim().map_err(|e| {
            LoadError::environment(format!(
                "cannot prepare scratch directory {}: {}",
                self.scratch.root().display(),
                e
            ))
            .with_path(path)
        })?;

        self.converter
            .convert(path, self.intermediate, slot.dir())
            .map_err(|e| match e {
                ConvertError::NotFound(_) => self.unavailable().with_path(path),
                other => LoadError::pipeline(format!(
                    "conversion to {} failed: {}",
                    self.intermediate, other
                ))
                .with_path(path),
            })?;

        let artifact = slot.artifact_path(path, self.intermediate);
        if !artifact.is_file() {
            let missing = ConvertError::MissingOutput(artifact);
            return Err(LoadError::pipeline(missing.to_string()).with_path(path));
        }

        debug!(artifact = %artifact.display(), delegate = self.delegate.name(), "delegating");
        let result = self.delegate.load(&artifact);
        drop(slot);

        match &result {
            Ok(loaded) => info!(
                source = %path.display(),
                warnings = loaded.warnings.len(),
                "transcoded document loaded"
            ),
            Err(e) => debug!(source = %path.display(), error = %e, "delegate failed"),
        }
        result
    }
}
