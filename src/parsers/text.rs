use super::decode::{decode_utf8, read_source};
use crate::document::{Document, DocumentBuilder};
use crate::parser::{LoadResult, Loaded, Parser, ParserFlags};
use std::path::Path;

const EXTENSIONS: &[&str] = &["txt", "log"];

/// Plain text files
///
/// Lines are kept as-is apart from trailing whitespace; the title is the
/// file stem.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextParser;

impl TextParser {
    pub fn new() -> Self {
        Self
    }

    pub fn parse_str(&self, text: &str) -> Document {
        let mut builder = DocumentBuilder::new();
        for line in text.lines() {
            builder.push_line(line);
        }
        builder.build()
    }
}

impl Parser for TextParser {
    fn name(&self) -> &str {
        "Text Files"
    }

    fn extensions(&self) -> &[&'static str] {
        EXTENSIONS
    }

    fn flags(&self) -> ParserFlags {
        ParserFlags::empty()
    }

    fn load(&self, path: &Path) -> LoadResult {
        let (text, warning) = decode_utf8(read_source(path)?, path);

        let mut document = self.parse_str(&text);
        document.title = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned());

        let loaded = Loaded::clean(document);
        Ok(match warning {
            Some(w) => loaded.with_warning(w),
            None => loaded,
        })
    }
}
