// Public API exports
pub mod convert;
pub mod document;
pub mod parser;
pub mod parsers;

#[cfg(test)]
pub(crate) mod testing;

// Re-export main types for convenience
pub use document::{Document, DocumentBuilder, Marker, MarkerKind, TocItem};

pub use parser::registry::{find_parser_by_extension, global, install, supported_wildcards};
pub use parser::{
    CatalogEntry, ErrorSeverity, LoadError, LoadErrorKind, LoadResult, Loaded, Parser,
    ParserFlags, ParserRegistry,
};

pub use parsers::{HtmlParser, TextParser, TranscodingParser};

pub use convert::{ConvertError, Converter, ConverterConfig, OfficeConverter, ScratchDir};
