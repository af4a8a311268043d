mod decode;
mod html;
mod text;
mod transcode;


pub use html::HtmlParser;
pub use text::TextParser;
pub use transcode::TranscodingParser;

use crate::convert::{Converter, ConverterConfig, OfficeConverter, ScratchDir};
use crate::parser::ParserRegistry;
use std::sync::Arc;

/// Rich Text Format through the converter, parsed as HTML
pub fn rtf_parser(converter: Arc<dyn Converter>, scratch: ScratchDir) -> TranscodingParser {
    TranscodingParser::new(
        "Rich Text Format",
        &["rtf"],
        "html",
        converter,
        Box::new(HtmlParser::new()),
        scratch,
    )
}

/// Legacy binary Word documents through the converter, parsed as HTML
pub fn word97_parser(converter: Arc<dyn Converter>, scratch: ScratchDir) -> TranscodingParser {
    TranscodingParser::new(
        "Word 97-2003 Documents",
        &["doc"],
        "html",
        converter,
        Box::new(HtmlParser::new()),
        scratch,
    )
}

/// Register every built-in parser, configured from the environment
pub fn register_builtin(registry: &mut ParserRegistry) {
    let config = ConverterConfig::from_env();
    let scratch = ScratchDir::new(config.scratch_root.clone());
    register_builtin_with(registry, Arc::new(OfficeConverter::new(config)), scratch);
}

/// Register every built-in parser around a given converter
///
/// Order: text, HTML, RTF, Word 97-2003. Earlier entries win extension
/// conflicts.
pub fn register_builtin_with(
    registry: &mut ParserRegistry,
    converter: Arc<dyn Converter>,
    scratch: ScratchDir,
) {
    registry.register(TextParser::new());
    registry.register(HtmlParser::new());
    registry.register(rtf_parser(Arc::clone(&converter), scratch.clone()));
    registry.register(word97_parser(converter, scratch));
}
