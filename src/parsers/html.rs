use super::decode::{decode_utf8, read_source};
use crate::document::{Document, DocumentBuilder};
use crate::parser::{LoadResult, Loaded, Parser, ParserFlags};
use scraper::{ElementRef, Html, Node};
use std::path::Path;

const EXTENSIONS: &[&str] = &["html", "htm", "xhtml"];

/// Elements that start and end on their own line
const BLOCK_ELEMENTS: &[&str] = &[
    "address", "aside", "blockquote", "body", "center", "dd", "div", "dl", "dt", "figcaption",
    "figure", "footer", "form", "header", "main", "nav", "p", "table", "tr",
];

/// Elements whose content is never shown
const SKIPPED_ELEMENTS: &[&str] = &["script", "style", "noscript", "template", "iframe"];

/// HTML and XHTML documents
///
/// Also the intermediate format for converted office documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlParser;

impl HtmlParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse markup into a document; the title comes from `<title>` if any
    pub fn parse_str(&self, source: &str) -> Document {
        let html = Html::parse_document(source);
        let mut builder = DocumentBuilder::new();
        walk(html.root_element(), &mut builder);
        builder.build()
    }
}

impl Parser for HtmlParser {
    fn name(&self) -> &str {
        "HTML Documents"
    }

    fn extensions(&self) -> &[&'static str] {
        EXTENSIONS
    }

    fn flags(&self) -> ParserFlags {
        ParserFlags::SECTIONS | ParserFlags::TOC | ParserFlags::LISTS
    }

    fn load(&self, path: &Path) -> LoadResult {
        let (source, warning) = decode_utf8(read_source(path)?, path);

        let mut document = self.parse_str(&source);
        if document.title.is_none() {
            document.title = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned());
        }

        let loaded = Loaded::clean(document);
        Ok(match warning {
            Some(w) => loaded.with_warning(w),
            None => loaded,
        })
    }
}

fn heading_level(name: &str) -> Option<u8> {
    match name {
        "h1" => Some(1),
        "h2" => Some(2),
        "h3" => Some(3),
        "h4" => Some(4),
        "h5" => Some(5),
        "h6" => Some(6),
        _ => None,
    }
}

fn walk(element: ElementRef<'_>, builder: &mut DocumentBuilder) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => builder.push_text(text),
            Node::Element(el) => {
                let Some(child_ref) = ElementRef::wrap(child) else {
                    continue;
                };
                let name = el.name();

                if SKIPPED_ELEMENTS.contains(&name) {
                    continue;
                }
                if let Some(level) = heading_level(name) {
                    let text: String = child_ref.text().collect();
                    builder.heading(level, &text);
                    continue;
                }

                match name {
                    "head" => read_head(child_ref, builder),
                    "title" => builder.set_title(child_ref.text().collect::<String>()),
                    "br" => builder.line_break(),
                    "hr" => builder.section_break(),
                    "section" | "article" => {
                        builder.section_break();
                        walk(child_ref, builder);
                        builder.line_break();
                    }
                    "ul" | "ol" => {
                        builder.start_list();
                        walk(child_ref, builder);
                        builder.line_break();
                    }
                    "li" => {
                        builder.start_list_item();
                        walk(child_ref, builder);
                        builder.line_break();
                    }
                    "pre" => {
                        builder.line_break();
                        let text: String = child_ref.text().collect();
                        for line in text.lines() {
                            builder.push_line(line);
                        }
                    }
                    _ if BLOCK_ELEMENTS.contains(&name) => {
                        builder.line_break();
                        walk(child_ref, builder);
                        builder.line_break();
                    }
                    _ => walk(child_ref, builder),
                }
            }
            _ => {}
        }
    }
}

/// Pull title and author out of `<head>`; nothing in it is body text
fn read_head(head: ElementRef<'_>, builder: &mut DocumentBuilder) {
    for el in head.descendants().filter_map(ElementRef::wrap) {
        match el.value().name() {
            "title" if !builder.has_title() => {
                builder.set_title(el.text().collect::<String>());
            }
            "meta" => {
                let is_author = el
                    .value()
                    .attr("name")
                    .is_some_and(|n| n.eq_ignore_ascii_case("author"));
                if let (true, Some(content)) = (is_author, el.value().attr("content")) {
                    builder.set_author(content);
                }
            }
            _ => {}
        }
    }
}
