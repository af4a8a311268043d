mod builder;

#[cfg(test)]
mod tests;

pub use builder::DocumentBuilder;

use serde::Serialize;

/// Normalized in-memory representation produced by a successful load
///
/// Text is stored as one flat buffer; structure is recorded as markers
/// pointing at byte offsets into it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    pub title: Option<String>,
    pub author: Option<String>,
    /// Flattened UTF-8 text content
    pub text: String,
    /// Structural markers, sorted by position
    pub markers: Vec<Marker>,
    /// Table of contents built from headings
    pub toc: Vec<TocItem>,
}

/// A structural point in the text buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Marker {
    /// Byte offset into [`Document::text`]
    pub position: usize,
    pub kind: MarkerKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerKind {
    SectionBreak,
    /// Heading of level 1..=6
    Heading(u8),
    PageBreak,
    List,
    ListItem,
}

/// Table of contents entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TocItem {
    pub name: String,
    /// Byte offset of the heading in the text buffer
    pub offset: usize,
    pub level: u8,
    pub children: Vec<TocItem>,
}

impl Document {
    /// Markers matching a predicate on their kind
    pub fn markers_where(&self, pred: impl Fn(MarkerKind) -> bool) -> impl Iterator<Item = &Marker> {
        self.markers.iter().filter(move |m| pred(m.kind))
    }

    /// All markers of exactly this kind
    pub fn markers_of(&self, kind: MarkerKind) -> impl Iterator<Item = &Marker> {
        self.markers_where(move |k| k == kind)
    }

    pub fn section_count(&self) -> usize {
        self.markers_of(MarkerKind::SectionBreak).count()
    }

    pub fn heading_count(&self) -> usize {
        self.markers_where(|k| matches!(k, MarkerKind::Heading(_)))
            .count()
    }

    pub fn list_item_count(&self) -> usize {
        self.markers_of(MarkerKind::ListItem).count()
    }

    /// Number of TOC entries at every depth
    pub fn toc_len(&self) -> usize {
        fn count(items: &[TocItem]) -> usize {
            items.iter().map(|i| 1 + count(&i.children)).sum()
        }
        count(&self.toc)
    }

    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}
