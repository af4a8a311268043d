use super::{Document, Marker, MarkerKind, TocItem};

/// Incremental builder used by parsers to assemble a [`Document`]
///
/// Inline text is whitespace-collapsed; block boundaries become single
/// newlines. Markers are recorded at the byte offset where their block starts.
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    title: Option<String>,
    author: Option<String>,
    text: String,
    markers: Vec<Marker>,
    headings: Vec<TocItem>,
    pending_space: bool,
}

impl DocumentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        let title = title.into();
        let title = title.trim();
        if !title.is_empty() {
            self.title = Some(title.to_string());
        }
    }

    pub fn set_author(&mut self, author: impl Into<String>) {
        let author = author.into();
        let author = author.trim();
        if !author.is_empty() {
            self.author = Some(author.to_string());
        }
    }

    pub fn has_title(&self) -> bool {
        self.title.is_some()
    }

    /// Current byte offset in the text buffer
    pub fn position(&self) -> usize {
        self.text.len()
    }

    /// Append inline text, collapsing runs of whitespace into one space
    pub fn push_text(&mut self, text: &str) {
        for ch in text.chars() {
            if ch.is_whitespace() {
                self.pending_space = true;
                continue;
            }
            if self.pending_space && !self.at_line_start() {
                self.text.push(' ');
            }
            self.pending_space = false;
            self.text.push(ch);
        }
    }

    /// Append a line verbatim (trailing whitespace trimmed) and end it
    pub fn push_line(&mut self, line: &str) {
        self.pending_space = false;
        self.text.push_str(line.trim_end());
        self.text.push('\n');
    }

    /// End the current line if anything is on it
    pub fn line_break(&mut self) {
        self.pending_space = false;
        while self.text.ends_with(' ') {
            self.text.pop();
        }
        if !self.at_line_start() {
            self.text.push('\n');
        }
    }

    pub fn section_break(&mut self) {
        self.line_break();
        self.mark(MarkerKind::SectionBreak);
    }

    pub fn page_break(&mut self) {
        self.line_break();
        self.mark(MarkerKind::PageBreak);
    }

    pub fn start_list(&mut self) {
        self.line_break();
        self.mark(MarkerKind::List);
    }

    pub fn start_list_item(&mut self) {
        self.line_break();
        self.mark(MarkerKind::ListItem);
    }

    /// Add a heading line and a TOC entry for it
    ///
    /// Empty headings are dropped. Levels are clamped to 1..=6.
    pub fn heading(&mut self, level: u8, text: &str) {
        let name = text.split_whitespace().collect::<Vec<_>>().join(" ");
        if name.is_empty() {
            return;
        }
        let level = level.clamp(1, 6);

        self.line_break();
        let offset = self.position();
        self.mark(MarkerKind::Heading(level));
        self.push_line(&name);
        self.headings.push(TocItem {
            name,
            offset,
            level,
            children: Vec::new(),
        });
    }

    fn at_line_start(&self) -> bool {
        self.text.is_empty() || self.text.ends_with('\n')
    }

    fn mark(&mut self, kind: MarkerKind) {
        let position = self.position();
        let duplicate = self
            .markers
            .last()
            .is_some_and(|m| m.position == position && m.kind == kind);
        if !duplicate {
            self.markers.push(Marker { position, kind });
        }
    }

    /// Finish the document
    pub fn build(mut self) -> Document {
        let trimmed = self.text.trim_end().len();
        self.text.truncate(trimmed);
        for marker in &mut self.markers {
            marker.position = marker.position.min(trimmed);
        }

        let mut toc = Vec::new();
        for item in self.headings {
            nest(&mut toc, item);
        }

        Document {
            title: self.title,
            author: self.author,
            text: self.text,
            markers: self.markers,
            toc,
        }
    }
}

/// Insert below the last sibling when it is a shallower heading
fn nest(siblings: &mut Vec<TocItem>, item: TocItem) {
    match siblings.last_mut() {
        Some(last) if last.level < item.level => nest(&mut last.children, item),
        _ => siblings.push(item),
    }
}
