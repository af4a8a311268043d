use super::{DocumentBuilder, MarkerKind};

#[test]
fn test_push_text_collapses_whitespace() {
    let mut builder = DocumentBuilder::new();
    builder.push_text("  Hello \n\t world ");
    builder.push_text("again");
    let doc = builder.build();

    assert_eq!(doc.text, "Hello world again");
}

#[test]
fn test_line_break_is_not_doubled() {
    let mut builder = DocumentBuilder::new();
    builder.push_text("one");
    builder.line_break();
    builder.line_break();
    builder.push_text("two");
    let doc = builder.build();

    assert_eq!(doc.text, "one\ntwo");
}

#[test]
fn test_heading_records_marker_and_toc() {
    let mut builder = DocumentBuilder::new();
    builder.push_text("intro");
    builder.heading(1, "  Chapter   One ");
    builder.push_text("body");
    let doc = builder.build();

    assert_eq!(doc.text, "intro\nChapter One\nbody");
    assert_eq!(doc.heading_count(), 1);
    assert_eq!(doc.toc.len(), 1);
    assert_eq!(doc.toc[0].name, "Chapter One");
    assert_eq!(doc.toc[0].offset, 6);
    assert!(doc.text[doc.toc[0].offset..].starts_with("Chapter One"));
}

#[test]
fn test_empty_heading_is_dropped() {
    let mut builder = DocumentBuilder::new();
    builder.heading(2, "   ");
    let doc = builder.build();

    assert_eq!(doc.heading_count(), 0);
    assert!(doc.toc.is_empty());
}

#[test]
fn test_toc_nests_by_level() {
    let mut builder = DocumentBuilder::new();
    builder.heading(1, "Part I");
    builder.heading(2, "Chapter 1");
    builder.heading(3, "Scene");
    builder.heading(2, "Chapter 2");
    builder.heading(1, "Part II");
    let doc = builder.build();

    assert_eq!(doc.toc.len(), 2);
    assert_eq!(doc.toc[0].children.len(), 2);
    assert_eq!(doc.toc[0].children[0].children[0].name, "Scene");
    assert_eq!(doc.toc[1].name, "Part II");
    assert_eq!(doc.toc_len(), 5);
}

#[test]
fn test_duplicate_markers_at_same_position_collapse() {
    let mut builder = DocumentBuilder::new();
    builder.push_text("a");
    builder.section_break();
    builder.section_break();
    builder.push_text("b");
    let doc = builder.build();

    assert_eq!(doc.section_count(), 1);
    assert_eq!(doc.markers[0].position, 2);
}

#[test]
fn test_trailing_markers_are_clamped_to_text() {
    let mut builder = DocumentBuilder::new();
    builder.push_text("end");
    builder.page_break();
    let doc = builder.build();

    assert_eq!(doc.text, "end");
    let pages: Vec<_> = doc.markers_of(MarkerKind::PageBreak).collect();
    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0].position, doc.text.len());
}

#[test]
fn test_lists() {
    let mut builder = DocumentBuilder::new();
    builder.start_list();
    builder.start_list_item();
    builder.push_text("first");
    builder.start_list_item();
    builder.push_text("second");
    let doc = builder.build();

    assert_eq!(doc.text, "first\nsecond");
    assert_eq!(doc.list_item_count(), 2);
    assert_eq!(doc.markers_of(MarkerKind::List).count(), 1);
}

#[test]
fn test_blank_title_is_ignored() {
    let mut builder = DocumentBuilder::new();
    builder.set_title("   ");
    assert!(!builder.has_title());
    builder.set_title(" Report ");
    builder.set_author("A. Writer");
    let doc = builder.build();

    assert_eq!(doc.title.as_deref(), Some("Report"));
    assert_eq!(doc.author.as_deref(), Some("A. Writer"));
    assert!(doc.is_empty());
}
