use bitflags::bitflags;

bitflags! {
    /// Optional structural features a format can expose
    ///
    /// Declared per parser and independent of whether a given document
    /// actually uses them.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
    pub struct ParserFlags: u8 {
        /// Section breaks between logical parts of the document
        const SECTIONS = 1 << 0;
        /// A navigable table of contents
        const TOC = 1 << 1;
        /// Page boundaries
        const PAGES = 1 << 2;
        /// List and list-item structure
        const LISTS = 1 << 3;
    }
}

impl ParserFlags {
    /// Lowercase names of the set flags, in declaration order
    pub fn names(self) -> Vec<&'static str> {
        self.iter_names()
            .map(|(name, _)| match name {
                "SECTIONS" => "sections",
                "TOC" => "toc",
                "PAGES" => "pages",
                "LISTS" => "lists",
                other => other,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_union_and_membership() {
        let flags = ParserFlags::SECTIONS | ParserFlags::TOC;
        assert!(flags.contains(ParserFlags::SECTIONS));
        assert!(flags.contains(ParserFlags::TOC));
        assert!(!flags.contains(ParserFlags::PAGES));
        assert!(!flags.contains(ParserFlags::SECTIONS | ParserFlags::LISTS));
    }

    #[test]
    fn test_names() {
        assert!(ParserFlags::empty().names().is_empty());
        assert_eq!(
            (ParserFlags::LISTS | ParserFlags::SECTIONS).names(),
            vec!["sections", "lists"]
        );
    }
}
