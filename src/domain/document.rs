//! Document model and frontmatter boundary rule.
//!
//! This module is intentionally I/O-free: it describes one document in
//! flight through the pipeline.

/// Marker delimiting a frontmatter block.
pub const FRONTMATTER_MARKER: &str = "---";

/// What kind of document is being migrated. Posts get a synthesized
/// description; diary entries do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Post,
    Entry,
}

/// One source document handed over by the file collector.
#[derive(Debug, Clone)]
pub struct Document {
    pub kind: DocumentKind,
    pub file_name: String,
    pub text: String,
}

impl Document {
    pub fn new(kind: DocumentKind, file_name: impl Into<String>, text: impl Into<String>) -> Self {
        Document {
            kind,
            file_name: file_name.into(),
            text: text.into(),
        }
    }
}

/// Byte offsets of a document's frontmatter block.
///
/// `close` is the offset of the closing marker; the opening marker is always
/// at offset 0. The split is substring-based, not line-based: the closing
/// marker is the first occurrence of `---` at or after byte 3, wherever it
/// falls. An unclosed block counts as no frontmatter at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontmatterSplit {
    close: usize,
}

impl FrontmatterSplit {
    /// The full frontmatter block, both markers included.
    pub fn block<'a>(&self, text: &'a str) -> &'a str {
        &text[..self.close + FRONTMATTER_MARKER.len()]
    }

    /// Everything up to (but not including) the closing marker.
    pub fn before_close<'a>(&self, text: &'a str) -> &'a str {
        &text[..self.close]
    }

    /// Everything from the closing marker onward.
    pub fn from_close<'a>(&self, text: &'a str) -> &'a str {
        &text[self.close..]
    }

    /// The body: everything after the closing marker.
    pub fn body<'a>(&self, text: &'a str) -> &'a str {
        &text[self.close + FRONTMATTER_MARKER.len()..]
    }
}

/// Locate the frontmatter block, if any.
///
/// Every stage that needs the frontmatter boundary goes through this one
/// function, so all stages agree on where the block ends.
pub fn split_frontmatter(text: &str) -> Option<FrontmatterSplit> {
    if !text.starts_with(FRONTMATTER_MARKER) {
        return None;
    }
    let offset = FRONTMATTER_MARKER.len();
    text[offset..]
        .find(FRONTMATTER_MARKER)
        .map(|pos| FrontmatterSplit {
            close: offset + pos,
        })
}
