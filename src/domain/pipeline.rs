//! Pipeline orchestration.
//!
//! Runs the transformation stages over one document in fixed order:
//! description synthesis (posts only), tag normalization, link rewriting,
//! embed conversion. Each stage is a pure text-to-text function; no state
//! crosses documents.

use crate::domain::description::apply_description;
use crate::domain::document::{Document, DocumentKind};
use crate::domain::embeds::convert_embeds;
use crate::domain::links::rewrite_links;
use crate::domain::tags::normalize_tags;

/// Final output for one document: transformed text plus the file name the
/// collector should write it under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformedDocument {
    pub text: String,
    pub file_name: String,
}

/// Run all stages over one document.
pub fn transform(document: &Document) -> TransformedDocument {
    let mut text = document.text.clone();

    if document.kind == DocumentKind::Post {
        text = apply_description(&text);
    }
    text = normalize_tags(&text);
    text = rewrite_links(&text);

    let outcome = convert_embeds(&text);

    // Embed components only render from .mdx pages; plain documents keep
    // their original name untouched.
    let file_name = if outcome.converted {
        mdx_name(&document.file_name)
    } else {
        document.file_name.clone()
    };

    TransformedDocument {
        text: outcome.text,
        file_name,
    }
}

fn mdx_name(file_name: &str) -> String {
    match file_name.rsplit_once('.') {
        Some((base, _)) => format!("{}.mdx", base),
        None => format!("{}.mdx", file_name),
    }
}
