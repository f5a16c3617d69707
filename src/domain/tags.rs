//! Tag namespace stripping.
//!
//! The vault prefixes every tag with `astro_blog/`; the target site wants
//! bare tags. The frontmatter `tags:` field comes in three shapes (indented
//! list, bracketed single line, bare comma list) and each keeps its exact
//! shape, order, and whitespace; only the prefix is deleted.

use crate::domain::document::split_frontmatter;
use regex::Regex;
use std::sync::OnceLock;

/// Namespace prefix the vault puts on every tag.
pub const TAG_NAMESPACE: &str = "astro_blog/";

fn list_item() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^\s*-\s").unwrap())
}

fn prefixed_list_item() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^(\s*-\s*)astro_blog/").unwrap())
}

/// Strip the tag namespace prefix from the frontmatter `tags:` field.
///
/// Documents without frontmatter, or without a `tags:` marker in the
/// frontmatter, pass through untouched. The body is never altered.
pub fn normalize_tags(text: &str) -> String {
    let Some(split) = split_frontmatter(text) else {
        return text.to_string();
    };
    let head = split.before_close(text);
    if !head.contains("tags:") {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut lines = head.split_inclusive('\n').peekable();

    while let Some(line) = lines.next() {
        let is_tags_line = line.trim_start().starts_with("tags:");
        if !is_tags_line {
            out.push_str(line);
            continue;
        }

        let value = &line.trim_start()["tags:".len()..];
        if value.trim().is_empty() {
            // Multi-line shape: the value lives in the indented list below.
            out.push_str(line);
            while let Some(next) = lines.peek() {
                if !list_item().is_match(next) {
                    break;
                }
                let item = lines.next().unwrap();
                out.push_str(&prefixed_list_item().replace(item, "$1"));
            }
        } else {
            // Single-line shape, bracketed or bare: strip every occurrence.
            out.push_str(&line.replace(TAG_NAMESPACE, ""));
        }
    }

    out.push_str(split.from_close(text));
    out
}
