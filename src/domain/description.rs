//! Description synthesis for blog posts.
//!
//! Derives a plain-text excerpt from the document body and injects it as a
//! `description` frontmatter field. Diary entries never go through this
//! stage.

use crate::domain::document::{split_frontmatter, FRONTMATTER_MARKER};
use regex::{NoExpand, Regex};
use std::sync::OnceLock;

/// How many characters of plain text make up the excerpt.
const EXCERPT_LEN: usize = 70;

fn link_noise() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"\[(.*?)\]\(.*?\)").unwrap())
}

fn markup_noise() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"[*_~`#>]+").unwrap())
}

fn wiki_image_noise() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"!\[\[.*?\]\]").unwrap())
}

fn standard_image_noise() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"!\[.*?\]\(.*?\)").unwrap())
}

fn whitespace_runs() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"\s+").unwrap())
}

fn description_field() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    // [^\r\n]* rather than .* so a CRLF line keeps its carriage return.
    REGEX.get_or_init(|| Regex::new(r"description:[^\r\n]*").unwrap())
}

/// Build the excerpt from the document body.
///
/// Frontmatter never contributes. Markup is stripped in a fixed order: links
/// keep their text, formatting characters vanish, image references vanish,
/// whitespace collapses. The trailing ellipsis is appended unconditionally,
/// even when the body is shorter than the excerpt length.
pub fn synthesize_description(text: &str) -> String {
    let body = match split_frontmatter(text) {
        Some(split) => split.body(text),
        None => text,
    };

    let plain = body.replace('\n', " ").replace('\r', "");
    let plain = link_noise().replace_all(&plain, "$1");
    let plain = markup_noise().replace_all(&plain, "");
    let plain = wiki_image_noise().replace_all(&plain, "");
    let plain = standard_image_noise().replace_all(&plain, "");
    let plain = whitespace_runs().replace_all(&plain, " ");

    let excerpt: String = plain.trim().chars().take(EXCERPT_LEN).collect();
    format!("{}...", excerpt)
}

/// Inject the synthesized description into the document's frontmatter.
///
/// An existing `description:` line is replaced in place (unquoted value); a
/// missing one is appended before the closing marker (quoted value); a
/// document without frontmatter gets a fresh block prepended. The quoting
/// asymmetry between replace and insert is deliberate; already-published
/// content depends on it.
pub fn apply_description(text: &str) -> String {
    match split_frontmatter(text) {
        Some(split) => {
            let description = synthesize_description(text);
            let head = split.before_close(text);
            let rest = split.from_close(text);
            if head.contains("description:") {
                let line = format!("description: {}", description);
                let updated = description_field().replace(head, NoExpand(&line));
                format!("{}{}", updated, rest)
            } else {
                format!("{}description: \"{}\"\n{}", head, description, rest)
            }
        }
        // An unclosed block counts as no frontmatter, but the leading
        // marker still means there is nowhere safe to put the field:
        // leave the document untouched.
        None if text.starts_with(FRONTMATTER_MARKER) => text.to_string(),
        None => {
            let description = synthesize_description(text);
            format!("---\ndescription: \"{}\"\n---\n\n{}", description, text)
        }
    }
}
