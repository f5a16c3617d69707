//! Wiki-style link rewriting.
//!
//! Three disjoint rules over the whole document text:
//! `![[name]]` becomes markdown image syntax pointing into the shared
//! assets directory, `[[YYYY-MM-DD_title]]` becomes a diary permalink, and
//! `[[NNNNN_title]]` (five-digit sequence number) becomes a blog permalink.
//! Anything else in double brackets is left alone.
//!
//! The image rule runs first: it consumes the `![[...]]` form entirely, so
//! the bare-bracket rules can never see (or half-rewrite) an image
//! reference. The date and numeric shapes cannot overlap each other — one
//! needs a hyphen where the other needs a fifth digit.

use regex::{Captures, Regex};
use std::sync::OnceLock;

fn wiki_image() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"!\[\[(.*?)\]\]").unwrap())
}

fn diary_link() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"\[\[(\d{4})-(\d{2})-(\d{2})_(.*?)\]\]").unwrap())
}

fn blog_link() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"\[\[(\d{5})_(.*?)\]\]").unwrap())
}

/// Rewrite all wiki-style references in the document.
pub fn rewrite_links(text: &str) -> String {
    let text = wiki_image().replace_all(text, "![Image](../../assets/$1)");
    let text = diary_link().replace_all(&text, "[$4](/diary/$1/$2/$3)");
    let text = blog_link().replace_all(&text, |caps: &Captures| {
        // Leading zeros drop out of the blog id: 00007 -> /blog/7.
        let id: u64 = caps[1].parse().unwrap_or(0);
        format!("[{}](/blog/{})", &caps[2], id)
    });
    text.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_reference() {
        assert_eq!(
            rewrite_links("![[cat.png]]"),
            "![Image](../../assets/cat.png)"
        );
    }

    #[test]
    fn test_diary_reference() {
        assert_eq!(
            rewrite_links("[[2024-01-05_trip]]"),
            "[trip](/diary/2024/01/05)"
        );
    }

    #[test]
    fn test_blog_reference_drops_leading_zeros() {
        assert_eq!(rewrite_links("[[00007_hello]]"), "[hello](/blog/7)");
        assert_eq!(rewrite_links("[[00000_zero]]"), "[zero](/blog/0)");
        assert_eq!(rewrite_links("[[12345_big]]"), "[big](/blog/12345)");
    }

    #[test]
    fn test_rules_are_exclusive() {
        // A date-named image stays an image; the diary rule never sees it.
        assert_eq!(
            rewrite_links("![[2024-01-05_trip]]"),
            "![Image](../../assets/2024-01-05_trip)"
        );
        // A numeric-named image likewise.
        assert_eq!(
            rewrite_links("![[00007_hello]]"),
            "![Image](../../assets/00007_hello)"
        );
        // A date shape never matches the numeric rule and vice versa.
        assert_eq!(
            rewrite_links("[[2024-01-05_a]] [[00042_b]]"),
            "[a](/diary/2024/01/05) [b](/blog/42)"
        );
    }

    #[test]
    fn test_unmatched_brackets_untouched() {
        assert_eq!(rewrite_links("[[just a note]]"), "[[just a note]]");
        assert_eq!(rewrite_links("[[123_short]]"), "[[123_short]]");
        assert_eq!(rewrite_links("[[2024-1-5_bad]]"), "[[2024-1-5_bad]]");
    }

    #[test]
    fn test_multiple_occurrences() {
        let text = "a ![[x.png]] b [[2020-12-31_eve]] c ![[y.png]]";
        assert_eq!(
            rewrite_links(text),
            "a ![Image](../../assets/x.png) b [eve](/diary/2020/12/31) c ![Image](../../assets/y.png)"
        );
    }

    #[test]
    fn test_plain_text_untouched() {
        let text = "no links here, just [markdown](https://example.com)";
        assert_eq!(rewrite_links(text), text);
    }
}
