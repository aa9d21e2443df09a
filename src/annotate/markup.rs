//! Span wrapping helpers shared by both annotation passes.

use std::ops::Range;
use std::sync::OnceLock;

use regex::Regex;

fn span_tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"</?span\b[^>]*>").expect("span tag pattern is valid"))
}

/// Byte ranges of `<span ...>` / `</span>` tags already present in `text`
pub fn tag_ranges(text: &str) -> Vec<Range<usize>> {
    span_tag_re().find_iter(text).map(|m| m.range()).collect()
}

pub fn overlaps_any(start: usize, end: usize, ranges: &[Range<usize>]) -> bool {
    ranges.iter().any(|r| start < r.end && r.start < end)
}

/// Wrap each range in `<span class="{class}">`. Ranges must be sorted and
/// non-overlapping; text outside them is copied unchanged.
pub fn wrap_ranges(text: &str, ranges: &[Range<usize>], class: &str) -> String {
    if ranges.is_empty() {
        return text.to_string();
    }

    let open = format!("<span class=\"{}\">", class);
    let close = "</span>";
    let mut out = String::with_capacity(text.len() + ranges.len() * (open.len() + close.len()));
    let mut cursor = 0;

    for range in ranges {
        out.push_str(&text[cursor..range.start]);
        out.push_str(&open);
        out.push_str(&text[range.start..range.end]);
        out.push_str(close);
        cursor = range.end;
    }
    out.push_str(&text[cursor..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_preserves_surroundings() {
        let out = wrap_ranges("a 94% b", &[2..5], "m");
        assert_eq!(out, "a <span class=\"m\">94%</span> b");
    }

    #[test]
    fn test_wrap_nothing() {
        assert_eq!(wrap_ranges("plain", &[], "m"), "plain");
    }

    #[test]
    fn test_tag_ranges() {
        let text = "x <span class=\"m\">1%</span> y";
        let ranges = tag_ranges(text);
        assert_eq!(ranges.len(), 2);
        assert_eq!(&text[ranges[0].clone()], "<span class=\"m\">");
        assert_eq!(&text[ranges[1].clone()], "</span>");
        assert!(overlaps_any(4, 6, &ranges));
        assert!(!overlaps_any(18, 20, &ranges));
    }

    #[test]
    fn test_comparison_text_is_not_a_tag() {
        assert!(tag_ranges("latency <200ms and > 5 seconds").is_empty());
    }
}
