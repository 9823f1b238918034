//! Extraction of CSS colors from web-page markup.
//!
//! The extractor is a text pipeline, not an HTML parser: comments are
//! stripped, `<script>` blocks dropped wholesale, and `<style>` block
//! contents and inline `style` attribute values scanned as CSS fragments
//! before the remaining markup. Every raw regex match must survive the
//! parser to count; duplicate matches across notations collapse onto their
//! lowercase hex key during ranking.

use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;

use crate::Color;

/// The maximum number of ranked colors reported per page.
pub const MAX_RESULTS: usize = 12;

/// Where on the page a color was first seen.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Usage {
    /// An inline `style="…"` attribute value.
    Inline,
    /// A `<style>` block's contents.
    Style,
    /// Anywhere else in the markup.
    Css,
}

/// A color extracted from a page, with its occurrence count.
#[derive(Clone, Debug, PartialEq)]
pub struct ExtractedColor {
    /// The parsed color.
    pub color: Color,
    /// The lowercase hex key the color deduplicates under.
    pub hex: String,
    /// How often the color occurred, in any notation.
    pub count: usize,
    /// Where the color was first seen.
    pub usage: Usage,
}

// --------------------------------------------------------------------------------------------------------------------

static COMMENTS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("(?s)<!--.*?-->").expect("valid regex"));
static SCRIPTS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<script\b[^>]*>.*?</script>").expect("valid regex"));
static STYLE_BLOCKS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("(?is)<style[^>]*>(.*?)</style>").expect("valid regex"));
static STYLE_ATTRS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)style\s*=\s*["']([^"']*)["']"#).expect("valid regex"));

// The named vocabulary deliberately includes two historical non-colors,
// peach and mint, whose matches validation discards.
static MATCHERS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)#[0-9a-f]{3,8}\b",
        r"(?i)\brgba?\([^)]*\)",
        r"(?i)\bhsla?\([^)]*\)",
        r"(?i)\boklch\([^)]*\)",
        r"(?i)\bhwb\([^)]*\)",
        r"(?ix)\b(?:
            aqua|beige|black|blue|brown|coral|crimson|cyan|darkgray|darkgrey
            |fuchsia|gainsboro|gold|gray|green|grey|indigo|ivory|khaki|lavender
            |lightgray|lightgrey|lime|magenta|maroon|mint|navy|olive|orange|orchid
            |peach|pink|plum|purple|red|salmon|sienna|silver|tan|teal|turquoise
            |violet|wheat|white|whitesmoke|yellow
          )\b",
        r"(?i)\b(?:color|lab|lch|oklab)\([^)]*\)",
    ]
    .into_iter()
    .map(|pattern| Regex::new(pattern).expect("valid regex"))
    .collect()
});

static TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("(?is)<title[^>]*>(.*?)</title>").expect("valid regex"));
static META: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<meta\b[^>]*>").expect("valid regex"));
static META_KEY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)(?:property|name)\s*=\s*["']([^"']*)["']"#).expect("valid regex")
});
static META_CONTENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)content\s*=\s*["']([^"']*)["']"#).expect("valid regex"));

// --------------------------------------------------------------------------------------------------------------------

/// Extract, validate, deduplicate, and rank the colors of the given markup.
pub fn extract(text: &str) -> Vec<ExtractedColor> {
    let text = COMMENTS.replace_all(text, " ");
    let text = SCRIPTS.replace_all(&text, " ");

    let mut raw: Vec<(Color, Usage)> = Vec::new();
    for captures in STYLE_BLOCKS.captures_iter(&text) {
        scan(&captures[1], Usage::Style, &mut raw);
    }
    for captures in STYLE_ATTRS.captures_iter(&text) {
        scan(&captures[1], Usage::Inline, &mut raw);
    }

    let remainder = STYLE_BLOCKS.replace_all(&text, " ");
    let remainder = STYLE_ATTRS.replace_all(&remainder, " ");
    scan(&remainder, Usage::Css, &mut raw);

    rank(raw)
}

/// Scan one text fragment with every notation matcher, keeping the matches
/// the parser accepts.
fn scan(fragment: &str, usage: Usage, raw: &mut Vec<(Color, Usage)>) {
    for matcher in MATCHERS.iter() {
        for found in matcher.find_iter(fragment) {
            if let Ok(color) = found.as_str().parse::<Color>() {
                raw.push((color, usage));
            }
        }
    }
}

/// Deduplicate and rank colors by occurrence count.
///
/// Colors group under their lowercase hex key in first-seen order; the sort
/// is stable, so ties keep that order. At most [`MAX_RESULTS`] colors
/// survive. The routine also serves image-sampled pixels, which arrive as
/// already-parsed colors.
pub fn rank(colors: impl IntoIterator<Item = (Color, Usage)>) -> Vec<ExtractedColor> {
    let mut groups: IndexMap<String, ExtractedColor> = IndexMap::new();
    for (color, usage) in colors {
        let hex = color.hex();
        groups
            .entry(hex.clone())
            .and_modify(|entry| entry.count += 1)
            .or_insert(ExtractedColor {
                color,
                hex,
                count: 1,
                usage,
            });
    }

    let mut ranked: Vec<ExtractedColor> = groups.into_values().collect();
    ranked.sort_by(|entry1, entry2| entry2.count.cmp(&entry1.count));
    ranked.truncate(MAX_RESULTS);
    ranked
}

// --------------------------------------------------------------------------------------------------------------------

/// Determine the page's title, trying `<title>`, the `og:title` meta
/// property, and the `twitter:title` meta property in that order.
pub fn page_title(html: &str) -> String {
    if let Some(captures) = TITLE.captures(html) {
        let title = captures[1].trim();
        if !title.is_empty() {
            return title.to_string();
        }
    }

    for key in ["og:title", "twitter:title"] {
        if let Some(title) = meta_content(html, key) {
            return title;
        }
    }

    "Unknown Website".to_string()
}

fn meta_content(html: &str, key: &str) -> Option<String> {
    for tag in META.find_iter(html) {
        let matches_key = META_KEY
            .captures(tag.as_str())
            .is_some_and(|captures| captures[1].eq_ignore_ascii_case(key));
        if !matches_key {
            continue;
        }
        if let Some(captures) = META_CONTENT.captures(tag.as_str()) {
            let content = captures[1].trim();
            if !content.is_empty() {
                return Some(content.to_string());
            }
        }
    }
    None
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{extract, page_title, rank, Usage, MAX_RESULTS};
    use crate::Color;

    #[test]
    fn test_dedup_across_notations() {
        let colors = extract(
            r#"<div style="color: #FF0000">
               <style>.a { background: #ff0000; border-color: rgb(255, 0, 0); }</style>"#,
        );
        assert_eq!(colors.len(), 1);
        assert_eq!(colors[0].hex, "#ff0000");
        assert_eq!(colors[0].count, 3);
        assert_eq!(colors[0].usage, Usage::Style);
    }

    #[test]
    fn test_usage_tags() {
        let colors = extract(
            r#"<style>.a { color: #111111; }</style>
               <div style="color: #222222">#333333</div>"#,
        );
        let usage_of = |hex: &str| colors.iter().find(|c| c.hex == hex).unwrap().usage;
        assert_eq!(usage_of("#111111"), Usage::Style);
        assert_eq!(usage_of("#222222"), Usage::Inline);
        assert_eq!(usage_of("#333333"), Usage::Css);
    }

    #[test]
    fn test_invalid_matches_discarded() {
        // Five hex digits never spell a color, and peach is not a CSS color
        // even though the vocabulary scans for it.
        assert!(extract("#12345 peach rgb(300, 0, 0)").is_empty());
    }

    #[test]
    fn test_scripts_and_comments_dropped() {
        let colors = extract(
            r##"<!-- #ff0000 --><script>let c = "#00ff00";</script><p>blue</p>"##,
        );
        assert_eq!(colors.len(), 1);
        assert_eq!(colors[0].hex, "#0000ff");
    }

    #[test]
    fn test_style_attribute_inside_script_dropped() {
        // A style="…"-shaped string literal in JavaScript is script content,
        // not an inline attribute.
        let colors = extract(
            r#"<script>var s = 'style="color: #123456"';</script><p>teal</p>"#,
        );
        assert_eq!(colors.len(), 1);
        assert_eq!(colors[0].hex, "#008080");
        assert_eq!(colors[0].usage, Usage::Css);
    }

    #[test]
    fn test_named_and_functional() {
        let colors = extract("teal oklch(0.59 0.186 259.66) hwb(120 20% 30%) color(srgb 1 0 0)");
        assert_eq!(colors.len(), 4);
        assert!(colors.iter().any(|c| c.hex == "#008080"));
        assert!(colors.iter().any(|c| c.hex == "#ff0000"));
    }

    #[test]
    fn test_ranking() {
        let mut colors = Vec::new();
        for (hex, count) in [("#111111", 3), ("#222222", 5), ("#333333", 3), ("#444444", 1)] {
            for _ in 0..count {
                colors.push((hex.parse::<Color>().unwrap(), Usage::Css));
            }
        }

        let ranked = rank(colors);
        let hexes: Vec<&str> = ranked.iter().map(|c| c.hex.as_str()).collect();
        let counts: Vec<usize> = ranked.iter().map(|c| c.count).collect();
        assert_eq!(hexes, ["#222222", "#111111", "#333333", "#444444"]);
        assert_eq!(counts, [5, 3, 3, 1]);
    }

    #[test]
    fn test_truncation() {
        let colors: Vec<_> = (0..20u32)
            .map(|value| (Color::from_24bit(value * 0x010203), Usage::Css))
            .collect();
        assert_eq!(rank(colors).len(), MAX_RESULTS);
    }

    #[test]
    fn test_page_title() {
        assert_eq!(page_title("<title> Example </title>"), "Example");
        assert_eq!(
            page_title(r#"<title></title><meta property="og:title" content="Og">"#),
            "Og"
        );
        assert_eq!(
            page_title(r#"<meta content="Tw" name="twitter:title">"#),
            "Tw"
        );
        assert_eq!(page_title("<p>nothing here</p>"), "Unknown Website");
    }
}
