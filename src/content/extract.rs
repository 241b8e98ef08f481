//! Derived post metadata: date, title and excerpt
//!
//! Each field is resolved by trying a list of sources in priority order and
//! falling back to a fixed default when none of them yields a value.

use lazy_static::lazy_static;
use regex::{NoExpand, Regex};

use super::post::PostDate;

/// Excerpts are cut to this many characters before the ellipsis
pub const EXCERPT_LENGTH: usize = 160;

/// Appended to every extracted excerpt
pub const EXCERPT_ELLIPSIS: &str = "...";

/// Used when a document has no line suitable for an excerpt
pub const EXCERPT_PLACEHOLDER: &str = "Click to read more...";

/// Line prefixes that disqualify a line from becoming the excerpt
const NON_PROSE_PREFIXES: [&str; 3] = ["#", ">", "!["];

lazy_static! {
    static ref DATE_RE: Regex =
        Regex::new(r"[0-9]{4}-[0-9]{2}-[0-9]{2}").expect("valid date regex");
    static ref TITLE_RE: Regex = Regex::new(r"(?mR)^# (.*)").expect("valid title regex");
    static ref LINK_RE: Regex = Regex::new(r"\[.*?\]\(.*?\)").expect("valid link regex");
}

type Source = fn(&str) -> Option<String>;

/// Date sources, applied to the file name
const DATE_SOURCES: &[Source] = &[date_token];

/// Title sources, applied to the raw text; the date is the final fallback
const TITLE_SOURCES: &[Source] = &[first_heading];

/// Excerpt sources, applied to the raw text
const EXCERPT_SOURCES: &[Source] = &[first_prose_line];

/// Metadata derived from one document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostMeta {
    pub date: PostDate,
    pub title: String,
    pub excerpt: String,
}

/// Derive date, title and excerpt for a document.
pub fn extract(raw: &str, file_id: &str) -> PostMeta {
    let date = first_match(DATE_SOURCES, file_id)
        .map(PostDate::Stamped)
        .unwrap_or(PostDate::Unknown);
    let title = first_match(TITLE_SOURCES, raw).unwrap_or_else(|| date.to_string());
    let excerpt =
        first_match(EXCERPT_SOURCES, raw).unwrap_or_else(|| EXCERPT_PLACEHOLDER.to_string());

    PostMeta {
        date,
        title,
        excerpt,
    }
}

fn first_match(sources: &[Source], input: &str) -> Option<String> {
    sources.iter().find_map(|source| source(input))
}

/// First `YYYY-MM-DD` token anywhere in the input
fn date_token(file_id: &str) -> Option<String> {
    DATE_RE.find(file_id).map(|m| m.as_str().to_string())
}

/// Text of the first level-1 heading line
fn first_heading(raw: &str) -> Option<String> {
    TITLE_RE
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// First non-blank line that is not a heading, quote or image, cleaned up
fn first_prose_line(raw: &str) -> Option<String> {
    raw.split('\n')
        .find(|line| {
            !line.trim().is_empty()
                && !NON_PROSE_PREFIXES
                    .iter()
                    .any(|prefix| line.starts_with(prefix))
        })
        .map(excerpt_from_line)
}

fn excerpt_from_line(line: &str) -> String {
    let without_bold = line.replace("**", "");
    // Links collapse to a literal `$1`, not to their label
    let without_links = LINK_RE.replace_all(&without_bold, NoExpand("$1"));
    let truncated: String = without_links.chars().take(EXCERPT_LENGTH).collect();
    format!("{}{}", truncated, EXCERPT_ELLIPSIS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_full() {
        let meta = extract("# My Title\n\nSome body text.", "2024-05-01-post.md");
        assert_eq!(meta.date, PostDate::Stamped("2024-05-01".to_string()));
        assert_eq!(meta.title, "My Title");
        assert!(meta.excerpt.starts_with("Some body text."));
        assert_eq!(meta.excerpt, "Some body text....");
    }

    #[test]
    fn test_missing_date_is_unknown() {
        let meta = extract("# Title", "nodatehere.md");
        assert_eq!(meta.date, PostDate::Unknown);
    }

    #[test]
    fn test_first_date_token_wins() {
        let meta = extract("", "2023-01-02-to-2024-03-04.md");
        assert_eq!(meta.date.as_str(), "2023-01-02");
    }

    #[test]
    fn test_date_token_requires_ascii_digits() {
        let meta = extract("", "٢٠٢٤-٠١-٠١-post.md");
        assert!(meta.date.is_unknown());
    }

    #[test]
    fn test_title_falls_back_to_date() {
        let meta = extract("no heading here", "2024-05-01-post.md");
        assert_eq!(meta.title, "2024-05-01");

        let meta = extract("## only a subheading", "untitled.md");
        assert_eq!(meta.title, "Unknown");
    }

    #[test]
    fn test_title_uses_first_heading_line() {
        let meta = extract("intro\n# First\n# Second", "x.md");
        assert_eq!(meta.title, "First");

        let meta = extract("# Windows\r\nbody", "x.md");
        assert_eq!(meta.title, "Windows");
    }

    #[test]
    fn test_excerpt_skips_non_prose_lines() {
        let raw = "# Title\n\n> a quote\n![img](a.png)\n#tag\n   \nThe real start.\nMore.";
        let meta = extract(raw, "x.md");
        assert_eq!(meta.excerpt, "The real start....");
    }

    #[test]
    fn test_excerpt_placeholder_when_nothing_qualifies() {
        let meta = extract("# Title\n> quote\n![i](p.png)\n\n", "x.md");
        assert_eq!(meta.excerpt, EXCERPT_PLACEHOLDER);

        let meta = extract("", "x.md");
        assert_eq!(meta.excerpt, "Click to read more...");
    }

    #[test]
    fn test_excerpt_prefix_check_is_not_trimmed() {
        let meta = extract("  # indented heading", "x.md");
        assert_eq!(meta.excerpt, "  # indented heading...");
    }

    #[test]
    fn test_excerpt_strips_bold_and_collapses_links() {
        let meta = extract("A **bold** claim, see [here](http://x.y) and [t](u).", "x.md");
        assert_eq!(meta.excerpt, "A bold claim, see $1 and $1....");
    }

    #[test]
    fn test_excerpt_truncation() {
        let line = "x".repeat(200);
        let meta = extract(&line, "x.md");
        assert_eq!(meta.excerpt.len(), EXCERPT_LENGTH + EXCERPT_ELLIPSIS.len());
        assert_eq!(meta.excerpt, format!("{}...", "x".repeat(160)));

        let exact = "y".repeat(160);
        assert_eq!(extract(&exact, "x.md").excerpt, format!("{}...", exact));
    }

    #[test]
    fn test_excerpt_truncation_counts_characters() {
        let line = "旅".repeat(170);
        let meta = extract(&line, "x.md");
        assert_eq!(meta.excerpt.chars().count(), 163);
    }

    #[test]
    fn test_extract_is_deterministic() {
        let raw = "# T\n\nbody [l](u) **b**";
        assert_eq!(extract(raw, "2024-01-01.md"), extract(raw, "2024-01-01.md"));
    }
}
