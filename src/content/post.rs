//! Document and post models

use chrono::NaiveDate;
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

/// A source file as read from disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// File name, e.g. `2024-05-01-hello.md`
    pub name: String,

    /// Raw file content
    pub content: String,
}

impl Document {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

/// Label used for posts without a date token in their file name
pub const UNKNOWN_DATE: &str = "Unknown";

/// Publication date of a post, taken from its file name.
///
/// Ordering is chronological for stamped dates, and `Unknown` is older than
/// every stamped date.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PostDate {
    /// A `YYYY-MM-DD` token. Not guaranteed to be a valid calendar date.
    Stamped(String),
    Unknown,
}

impl PostDate {
    /// The token as written in the file name, or `Unknown`
    pub fn as_str(&self) -> &str {
        match self {
            PostDate::Stamped(token) => token,
            PostDate::Unknown => UNKNOWN_DATE,
        }
    }

    /// Parse the token as a calendar date. `None` for `Unknown` and for
    /// tokens such as `2024-13-40`.
    pub fn to_naive(&self) -> Option<NaiveDate> {
        match self {
            PostDate::Stamped(token) => NaiveDate::parse_from_str(token, "%Y-%m-%d").ok(),
            PostDate::Unknown => None,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, PostDate::Unknown)
    }
}

impl Ord for PostDate {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            // Fixed-width zero-padded tokens compare chronologically as text
            (PostDate::Stamped(a), PostDate::Stamped(b)) => a.cmp(b),
            (PostDate::Stamped(_), PostDate::Unknown) => Ordering::Greater,
            (PostDate::Unknown, PostDate::Stamped(_)) => Ordering::Less,
            (PostDate::Unknown, PostDate::Unknown) => Ordering::Equal,
        }
    }
}

impl PartialOrd for PostDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for PostDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for PostDate {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A blog post derived from one document
#[derive(Debug, Clone, Serialize)]
pub struct Post {
    /// Source file name
    pub source_id: String,

    /// Publication date
    pub date: PostDate,

    /// Display title
    pub title: String,

    /// Plain-text teaser for the index and the feed
    pub excerpt: String,

    /// File name of the rendered page
    pub output_name: String,

    /// Raw document content
    pub raw: String,
}

impl Post {
    /// Get the previous (newer) post in a sorted list
    pub fn prev<'a>(&self, posts: &'a [Post]) -> Option<&'a Post> {
        let pos = posts.iter().position(|p| p.source_id == self.source_id)?;
        if pos > 0 {
            Some(&posts[pos - 1])
        } else {
            None
        }
    }

    /// Get the next (older) post in a sorted list
    pub fn next<'a>(&self, posts: &'a [Post]) -> Option<&'a Post> {
        let pos = posts.iter().position(|p| p.source_id == self.source_id)?;
        posts.get(pos + 1)
    }
}

/// Replace the source extension of `name` with `output_ext`.
///
/// Names without the source extension get `output_ext` appended.
pub fn output_name(name: &str, source_ext: &str, output_ext: &str) -> String {
    let stem = name
        .strip_suffix(source_ext)
        .and_then(|s| s.strip_suffix('.'))
        .unwrap_or(name);
    format!("{}.{}", stem, output_ext)
}
