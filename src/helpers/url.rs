//! URL helper functions

use crate::config::SiteConfig;

/// Join path segments with single slashes, ignoring empty segments
///
/// # Examples
/// ```ignore
/// join_path(&["posts/", "/a.html"]) // -> "posts/a.html"
/// ```
pub fn join_path(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|p| p.trim_matches('/'))
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}

/// Generate a full URL including the domain
///
/// # Examples
/// ```ignore
/// full_url_for(&config, "posts/a.html") // -> "https://example.com/blog/posts/a.html"
/// ```
pub fn full_url_for(config: &SiteConfig, path: &str) -> String {
    let base = config.base_url();
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        base.to_string()
    } else {
        format!("{}/{}", base, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> SiteConfig {
        SiteConfig {
            url: "https://example.com/blog/".to_string(),
            ..SiteConfig::default()
        }
    }

    #[test]
    fn test_join_path() {
        assert_eq!(join_path(&["posts", "a.html"]), "posts/a.html");
        assert_eq!(join_path(&["posts/", "/a.html"]), "posts/a.html");
        assert_eq!(join_path(&["", "a.html"]), "a.html");
    }

    #[test]
    fn test_full_url_for() {
        let config = test_config();
        assert_eq!(
            full_url_for(&config, "/posts/a.html"),
            "https://example.com/blog/posts/a.html"
        );
        assert_eq!(full_url_for(&config, "feed.xml"), "https://example.com/blog/feed.xml");
        assert_eq!(full_url_for(&config, ""), "https://example.com/blog");
    }
}
