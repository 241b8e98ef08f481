//! Helper functions for templates and the feed

mod date;
mod url;

pub use date::*;
pub use url::*;

use crate::config::SiteConfig;
use crate::content::Post;

/// Link builders bound to one site configuration
pub struct Helpers<'a> {
    config: &'a SiteConfig,
}

impl<'a> Helpers<'a> {
    /// Create a new helpers instance
    pub fn new(config: &'a SiteConfig) -> Self {
        Self { config }
    }

    /// Path of a post page relative to the public directory
    pub fn post_path(&self, post: &Post) -> String {
        join_path(&[self.config.post_dir.as_str(), post.output_name.as_str()])
    }

    /// Absolute URL of a post page
    pub fn post_url(&self, post: &Post) -> String {
        full_url_for(self.config, &self.post_path(post))
    }

    /// Absolute URL of the feed
    pub fn feed_url(&self) -> String {
        full_url_for(self.config, &self.config.feed_path)
    }

    /// Relative prefix leading from a post page back to the public root
    pub fn post_root(&self) -> String {
        let depth = self
            .config
            .post_dir
            .split('/')
            .filter(|s| !s.is_empty())
            .count();
        "../".repeat(depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{collect, CollectOptions, Document};

    #[test]
    fn test_post_links() {
        let config = SiteConfig {
            url: "https://example.com/".to_string(),
            ..SiteConfig::default()
        };
        let posts = collect(
            vec![Document::new("2024-05-01-hi.md", "# Hi")],
            &CollectOptions::default(),
        );
        let helpers = Helpers::new(&config);
        assert_eq!(helpers.post_path(&posts[0]), "posts/2024-05-01-hi.html");
        assert_eq!(
            helpers.post_url(&posts[0]),
            "https://example.com/posts/2024-05-01-hi.html"
        );
        assert_eq!(helpers.feed_url(), "https://example.com/feed.xml");
        assert_eq!(helpers.post_root(), "../");
    }

    #[test]
    fn test_post_root_for_nested_and_flat_dirs() {
        let nested = SiteConfig {
            post_dir: "blog/posts/".to_string(),
            ..SiteConfig::default()
        };
        assert_eq!(Helpers::new(&nested).post_root(), "../../");

        let flat = SiteConfig {
            post_dir: String::new(),
            ..SiteConfig::default()
        };
        assert_eq!(Helpers::new(&flat).post_root(), "");
    }
}
