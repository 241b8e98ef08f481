//! Site configuration (_config.yml)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub author: String,
    /// Locale tag used for `<html lang>` and the feed `<language>`
    pub language: String,

    // URL
    /// Canonical base URL, used for absolute links in the feed
    pub url: String,

    // Directory
    pub source_dir: String,
    pub public_dir: String,
    /// Subdirectory of `public_dir` holding rendered posts
    pub post_dir: String,

    // Writing
    pub source_ext: String,
    pub output_ext: String,

    // Feed
    pub feed_path: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Driftlog".to_string(),
            description: String::new(),
            author: "John Doe".to_string(),
            language: "en".to_string(),

            url: "http://example.com".to_string(),

            source_dir: "posts".to_string(),
            public_dir: "public".to_string(),
            post_dir: "posts".to_string(),

            source_ext: "md".to_string(),
            output_ext: "html".to_string(),

            feed_path: "feed.xml".to_string(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {:?}", path))?;
        let config: SiteConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config {:?}", path))?;
        Ok(config)
    }

    /// Base URL without a trailing slash
    pub fn base_url(&self) -> &str {
        self.url.trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.source_dir, "posts");
        assert_eq!(config.public_dir, "public");
        assert_eq!(config.source_ext, "md");
        assert_eq!(config.output_ext, "html");
        assert_eq!(config.feed_path, "feed.xml");
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: TravelClaw
description: A digital crab's journey.
url: https://example.github.io/TravelClaw/
language: zh-CN
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "TravelClaw");
        assert_eq!(config.language, "zh-CN");
        assert_eq!(config.base_url(), "https://example.github.io/TravelClaw");
        // Unset keys keep their defaults
        assert_eq!(config.source_dir, "posts");
    }

    #[test]
    fn test_load_reports_bad_yaml() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("_config.yml");
        fs::write(&path, "title: [unclosed").unwrap();
        let err = SiteConfig::load(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }
}
