//! Built-in page templates using the Tera template engine
//!
//! Templates are embedded in the binary. Autoescaping is off because post
//! bodies arrive as already-rendered HTML.

use anyhow::Result;
use serde::Serialize;
use tera::{Context, Tera};

/// Stylesheet written next to the index
pub const STYLESHEET: &str = include_str!("site/styles.css");

/// Template renderer with the embedded site templates
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![]);

        tera.add_raw_templates(vec![
            ("index.html", include_str!("site/index.html")),
            ("post.html", include_str!("site/post.html")),
        ])?;

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }
}

/// Data structures for template context

#[derive(Debug, Clone, Serialize)]
pub struct SiteData {
    pub title: String,
    pub description: String,
    pub language: String,
    pub feed_url: String,
}

/// A post as shown on the index
#[derive(Debug, Clone, Serialize)]
pub struct PostData {
    pub title: String,
    pub date: String,
    /// Link relative to the public root
    pub path: String,
    pub excerpt: String,
}

/// A post page body
#[derive(Debug, Clone, Serialize)]
pub struct PageData {
    pub title: String,
    pub date: String,
    pub content: String,
}

/// Link to a neighbouring post, relative to the current post page
#[derive(Debug, Clone, Serialize)]
pub struct NavPost {
    pub title: String,
    pub path: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site() -> SiteData {
        SiteData {
            title: "Log".to_string(),
            description: "Notes".to_string(),
            language: "zh-CN".to_string(),
            feed_url: "https://example.com/feed.xml".to_string(),
        }
    }

    #[test]
    fn test_render_index() {
        let renderer = TemplateRenderer::new().unwrap();
        let mut context = Context::new();
        context.insert("site", &site());
        context.insert("feed_path", "feed.xml");
        context.insert("year", "2026");
        context.insert(
            "posts",
            &vec![PostData {
                title: "Hello".to_string(),
                date: "2024-05-01".to_string(),
                path: "posts/hello.html".to_string(),
                excerpt: "First words...".to_string(),
            }],
        );

        let html = renderer.render("index.html", &context).unwrap();
        assert!(html.contains(r#"<html lang="zh-CN">"#));
        assert!(html.contains(r#"<h2><a href="posts/hello.html">Hello</a></h2>"#));
        assert!(html.contains(r#"<p class="excerpt">First words...</p>"#));
        assert!(html.contains("© 2026 Log."));
    }

    #[test]
    fn test_render_post_without_neighbours() {
        let renderer = TemplateRenderer::new().unwrap();
        let mut context = Context::new();
        context.insert("site", &site());
        context.insert("root", "../");
        context.insert(
            "post",
            &PageData {
                title: "Hello".to_string(),
                date: "2024-05-01".to_string(),
                content: "<p><h1>Hello</h1></p>".to_string(),
            },
        );
        context.insert("prev_post", &None::<NavPost>);
        context.insert("next_post", &None::<NavPost>);

        let html = renderer.render("post.html", &context).unwrap();
        assert!(html.contains("<p><h1>Hello</h1></p>"));
        assert!(html.contains(r#"href="../styles.css""#));
        assert!(!html.contains("class=\"older\""));
    }
}
