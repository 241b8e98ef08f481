//! Generator module - writes post pages, the index and the feed

mod feed;

pub use feed::render_feed;

use anyhow::{Context as _, Result};
use chrono::{DateTime, Utc};
use std::fs;
use std::path::Path;
use tera::Context;

use crate::content::{transform, Post};
use crate::helpers::{year, Helpers};
use crate::templates::{NavPost, PageData, PostData, SiteData, TemplateRenderer, STYLESHEET};
use crate::Site;

/// Static site generator using the built-in templates
pub struct Generator {
    site: Site,
    renderer: TemplateRenderer,
    build_time: DateTime<Utc>,
}

impl Generator {
    /// Create a new generator stamped with the current time
    pub fn new(site: &Site) -> Result<Self> {
        let renderer = TemplateRenderer::new()?;

        Ok(Self {
            site: site.clone(),
            renderer,
            build_time: Utc::now(),
        })
    }

    /// Use a fixed build time for `lastBuildDate` and the footer year
    pub fn with_build_time(mut self, build_time: DateTime<Utc>) -> Self {
        self.build_time = build_time;
        self
    }

    /// Generate the entire site. `posts` must already be sorted newest first.
    pub fn generate(&self, posts: &[Post]) -> Result<()> {
        let public_dir = &self.site.public_dir;
        let post_dir = public_dir.join(&self.site.config.post_dir);
        fs::create_dir_all(&post_dir)
            .with_context(|| format!("Failed to create dir {:?}", post_dir))?;

        write_file(&public_dir.join("styles.css"), STYLESHEET)?;

        for (i, post) in posts.iter().enumerate() {
            let html = self.render_post_page(posts, i)?;
            let output_path = post_dir.join(&post.output_name);
            write_file(&output_path, &html)?;
            tracing::debug!("Generated post: {:?}", output_path);
        }
        tracing::info!("Generated {} post pages", posts.len());

        let index = self.render_index(posts)?;
        write_file(&public_dir.join("index.html"), &index)?;
        tracing::info!("Generated index.html");

        let feed = render_feed(&self.site.config, posts, &self.build_time);
        write_file(&public_dir.join(&self.site.config.feed_path), &feed)?;
        tracing::info!("Generated {}", self.site.config.feed_path);

        Ok(())
    }

    /// Render the page for `posts[index]`
    pub fn render_post_page(&self, posts: &[Post], index: usize) -> Result<String> {
        let post = posts
            .get(index)
            .ok_or_else(|| anyhow::anyhow!("No post at index {}", index))?;
        let helpers = Helpers::new(&self.site.config);

        let nav = |p: &Post| NavPost {
            title: p.title.clone(),
            path: p.output_name.clone(),
        };

        let mut context = Context::new();
        context.insert("site", &self.site_data());
        context.insert("root", &helpers.post_root());
        context.insert(
            "post",
            &PageData {
                title: post.title.clone(),
                date: post.date.to_string(),
                content: transform(&post.raw),
            },
        );
        context.insert("prev_post", &post.prev(posts).map(nav));
        context.insert("next_post", &post.next(posts).map(nav));

        self.renderer.render("post.html", &context)
    }

    /// Render the index listing every post
    pub fn render_index(&self, posts: &[Post]) -> Result<String> {
        let helpers = Helpers::new(&self.site.config);

        let post_data: Vec<PostData> = posts
            .iter()
            .map(|p| PostData {
                title: p.title.clone(),
                date: p.date.to_string(),
                path: helpers.post_path(p),
                excerpt: p.excerpt.clone(),
            })
            .collect();

        let mut context = Context::new();
        context.insert("site", &self.site_data());
        context.insert("feed_path", &self.site.config.feed_path);
        context.insert("year", &year(&self.build_time));
        context.insert("posts", &post_data);

        self.renderer.render("index.html", &context)
    }

    fn site_data(&self) -> SiteData {
        let config = &self.site.config;
        SiteData {
            title: config.title.clone(),
            description: config.description.clone(),
            language: config.language.clone(),
            feed_url: Helpers::new(config).feed_url(),
        }
    }
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create dir {:?}", parent))?;
    }
    fs::write(path, contents).with_context(|| format!("Failed to write {:?}", path))
}
