//! List site content

use anyhow::Result;

use crate::content::{ContentLoader, Post};
use crate::Site;

/// Print every post, newest first
pub fn run(site: &Site) -> Result<()> {
    let posts = ContentLoader::new(site).load_posts()?;
    println!("Posts ({}):", posts.len());
    for post in &posts {
        println!("  {}", format_entry(post));
    }
    Ok(())
}

fn format_entry(post: &Post) -> String {
    format!("{} - {} [{}]", post.date, post.title, post.source_id)
}
