//! Create a new post

use anyhow::Result;
use chrono::NaiveDate;
use std::fs;
use std::path::PathBuf;

use crate::Site;

/// File name for a post created on `day`, e.g. `2024-05-01-hello-world.md`
pub fn post_file_name(title: &str, day: NaiveDate, ext: &str) -> String {
    let slug = slug::slugify(title);
    if slug.is_empty() {
        format!("{}.{}", day.format("%Y-%m-%d"), ext)
    } else {
        format!("{}-{}.{}", day.format("%Y-%m-%d"), slug, ext)
    }
}

/// Create a dated post file in the source directory
pub fn create_post(site: &Site, title: &str, day: NaiveDate) -> Result<PathBuf> {
    fs::create_dir_all(&site.source_dir)?;

    let file_path = site
        .source_dir
        .join(post_file_name(title, day, &site.config.source_ext));

    // Check if file already exists
    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    fs::write(&file_path, format!("# {}\n\n", title))?;
    tracing::debug!("Created: {:?}", file_path);

    Ok(file_path)
}

/// Run the new command, dating the post today
pub fn run(site: &Site, title: &str) -> Result<PathBuf> {
    create_post(site, title, chrono::Local::now().date_naive())
}
