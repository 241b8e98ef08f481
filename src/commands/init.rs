//! Initialize a new site

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::CONFIG_FILE;

const DEFAULT_CONFIG: &str = r#"# Site
title: Driftlog
description: ''
author: John Doe
language: en

# URL
url: http://example.com

# Directory
source_dir: posts
public_dir: public
post_dir: posts

# Writing
source_ext: md
output_ext: html

# Feed
feed_path: feed.xml
"#;

const HELLO_POST: &str = r#"# Hello World

Welcome! This is your **first** post. Edit or delete it, then run `driftlog generate`.

## Writing

- Name files `YYYY-MM-DD-some-title.md`
- Start with a `# Title` line
- Use *italic*, **bold**, [links](https://example.com) and > quotes
"#;

/// Initialize a new site in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    fs::create_dir_all(target_dir.join("posts"))?;

    let config_path = target_dir.join(CONFIG_FILE);
    if config_path.exists() {
        tracing::info!("Keeping existing {:?}", config_path);
    } else {
        fs::write(&config_path, DEFAULT_CONFIG)?;
    }

    let today = chrono::Local::now().format("%Y-%m-%d");
    let hello_path = target_dir
        .join("posts")
        .join(format!("{}-hello-world.md", today));
    if !hello_path.exists() {
        fs::write(&hello_path, HELLO_POST)?;
    }

    Ok(())
}
