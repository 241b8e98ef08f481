//! Content loader - reads documents from the source directory and turns
//! them into sorted posts

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

use super::extract::extract;
use super::post::{output_name, Document, Post};
use crate::Site;

/// Failures while reading source documents. All of them abort the build.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("source directory {0:?} does not exist")]
    MissingSourceDir(PathBuf),

    #[error("failed to list {path:?}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// File extensions used when turning documents into posts
#[derive(Debug, Clone)]
pub struct CollectOptions {
    /// Extension of source documents, without the dot
    pub source_ext: String,
    /// Extension of rendered pages, without the dot
    pub output_ext: String,
}

impl Default for CollectOptions {
    fn default() -> Self {
        Self {
            source_ext: "md".to_string(),
            output_ext: "html".to_string(),
        }
    }
}

/// Loads posts from the source directory
pub struct ContentLoader<'a> {
    site: &'a Site,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(site: &'a Site) -> Self {
        Self { site }
    }

    /// Load all posts, newest first
    pub fn load_posts(&self) -> Result<Vec<Post>, LoadError> {
        let documents = load_documents(&self.site.source_dir, &self.site.config.source_ext)?;
        Ok(collect(documents, &self.site.collect_options()))
    }
}

/// Read every document with the given extension directly inside `dir`.
///
/// Subdirectories are not descended into. Documents come back in file name
/// order, which is the order ties keep after sorting by date.
pub fn load_documents(dir: &Path, ext: &str) -> Result<Vec<Document>, LoadError> {
    if !dir.is_dir() {
        return Err(LoadError::MissingSourceDir(dir.to_path_buf()));
    }

    let mut documents = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|source| LoadError::Walk {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if !path.is_file() || !has_extension(path, ext) {
            continue;
        }

        let content = fs::read_to_string(path).map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let name = entry.file_name().to_string_lossy().to_string();
        tracing::debug!("Loaded {}", name);
        documents.push(Document::new(name, content));
    }

    Ok(documents)
}

/// Turn documents into posts sorted by date, newest first.
///
/// Documents without the source extension are skipped. The sort is stable,
/// so posts sharing a date keep their input order.
pub fn collect(documents: Vec<Document>, options: &CollectOptions) -> Vec<Post> {
    let suffix = format!(".{}", options.source_ext);

    let mut posts: Vec<Post> = documents
        .into_iter()
        .filter(|doc| {
            let keep = doc.name.ends_with(&suffix);
            if !keep {
                tracing::debug!("Skipping {}: not a .{} file", doc.name, options.source_ext);
            }
            keep
        })
        .map(|doc| {
            let meta = extract(&doc.content, &doc.name);
            Post {
                output_name: output_name(&doc.name, &options.source_ext, &options.output_ext),
                source_id: doc.name,
                date: meta.date,
                title: meta.title,
                excerpt: meta.excerpt,
                raw: doc.content,
            }
        })
        .collect();

    // Sort by date descending (newest first)
    posts.sort_by(|a, b| b.date.cmp(&a.date));

    posts
}

fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == ext)
        .unwrap_or(false)
}
