//! Clean the public directory

use anyhow::Result;
use std::fs;

use crate::Site;

/// Delete the public directory
pub fn run(site: &Site) -> Result<()> {
    if site.public_dir == site.base_dir || site.source_dir.starts_with(&site.public_dir) {
        anyhow::bail!(
            "Refusing to delete {:?}: it contains the site sources",
            site.public_dir
        );
    }

    if site.public_dir.exists() {
        fs::remove_dir_all(&site.public_dir)?;
        tracing::info!("Deleted: {:?}", site.public_dir);
    }

    Ok(())
}
