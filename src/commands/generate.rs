//! Generate static files

use anyhow::Result;

use crate::content::ContentLoader;
use crate::generator::Generator;
use crate::Site;

/// Generate the static site from scratch
pub fn run(site: &Site) -> Result<()> {
    let start = std::time::Instant::now();

    let posts = ContentLoader::new(site).load_posts()?;
    tracing::info!("Loaded {} posts from {:?}", posts.len(), site.source_dir);

    let generator = Generator::new(site)?;
    generator.generate(&posts)?;

    let duration = start.elapsed();
    tracing::info!("Generated in {:.2}s", duration.as_secs_f64());

    Ok(())
}
