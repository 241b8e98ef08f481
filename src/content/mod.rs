//! Content module - documents, posts and the markup they are written in

pub mod extract;
pub mod loader;
pub mod markup;
mod post;

pub use extract::{extract, PostMeta};
pub use loader::{collect, load_documents, CollectOptions, ContentLoader, LoadError};
pub use markup::transform;
pub use post::{output_name, Document, Post, PostDate, UNKNOWN_DATE};
