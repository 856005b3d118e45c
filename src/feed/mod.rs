//! Feed module - reads WordPress export (WXR) documents

pub mod loader;
mod namespaces;
mod record;

pub use loader::{Feed, FeedLoader};
pub use namespaces::{Namespaces, WORDPRESS_NAMESPACES};
pub use record::{published_posts, PostRecord};

#[cfg(test)]
pub(crate) mod fixtures;
