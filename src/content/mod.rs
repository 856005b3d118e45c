//! Content module - turns feed records into Jekyll posts

mod frontmatter;
mod post;
mod transform;

pub use frontmatter::FrontMatter;
pub use post::TransformedPost;
pub use transform::{clean_content, ContentTransformer, MediaRewriter};
