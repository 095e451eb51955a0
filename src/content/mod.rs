//! Content module - posts, front-matter and markdown rendering

pub mod catalog;
mod frontmatter;
mod markdown;
mod post;

pub use catalog::PostCatalog;
pub use frontmatter::FrontMatter;
pub use markdown::{MarkdownRenderer, Render};
pub use post::{PostData, PostMeta, PostParams, PostPath};
