//! Render a single post

use anyhow::{Context, Result};
use std::io::Write;

use crate::Blog;

/// Write one post, with its rendered HTML, as JSON
pub async fn run<W: Write>(blog: &Blog, id: &str, out: &mut W) -> Result<()> {
    let post = blog
        .catalog()
        .post_data(id)
        .await
        .with_context(|| format!("Failed to load post `{}`", id))?;

    tracing::info!("Rendered post {} ({} bytes)", id, post.content_html.len());
    writeln!(out, "{}", serde_json::to_string_pretty(&post)?)?;
    Ok(())
}
