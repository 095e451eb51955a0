//! List site content

use anyhow::{Context, Result};
use std::io::Write;

use crate::Blog;

/// Write the post catalog or the route ids as JSON
pub fn run<W: Write>(blog: &Blog, content_type: &str, out: &mut W) -> Result<()> {
    let catalog = blog.catalog();

    let json = match content_type {
        "post" | "posts" => {
            let posts = catalog
                .sorted_posts_data()
                .with_context(|| format!("Failed to list posts in {:?}", blog.posts_dir))?;
            tracing::info!("Listed {} posts", posts.len());
            serde_json::to_string_pretty(&posts)?
        }
        "id" | "ids" => {
            let ids = catalog
                .all_post_ids()
                .with_context(|| format!("Failed to list post ids in {:?}", blog.posts_dir))?;
            tracing::info!("Listed {} post ids", ids.len());
            serde_json::to_string_pretty(&ids)?
        }
        _ => {
            anyhow::bail!("Unknown type: {}. Available: post, id", content_type);
        }
    };

    writeln!(out, "{}", json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn blog_with_posts() -> (tempfile::TempDir, Blog) {
        let dir = tempfile::tempdir().unwrap();
        let posts = dir.path().join("posts");
        fs::create_dir(&posts).unwrap();
        fs::write(
            posts.join("old.md"),
            "---\ntitle: Old\ndate: \"2020-01-01\"\n---\nold\n",
        )
        .unwrap();
        fs::write(
            posts.join("new.md"),
            "---\ntitle: New\ndate: \"2021-01-01\"\n---\nnew\n",
        )
        .unwrap();
        let blog = Blog::new(dir.path()).unwrap();
        (dir, blog)
    }

    #[test]
    fn test_list_posts_json() {
        let (_dir, blog) = blog_with_posts();
        let mut out: Vec<u8> = Vec::new();
        run(&blog, "post", &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(
            value,
            serde_json::json!([
                {"id": "new", "title": "New", "date": "2021-01-01"},
                {"id": "old", "title": "Old", "date": "2020-01-01"},
            ])
        );
    }

    #[test]
    fn test_list_ids_json() {
        let (_dir, blog) = blog_with_posts();
        let mut out: Vec<u8> = Vec::new();
        run(&blog, "ids", &mut out).unwrap();

        let value: Vec<crate::PostPath> = serde_json::from_slice(&out).unwrap();
        let mut ids: Vec<_> = value.iter().map(|p| p.id().to_string()).collect();
        ids.sort();
        assert_eq!(ids, vec!["new", "old"]);
    }

    #[test]
    fn test_unknown_type() {
        let (_dir, blog) = blog_with_posts();
        assert!(run(&blog, "tags", &mut Vec::<u8>::new()).is_err());
    }

    #[test]
    fn test_missing_posts_dir_keeps_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let blog = Blog::new(dir.path()).unwrap();
        let err = run(&blog, "post", &mut Vec::<u8>::new()).unwrap_err();
        let catalog_err = err.downcast_ref::<crate::CatalogError>().unwrap();
        assert!(catalog_err.is_not_found());
    }
}
