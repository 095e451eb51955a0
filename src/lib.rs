//! post-catalog: loads a directory of markdown blog posts
//!
//! Posts are flat files with a front-matter block and a markdown body. The
//! catalog lists them newest first, enumerates their ids for static route
//! generation, and renders a single post's body to HTML on request.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;

pub use content::{PostCatalog, PostData, PostMeta, PostPath, Render};
pub use error::CatalogError;

use anyhow::Result;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Name of the optional site configuration file in the base directory
pub const CONFIG_FILE: &str = "_config.yml";

/// A blog rooted at a base directory
#[derive(Debug, Clone)]
pub struct Blog {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Directory holding the post files
    pub posts_dir: PathBuf,
}

impl Blog {
    /// Create a new Blog instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join(CONFIG_FILE);

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Create from an already loaded configuration
    pub fn with_config<P: AsRef<Path>>(base_dir: P, config: config::SiteConfig) -> Self {
        let posts_dir = base_dir.as_ref().join(&config.posts_dir);
        Self { config, posts_dir }
    }

    /// Catalog over the posts directory using the configured markdown renderer
    pub fn catalog(&self) -> PostCatalog {
        let renderer = content::MarkdownRenderer::from_config(&self.config.highlight);
        self.catalog_with_renderer(Arc::new(renderer))
    }

    /// Catalog over the posts directory with a caller-supplied renderer
    pub fn catalog_with_renderer(&self, renderer: Arc<dyn Render>) -> PostCatalog {
        PostCatalog::with_config(&self.posts_dir, &self.config, renderer)
    }
}
