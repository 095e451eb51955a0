//! Post catalog - lists, sorts and renders posts from a single directory

use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use walkdir::WalkDir;

use super::frontmatter::parse_date_string;
use super::{FrontMatter, PostData, PostMeta, PostPath, Render};
use crate::config::{DateOrder, SiteConfig};
use crate::error::{CatalogError, Result};

/// Reads posts from a flat directory of markdown files.
///
/// Nothing is cached: every call goes back to the filesystem.
#[derive(Clone)]
pub struct PostCatalog {
    posts_dir: PathBuf,
    extension: String,
    date_order: DateOrder,
    require_metadata: bool,
    renderer: Arc<dyn Render>,
}

impl PostCatalog {
    /// Create a catalog over `posts_dir` with default settings
    pub fn new<P: AsRef<Path>>(posts_dir: P, renderer: Arc<dyn Render>) -> Self {
        Self {
            posts_dir: posts_dir.as_ref().to_path_buf(),
            extension: "md".to_string(),
            date_order: DateOrder::Lexical,
            require_metadata: false,
            renderer,
        }
    }

    /// Create a catalog with the extension, ordering and validation from `config`
    pub fn with_config<P: AsRef<Path>>(
        posts_dir: P,
        config: &SiteConfig,
        renderer: Arc<dyn Render>,
    ) -> Self {
        Self {
            extension: config.extension.clone(),
            date_order: config.date_order,
            require_metadata: config.require_metadata,
            ..Self::new(posts_dir, renderer)
        }
    }

    pub fn posts_dir(&self) -> &Path {
        &self.posts_dir
    }

    /// Metadata of every post, newest first
    pub fn sorted_posts_data(&self) -> Result<Vec<PostMeta>> {
        let mut posts = Vec::new();
        for (id, path) in self.entries()? {
            let content = read_post(&path)?;
            let (fm, _) = FrontMatter::parse(&content);
            posts.push(self.meta(id, fm)?);
        }

        // stable, so equal dates keep directory order
        match self.date_order {
            DateOrder::Lexical => posts.sort_by(|a, b| b.date.cmp(&a.date)),
            DateOrder::Calendar => {
                posts.sort_by(|a, b| calendar_cmp(b.date.as_deref(), a.date.as_deref()))
            }
        }

        tracing::debug!("Loaded {} posts from {:?}", posts.len(), self.posts_dir);
        Ok(posts)
    }

    /// Route parameters for every post, in directory order
    pub fn all_post_ids(&self) -> Result<Vec<PostPath>> {
        Ok(self
            .entries()?
            .into_iter()
            .map(|(id, _)| PostPath::new(id))
            .collect())
    }

    /// Load one post and render its body
    pub async fn post_data(&self, id: &str) -> Result<PostData> {
        let path = self.posts_dir.join(format!("{}.{}", id, self.extension));
        let content = read_post(&path)?;
        let (fm, body) = FrontMatter::parse(&content);
        let meta = self.meta(id.to_string(), fm)?;

        let renderer = Arc::clone(&self.renderer);
        let body = body.to_string();
        let content_html = tokio::task::spawn_blocking(move || renderer.render(&body))
            .await?
            .map_err(CatalogError::Render)?;

        Ok(PostData { meta, content_html })
    }

    /// Regular files directly inside the posts directory, with their ids
    fn entries(&self) -> Result<Vec<(String, PathBuf)>> {
        let mut entries = Vec::new();
        for entry in WalkDir::new(&self.posts_dir)
            .follow_links(true)
            .min_depth(1)
            .max_depth(1)
        {
            let entry = entry.map_err(|e| {
                let path = e
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| self.posts_dir.clone());
                CatalogError::io(path, e.into())
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            // ids must round-trip through `post_data`
            let Some(file_name) = entry.file_name().to_str() else {
                tracing::warn!("Skipping post with non UTF-8 file name {:?}", entry.path());
                continue;
            };
            let id = post_id(file_name, &self.extension).to_string();
            entries.push((id, entry.into_path()));
        }
        Ok(entries)
    }

    fn meta(&self, id: String, fm: FrontMatter) -> Result<PostMeta> {
        if self.require_metadata {
            if fm.title.is_none() {
                return Err(CatalogError::MissingField { id, field: "title" });
            }
            if fm.date.is_none() {
                return Err(CatalogError::MissingField { id, field: "date" });
            }
        }
        Ok(PostMeta {
            id,
            title: fm.title,
            date: fm.date,
        })
    }
}

/// Strip `.{extension}` from a file name; other names are kept whole
pub fn post_id<'a>(file_name: &'a str, extension: &str) -> &'a str {
    file_name
        .strip_suffix(extension)
        .and_then(|stem| stem.strip_suffix('.'))
        .unwrap_or(file_name)
}

fn read_post(path: &Path) -> Result<String> {
    tracing::debug!("Reading post {:?}", path);
    fs::read_to_string(path).map_err(|e| CatalogError::io(path, e))
}

/// Parsable dates by time, then unparsable ones by text, then missing ones
fn calendar_cmp(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => match (parse_date_string(a), parse_date_string(b)) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => Ordering::Greater,
            (None, Some(_)) => Ordering::Less,
            (None, None) => a.cmp(b),
        },
        (a, b) => a.is_some().cmp(&b.is_some()),
    }
}
