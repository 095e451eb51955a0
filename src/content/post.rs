//! Post models

use serde::{Deserialize, Serialize};

/// Index-page entry for a post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostMeta {
    /// File name without its markdown extension
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Publication date exactly as written in the front-matter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

/// A post with its rendered body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostData {
    #[serde(flatten)]
    pub meta: PostMeta,

    /// Rendered HTML content
    pub content_html: String,
}

/// Route parameters for one generated post page: `{ "params": { "id": ... } }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostPath {
    pub params: PostParams,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostParams {
    pub id: String,
}

impl PostPath {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            params: PostParams { id: id.into() },
        }
    }

    pub fn id(&self) -> &str {
        &self.params.id
    }
}
