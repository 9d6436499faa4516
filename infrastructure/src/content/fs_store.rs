//! Content store reading markdown files from disk.
//!
//! Layout under the content root:
//!
//! ```text
//! content/
//!   blog/<slug>.md
//!   work/<slug>.md
//! ```
//!
//! The slug is the file stem unless the front matter sets one. Files
//! starting with `_` or `.` are skipped.

use super::front_matter::parse_front_matter;
use agency_application::{ContentStore, ContentStoreError};
use agency_domain::content::query::{WORDS_PER_MINUTE, check_collection, reading_minutes};
use agency_domain::{BlogPost, WorkProject};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const BLOG_DIR: &str = "blog";
pub const WORK_DIR: &str = "work";

const EXTENSIONS: [&str; 2] = ["md", "mdx"];

/// [`ContentStore`] over a directory of markdown files.
#[derive(Debug, Clone)]
pub struct FsContentStore {
    root: PathBuf,
}

impl FsContentStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    async fn load<T: DeserializeOwned>(
        &self,
        collection: &str,
    ) -> Result<Vec<(T, String)>, ContentStoreError> {
        let dir = self.root.join(collection);
        let files = list_documents(&dir).await?;
        let mut items = Vec::with_capacity(files.len());

        for path in files {
            let source = tokio::fs::read_to_string(&path)
                .await
                .map_err(|e| io_error(&path, e))?;
            items.push(decode::<T>(&path, &source)?);
        }

        debug!("Loaded {} {} documents from {}", items.len(), collection, dir.display());
        Ok(items)
    }
}

fn io_error(path: &Path, e: std::io::Error) -> ContentStoreError {
    ContentStoreError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    }
}

fn parse_error(path: &Path, message: impl ToString) -> ContentStoreError {
    ContentStoreError::Parse {
        path: path.to_path_buf(),
        message: message.to_string(),
    }
}

/// Markdown files directly inside `dir`, sorted by file name.
///
/// A missing directory is an empty collection.
async fn list_documents(dir: &Path) -> Result<Vec<PathBuf>, ContentStoreError> {
    let mut entries = match tokio::fs::read_dir(dir).await {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            info!("Content directory {} does not exist", dir.display());
            return Ok(Vec::new());
        }
        Err(e) => return Err(io_error(dir, e)),
    };

    let mut files = Vec::new();
    while let Some(entry) = entries.next_entry().await.map_err(|e| io_error(dir, e))? {
        let path = entry.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if name.starts_with('_') || name.starts_with('.') {
            continue;
        }
        let is_doc = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| EXTENSIONS.contains(&ext));
        if is_doc && entry.file_type().await.map_err(|e| io_error(&path, e))?.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn decode<T: DeserializeOwned>(path: &Path, source: &str) -> Result<(T, String), ContentStoreError> {
    let fm = parse_front_matter(source).map_err(|e| parse_error(path, e))?;
    let mut data = fm.data;

    if !data.contains_key("slug") {
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| parse_error(path, "file name is not valid UTF-8"))?;
        data.insert("slug".to_string(), Value::String(stem.to_string()));
    }

    let item = serde_json::from_value(Value::Object(data)).map_err(|e| parse_error(path, e))?;
    Ok((item, fm.body))
}

#[async_trait]
impl ContentStore for FsContentStore {
    async fn blog_posts(&self) -> Result<Vec<BlogPost>, ContentStoreError> {
        let posts: Vec<BlogPost> = self
            .load::<BlogPost>(BLOG_DIR)
            .await?
            .into_iter()
            .map(|(mut post, body)| {
                if post.read_time.is_none() {
                    post.read_time = Some(reading_minutes(&body, WORDS_PER_MINUTE));
                }
                post
            })
            .collect();
        check_collection(&posts)?;
        Ok(posts)
    }

    async fn work_projects(&self) -> Result<Vec<WorkProject>, ContentStoreError> {
        let projects: Vec<WorkProject> = self
            .load::<WorkProject>(WORK_DIR)
            .await?
            .into_iter()
            .map(|(project, _)| project)
            .collect();
        check_collection(&projects)?;
        Ok(projects)
    }
}
