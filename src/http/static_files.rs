//! Static file serving.
//!
//! # Responsibilities
//! - Recognize static paths by extension
//! - Map the extension to a content type
//! - Resolve the path under the configured root and read the file
//!
//! # Design Decisions
//! - Fixed extension table; anything else is not a static file
//! - `..` segments are rejected before touching the filesystem
//! - Any read failure is reported as missing; the caller answers 404

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Extension → content type.
pub const CONTENT_TYPES: [(&str, &str); 8] = [
    ("js", "application/javascript"),
    ("css", "text/css"),
    ("ico", "image/x-icon"),
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("gif", "image/gif"),
    ("svg", "image/svg+xml"),
];

#[derive(Debug, Error)]
pub enum StaticFileError {
    #[error("Not a static file path: {0}")]
    NotStatic(String),

    #[error("Rejected static path: {0}")]
    Forbidden(String),

    #[error("Static file missing: {path}")]
    Missing {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Content type for a request path, if it has a served extension.
pub fn content_type_for(path: &str) -> Option<&'static str> {
    let ext = Path::new(path).extension()?.to_str()?.to_ascii_lowercase();
    CONTENT_TYPES
        .iter()
        .find(|(e, _)| *e == ext)
        .map(|(_, content_type)| *content_type)
}

pub fn is_static_path(path: &str) -> bool {
    content_type_for(path).is_some()
}

/// A loaded file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticFile {
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

/// Reads static files below a root directory.
#[derive(Debug, Clone)]
pub struct StaticFiles {
    root: PathBuf,
}

impl StaticFiles {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Filesystem path for a request path.
    pub fn resolve(&self, url_path: &str) -> Result<PathBuf, StaticFileError> {
        let segments: Vec<&str> = url_path.split('/').filter(|s| !s.is_empty()).collect();
        if segments.iter().any(|s| *s == ".." || s.contains('\\')) {
            return Err(StaticFileError::Forbidden(url_path.to_string()));
        }
        Ok(segments
            .iter()
            .fold(self.root.clone(), |path, segment| path.join(segment)))
    }

    pub async fn load(&self, url_path: &str) -> Result<StaticFile, StaticFileError> {
        let content_type = content_type_for(url_path)
            .ok_or_else(|| StaticFileError::NotStatic(url_path.to_string()))?;
        let path = self.resolve(url_path)?;
        let body = tokio::fs::read(&path)
            .await
            .map_err(|source| StaticFileError::Missing {
                path: path.display().to_string(),
                source,
            })?;
        Ok(StaticFile { content_type, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_types() {
        assert_eq!(content_type_for("/app.js"), Some("application/javascript"));
        assert_eq!(content_type_for("/styles/Page.css"), Some("text/css"));
        assert_eq!(content_type_for("/LOGO.PNG"), Some("image/png"));
        assert_eq!(content_type_for("/photo.jpeg"), Some("image/jpeg"));
        assert_eq!(content_type_for("/icon.svg"), Some("image/svg+xml"));
        assert_eq!(content_type_for("/page.html"), None);
        assert_eq!(content_type_for("/about"), None);
    }

    #[test]
    fn test_resolve_rejects_parent_segments() {
        let files = StaticFiles::new("/srv/site");
        assert!(matches!(
            files.resolve("/../etc/passwd.css"),
            Err(StaticFileError::Forbidden(_))
        ));
        assert_eq!(
            files.resolve("/styles//Page.css").unwrap(),
            PathBuf::from("/srv/site/styles/Page.css")
        );
    }

    #[tokio::test]
    async fn test_missing_file() {
        let files = StaticFiles::new(std::env::temp_dir());
        let err = files
            .load(&format!("/{}.css", uuid::Uuid::new_v4()))
            .await
            .unwrap_err();
        assert!(matches!(err, StaticFileError::Missing { .. }));
    }

    #[tokio::test]
    async fn test_load_file() {
        let dir = std::env::temp_dir().join(format!("layoutml-static-{}", uuid::Uuid::new_v4()));
        tokio::fs::create_dir_all(&dir).await.unwrap();
        tokio::fs::write(dir.join("app.js"), b"alert(1)").await.unwrap();

        let file = StaticFiles::new(&dir).load("/app.js").await.unwrap();
        assert_eq!(file.content_type, "application/javascript");
        assert_eq!(file.body, b"alert(1)");

        tokio::fs::remove_dir_all(&dir).await.unwrap();
    }
}
