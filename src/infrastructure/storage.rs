// src/infrastructure/storage.rs
use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::{
        storage::{ImageStorage, ImageUpload},
        time::Clock,
    },
};
use async_trait::async_trait;
use std::{
    path::{Path, PathBuf},
    sync::Arc,
};
use tracing::debug;
use uuid::Uuid;

/// URL path the upload directory is served under, e.g. `uploads/images`
/// becomes `/uploads/images`.
pub fn mount_path(root: &Path) -> String {
    let segment = root.to_string_lossy().replace('\\', "/");
    format!("/{}", segment.trim_start_matches("./").trim_matches('/'))
}

/// Writes uploads under `root` and serves them as `<base_url>/<root>/<file>`.
pub struct LocalImageStorage {
    root: PathBuf,
    url_prefix: String,
    clock: Arc<dyn Clock>,
}

impl LocalImageStorage {
    pub fn new(root: impl Into<PathBuf>, base_url: impl Into<String>, clock: Arc<dyn Clock>) -> Self {
        let root = root.into();
        let base_url = base_url.into();
        Self {
            url_prefix: format!("{}{}", base_url.trim_end_matches('/'), mount_path(&root)),
            root,
            clock,
        }
    }

    fn file_name(&self, upload: &ImageUpload) -> String {
        let extension = upload
            .file_name
            .as_deref()
            .and_then(|name| Path::new(name).extension())
            .and_then(|ext| ext.to_str())
            .filter(|ext| ext.chars().all(|c| c.is_ascii_alphanumeric()))
            .map(|ext| format!(".{}", ext.to_ascii_lowercase()))
            .unwrap_or_default();
        format!(
            "{}-{}{}",
            self.clock.now().timestamp_millis(),
            Uuid::new_v4().simple(),
            extension
        )
    }

    fn public_url(&self, file_name: &str) -> String {
        format!("{}/{}", self.url_prefix, file_name)
    }

    /// Maps a URL produced by `store` back to a file directly under `root`.
    fn local_path(&self, url: &str) -> Option<PathBuf> {
        let file_name = url.strip_prefix(&self.url_prefix)?.strip_prefix('/')?;
        if file_name.is_empty() || file_name.contains('/') || file_name.starts_with('.') {
            return None;
        }
        Some(self.root.join(file_name))
    }
}

#[async_trait]
impl ImageStorage for LocalImageStorage {
    async fn store(&self, upload: ImageUpload) -> ApplicationResult<String> {
        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        let file_name = self.file_name(&upload);
        let path = self.root.join(&file_name);
        tokio::fs::write(&path, &upload.bytes)
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        debug!(path = %path.display(), size = upload.bytes.len(), "image stored");
        Ok(self.public_url(&file_name))
    }

    async fn delete(&self, url: &str) -> ApplicationResult<()> {
        let Some(path) = self.local_path(url) else {
            return Ok(());
        };
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(ApplicationError::infrastructure(err.to_string())),
        }
    }
}
