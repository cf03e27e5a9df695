// src/application/ports/storage.rs
use crate::application::ApplicationResult;
use async_trait::async_trait;
use bytes::Bytes;

pub const IMAGE_MAX_BYTES: usize = 5 * 1024 * 1024;
pub const ACCEPTED_IMAGE_TYPES: [&str; 4] = ["image/jpeg", "image/png", "image/gif", "image/webp"];

#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

#[async_trait]
pub trait ImageStorage: Send + Sync {
    /// Persists the image and returns its public URL.
    async fn store(&self, upload: ImageUpload) -> ApplicationResult<String>;

    /// Removes the file behind a URL returned by `store`. Unknown URLs are ignored.
    async fn delete(&self, url: &str) -> ApplicationResult<()>;
}
