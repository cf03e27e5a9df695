// tests/support/mocks/storage.rs
use async_trait::async_trait;
use scribe_core::application::{
    ApplicationResult,
    error::ApplicationError,
    ports::storage::{ImageStorage, ImageUpload},
};
use std::{
    collections::HashMap,
    sync::{
        Mutex,
        atomic::{AtomicBool, AtomicU64, Ordering},
    },
};

pub const IMAGE_BASE_URL: &str = "http://images.test/uploads";

/// Keeps uploads in memory and records deletions.
#[derive(Debug, Default)]
pub struct MemoryImageStorage {
    files: Mutex<HashMap<String, usize>>,
    deleted: Mutex<Vec<String>>,
    counter: AtomicU64,
    fail_deletes: AtomicBool,
}

impl MemoryImageStorage {
    pub fn stored_urls(&self) -> Vec<String> {
        let mut urls: Vec<String> = self.files.lock().unwrap().keys().cloned().collect();
        urls.sort();
        urls
    }

    pub fn deleted_urls(&self) -> Vec<String> {
        self.deleted.lock().unwrap().clone()
    }

    pub fn fail_deletes(&self) {
        self.fail_deletes.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl ImageStorage for MemoryImageStorage {
    async fn store(&self, upload: ImageUpload) -> ApplicationResult<String> {
        let n = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        let name = upload.file_name.unwrap_or_else(|| "image".into());
        let url = format!("{IMAGE_BASE_URL}/{n}-{name}");
        self.files.lock().unwrap().insert(url.clone(), upload.bytes.len());
        Ok(url)
    }

    async fn delete(&self, url: &str) -> ApplicationResult<()> {
        if self.fail_deletes.load(Ordering::SeqCst) {
            return Err(ApplicationError::infrastructure("disk unavailable"));
        }
        self.files.lock().unwrap().remove(url);
        self.deleted.lock().unwrap().push(url.to_string());
        Ok(())
    }
}
