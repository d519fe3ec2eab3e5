//! Moka-backed listing cache.

use moka::future::Cache;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use docshelf_core::config::cache::CacheConfig;
use docshelf_core::types::{FolderId, OwnerId};
use docshelf_entity::document::Document;
use docshelf_entity::folder::Folder;

use crate::keys;

/// In-memory listing cache.
///
/// Entries are stored as JSON strings; an undeserializable entry is
/// treated as a miss and dropped. TTL is set at cache level from
/// configuration.
#[derive(Debug, Clone)]
pub struct ListingCache {
    cache: Cache<String, String>,
}

impl ListingCache {
    /// Create a cache from configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(config.max_capacity)
            .time_to_live(std::time::Duration::from_secs(config.default_ttl_seconds))
            .build();
        Self { cache }
    }

    /// Cached flat folder list for an owner.
    pub async fn get_folders(&self, owner: OwnerId) -> Option<Vec<Folder>> {
        self.get_json(&keys::owner_folders(owner)).await
    }

    /// Store an owner's folder list after a fetch.
    pub async fn put_folders(&self, owner: OwnerId, folders: &[Folder]) {
        self.put_json(keys::owner_folders(owner), folders).await;
    }

    /// Cached document listing for one folder.
    pub async fn get_documents(&self, owner: OwnerId, folder: FolderId) -> Option<Vec<Document>> {
        self.get_json(&keys::folder_documents(owner, folder)).await
    }

    /// Store a folder's document listing after a fetch.
    pub async fn put_documents(&self, owner: OwnerId, folder: FolderId, documents: &[Document]) {
        self.put_json(keys::folder_documents(owner, folder), documents)
            .await;
    }

    /// Invalidate the folder list for an owner.
    pub async fn invalidate_folders(&self, owner: OwnerId) {
        debug!(owner_id = %owner, "Invalidating folder listing");
        self.cache.remove(&keys::owner_folders(owner)).await;
    }

    /// Invalidate the document listing for one folder.
    pub async fn invalidate_documents(&self, owner: OwnerId, folder: FolderId) {
        debug!(owner_id = %owner, folder_id = %folder, "Invalidating document listing");
        self.cache.remove(&keys::folder_documents(owner, folder)).await;
    }

    async fn get_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.cache.get(key).await?;
        match serde_json::from_str(&raw) {
            Ok(value) => {
                debug!(key, "Cache hit");
                Some(value)
            }
            Err(_) => {
                self.cache.remove(key).await;
                None
            }
        }
    }

    async fn put_json<T: Serialize + ?Sized>(&self, key: String, value: &T) {
        if let Ok(raw) = serde_json::to_string(value) {
            self.cache.insert(key, raw).await;
        }
    }
}
