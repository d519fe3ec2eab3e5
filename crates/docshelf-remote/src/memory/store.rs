//! In-memory remote store backed by dashmap.
//!
//! One struct implements all three remote contracts so the fake behaves
//! like a single backend: folder emptiness checks see the document
//! index, and document creation sees the folder table.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use chrono::Utc;
use dashmap::DashMap;
use tracing::debug;
use uuid::Uuid;

use docshelf_core::types::{DocumentId, FileId, FolderId, OwnerId};
use docshelf_core::{AppError, AppResult};
use docshelf_entity::document::{CreateDocument, Document};
use docshelf_entity::folder::{CreateFolder, Folder};

use crate::api::{BlobService, DocumentStore, DownloadUrl, FolderStore};

/// How long minted download URLs stay valid.
const URL_TTL: Duration = Duration::from_secs(900);

/// In-memory remote store and blob service.
///
/// Cheap to clone; clones share state, so one instance can be handed to
/// every service in a test as `Arc<dyn ...>` views of the same backend.
#[derive(Debug, Clone, Default)]
pub struct MemoryRemote {
    folders: Arc<DashMap<FolderId, Folder>>,
    documents: Arc<DashMap<DocumentId, Document>>,
    blobs: Arc<DashMap<FileId, Bytes>>,
}

impl MemoryRemote {
    /// Create an empty backend.
    pub fn new() -> Self {
        Self::default()
    }

    fn folder_is_empty(&self, id: FolderId) -> bool {
        let has_child_folder = self.folders.iter().any(|f| f.parent_id == Some(id));
        let has_document = self.documents.iter().any(|d| d.folder_id == id);
        !has_child_folder && !has_document
    }
}

#[async_trait]
impl FolderStore for MemoryRemote {
    async fn list(&self, owner: OwnerId) -> AppResult<Vec<Folder>> {
        let mut folders: Vec<Folder> = self
            .folders
            .iter()
            .filter(|f| f.owner_id == owner)
            .map(|f| f.value().clone())
            .collect();
        folders.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(folders)
    }

    async fn create(&self, folder: &CreateFolder) -> AppResult<Folder> {
        if let Some(parent_id) = folder.parent_id {
            if !self.folders.contains_key(&parent_id) {
                return Err(AppError::not_found("Parent folder not found"));
            }
        }

        let now = Utc::now();
        let record = Folder {
            id: FolderId::new(),
            owner_id: folder.owner_id,
            parent_id: folder.parent_id,
            name: folder.name.clone(),
            created_at: now,
            updated_at: now,
        };
        self.folders.insert(record.id, record.clone());
        Ok(record)
    }

    async fn rename(&self, id: FolderId, name: &str) -> AppResult<Folder> {
        let mut entry = self
            .folders
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found("Folder not found"))?;
        entry.name = name.to_string();
        entry.updated_at = Utc::now();
        Ok(entry.value().clone())
    }

    async fn delete(&self, id: FolderId) -> AppResult<()> {
        if !self.folders.contains_key(&id) {
            return Err(AppError::not_found("Folder not found"));
        }
        if !self.folder_is_empty(id) {
            return Err(AppError::not_empty(
                "Folder still contains folders or documents",
            ));
        }
        self.folders.remove(&id);
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for MemoryRemote {
    async fn get(&self, id: DocumentId) -> AppResult<Document> {
        self.documents
            .get(&id)
            .map(|d| d.value().clone())
            .ok_or_else(|| AppError::not_found("Document not found"))
    }

    async fn list_by_folder(&self, owner: OwnerId, folder: FolderId) -> AppResult<Vec<Document>> {
        let mut documents: Vec<Document> = self
            .documents
            .iter()
            .filter(|d| d.owner_id == owner && d.folder_id == folder)
            .map(|d| d.value().clone())
            .collect();
        documents.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(documents)
    }

    async fn create(&self, document: &CreateDocument) -> AppResult<Document> {
        if !self.folders.contains_key(&document.folder_id) {
            return Err(AppError::not_found("Target folder not found"));
        }

        let record = Document {
            id: DocumentId::new(),
            folder_id: document.folder_id,
            owner_id: document.owner_id,
            title: document.title.clone(),
            file_id: document.file_id.clone(),
            created_at: Utc::now(),
        };
        self.documents.insert(record.id, record.clone());
        Ok(record)
    }

    async fn rename(&self, id: DocumentId, title: &str) -> AppResult<Document> {
        let mut entry = self
            .documents
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found("Document not found"))?;
        entry.title = title.to_string();
        Ok(entry.value().clone())
    }

    async fn set_folder(&self, id: DocumentId, dest: FolderId) -> AppResult<Document> {
        if !self.folders.contains_key(&dest) {
            return Err(AppError::not_found("Destination folder not found"));
        }
        let mut entry = self
            .documents
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found("Document not found"))?;
        entry.folder_id = dest;
        Ok(entry.value().clone())
    }

    async fn delete(&self, id: DocumentId) -> AppResult<()> {
        self.documents
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| AppError::not_found("Document not found"))
    }
}

#[async_trait]
impl BlobService for MemoryRemote {
    async fn upload(&self, file_name: &str, data: Bytes) -> AppResult<FileId> {
        let file_id = FileId::new(format!("mem-{}", Uuid::new_v4()));
        debug!(file_id = %file_id, file_name, size = data.len(), "Blob stored");
        self.blobs.insert(file_id.clone(), data);
        Ok(file_id)
    }

    async fn download_url(&self, file_id: &FileId) -> AppResult<DownloadUrl> {
        if !self.blobs.contains_key(file_id) {
            return Err(AppError::not_found("File not found"));
        }
        let expires_at = Utc::now() + URL_TTL;
        Ok(DownloadUrl {
            url: format!("memory://blobs/{file_id}"),
            expires_at,
        })
    }
}
