//! Remote store and blob service contracts.
//!
//! These traits describe the collaborator APIs the organizer consumes;
//! only the shape matters here. The traits are defined apart from their
//! implementations so services depend on `Arc<dyn ...>` and tests can
//! wire in the in-memory stand-ins.

use async_trait::async_trait;
use bytes::Bytes;
use chrono::{DateTime, Utc};

use docshelf_core::AppResult;
use docshelf_core::types::{DocumentId, FileId, FolderId, OwnerId};
use docshelf_entity::document::{CreateDocument, Document};
use docshelf_entity::folder::{CreateFolder, Folder};

/// The authoritative folder store.
#[async_trait]
pub trait FolderStore: Send + Sync + 'static {
    /// List the flat set of folders for an owner. Tree shape is derived
    /// client-side by grouping on `parent_id`.
    async fn list(&self, owner: OwnerId) -> AppResult<Vec<Folder>>;

    /// Create a folder and return the stored record.
    async fn create(&self, folder: &CreateFolder) -> AppResult<Folder>;

    /// Rename a folder in place.
    async fn rename(&self, id: FolderId, name: &str) -> AppResult<Folder>;

    /// Delete a folder. The store rejects the deletion with a
    /// not-empty error while the folder still holds child folders or
    /// documents; clients do not pre-check emptiness.
    async fn delete(&self, id: FolderId) -> AppResult<()>;
}

/// The authoritative document index.
#[async_trait]
pub trait DocumentStore: Send + Sync + 'static {
    /// Fetch a single document by id.
    async fn get(&self, id: DocumentId) -> AppResult<Document>;

    /// List the documents inside one concrete folder.
    async fn list_by_folder(&self, owner: OwnerId, folder: FolderId) -> AppResult<Vec<Document>>;

    /// Attach an uploaded file as a new document. Fails with not-found
    /// when the target folder does not exist.
    async fn create(&self, document: &CreateDocument) -> AppResult<Document>;

    /// Retitle a document.
    async fn rename(&self, id: DocumentId, title: &str) -> AppResult<Document>;

    /// Atomically rewrite a document's folder. Fails with not-found
    /// when the document or the destination folder does not exist.
    async fn set_folder(&self, id: DocumentId, dest: FolderId) -> AppResult<Document>;

    /// Delete a document. A stale id yields not-found, which callers
    /// treat as already-satisfied.
    async fn delete(&self, id: DocumentId) -> AppResult<()>;
}

/// A time-bounded URL for downloading or previewing a stored file.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct DownloadUrl {
    /// The signed URL.
    pub url: String,
    /// When the URL stops working.
    pub expires_at: DateTime<Utc>,
}

/// The external blob service that owns file bytes.
///
/// The organizer never reads or writes bytes itself; it carries the
/// opaque [`FileId`] between upload and document creation.
#[async_trait]
pub trait BlobService: Send + Sync + 'static {
    /// Upload raw bytes and return the opaque handle.
    async fn upload(&self, file_name: &str, data: Bytes) -> AppResult<FileId>;

    /// Resolve a handle to a time-bounded download URL.
    async fn download_url(&self, file_id: &FileId) -> AppResult<DownloadUrl>;
}
