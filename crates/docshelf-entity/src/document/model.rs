//! Document entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use docshelf_core::types::{DocumentId, FileId, FolderId, OwnerId};

/// A titled reference to one externally stored file, attached to exactly
/// one folder at any instant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Unique document identifier.
    pub id: DocumentId,
    /// The folder this document lives in.
    pub folder_id: FolderId,
    /// The account this document belongs to.
    pub owner_id: OwnerId,
    /// Display title.
    pub title: String,
    /// Opaque handle to the stored bytes, owned by the blob service.
    pub file_id: FileId,
    /// When the document was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new document after an upload completes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDocument {
    /// Target folder.
    pub folder_id: FolderId,
    /// The document owner.
    pub owner_id: OwnerId,
    /// Display title (user-supplied or defaulted to the original filename).
    pub title: String,
    /// The handle returned by the blob upload.
    pub file_id: FileId,
}
