//! Folder entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use docshelf_core::types::{FolderId, OwnerId};

/// A folder in the document hierarchy.
///
/// There is no persisted root folder record; the root is a virtual view
/// over all folders with `parent_id = None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Folder {
    /// Unique folder identifier.
    pub id: FolderId,
    /// The account this folder belongs to.
    pub owner_id: OwnerId,
    /// Parent folder ID (None for top-level folders).
    pub parent_id: Option<FolderId>,
    /// Folder name.
    pub name: String,
    /// When the folder was created.
    pub created_at: DateTime<Utc>,
    /// When the folder was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Folder {
    /// Check if this is a top-level folder (no parent).
    pub fn is_top_level(&self) -> bool {
        self.parent_id.is_none()
    }
}

/// Data required to create a new folder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFolder {
    /// The folder owner.
    pub owner_id: OwnerId,
    /// Parent folder (None for top-level).
    pub parent_id: Option<FolderId>,
    /// Folder name.
    pub name: String,
}
