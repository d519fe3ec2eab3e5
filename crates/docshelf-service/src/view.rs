//! Browsing location and listing types.

use serde::{Deserialize, Serialize};

use docshelf_core::types::FolderId;
use docshelf_entity::document::Document;
use docshelf_entity::folder::Folder;

/// The folder currently in view.
///
/// `All` is the virtual root: there is no persisted root folder record,
/// so the root view lists every top-level folder instead of documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FolderView {
    /// The virtual root view over all top-level folders.
    All,
    /// One concrete folder.
    Folder(FolderId),
}

impl FolderView {
    /// The concrete folder id, if any.
    pub fn as_folder(&self) -> Option<FolderId> {
        match self {
            Self::All => None,
            Self::Folder(id) => Some(*id),
        }
    }

    /// Whether this is the virtual root.
    pub fn is_root(&self) -> bool {
        matches!(self, Self::All)
    }
}

/// What a view lists: top-level folders at the virtual root, documents
/// inside a concrete folder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Listing {
    /// Contents of the virtual root view.
    TopLevelFolders(Vec<Folder>),
    /// Contents of one concrete folder.
    Documents(Vec<Document>),
}

impl Listing {
    /// The documents, when this is a concrete-folder listing.
    pub fn documents(&self) -> Option<&[Document]> {
        match self {
            Self::TopLevelFolders(_) => None,
            Self::Documents(docs) => Some(docs),
        }
    }
}
