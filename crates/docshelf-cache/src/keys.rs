//! Cache key builders for all Docshelf cache entries.
//!
//! Centralising key construction prevents typos and makes it easy
//! to find every key the application uses.

use docshelf_core::types::{FolderId, OwnerId};

/// Prefix applied to all Docshelf cache keys.
const PREFIX: &str = "docshelf";

/// Cache key for an owner's flat folder list.
pub fn owner_folders(owner: OwnerId) -> String {
    format!("{PREFIX}:folders:{owner}")
}

/// Cache key for the document listing of one folder.
pub fn folder_documents(owner: OwnerId, folder: FolderId) -> String {
    format!("{PREFIX}:documents:{owner}:{folder}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_owner_folders_key() {
        let owner = OwnerId::from_uuid(Uuid::nil());
        assert_eq!(
            owner_folders(owner),
            "docshelf:folders:00000000-0000-0000-0000-000000000000"
        );
    }

    #[test]
    fn test_folder_documents_key() {
        let owner = OwnerId::from_uuid(Uuid::nil());
        let folder = FolderId::from_uuid(Uuid::nil());
        assert_eq!(
            folder_documents(owner, folder),
            "docshelf:documents:00000000-0000-0000-0000-000000000000:00000000-0000-0000-0000-000000000000"
        );
    }
}
