//! Folder CRUD operations with client-side validation.

use std::sync::Arc;

use tracing::info;

use docshelf_cache::ListingCache;
use docshelf_core::AppError;
use docshelf_core::types::FolderId;
use docshelf_entity::folder::{CreateFolder, Folder, FolderTree};
use docshelf_remote::FolderStore;

use crate::context::OwnerContext;

/// Manages folder CRUD against the remote store.
///
/// Validation runs before any remote call; reads go through the listing
/// cache; every confirmed mutation invalidates the owner's folder list
/// so the next read is a full round trip.
#[derive(Clone)]
pub struct FolderService {
    /// The authoritative store.
    store: Arc<dyn FolderStore>,
    /// Read-through listing cache.
    cache: ListingCache,
}

impl std::fmt::Debug for FolderService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FolderService").finish()
    }
}

impl FolderService {
    /// Creates a new folder service.
    pub fn new(store: Arc<dyn FolderStore>, cache: ListingCache) -> Self {
        Self { store, cache }
    }

    /// Lists the owner's folders, flat.
    pub async fn list_folders(&self, ctx: &OwnerContext) -> Result<Vec<Folder>, AppError> {
        if let Some(cached) = self.cache.get_folders(ctx.owner_id).await {
            return Ok(cached);
        }

        let folders = self.store.list(ctx.owner_id).await?;
        self.cache.put_folders(ctx.owner_id, &folders).await;
        Ok(folders)
    }

    /// Builds the tree index over the owner's current folder list.
    pub async fn tree(&self, ctx: &OwnerContext) -> Result<FolderTree, AppError> {
        let folders = self.list_folders(ctx).await?;
        Ok(FolderTree::from_folders(&folders))
    }

    /// Lists the direct children of a folder.
    pub async fn children_of(
        &self,
        ctx: &OwnerContext,
        folder_id: FolderId,
    ) -> Result<Vec<Folder>, AppError> {
        let tree = self.tree(ctx).await?;
        Ok(tree.children_of(folder_id).into_iter().cloned().collect())
    }

    /// Creates a new folder under an optional parent.
    pub async fn create_folder(
        &self,
        ctx: &OwnerContext,
        name: &str,
        parent_id: Option<FolderId>,
    ) -> Result<Folder, AppError> {
        let name = validated_name(name)?;

        let folder = self
            .store
            .create(&CreateFolder {
                owner_id: ctx.owner_id,
                parent_id,
                name,
            })
            .await?;

        self.cache.invalidate_folders(ctx.owner_id).await;

        info!(
            owner_id = %ctx.owner_id,
            folder_id = %folder.id,
            name = %folder.name,
            "Folder created"
        );

        Ok(folder)
    }

    /// Renames a folder in place.
    pub async fn rename_folder(
        &self,
        ctx: &OwnerContext,
        folder_id: FolderId,
        name: &str,
    ) -> Result<Folder, AppError> {
        let name = validated_name(name)?;

        let folder = self.store.rename(folder_id, &name).await?;
        self.cache.invalidate_folders(ctx.owner_id).await;

        info!(
            owner_id = %ctx.owner_id,
            folder_id = %folder_id,
            new_name = %name,
            "Folder renamed"
        );

        Ok(folder)
    }

    /// Deletes a folder.
    ///
    /// Emptiness is not pre-checked: the store rejects a non-empty
    /// folder and that error surfaces unchanged, with no local state
    /// touched.
    pub async fn delete_folder(
        &self,
        ctx: &OwnerContext,
        folder_id: FolderId,
    ) -> Result<(), AppError> {
        self.store.delete(folder_id).await?;
        self.cache.invalidate_folders(ctx.owner_id).await;

        info!(owner_id = %ctx.owner_id, folder_id = %folder_id, "Folder deleted");

        Ok(())
    }
}

/// Trim-and-reject-empty validation shared by create and rename.
fn validated_name(name: &str) -> Result<String, AppError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(AppError::validation("Folder name cannot be empty"));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validated_name_trims() {
        assert_eq!(validated_name("  Taxes  ").unwrap(), "Taxes");
    }

    #[test]
    fn test_validated_name_rejects_whitespace() {
        assert!(validated_name("   ").is_err());
        assert!(validated_name("").is_err());
    }
}
