//! Breadcrumb resolution over the owner's folder tree.

use docshelf_core::AppError;
use docshelf_core::types::FolderId;
use docshelf_entity::folder::Folder;

use crate::context::OwnerContext;
use crate::folder::FolderService;
use crate::view::FolderView;

/// Derives the root-to-current ancestor path for display and
/// "up one level" navigation.
#[derive(Debug, Clone)]
pub struct BreadcrumbResolver {
    /// Folder service (cached flat-list reads).
    folders: FolderService,
}

impl BreadcrumbResolver {
    /// Creates a new resolver.
    pub fn new(folders: FolderService) -> Self {
        Self { folders }
    }

    /// The ordered ancestor path `[root-most ... current]`.
    ///
    /// Terminates with an invariant-violation error instead of looping
    /// if the acyclicity invariant was ever broken upstream.
    pub async fn trail(
        &self,
        ctx: &OwnerContext,
        folder_id: FolderId,
    ) -> Result<Vec<Folder>, AppError> {
        let tree = self.folders.tree(ctx).await?;
        tree.breadcrumb(folder_id)
    }

    /// Where "up one level" goes from a folder: the breadcrumb entry
    /// immediately preceding it, or the virtual root for a top-level
    /// folder.
    pub async fn up_one_level(
        &self,
        ctx: &OwnerContext,
        folder_id: FolderId,
    ) -> Result<FolderView, AppError> {
        let tree = self.folders.tree(ctx).await?;
        Ok(match tree.parent_of(folder_id)? {
            Some(parent_id) => FolderView::Folder(parent_id),
            None => FolderView::All,
        })
    }
}
