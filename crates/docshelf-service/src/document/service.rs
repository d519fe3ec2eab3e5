//! Document CRUD and move operations.

use std::sync::Arc;

use tracing::{debug, info};

use docshelf_cache::ListingCache;
use docshelf_core::AppError;
use docshelf_core::types::{DocumentId, FileId, FolderId};
use docshelf_entity::document::{CreateDocument, Document};
use docshelf_remote::DocumentStore;

use crate::context::OwnerContext;
use crate::folder::FolderService;
use crate::view::{FolderView, Listing};

/// Manages the document index against the remote store.
#[derive(Clone)]
pub struct DocumentService {
    /// The authoritative index.
    store: Arc<dyn DocumentStore>,
    /// Folder service, for the virtual root listing.
    folders: FolderService,
    /// Read-through listing cache.
    cache: ListingCache,
}

impl std::fmt::Debug for DocumentService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentService").finish()
    }
}

impl DocumentService {
    /// Creates a new document service.
    pub fn new(store: Arc<dyn DocumentStore>, folders: FolderService, cache: ListingCache) -> Self {
        Self {
            store,
            folders,
            cache,
        }
    }

    /// Fetches one document by id.
    pub async fn get_document(
        &self,
        _ctx: &OwnerContext,
        document_id: DocumentId,
    ) -> Result<Document, AppError> {
        self.store.get(document_id).await
    }

    /// Lists a view's contents.
    ///
    /// The virtual root lists top-level *folders*; documents are only
    /// ever listed inside a concrete folder.
    pub async fn list(&self, ctx: &OwnerContext, view: FolderView) -> Result<Listing, AppError> {
        match view {
            FolderView::All => {
                let tree = self.folders.tree(ctx).await?;
                let top_level = tree.top_level().into_iter().cloned().collect();
                Ok(Listing::TopLevelFolders(top_level))
            }
            FolderView::Folder(folder_id) => {
                let documents = self.list_by_folder(ctx, folder_id).await?;
                Ok(Listing::Documents(documents))
            }
        }
    }

    /// Lists the documents inside one concrete folder, read-through.
    pub async fn list_by_folder(
        &self,
        ctx: &OwnerContext,
        folder_id: FolderId,
    ) -> Result<Vec<Document>, AppError> {
        if let Some(cached) = self.cache.get_documents(ctx.owner_id, folder_id).await {
            return Ok(cached);
        }

        let documents = self.store.list_by_folder(ctx.owner_id, folder_id).await?;
        self.cache
            .put_documents(ctx.owner_id, folder_id, &documents)
            .await;
        Ok(documents)
    }

    /// Attaches an uploaded file as a new document in a concrete folder.
    pub async fn create_document(
        &self,
        ctx: &OwnerContext,
        view: FolderView,
        title: &str,
        file_id: FileId,
    ) -> Result<Document, AppError> {
        let folder_id = view
            .as_folder()
            .ok_or_else(|| AppError::validation("Select a folder first"))?;
        let title = validated_title(title)?;

        let document = self
            .store
            .create(&CreateDocument {
                folder_id,
                owner_id: ctx.owner_id,
                title,
                file_id,
            })
            .await?;

        self.cache
            .invalidate_documents(ctx.owner_id, folder_id)
            .await;

        info!(
            owner_id = %ctx.owner_id,
            document_id = %document.id,
            folder_id = %folder_id,
            title = %document.title,
            "Document created"
        );

        Ok(document)
    }

    /// Retitles a document.
    pub async fn rename_document(
        &self,
        ctx: &OwnerContext,
        document_id: DocumentId,
        title: &str,
    ) -> Result<Document, AppError> {
        let title = validated_title(title)?;

        let document = self.store.rename(document_id, &title).await?;
        self.cache
            .invalidate_documents(ctx.owner_id, document.folder_id)
            .await;

        info!(
            owner_id = %ctx.owner_id,
            document_id = %document_id,
            new_title = %title,
            "Document renamed"
        );

        Ok(document)
    }

    /// Moves a document to another folder by rewriting its `folder_id`.
    ///
    /// Moving a document onto the folder it already lives in is a no-op
    /// success: no remote write, no cache invalidation. A nonexistent
    /// destination is rejected by the store.
    pub async fn move_document(
        &self,
        ctx: &OwnerContext,
        document_id: DocumentId,
        dest: FolderId,
    ) -> Result<Document, AppError> {
        let document = self.store.get(document_id).await?;
        if document.folder_id == dest {
            debug!(
                owner_id = %ctx.owner_id,
                document_id = %document_id,
                folder_id = %dest,
                "Move onto current folder; nothing to do"
            );
            return Ok(document);
        }

        let source = document.folder_id;
        let moved = self.store.set_folder(document_id, dest).await?;

        self.cache.invalidate_documents(ctx.owner_id, source).await;
        self.cache.invalidate_documents(ctx.owner_id, dest).await;

        info!(
            owner_id = %ctx.owner_id,
            document_id = %document_id,
            from_folder = %source,
            to_folder = %dest,
            "Document moved"
        );

        Ok(moved)
    }

    /// Deletes a document.
    pub async fn delete_document(
        &self,
        ctx: &OwnerContext,
        document_id: DocumentId,
    ) -> Result<(), AppError> {
        let document = self.store.get(document_id).await?;
        self.store.delete(document_id).await?;
        self.cache
            .invalidate_documents(ctx.owner_id, document.folder_id)
            .await;

        info!(owner_id = %ctx.owner_id, document_id = %document_id, "Document deleted");

        Ok(())
    }
}

/// Trim-and-reject-empty validation for document titles.
fn validated_title(title: &str) -> Result<String, AppError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(AppError::validation("Document title cannot be empty"));
    }
    Ok(trimmed.to_string())
}
