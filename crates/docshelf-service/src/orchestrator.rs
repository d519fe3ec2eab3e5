//! Central authority for state-changing operations.
//!
//! Wraps the folder and document services with the cross-cutting rules:
//! bulk move accounting, upload-attach, idempotent deletes, and the
//! navigation fallback when the folder in view is deleted.

use std::sync::Arc;

use bytes::Bytes;
use tracing::{info, warn};

use docshelf_core::AppError;
use docshelf_core::types::{DocumentId, FolderId};
use docshelf_entity::document::Document;
use docshelf_remote::BlobService;

use crate::context::OwnerContext;
use crate::document::DocumentService;
use crate::folder::FolderService;
use crate::session::Session;
use crate::view::FolderView;

/// Outcome of a delete that tolerates stale ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The record existed and was deleted.
    Deleted,
    /// The record was already gone; the retry is treated as satisfied.
    AlreadyGone,
}

/// A file handed over for upload-attach: original filename plus bytes.
#[derive(Debug, Clone)]
pub struct UploadAttachment {
    /// Original filename; the default document title.
    pub file_name: String,
    /// Raw content, passed through to the blob service untouched.
    pub data: Bytes,
}

/// Aggregate result of a bulk move.
///
/// There is no cross-item atomicity: a failure partway through leaves
/// earlier items moved and later items untouched.
#[derive(Debug)]
pub struct BulkMoveReport {
    /// The common destination.
    pub dest: FolderId,
    /// Ids moved successfully, in order.
    pub moved: Vec<DocumentId>,
    /// Ids that failed, with the error that stopped each one.
    pub failed: Vec<(DocumentId, AppError)>,
}

impl BulkMoveReport {
    /// Whether every requested item moved.
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    /// Total number of items requested.
    pub fn total(&self) -> usize {
        self.moved.len() + self.failed.len()
    }

    /// Human-readable "N of M moved" summary.
    pub fn summary(&self) -> String {
        format!("{} of {} moved", self.moved.len(), self.total())
    }
}

/// Orchestrates mutations across folders, documents, and the blob
/// service.
#[derive(Clone)]
pub struct Orchestrator {
    /// Folder operations.
    folders: FolderService,
    /// Document operations.
    documents: DocumentService,
    /// External blob upload/resolution.
    blob: Arc<dyn BlobService>,
}

impl std::fmt::Debug for Orchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Orchestrator").finish()
    }
}

impl Orchestrator {
    /// Creates a new orchestrator.
    pub fn new(
        folders: FolderService,
        documents: DocumentService,
        blob: Arc<dyn BlobService>,
    ) -> Self {
        Self {
            folders,
            documents,
            blob,
        }
    }

    /// The folder service in use.
    pub fn folders(&self) -> &FolderService {
        &self.folders
    }

    /// The document service in use.
    pub fn documents(&self) -> &DocumentService {
        &self.documents
    }

    /// Moves one document to a destination folder.
    pub async fn move_document(
        &self,
        ctx: &OwnerContext,
        document_id: DocumentId,
        dest: FolderId,
    ) -> Result<Document, AppError> {
        self.documents.move_document(ctx, document_id, dest).await
    }

    /// Moves a selection of documents to one destination, sequentially.
    ///
    /// Each item is its own awaited remote call; a failure is recorded
    /// and the run continues with the next item. Partial results are
    /// reported, never rolled back.
    pub async fn bulk_move(
        &self,
        ctx: &OwnerContext,
        document_ids: &[DocumentId],
        dest: FolderId,
    ) -> BulkMoveReport {
        let mut report = BulkMoveReport {
            dest,
            moved: Vec::new(),
            failed: Vec::new(),
        };

        for &document_id in document_ids {
            match self.documents.move_document(ctx, document_id, dest).await {
                Ok(_) => report.moved.push(document_id),
                Err(err) => report.failed.push((document_id, err)),
            }
        }

        if report.is_complete() {
            info!(
                owner_id = %ctx.owner_id,
                dest = %dest,
                moved = report.moved.len(),
                "Bulk move complete"
            );
        } else {
            warn!(
                owner_id = %ctx.owner_id,
                dest = %dest,
                summary = %report.summary(),
                "Bulk move partially failed"
            );
        }

        report
    }

    /// Uploads a file through the blob service, then attaches the
    /// resulting handle as a document in the target folder.
    ///
    /// The title defaults to the original filename when none is given.
    /// Requires a concrete folder view: uploads never land in the
    /// virtual root.
    pub async fn attach_upload(
        &self,
        ctx: &OwnerContext,
        view: FolderView,
        title: Option<&str>,
        attachment: UploadAttachment,
    ) -> Result<Document, AppError> {
        // Reject the root view before touching the network.
        if view.as_folder().is_none() {
            return Err(AppError::validation("Select a folder first"));
        }

        let file_id = self
            .blob
            .upload(&attachment.file_name, attachment.data)
            .await?;

        let title = title.unwrap_or(&attachment.file_name);
        self.documents
            .create_document(ctx, view, title, file_id)
            .await
    }

    /// Deletes a document, treating a stale id as already satisfied.
    pub async fn delete_document(
        &self,
        ctx: &OwnerContext,
        document_id: DocumentId,
    ) -> Result<DeleteOutcome, AppError> {
        match self.documents.delete_document(ctx, document_id).await {
            Ok(()) => Ok(DeleteOutcome::Deleted),
            Err(err) if err.is_not_found() => {
                info!(
                    owner_id = %ctx.owner_id,
                    document_id = %document_id,
                    "Document already gone; delete treated as satisfied"
                );
                Ok(DeleteOutcome::AlreadyGone)
            }
            Err(err) => Err(err),
        }
    }

    /// Deletes a folder after user confirmation.
    ///
    /// The store rejects a non-empty folder; that error surfaces with
    /// state unchanged. On success, a session browsing the deleted
    /// folder falls back to the virtual root.
    pub async fn delete_folder(
        &self,
        ctx: &OwnerContext,
        folder_id: FolderId,
        session: &mut Session,
    ) -> Result<(), AppError> {
        self.folders.delete_folder(ctx, folder_id).await?;
        session.note_folder_removed(folder_id);
        Ok(())
    }
}
