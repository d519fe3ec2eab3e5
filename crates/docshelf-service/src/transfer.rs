//! Drag-and-drop intent classification and routing.
//!
//! Native drop payloads are normalized into one [`TransferIntent`] at
//! the drop boundary and consumed by a single handler, decoupling the
//! UI event surface from the mutation logic.

use std::sync::Arc;

use bytes::Bytes;
use tracing::debug;

use docshelf_core::AppError;
use docshelf_core::types::{DocumentId, FolderId};
use docshelf_entity::document::Document;

use crate::context::OwnerContext;
use crate::orchestrator::{Orchestrator, UploadAttachment};
use crate::view::FolderView;

/// One external file carried by a drop event.
#[derive(Debug, Clone)]
pub struct DroppedFile {
    /// Original filename as reported by the operating system.
    pub name: String,
    /// File content.
    pub data: Bytes,
}

/// The raw contents of a drop event, before classification.
#[derive(Debug, Clone, Default)]
pub struct DropPayload {
    /// Internal document identifier, when a document row was dragged.
    pub document_id: Option<DocumentId>,
    /// External file payloads, when real files were dragged in.
    pub files: Vec<DroppedFile>,
}

/// The normalized outcome of interpreting a drop event.
#[derive(Debug, Clone)]
pub enum TransferIntent {
    /// Move an existing document into the target folder.
    MoveDocument {
        /// The dragged document.
        document_id: DocumentId,
        /// The folder dropped onto.
        dest: FolderId,
    },
    /// Upload external files into the target folder.
    UploadFiles {
        /// The dropped files.
        files: Vec<DroppedFile>,
        /// The folder dropped onto.
        dest: FolderId,
    },
    /// Any other payload: no-op, no error.
    Ignore,
}

impl TransferIntent {
    /// Classifies a drop payload against a folder target.
    ///
    /// An internal document identifier takes precedence over file
    /// payloads; an empty payload is ignored.
    pub fn classify(payload: DropPayload, dest: FolderId) -> Self {
        if let Some(document_id) = payload.document_id {
            return Self::MoveDocument { document_id, dest };
        }
        if !payload.files.is_empty() {
            return Self::UploadFiles {
                files: payload.files,
                dest,
            };
        }
        Self::Ignore
    }
}

/// What handling a drop produced.
#[derive(Debug)]
pub enum TransferOutcome {
    /// One document was moved (or was already in place).
    Moved(Document),
    /// One document was created per uploaded file.
    Uploaded(Vec<Document>),
    /// The payload carried nothing actionable.
    Ignored,
}

/// Routes classified intents to the orchestrator.
#[derive(Debug, Clone)]
pub struct TransferInterpreter {
    orchestrator: Arc<Orchestrator>,
}

impl TransferInterpreter {
    /// Creates a new interpreter.
    pub fn new(orchestrator: Arc<Orchestrator>) -> Self {
        Self { orchestrator }
    }

    /// Classifies and executes one drop event.
    pub async fn handle_drop(
        &self,
        ctx: &OwnerContext,
        payload: DropPayload,
        dest: FolderId,
    ) -> Result<TransferOutcome, AppError> {
        match TransferIntent::classify(payload, dest) {
            TransferIntent::MoveDocument { document_id, dest } => {
                let moved = self.orchestrator.move_document(ctx, document_id, dest).await?;
                Ok(TransferOutcome::Moved(moved))
            }
            TransferIntent::UploadFiles { files, dest } => {
                let mut created = Vec::with_capacity(files.len());
                for file in files {
                    let document = self
                        .orchestrator
                        .attach_upload(
                            ctx,
                            FolderView::Folder(dest),
                            None,
                            UploadAttachment {
                                file_name: file.name,
                                data: file.data,
                            },
                        )
                        .await?;
                    created.push(document);
                }
                Ok(TransferOutcome::Uploaded(created))
            }
            TransferIntent::Ignore => {
                debug!(dest = %dest, "Drop payload carried nothing actionable");
                Ok(TransferOutcome::Ignored)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str) -> DroppedFile {
        DroppedFile {
            name: name.to_string(),
            data: Bytes::from_static(b"bytes"),
        }
    }

    #[test]
    fn test_classify_document_drag() {
        let document_id = DocumentId::new();
        let dest = FolderId::new();
        let intent = TransferIntent::classify(
            DropPayload {
                document_id: Some(document_id),
                files: vec![],
            },
            dest,
        );
        assert!(matches!(
            intent,
            TransferIntent::MoveDocument { document_id: d, dest: t } if d == document_id && t == dest
        ));
    }

    #[test]
    fn test_classify_external_files() {
        let intent = TransferIntent::classify(
            DropPayload {
                document_id: None,
                files: vec![file("w2.pdf"), file("1099.pdf")],
            },
            FolderId::new(),
        );
        assert!(matches!(intent, TransferIntent::UploadFiles { ref files, .. } if files.len() == 2));
    }

    #[test]
    fn test_document_takes_precedence_over_files() {
        let intent = TransferIntent::classify(
            DropPayload {
                document_id: Some(DocumentId::new()),
                files: vec![file("w2.pdf")],
            },
            FolderId::new(),
        );
        assert!(matches!(intent, TransferIntent::MoveDocument { .. }));
    }

    #[test]
    fn test_empty_payload_ignored() {
        let intent = TransferIntent::classify(DropPayload::default(), FolderId::new());
        assert!(matches!(intent, TransferIntent::Ignore));
    }
}
