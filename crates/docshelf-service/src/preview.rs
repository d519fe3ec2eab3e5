//! Preview resolution for documents.
//!
//! The renderer is chosen purely from the document title's extension;
//! file bytes are never inspected here. The blob service supplies a
//! time-bounded URL for whichever renderer is picked.

use std::sync::Arc;

use docshelf_core::AppError;
use docshelf_core::types::DocumentId;
use docshelf_remote::{BlobService, DownloadUrl};

use crate::context::OwnerContext;
use crate::document::DocumentService;

/// Which renderer a document preview uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewKind {
    /// Inline image viewer.
    Image,
    /// Embedded document viewer.
    Embedded,
    /// No inline renderer; offer the download link only.
    DownloadOnly,
}

impl PreviewKind {
    /// Picks the renderer from a title's extension.
    pub fn from_title(title: &str) -> Self {
        let extension = title
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "png" | "jpg" | "jpeg" | "gif" | "webp" | "bmp" | "svg" => Self::Image,
            "pdf" | "txt" | "md" => Self::Embedded,
            _ => Self::DownloadOnly,
        }
    }
}

/// A resolved preview: renderer choice plus a time-bounded URL.
#[derive(Debug, Clone)]
pub struct PreviewResolution {
    /// The renderer to use.
    pub kind: PreviewKind,
    /// The signed URL, valid until its expiry.
    pub url: DownloadUrl,
}

/// Resolves documents to previews via the blob service.
#[derive(Clone)]
pub struct PreviewService {
    /// Document lookups.
    documents: DocumentService,
    /// URL resolution.
    blob: Arc<dyn BlobService>,
}

impl std::fmt::Debug for PreviewService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreviewService").finish()
    }
}

impl PreviewService {
    /// Creates a new preview service.
    pub fn new(documents: DocumentService, blob: Arc<dyn BlobService>) -> Self {
        Self { documents, blob }
    }

    /// Resolves a document to a renderer choice and download URL.
    pub async fn resolve(
        &self,
        ctx: &OwnerContext,
        document_id: DocumentId,
    ) -> Result<PreviewResolution, AppError> {
        let document = self.documents.get_document(ctx, document_id).await?;
        let url = self.blob.download_url(&document.file_id).await?;

        Ok(PreviewResolution {
            kind: PreviewKind::from_title(&document.title),
            url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_extensions() {
        assert_eq!(PreviewKind::from_title("photo.PNG"), PreviewKind::Image);
        assert_eq!(PreviewKind::from_title("scan.jpeg"), PreviewKind::Image);
    }

    #[test]
    fn test_embedded_extensions() {
        assert_eq!(PreviewKind::from_title("w2.pdf"), PreviewKind::Embedded);
        assert_eq!(PreviewKind::from_title("notes.md"), PreviewKind::Embedded);
    }

    #[test]
    fn test_download_only_fallback() {
        assert_eq!(
            PreviewKind::from_title("archive.zip"),
            PreviewKind::DownloadOnly
        );
        assert_eq!(PreviewKind::from_title("no-extension"), PreviewKind::DownloadOnly);
        assert_eq!(PreviewKind::from_title(""), PreviewKind::DownloadOnly);
    }
}
