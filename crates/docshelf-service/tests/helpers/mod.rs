//! Shared test fixture: the full organizer wired over the in-memory
//! remote store.

use std::sync::Arc;

use bytes::Bytes;

use docshelf_cache::ListingCache;
use docshelf_core::config::cache::CacheConfig;
use docshelf_core::types::{FolderId, OwnerId};
use docshelf_entity::document::Document;
use docshelf_entity::folder::Folder;
use docshelf_remote::{BlobService, DocumentStore, FolderStore, MemoryRemote};
use docshelf_service::{
    BreadcrumbResolver, DocumentService, FolderService, Orchestrator, OwnerContext, PreviewService,
    TransferInterpreter, UploadAttachment,
};

pub struct TestApp {
    pub ctx: OwnerContext,
    pub folders: FolderService,
    pub documents: DocumentService,
    pub breadcrumbs: BreadcrumbResolver,
    pub orchestrator: Arc<Orchestrator>,
    pub interpreter: TransferInterpreter,
    pub preview: PreviewService,
}

impl TestApp {
    pub fn new() -> Self {
        let remote = MemoryRemote::new();
        let cache = ListingCache::new(&CacheConfig::default());

        let folder_store: Arc<dyn FolderStore> = Arc::new(remote.clone());
        let document_store: Arc<dyn DocumentStore> = Arc::new(remote.clone());
        let blob: Arc<dyn BlobService> = Arc::new(remote);

        let folders = FolderService::new(folder_store, cache.clone());
        let documents = DocumentService::new(document_store, folders.clone(), cache);
        let breadcrumbs = BreadcrumbResolver::new(folders.clone());
        let orchestrator = Arc::new(Orchestrator::new(
            folders.clone(),
            documents.clone(),
            blob.clone(),
        ));
        let interpreter = TransferInterpreter::new(orchestrator.clone());
        let preview = PreviewService::new(documents.clone(), blob);

        Self {
            ctx: OwnerContext::new(OwnerId::new()),
            folders,
            documents,
            breadcrumbs,
            orchestrator,
            interpreter,
            preview,
        }
    }

    pub async fn folder(&self, name: &str, parent: Option<FolderId>) -> Folder {
        self.folders
            .create_folder(&self.ctx, name, parent)
            .await
            .expect("create folder")
    }

    /// Upload-attach a document with the filename as title.
    pub async fn document(&self, folder: FolderId, file_name: &str) -> Document {
        self.orchestrator
            .attach_upload(
                &self.ctx,
                docshelf_service::FolderView::Folder(folder),
                None,
                UploadAttachment {
                    file_name: file_name.to_string(),
                    data: Bytes::from_static(b"test bytes"),
                },
            )
            .await
            .expect("attach upload")
    }

    pub async fn titles_in(&self, folder: FolderId) -> Vec<String> {
        self.documents
            .list_by_folder(&self.ctx, folder)
            .await
            .expect("list documents")
            .into_iter()
            .map(|d| d.title)
            .collect()
    }
}
