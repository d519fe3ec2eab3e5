//! # docshelf-service
//!
//! Organizer logic for Docshelf. Services wrap the remote store
//! contracts with client-side validation, read-through caching, and the
//! interaction state machine.
//!
//! Services follow constructor injection — all dependencies are provided
//! at construction time via `Arc` references.

pub mod context;
pub mod document;
pub mod folder;
pub mod orchestrator;
pub mod preview;
pub mod session;
pub mod transfer;
pub mod view;

pub use context::OwnerContext;
pub use document::DocumentService;
pub use folder::{BreadcrumbResolver, FolderService};
pub use orchestrator::{BulkMoveReport, DeleteOutcome, Orchestrator, UploadAttachment};
pub use preview::{PreviewKind, PreviewResolution, PreviewService};
pub use session::{Mode, Session};
pub use transfer::{DropPayload, DroppedFile, TransferIntent, TransferInterpreter, TransferOutcome};
pub use view::{FolderView, Listing};
