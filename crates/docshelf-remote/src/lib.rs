//! # docshelf-remote
//!
//! Contracts for the authoritative remote store and blob service, plus
//! in-memory reference implementations.
//!
//! The organizer is a client: every mutation goes through these traits
//! and the affected listings are re-fetched afterwards. The in-memory
//! implementations stand in for the real backend in tests and enforce
//! the server-side rules the organizer relies on (non-empty-folder
//! deletion rejection, not-found on stale ids, destination-must-exist
//! on move).

pub mod api;
pub mod memory;

pub use api::{BlobService, DocumentStore, DownloadUrl, FolderStore};
pub use memory::MemoryRemote;
