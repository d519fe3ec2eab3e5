//! Shared typed values used across Docshelf crates.

pub mod id;

pub use id::{DocumentId, FileId, FolderId, OwnerId};
