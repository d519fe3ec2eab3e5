//! In-memory reference implementation of the remote contracts.

pub mod store;

pub use store::MemoryRemote;
