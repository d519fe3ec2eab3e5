//! # docshelf-cache
//!
//! Read-through cache for remote listings, keyed by `(owner, folder)`.
//!
//! After any confirmed mutation the affected entries are invalidated,
//! never patched: the next read does a full round trip to the remote
//! store, so displayed state is always a fresh fetch rather than a
//! client-side guess.

pub mod keys;
pub mod store;

pub use store::ListingCache;
