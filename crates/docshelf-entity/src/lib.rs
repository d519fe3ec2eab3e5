//! # docshelf-entity
//!
//! Domain entity models for Docshelf. Every struct in this crate
//! represents a remote store record or a domain value object. All
//! entities derive `Debug`, `Clone`, `Serialize`, and `Deserialize`.

pub mod document;
pub mod folder;
