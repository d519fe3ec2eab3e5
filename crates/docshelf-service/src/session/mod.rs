//! Interaction state: browsing location and exclusive modes.

pub mod mode;

pub use mode::{Mode, Session};
