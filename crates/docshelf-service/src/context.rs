//! Owner context carried into every service call.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use docshelf_core::types::OwnerId;

/// Context for the acting account.
///
/// Resolved by the session layer outside this subsystem and passed into
/// service methods so that every operation knows *whose* folders and
/// documents it touches. Both entity types are exclusively owned by
/// this account scope.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OwnerContext {
    /// The requesting account.
    pub owner_id: OwnerId,
    /// When this interaction started.
    pub requested_at: DateTime<Utc>,
}

impl OwnerContext {
    /// Creates a context for an owner, stamped now.
    pub fn new(owner_id: OwnerId) -> Self {
        Self {
            owner_id,
            requested_at: Utc::now(),
        }
    }
}
