//! Storage contract for user records.
//!
//! The auth core depends only on this trait; the database crate provides
//! the PostgreSQL implementation and tests provide in-memory fakes.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use quill_core::result::AppResult;

use super::model::{NewUser, User};

/// Tagged persistence failure returned by [`UserStore::persist`].
///
/// The store reports uniqueness violations structurally so callers match
/// exhaustively instead of inspecting driver error codes.
#[derive(Debug, Clone, Error)]
pub enum PersistError {
    /// A uniqueness constraint was violated on the named field.
    #[error("conflict on field '{field}'")]
    Conflict {
        /// The conflicting field (observed case: `"username"`).
        field: &'static str,
    },
    /// Any other persistence failure. The detail is for logs only and must
    /// not reach callers.
    #[error("storage failure: {detail}")]
    Storage {
        /// Backend-specific failure description.
        detail: String,
    },
}

/// Lookup and persistence of user records.
///
/// Username uniqueness is enforced by the storage layer behind this trait;
/// consumers never re-derive or cache that invariant.
#[async_trait]
pub trait UserStore: Send + Sync + 'static {
    /// Find a user by primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Find a user by username.
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// Persist a pending user, returning the stored record with its
    /// system-generated id and timestamps.
    async fn persist(&self, new_user: NewUser) -> Result<User, PersistError>;
}
