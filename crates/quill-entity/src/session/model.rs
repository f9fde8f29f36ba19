//! Session entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A server-tracked login session.
///
/// Sessions are stored in the server-side key-value store under their
/// token; the token is the only thing the caller ever holds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Opaque, unguessable session token.
    pub token: String,
    /// The user this session belongs to.
    pub user_id: Uuid,
    /// When the session was created (login time).
    pub created_at: DateTime<Utc>,
}

impl Session {
    /// Create a session record binding a token to a user.
    pub fn new(token: impl Into<String>, user_id: Uuid) -> Self {
        Self {
            token: token.into(),
            user_id,
            created_at: Utc::now(),
        }
    }
}
