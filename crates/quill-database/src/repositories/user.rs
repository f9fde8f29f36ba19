//! PostgreSQL implementation of the user store contract.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use quill_core::error::{AppError, ErrorKind};
use quill_core::result::AppResult;
use quill_entity::user::model::{NewUser, User};
use quill_entity::user::store::{PersistError, UserStore};

/// Name of the unique constraint backing username uniqueness.
const USERNAME_UNIQUE_CONSTRAINT: &str = "users_username_key";

/// PostgreSQL-backed [`UserStore`].
///
/// Uniqueness is enforced by the `users_username_key` constraint; a
/// violation surfaces as [`PersistError::Conflict`] rather than a raw
/// database error.
#[derive(Debug, Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    /// Create a new user store over an existing connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user by id", e))
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find user by username", e)
            })
    }

    async fn persist(&self, new_user: NewUser) -> Result<User, PersistError> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (username, password_hash) \
             VALUES ($1, $2) \
             RETURNING *",
        )
        .bind(&new_user.username)
        .bind(&new_user.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some(USERNAME_UNIQUE_CONSTRAINT) =>
            {
                PersistError::Conflict { field: "username" }
            }
            _ => PersistError::Storage {
                detail: format!("Failed to create user: {e}"),
            },
        })
    }
}
