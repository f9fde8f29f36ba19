//! The auth service orchestrator: register, login, me, logout.
//!
//! Dependencies are injected explicitly; the service holds no ambient or
//! global state. All anticipated and unanticipated failures in register
//! and login surface as `AuthResult.errors` — nothing propagates past
//! this boundary from those two operations.

use std::sync::Arc;

use tracing::{error, info, warn};
use uuid::Uuid;

use quill_core::result::AppResult;
use quill_entity::user::{NewUser, User, UserStore, UserView};

use crate::password::PasswordHasher;
use crate::response::{AuthResult, FieldError};
use crate::session::{SessionCookie, SessionManager};
use crate::{translate, validator};

/// Raw username/password input. Never persisted as-is.
#[derive(Debug, Clone)]
pub struct Credentials {
    /// Login name.
    pub username: String,
    /// Plaintext password; only ever handed to the hasher.
    pub password: String,
}

impl Credentials {
    /// Build credentials from raw input.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Result of a register or login call, plus the cookie directive when a
/// session was issued.
///
/// The cookie is present iff `result` carries a user.
#[derive(Debug, Clone)]
pub struct AuthOutcome {
    /// The caller-facing result.
    pub result: AuthResult,
    /// Session cookie to set, on success.
    pub cookie: Option<SessionCookie>,
}

impl AuthOutcome {
    fn success(user: UserView, cookie: SessionCookie) -> Self {
        Self {
            result: AuthResult::user(user),
            cookie: Some(cookie),
        }
    }

    fn failure(error: FieldError) -> Self {
        Self {
            result: AuthResult::error(error),
            cookie: None,
        }
    }
}

/// Orchestrates credential validation, hashing, user persistence, and
/// session issuance.
#[derive(Clone)]
pub struct AuthService {
    /// User lookup and persistence.
    users: Arc<dyn UserStore>,
    /// Session issuance and resolution.
    sessions: SessionManager,
    /// Password hashing.
    hasher: PasswordHasher,
}

impl std::fmt::Debug for AuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthService").finish_non_exhaustive()
    }
}

impl AuthService {
    /// Creates a new auth service with all required dependencies.
    pub fn new(users: Arc<dyn UserStore>, sessions: SessionManager, hasher: PasswordHasher) -> Self {
        Self {
            users,
            sessions,
            hasher,
        }
    }

    /// Registers a new user.
    ///
    /// Validation runs before any I/O; no user record is written and no
    /// session is issued on any failure path.
    pub async fn register(&self, credentials: Credentials) -> AuthOutcome {
        if let Some(error) = validator::validate(&credentials.username, &credentials.password) {
            return AuthOutcome::failure(error);
        }

        let password_hash = match self.hasher.hash(&credentials.password).await {
            Ok(hash) => hash,
            Err(e) => {
                error!(error = %e, "Password hashing failed during registration");
                return AuthOutcome::failure(FieldError::fallback());
            }
        };

        let pending = NewUser::new(&credentials.username, &password_hash);
        let user = match self.users.persist(pending).await {
            Ok(user) => user,
            Err(e) => return AuthOutcome::failure(translate::persist_error(e)),
        };

        info!(user_id = %user.id, username = %user.username, "User registered");
        self.start_session(user).await
    }

    /// Logs in an existing user.
    pub async fn login(&self, credentials: Credentials) -> AuthOutcome {
        let user = match self.users.find_by_username(&credentials.username).await {
            Ok(Some(user)) => user,
            Ok(None) => {
                return AuthOutcome::failure(FieldError::new(
                    "username",
                    "username does not exist",
                ));
            }
            Err(e) => {
                error!(error = %e, "User lookup failed during login");
                return AuthOutcome::failure(FieldError::fallback());
            }
        };

        if credentials.password.is_empty() {
            return AuthOutcome::failure(FieldError::new("password", "password can not be empty"));
        }

        match self.hasher.verify(&user.password_hash, &credentials.password).await {
            Ok(true) => {}
            Ok(false) => {
                warn!(username = %user.username, "Login attempt with wrong password");
                return AuthOutcome::failure(FieldError::new("password", "password do not match"));
            }
            Err(e) => {
                error!(error = %e, "Password verification failed during login");
                return AuthOutcome::failure(FieldError::fallback());
            }
        }

        self.start_session(user).await
    }

    /// Resolves the caller's session token to their user view.
    ///
    /// `None` — at either the session or the user lookup — means "not
    /// authenticated" and is never an error.
    pub async fn me(&self, token: &str) -> AppResult<Option<UserView>> {
        let Some(user_id) = self.sessions.resolve(token).await? else {
            return Ok(None);
        };
        self.lookup_view(user_id).await
    }

    /// Logs the caller out: deletes the session record and returns the
    /// cookie clearing directive for the transport layer.
    pub async fn logout(&self, token: &str) -> AppResult<SessionCookie> {
        self.sessions.revoke(token).await
    }

    /// Issues a session for an authenticated user and builds the outcome.
    async fn start_session(&self, user: User) -> AuthOutcome {
        match self.sessions.issue(user.id).await {
            Ok(issued) => AuthOutcome::success(user.view(), issued.cookie),
            Err(e) => {
                error!(user_id = %user.id, error = %e, "Session issuance failed");
                AuthOutcome::failure(FieldError::fallback())
            }
        }
    }

    async fn lookup_view(&self, user_id: Uuid) -> AppResult<Option<UserView>> {
        Ok(self.users.find_by_id(user_id).await?.map(UserView::from))
    }
}
