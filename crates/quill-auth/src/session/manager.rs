//! Session issuance, resolution, and revocation.

use std::sync::Arc;
use std::time::Duration;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use rand::Rng as _;
use tracing::info;
use uuid::Uuid;

use quill_cache::{CacheManager, CacheProvider as _, keys};
use quill_core::config::SessionConfig;
use quill_core::result::AppResult;
use quill_entity::session::Session;

use super::cookie::SessionCookie;

/// Number of random bytes in a session token (256 bits).
const TOKEN_BYTES: usize = 32;

/// A freshly issued session plus the cookie directive that delivers it.
#[derive(Debug, Clone)]
pub struct IssuedSession {
    /// The server-side session record.
    pub session: Session,
    /// The cookie the transport layer must set.
    pub cookie: SessionCookie,
}

/// Issues opaque session tokens and resolves them back to user ids.
///
/// The token → user mapping lives in the server-side key-value store; the
/// caller only ever holds the opaque token.
#[derive(Debug, Clone)]
pub struct SessionManager {
    /// Session persistence.
    cache: Arc<CacheManager>,
    /// Session configuration.
    config: SessionConfig,
}

impl SessionManager {
    /// Creates a new session manager.
    pub fn new(cache: Arc<CacheManager>, config: SessionConfig) -> Self {
        Self { cache, config }
    }

    /// Issues a new session for the given user.
    ///
    /// Generates an unguessable token, stores the session record under it
    /// with the configured maximum age, and returns the cookie directive.
    pub async fn issue(&self, user_id: Uuid) -> AppResult<IssuedSession> {
        let token = generate_token();
        let session = Session::new(&token, user_id);

        self.cache
            .set_json(&keys::session(&token), &session, self.max_age())
            .await?;

        info!(user_id = %user_id, "Session issued");

        let cookie = SessionCookie::new(&self.config, token);
        Ok(IssuedSession { session, cookie })
    }

    /// Resolves a token back to the user id it was issued for.
    ///
    /// Absence means "not authenticated," never an error.
    pub async fn resolve(&self, token: &str) -> AppResult<Option<Uuid>> {
        if token.is_empty() {
            return Ok(None);
        }
        let session: Option<Session> = self.cache.get_json(&keys::session(token)).await?;
        Ok(session.map(|s| s.user_id))
    }

    /// Revokes a session and returns the cookie clearing directive.
    ///
    /// Revoking a token with no stored session still succeeds; logout is
    /// idempotent.
    pub async fn revoke(&self, token: &str) -> AppResult<SessionCookie> {
        if !token.is_empty() {
            self.cache.delete(&keys::session(token)).await?;
            info!("Session revoked");
        }
        Ok(SessionCookie::removal(&self.config))
    }

    fn max_age(&self) -> Duration {
        Duration::from_secs(self.config.max_age_seconds)
    }
}

/// Generate an opaque, URL-safe session token from OS-seeded randomness.
fn generate_token() -> String {
    let bytes: [u8; TOKEN_BYTES] = rand::rng().random();
    URL_SAFE_NO_PAD.encode(bytes)
}
