//! Cache key builders for all Quill cache entries.
//!
//! Centralising key construction prevents typos and makes it easy
//! to find every key the application uses. Keys are logical; the
//! Redis backend applies the configured deployment prefix on top.

/// Cache key for a session record addressed by its opaque token.
pub fn session(token: &str) -> String {
    format!("session:{token}")
}
