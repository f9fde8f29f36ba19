//! Login session and cookie configuration.

use serde::{Deserialize, Serialize};

/// Session and session-cookie configuration.
///
/// The cookie itself is always HTTP-only with `SameSite=Lax`; those two
/// attributes are part of the session contract and not configurable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Name of the session cookie.
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    /// Maximum session (and cookie) age in seconds.
    #[serde(default = "default_max_age")]
    pub max_age_seconds: u64,
    /// Whether to set the `Secure` flag on the cookie. Enable in any
    /// deployment served over TLS.
    #[serde(default)]
    pub secure: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: default_cookie_name(),
            max_age_seconds: default_max_age(),
            secure: false,
        }
    }
}

fn default_cookie_name() -> String {
    "qid".to_string()
}

/// Ten years, matching the long-lived "keep me logged in" session model.
fn default_max_age() -> u64 {
    60 * 60 * 24 * 365 * 10
}
