//! Session cookie delivery contract.
//!
//! The auth core does not speak HTTP; it hands the transport layer a
//! [`SessionCookie`] value describing exactly what to set (or clear).

use std::fmt;
use std::time::Duration;

use quill_core::config::SessionConfig;

/// `SameSite` cookie attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SameSite {
    /// Sent only in first-party contexts.
    Strict,
    /// Sent on top-level navigations as well; the session contract's
    /// CSRF posture.
    Lax,
    /// Sent in all contexts (requires `Secure`).
    None,
}

impl fmt::Display for SameSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SameSite::Strict => write!(f, "Strict"),
            SameSite::Lax => write!(f, "Lax"),
            SameSite::None => write!(f, "None"),
        }
    }
}

/// Instruction to the transport layer to set (or clear) the session cookie.
///
/// Always HTTP-only and `SameSite=Lax`; `Secure` and the maximum age come
/// from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionCookie {
    /// Cookie name (default `qid`).
    pub name: String,
    /// The opaque session token; empty for a clearing directive.
    pub value: String,
    /// Explicit maximum age. Zero clears the cookie.
    pub max_age: Duration,
    /// Not readable by page-level scripts.
    pub http_only: bool,
    /// CSRF mitigation attribute.
    pub same_site: SameSite,
    /// Only sent over encrypted transport.
    pub secure: bool,
}

impl SessionCookie {
    /// Cookie carrying a freshly issued session token.
    pub fn new(config: &SessionConfig, token: impl Into<String>) -> Self {
        Self {
            name: config.cookie_name.clone(),
            value: token.into(),
            max_age: Duration::from_secs(config.max_age_seconds),
            http_only: true,
            same_site: SameSite::Lax,
            secure: config.secure,
        }
    }

    /// Clearing directive used on logout.
    pub fn removal(config: &SessionConfig) -> Self {
        Self {
            name: config.cookie_name.clone(),
            value: String::new(),
            max_age: Duration::ZERO,
            http_only: true,
            same_site: SameSite::Lax,
            secure: config.secure,
        }
    }

    /// Whether this directive clears the cookie rather than setting it.
    pub fn is_removal(&self) -> bool {
        self.max_age.is_zero()
    }

    /// Render the `Set-Cookie` header value for this directive.
    pub fn header_value(&self) -> String {
        let mut header = format!(
            "{}={}; Path=/; Max-Age={}",
            self.name,
            self.value,
            self.max_age.as_secs()
        );
        if self.http_only {
            header.push_str("; HttpOnly");
        }
        if self.secure {
            header.push_str("; Secure");
        }
        header.push_str(&format!("; SameSite={}", self.same_site));
        header
    }
}
