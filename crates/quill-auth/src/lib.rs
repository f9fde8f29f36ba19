//! # quill-auth
//!
//! Authentication and session subsystem for Quill.
//!
//! ## Modules
//!
//! - `validator` — credential policy checks run before any I/O
//! - `password` — Argon2id password hashing and verification
//! - `translate` — storage conflict → field error translation
//! - `session` — opaque-token session issuance, resolution, and the
//!   cookie delivery contract
//! - `response` — `FieldError` / `AuthResult` caller-facing types
//! - `service` — the `AuthService` orchestrator (register, login, me,
//!   logout)

pub mod password;
pub mod response;
pub mod service;
pub mod session;
pub mod translate;
pub mod validator;

pub use password::PasswordHasher;
pub use response::{AuthResult, FieldError};
pub use service::{AuthOutcome, AuthService, Credentials};
pub use session::{IssuedSession, SessionCookie, SessionManager};
