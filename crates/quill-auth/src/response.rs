//! Caller-facing result types for register and login.

use serde::{Deserialize, Serialize};

use quill_entity::user::UserView;

/// A single validation or business-rule failure tied to one named input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// The input field the error refers to (`"default"` when no single
    /// field applies).
    pub field: String,
    /// Human-readable message suitable for rendering next to the field.
    pub message: String,
}

impl FieldError {
    /// Create a field error.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    /// The generic error shown when an unexpected internal failure is
    /// suppressed from the caller.
    pub fn fallback() -> Self {
        Self::new("default", "please contact support")
    }
}

/// Outcome of a register or login call.
///
/// Exactly one of `user` / `errors` is populated; the constructors are the
/// only way these are built, which keeps that invariant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResult {
    /// The authenticated or newly registered user, on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserView>,
    /// Ordered field errors, on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
}

impl AuthResult {
    /// Successful outcome carrying the user view.
    pub fn user(user: UserView) -> Self {
        Self {
            user: Some(user),
            errors: None,
        }
    }

    /// Failed outcome carrying a single field error.
    pub fn error(error: FieldError) -> Self {
        Self::errors(vec![error])
    }

    /// Failed outcome carrying ordered field errors.
    pub fn errors(errors: Vec<FieldError>) -> Self {
        Self {
            user: None,
            errors: Some(errors),
        }
    }

    /// Whether this outcome carries a user.
    pub fn is_success(&self) -> bool {
        self.user.is_some()
    }
}
