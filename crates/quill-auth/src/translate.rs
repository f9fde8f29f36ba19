//! Translation of storage-level persistence failures into field errors.
//!
//! Uniqueness conflicts become per-field messages; everything else is
//! logged and collapsed into the generic fallback so storage schema and
//! vendor error detail never reach callers.

use tracing::error;

use quill_entity::user::store::PersistError;

use crate::response::FieldError;

/// Map a persistence failure to the caller-visible field error.
pub fn persist_error(err: PersistError) -> FieldError {
    match err {
        PersistError::Conflict { field } => {
            FieldError::new(field, format!("{field} is already taken"))
        }
        PersistError::Storage { detail } => {
            error!(detail = %detail, "User persistence failed");
            FieldError::fallback()
        }
    }
}
