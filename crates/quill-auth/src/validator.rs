//! Credential policy checks.
//!
//! Pure functions, no I/O. Evaluation is fail-fast: the first violated
//! rule is reported and later rules are not evaluated.

use crate::response::FieldError;

/// Validate raw registration credentials against policy.
///
/// Rules, in order:
/// 1. username length must be greater than 2
/// 2. password length must be greater than 8
pub fn validate(username: &str, password: &str) -> Option<FieldError> {
    if username.chars().count() <= 2 {
        return Some(FieldError::new("username", "length must be greater than 2"));
    }
    if password.chars().count() <= 8 {
        return Some(FieldError::new("password", "length must be greater than 8"));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_username_rejected() {
        let err = validate("ab", "longenoughpassword").expect("should fail");
        assert_eq!(err.field, "username");
        assert_eq!(err.message, "length must be greater than 2");
    }

    #[test]
    fn test_short_password_rejected() {
        let err = validate("alice", "short").expect("should fail");
        assert_eq!(err.field, "password");
        assert_eq!(err.message, "length must be greater than 8");
    }

    #[test]
    fn test_fail_fast_reports_username_first() {
        // Both fields invalid; only the username error is reported.
        let err = validate("ab", "short").expect("should fail");
        assert_eq!(err.field, "username");
    }

    #[test]
    fn test_boundary_lengths() {
        // Exactly at the limits is still invalid.
        assert!(validate("abc", "12345678").is_some());
        assert!(validate("ab", "123456789").is_some());
        // One past the limits is valid.
        assert!(validate("abc", "123456789").is_none());
    }

    #[test]
    fn test_valid_credentials_pass() {
        assert!(validate("alice", "longpassword").is_none());
    }
}
