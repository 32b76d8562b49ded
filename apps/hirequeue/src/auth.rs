//! # Sign-in
//!
//! Credential check for the dashboard sign-in page.
//!
//! The accepted username and password come from `[auth]` in the config.
//! Both are compared in constant time over padded bytes, so neither the
//! content nor the length of the expected values leaks through timing.

use crate::config::AuthConfig;
use subtle::ConstantTimeEq;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Shown verbatim on the sign-in page.
    #[error("Invalid username or password.")]
    InvalidCredentials,
}

/// Check a username/password pair against the configured credentials.
pub fn verify_credentials(
    expected: &AuthConfig,
    username: &str,
    password: &str,
) -> Result<(), AuthError> {
    // Evaluate both comparisons before combining them.
    let user_ok = constant_time_eq(username.as_bytes(), expected.username.as_bytes());
    let pass_ok = constant_time_eq(password.as_bytes(), expected.password.as_bytes());

    if user_ok & pass_ok {
        tracing::info!(event = "sign_in", "Sign-in succeeded");
        Ok(())
    } else {
        tracing::warn!(
            event = "auth_failure",
            reason = "invalid_credentials",
            "Sign-in failed: invalid username or password"
        );
        Err(AuthError::InvalidCredentials)
    }
}

fn constant_time_eq(provided: &[u8], expected: &[u8]) -> bool {
    // Pad both sides to the same length so ct_eq always runs over the same
    // number of bytes.
    let max_len = provided.len().max(expected.len());
    let mut padded_provided = provided.to_vec();
    let mut padded_expected = expected.to_vec();
    padded_provided.resize(max_len, 0);
    padded_expected.resize(max_len, 0);

    let bytes_match: bool = padded_provided.ct_eq(&padded_expected).into();
    bytes_match && provided.len() == expected.len()
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_credentials_accepted() {
        let auth = AuthConfig::default();
        assert_eq!(verify_credentials(&auth, "admin@timeless.ai", "admin123"), Ok(()));
    }

    #[test]
    fn wrong_password_rejected_with_message() {
        let auth = AuthConfig::default();
        let err = verify_credentials(&auth, "admin@timeless.ai", "admin124");
        assert_eq!(err, Err(AuthError::InvalidCredentials));
        assert_eq!(
            AuthError::InvalidCredentials.to_string(),
            "Invalid username or password."
        );
    }

    #[test]
    fn prefix_and_padding_do_not_match() {
        assert!(!constant_time_eq(b"admin", b"admin123"));
        assert!(!constant_time_eq(b"admin123\0", b"admin123"));
        assert!(constant_time_eq(b"", b""));
    }

    #[test]
    fn custom_credentials() {
        let auth = AuthConfig {
            username: "hr@example.com".to_string(),
            password: "s3cret".to_string(),
        };
        assert!(verify_credentials(&auth, "hr@example.com", "s3cret").is_ok());
        assert!(verify_credentials(&auth, "admin@timeless.ai", "admin123").is_err());
    }
}
