//! Unified error handling for the storefront state layer.
//!
//! Every error here is recoverable: store operations surface failures to the
//! caller as a transient condition and never poison the stores themselves.

use thiserror::Error;

use lubemart_core::EmailError;

use crate::checkout::CheckoutError;
use crate::config::ConfigError;
use crate::storage::StorageError;

/// Client-side form validation failures.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field was left blank.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// The email address is not structurally valid.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// The password is shorter than the minimum.
    #[error("password must be at least {min} characters")]
    PasswordTooShort {
        /// Minimum allowed length.
        min: usize,
    },

    /// The password and confirmation do not match.
    #[error("passwords do not match")]
    PasswordMismatch,
}

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Signup form validation failed.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Wrong password or unknown email. Deliberately indistinguishable so a
    /// failed login never leaks whether an account exists.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// The email is already registered.
    #[error("email already in use")]
    DuplicateEmail,

    /// Persisting the session or user table failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Top-level error type for storefront operations.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// Authentication operation failed.
    #[error("auth error: {0}")]
    Auth(#[from] AuthError),

    /// Checkout failed.
    #[error("checkout error: {0}")]
    Checkout(#[from] CheckoutError),

    /// Persistence failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration could not be loaded.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type alias for `StorefrontError`.
pub type Result<T> = std::result::Result<T, StorefrontError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_credentials_message_is_generic() {
        // The message must not distinguish "no such email" from "wrong
        // password".
        let err = AuthError::InvalidCredentials;
        assert_eq!(err.to_string(), "invalid email or password");
    }

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::MissingField("firstName");
        assert_eq!(err.to_string(), "firstName is required");

        let err = ValidationError::PasswordTooShort { min: 6 };
        assert_eq!(err.to_string(), "password must be at least 6 characters");
    }
}
