//! Custom error types specific to authentication failures.
//!
//! This module defines the errors that can occur during registration and
//! login, keeping credential mismatches distinct from infrastructure failures
//! so the boundary can report them through different response classes.

use crate::database::queries::DatabaseError;

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Unknown username or wrong password. Callers must not be able to tell
    /// the two apart.
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("password hashing failed: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    #[error("token handling failed: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    #[error(transparent)]
    Database(#[from] DatabaseError),
}
