use auth::CredentialError;
use auth::PasswordError;
use auth::TokenError;
use thiserror::Error;

/// Error for Username validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UsernameError {
    #[error("Username must not be empty")]
    Empty,
}

/// Top-level error for credential lifecycle operations.
///
/// Unknown-user and wrong-password are deliberately collapsed into the
/// single `InvalidCredentials` variant so callers cannot enumerate
/// usernames. Storage failures keep their own variant and are never folded
/// into an authentication outcome.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    #[error("Invalid username: {0}")]
    InvalidUsername(#[from] UsernameError),

    #[error("Username already registered")]
    DuplicateUsername,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error(transparent)]
    Credential(#[from] CredentialError),

    #[error("Password hashing failed: {0}")]
    Hashing(String),

    #[error("Token signing failed: {0}")]
    TokenIssue(String),

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),
}

impl From<PasswordError> for AuthError {
    fn from(err: PasswordError) -> Self {
        AuthError::Hashing(err.to_string())
    }
}

impl From<TokenError> for AuthError {
    fn from(err: TokenError) -> Self {
        AuthError::TokenIssue(err.to_string())
    }
}
