use std::fmt;

use crate::user::errors::UsernameError;

/// User aggregate entity.
///
/// A credential record: who the account belongs to, the opaque password
/// digest, and the store-assigned role. Immutable once created; no update or
/// delete operation exists for it.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub username: Username,
    pub password_hash: String,
    pub role: String,
}

/// User unique identifier, assigned by the credential store on insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Username value type
///
/// Stored exactly as supplied: case-sensitive, no normalization. The only
/// constraint is that it must not be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Username(String);

impl Username {
    /// Create a new valid username.
    ///
    /// # Arguments
    /// * `username` - Raw username string
    ///
    /// # Errors
    /// * `Empty` - Username is the empty string
    pub fn new(username: String) -> Result<Self, UsernameError> {
        if username.is_empty() {
            return Err(UsernameError::Empty);
        }
        Ok(Self(username))
    }

    /// Get username as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to register a new account.
#[derive(Debug)]
pub struct RegisterCommand {
    pub username: Username,
    pub password: String,
}

impl RegisterCommand {
    /// Construct a registration command.
    ///
    /// # Arguments
    /// * `username` - Validated username
    /// * `password` - Plain text password (hashed by the service, never
    ///   stored)
    pub fn new(username: Username, password: String) -> Self {
        Self { username, password }
    }
}

/// Credentials presented at login, unvalidated.
///
/// The username stays a raw string here: a name that cannot even be a valid
/// username belongs to no account, and the service folds it into the same
/// generic failure as a wrong password.
#[derive(Debug)]
pub struct LoginCommand {
    pub username: String,
    pub password: String,
}

/// Signed token handed back on successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    pub access_token: String,
    /// Always "bearer"
    pub token_type: String,
}
