use async_trait::async_trait;
use serde_json::Map;
use serde_json::Value;

use crate::domain::user::models::IssuedToken;
use crate::domain::user::models::LoginCommand;
use crate::domain::user::models::RegisterCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::Username;
use crate::user::errors::AuthError;

/// Port for the credential lifecycle service.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new account: hash the password and store the credential.
    ///
    /// Success is an acknowledgment only; registration never logs the
    /// account in.
    ///
    /// # Arguments
    /// * `command` - Validated username plus plaintext password
    ///
    /// # Errors
    /// * `DuplicateUsername` - Username is already registered
    /// * `StorageUnavailable` - Credential store operation failed
    async fn register(&self, command: RegisterCommand) -> Result<(), AuthError>;

    /// Verify credentials and issue a signed access token.
    ///
    /// # Arguments
    /// * `command` - Raw username and password as presented
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown username or wrong password,
    ///   indistinguishably
    /// * `StorageUnavailable` - Credential store operation failed
    async fn login(&self, command: LoginCommand) -> Result<IssuedToken, AuthError>;

    /// Validate an inbound `Authorization` header and return the claims the
    /// credential carries.
    ///
    /// # Arguments
    /// * `authorization` - Header value, or `None` when absent
    ///
    /// # Errors
    /// * `Credential` - Any header or signature rejection
    fn verify(&self, authorization: Option<&str>) -> Result<Map<String, Value>, AuthError>;
}

/// Persistence operations for the credential store.
#[async_trait]
pub trait CredentialStore: Send + Sync + 'static {
    /// Retrieve a credential record by username.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `StorageUnavailable` - Storage operation failed
    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, AuthError>;

    /// Insert a new credential record; the store assigns id and role.
    ///
    /// Uniqueness must hold across concurrently running service instances,
    /// so it is enforced by the storage layer's unique constraint rather
    /// than any in-process check.
    ///
    /// # Arguments
    /// * `username` - Username to register
    /// * `password_hash` - Digest produced by the password hasher
    ///
    /// # Errors
    /// * `DuplicateUsername` - Username already exists
    /// * `StorageUnavailable` - Storage operation failed
    async fn create(&self, username: &Username, password_hash: &str) -> Result<User, AuthError>;
}
