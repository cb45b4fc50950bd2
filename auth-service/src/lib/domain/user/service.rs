use std::sync::Arc;

use async_trait::async_trait;
use auth::AccessClaims;
use auth::PasswordHasher;
use auth::TokenIssuer;
use auth::TokenVerifier;
use serde_json::Map;
use serde_json::Value;

use crate::domain::user::models::IssuedToken;
use crate::domain::user::models::LoginCommand;
use crate::domain::user::models::RegisterCommand;
use crate::domain::user::models::Username;
use crate::user::errors::AuthError;
use crate::user::ports::AuthServicePort;
use crate::user::ports::CredentialStore;

/// Token type label returned alongside every issued token.
const TOKEN_TYPE: &str = "bearer";

/// Domain service for the credential lifecycle.
///
/// Orchestrates the credential store, password hasher, and token
/// issuer/verifier; holds no mutable state, every request is independent.
pub struct AuthService<CS>
where
    CS: CredentialStore,
{
    store: Arc<CS>,
    hasher: PasswordHasher,
    issuer: TokenIssuer,
    verifier: TokenVerifier,
}

impl<CS> AuthService<CS>
where
    CS: CredentialStore,
{
    /// Create the service with an injected store and the signing secret.
    ///
    /// # Arguments
    /// * `store` - Credential persistence implementation
    /// * `secret` - Token signing secret, validated non-empty at startup
    pub fn new(store: Arc<CS>, secret: &[u8]) -> Self {
        Self {
            store,
            hasher: PasswordHasher::new(),
            issuer: TokenIssuer::new(secret),
            verifier: TokenVerifier::new(secret),
        }
    }
}

#[async_trait]
impl<CS> AuthServicePort for AuthService<CS>
where
    CS: CredentialStore,
{
    async fn register(&self, command: RegisterCommand) -> Result<(), AuthError> {
        let password_hash = self.hasher.hash(&command.password)?;

        let user = self.store.create(&command.username, &password_hash).await?;

        tracing::info!(user_id = %user.id, username = %user.username, "Account registered");

        Ok(())
    }

    async fn login(&self, command: LoginCommand) -> Result<IssuedToken, AuthError> {
        // A name that is not even a valid username belongs to no account;
        // same generic failure as an unknown one.
        let username =
            Username::new(command.username).map_err(|_| AuthError::InvalidCredentials)?;

        let user = self
            .store
            .find_by_username(&username)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !self.hasher.verify(&command.password, &user.password_hash) {
            return Err(AuthError::InvalidCredentials);
        }

        let claims = AccessClaims::new(user.username.as_str(), user.role.as_str());
        let access_token = self.issuer.issue(&claims)?;

        tracing::debug!(username = %user.username, "Access token issued");

        Ok(IssuedToken {
            access_token,
            token_type: TOKEN_TYPE.to_string(),
        })
    }

    fn verify(&self, authorization: Option<&str>) -> Result<Map<String, Value>, AuthError> {
        Ok(self.verifier.verify_header(authorization)?)
    }
}
