use serde::Deserialize;
use serde::Serialize;

/// Claims carried by an issued access token.
///
/// The token is a stateless assertion of identity: who the subject is and
/// what role the store assigned them. There is deliberately no expiration
/// claim and no nonce, so identical logins produce byte-identical tokens.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccessClaims {
    /// Subject (the username)
    pub sub: String,

    /// Role assigned by the credential store
    pub role: String,
}

impl AccessClaims {
    /// Build claims for a verified login.
    ///
    /// # Arguments
    /// * `sub` - Username of the authenticated account
    /// * `role` - Store-assigned role
    pub fn new(sub: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            sub: sub.into(),
            role: role.into(),
        }
    }
}
