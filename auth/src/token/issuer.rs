use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;

use super::claims::AccessClaims;
use super::errors::TokenError;

/// Issues signed access tokens from verified logins.
///
/// Signs with a server-held symmetric secret using HS256 (HMAC with SHA-256).
/// Issuance is deterministic: the same claims and secret always yield the
/// same token string.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    algorithm: Algorithm,
}

impl TokenIssuer {
    /// Create an issuer from the signing secret.
    ///
    /// # Arguments
    /// * `secret` - Symmetric signing secret; provisioning it is a startup
    ///   concern, a missing secret is a configuration error, not a
    ///   per-request one
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        }
    }

    /// Encode and sign claims into a token string.
    ///
    /// # Arguments
    /// * `claims` - Identity claims to assert
    ///
    /// # Errors
    /// * `SigningFailed` - Token encoding failed
    pub fn issue(&self, claims: &AccessClaims) -> Result<String, TokenError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| TokenError::SigningFailed(e.to_string()))
    }
}
