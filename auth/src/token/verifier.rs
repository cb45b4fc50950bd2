use jsonwebtoken::decode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::Validation;
use serde_json::Map;
use serde_json::Value;

use super::errors::CredentialError;

/// Validates inbound authorization credentials.
///
/// Parses an `Authorization` header into a scheme and a credential, checks
/// the bearer scheme, verifies the token signature, and yields the claims
/// verbatim. Claims are returned as a raw JSON map: a token that verifies but
/// lacks expected claims is passed through as-is, shape checks belong to the
/// caller.
pub struct TokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenVerifier {
    /// Create a verifier from the signing secret.
    ///
    /// # Arguments
    /// * `secret` - Symmetric secret the tokens were signed with
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Issued tokens carry no exp claim
        validation.required_spec_claims.clear();

        Self {
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Validate a full `Authorization` header value.
    ///
    /// # Arguments
    /// * `authorization` - Header value, or `None` when the header is absent
    ///
    /// # Returns
    /// The decoded claims map, exactly as encoded
    ///
    /// # Errors
    /// * `MissingCredential` - Header absent or empty
    /// * `MalformedCredential` - Not exactly a scheme and a credential
    /// * `UnsupportedScheme` - Scheme is not `bearer` (case-insensitive)
    /// * `InvalidSignatureOrFormat` - Credential fails signature
    ///   verification or is not a well-formed token
    pub fn verify_header(
        &self,
        authorization: Option<&str>,
    ) -> Result<Map<String, Value>, CredentialError> {
        let header = authorization
            .filter(|value| !value.is_empty())
            .ok_or(CredentialError::MissingCredential)?;

        let mut parts = header.split_whitespace();
        let (scheme, credential) = match (parts.next(), parts.next(), parts.next()) {
            (Some(scheme), Some(credential), None) => (scheme, credential),
            _ => return Err(CredentialError::MalformedCredential),
        };

        if !scheme.eq_ignore_ascii_case("bearer") {
            return Err(CredentialError::UnsupportedScheme);
        }

        self.verify(credential)
    }

    /// Verify a bare token string and decode its claims.
    ///
    /// # Arguments
    /// * `token` - Compact token string (without the scheme prefix)
    ///
    /// # Errors
    /// * `InvalidSignatureOrFormat` - Signature or structure check failed
    pub fn verify(&self, token: &str) -> Result<Map<String, Value>, CredentialError> {
        decode::<Map<String, Value>>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|_| CredentialError::InvalidSignatureOrFormat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::claims::AccessClaims;
    use crate::token::issuer::TokenIssuer;

    const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

    fn bearer_header(token: &str) -> String {
        format!("Bearer {token}")
    }

    #[test]
    fn test_issued_token_round_trips() {
        let issuer = TokenIssuer::new(SECRET);
        let verifier = TokenVerifier::new(SECRET);

        let token = issuer
            .issue(&AccessClaims::new("alice", "user"))
            .expect("Failed to issue token");

        let claims = verifier
            .verify_header(Some(&bearer_header(&token)))
            .expect("Failed to verify token");

        assert_eq!(claims["sub"], "alice");
        assert_eq!(claims["role"], "user");
    }

    #[test]
    fn test_scheme_is_case_insensitive() {
        let issuer = TokenIssuer::new(SECRET);
        let verifier = TokenVerifier::new(SECRET);

        let token = issuer
            .issue(&AccessClaims::new("alice", "user"))
            .expect("Failed to issue token");

        for scheme in ["bearer", "BEARER", "Bearer"] {
            let header = format!("{scheme} {token}");
            assert!(verifier.verify_header(Some(&header)).is_ok());
        }
    }

    #[test]
    fn test_missing_header() {
        let verifier = TokenVerifier::new(SECRET);

        assert_eq!(
            verifier.verify_header(None).unwrap_err(),
            CredentialError::MissingCredential
        );
        assert_eq!(
            verifier.verify_header(Some("")).unwrap_err(),
            CredentialError::MissingCredential
        );
    }

    #[test]
    fn test_malformed_header() {
        let verifier = TokenVerifier::new(SECRET);

        for header in ["Bearer", "   ", "Bearer one two"] {
            assert_eq!(
                verifier.verify_header(Some(header)).unwrap_err(),
                CredentialError::MalformedCredential,
                "header {header:?}"
            );
        }
    }

    #[test]
    fn test_unsupported_scheme() {
        let verifier = TokenVerifier::new(SECRET);

        assert_eq!(
            verifier.verify_header(Some("Basic dXNlcjpwdw==")).unwrap_err(),
            CredentialError::UnsupportedScheme
        );
    }

    #[test]
    fn test_garbage_credential() {
        let verifier = TokenVerifier::new(SECRET);

        assert_eq!(
            verifier.verify_header(Some("Bearer garbage")).unwrap_err(),
            CredentialError::InvalidSignatureOrFormat
        );
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let issuer = TokenIssuer::new(SECRET);
        let verifier = TokenVerifier::new(b"some_other_secret_32_bytes_long!!");

        let token = issuer
            .issue(&AccessClaims::new("alice", "user"))
            .expect("Failed to issue token");

        assert_eq!(
            verifier.verify_header(Some(&bearer_header(&token))).unwrap_err(),
            CredentialError::InvalidSignatureOrFormat
        );
    }

    #[test]
    fn test_claims_returned_verbatim() {
        // A verifiable token without the usual claims still decodes; shape
        // validation is the caller's concern
        let verifier = TokenVerifier::new(SECRET);

        let header = jsonwebtoken::Header::new(Algorithm::HS256);
        let key = jsonwebtoken::EncodingKey::from_secret(SECRET);
        let token = jsonwebtoken::encode(
            &header,
            &serde_json::json!({"unexpected": 42}),
            &key,
        )
        .expect("Failed to encode token");

        let claims = verifier
            .verify_header(Some(&bearer_header(&token)))
            .expect("Failed to verify token");

        assert_eq!(claims["unexpected"], 42);
        assert!(!claims.contains_key("sub"));
    }
}
