use thiserror::Error;

/// Error type for token issuance.
#[derive(Debug, Clone, Error)]
pub enum TokenError {
    #[error("Failed to sign token: {0}")]
    SigningFailed(String),
}

/// Rejection reasons for an inbound authorization credential.
///
/// The variants mirror the verification state machine: the header must be
/// present, must split into exactly a scheme and a credential, must use the
/// bearer scheme, and the credential must be a validly signed token.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CredentialError {
    #[error("Missing Authorization header")]
    MissingCredential,

    #[error("Authorization header is not a scheme and a credential")]
    MalformedCredential,

    #[error("Invalid authentication scheme")]
    UnsupportedScheme,

    #[error("Token signature or format is invalid")]
    InvalidSignatureOrFormat,
}
