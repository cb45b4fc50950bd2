pub mod claims;
pub mod errors;
pub mod issuer;
pub mod verifier;

pub use claims::AccessClaims;
pub use errors::CredentialError;
pub use errors::TokenError;
pub use issuer::TokenIssuer;
pub use verifier::TokenVerifier;
