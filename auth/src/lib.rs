//! Credential primitives for the authentication service.
//!
//! Provides the security-sensitive building blocks the service orchestrates:
//! - Password hashing (Argon2id, PHC string format)
//! - Signed access token issuance and verification (HMAC-SHA256)
//!
//! No I/O happens here; the service crate wires these into its HTTP and
//! storage layers.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let digest = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &digest));
//! assert!(!hasher.verify("not_my_password", &digest));
//! ```
//!
//! ## Signed Tokens
//! ```
//! use auth::{AccessClaims, TokenIssuer, TokenVerifier};
//!
//! let issuer = TokenIssuer::new(b"secret_key_at_least_32_bytes_long!");
//! let verifier = TokenVerifier::new(b"secret_key_at_least_32_bytes_long!");
//!
//! let token = issuer.issue(&AccessClaims::new("alice", "user")).unwrap();
//! let header = format!("Bearer {token}");
//! let claims = verifier.verify_header(Some(&header)).unwrap();
//! assert_eq!(claims["sub"], "alice");
//! assert_eq!(claims["role"], "user");
//! ```

pub mod password;
pub mod token;

// Re-export commonly used items
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::AccessClaims;
pub use token::CredentialError;
pub use token::TokenError;
pub use token::TokenIssuer;
pub use token::TokenVerifier;
