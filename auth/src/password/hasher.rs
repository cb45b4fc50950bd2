use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Algorithm;
use argon2::Argon2;
use argon2::Params;
use argon2::Version;

use super::errors::PasswordError;

/// Adaptive password hashing (Argon2id).
///
/// Each digest embeds the algorithm identifier, the work-factor parameters,
/// and a fresh random salt, so two hashes of the same password differ while
/// both verify against it.
pub struct PasswordHasher {
    params: Params,
}

impl PasswordHasher {
    /// Create a hasher with the library's default work factor.
    pub fn new() -> Self {
        Self {
            params: Params::default(),
        }
    }

    /// Create a hasher with an explicit work factor.
    ///
    /// The hash cost dominates request latency under load; operators who need
    /// to bound verification time tune it here.
    ///
    /// # Arguments
    /// * `params` - Argon2 memory/iteration/parallelism parameters
    pub fn with_params(params: Params) -> Self {
        Self { params }
    }

    /// Hash a plaintext password for storage.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to hash
    ///
    /// # Returns
    /// PHC string format digest (algorithm, parameters, salt, and hash)
    ///
    /// # Errors
    /// * `HashingFailed` - Password hashing operation failed
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);

        self.context()
            .hash_password(password.as_bytes(), &salt)
            .map(|digest| digest.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a password against a stored digest.
    ///
    /// Recomputes the hash with the salt and parameters embedded in the
    /// digest; the underlying comparison is constant-time. A digest that is
    /// not a well-formed PHC string never matches.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `digest` - Stored digest in PHC string format
    ///
    /// # Returns
    /// True if the password matches, false otherwise (including on a
    /// malformed digest)
    pub fn verify(&self, password: &str, digest: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(digest) else {
            return false;
        };

        self.context()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    }

    fn context(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hasher = PasswordHasher::new();
        let password = "my_secure_password";

        let digest = hasher.hash(password).expect("Failed to hash password");

        assert!(hasher.verify(password, &digest));
        assert!(!hasher.verify("wrong_password", &digest));
    }

    #[test]
    fn test_hash_is_salted() {
        let hasher = PasswordHasher::new();
        let password = "same_password";

        let first = hasher.hash(password).expect("Failed to hash password");
        let second = hasher.hash(password).expect("Failed to hash password");

        // Fresh salt per call: distinct digests, both valid
        assert_ne!(first, second);
        assert!(hasher.verify(password, &first));
        assert!(hasher.verify(password, &second));
    }

    #[test]
    fn test_digest_embeds_algorithm_and_params() {
        let hasher = PasswordHasher::new();
        let digest = hasher.hash("password").expect("Failed to hash password");

        assert!(digest.starts_with("$argon2id$"));
        assert!(digest.contains("m="));
    }

    #[test]
    fn test_verify_malformed_digest_is_false() {
        let hasher = PasswordHasher::new();

        assert!(!hasher.verify("password", "not_a_phc_string"));
        assert!(!hasher.verify("password", ""));
        assert!(!hasher.verify("password", "$argon2id$truncated"));
    }

    #[test]
    fn test_custom_params() {
        // Minimal cost keeps this test fast while exercising the knob
        let params = Params::new(8, 1, 1, None).expect("Invalid params");
        let hasher = PasswordHasher::with_params(params);

        let digest = hasher.hash("password").expect("Failed to hash password");
        assert!(hasher.verify("password", &digest));
    }
}
