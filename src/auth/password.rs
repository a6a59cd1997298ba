//! Password hashing and verification
//!
//! Thin wrapper over bcrypt. Hashing is salted per call, so two hashes of the
//! same plaintext differ; verification recomputes from the parameters embedded
//! in the stored hash. Plaintext is never stored or compared directly.

use thiserror::Error;

/// A structurally valid bcrypt hash that no real password produced. Login
/// verifies unknown usernames against it so the unknown-username and
/// wrong-password paths cost the same.
pub const DUMMY_HASH: &str = "$2b$12$abcdefghijklmnopqrstuvabcdefghijklmnopqrstuvwxyz01234";

/// Password hashing errors
#[derive(Error, Debug)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashFailed(String),

    #[error("Stored password hash is corrupted: {0}")]
    CorruptedHash(String),
}

/// Hash a plaintext password with the given bcrypt cost factor
pub fn hash(plaintext: &str, cost: u32) -> Result<String, PasswordError> {
    bcrypt::hash(plaintext, cost).map_err(|e| PasswordError::HashFailed(e.to_string()))
}

/// Verify a candidate plaintext against a stored hash.
///
/// A non-matching candidate returns `Ok(false)`; only a malformed stored hash
/// is an error, since that means corrupted storage rather than a bad guess.
pub fn verify(candidate: &str, stored_hash: &str) -> Result<bool, PasswordError> {
    bcrypt::verify(candidate, stored_hash).map_err(|e| PasswordError::CorruptedHash(e.to_string()))
}

/// Burn roughly one bcrypt verification's worth of work without revealing
/// anything. Used on the unknown-username login path.
pub fn verify_dummy(candidate: &str) {
    let _ = bcrypt::verify(candidate, DUMMY_HASH);
}

#[cfg(test)]
mod tests {
    use super::*;

    // Minimum cost keeps the tests fast; production uses the configured cost.
    const TEST_COST: u32 = 4;

    #[test]
    fn test_hash_and_verify_roundtrip() {
        let hashed = hash("correct horse battery staple", TEST_COST).unwrap();
        assert!(verify("correct horse battery staple", &hashed).unwrap());
    }

    #[test]
    fn test_verify_rejects_wrong_password() {
        let hashed = hash("p1", TEST_COST).unwrap();
        assert!(!verify("p2", &hashed).unwrap());
    }

    #[test]
    fn test_hash_is_salted() {
        let a = hash("same-input", TEST_COST).unwrap();
        let b = hash("same-input", TEST_COST).unwrap();
        assert_ne!(a, b);
        assert!(verify("same-input", &a).unwrap());
        assert!(verify("same-input", &b).unwrap());
    }

    #[test]
    fn test_hash_never_equals_plaintext() {
        let hashed = hash("plaintext", TEST_COST).unwrap();
        assert_ne!(hashed, "plaintext");
    }

    #[test]
    fn test_verify_corrupted_hash_errors() {
        let result = verify("anything", "not-a-bcrypt-hash");
        assert!(matches!(result, Err(PasswordError::CorruptedHash(_))));
    }

    #[test]
    fn test_verify_dummy_does_not_panic() {
        verify_dummy("whatever the attacker sent");
    }
}
