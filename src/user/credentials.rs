//! Credential hashing and code policy
//!
//! Codes never live in a record in plaintext. A [`CodeHasher`] turns a plaintext
//! code into the opaque string stored in the users file, and a [`CodePolicy`]
//! decides whether a plaintext is strong enough to be accepted at all.

use sha2::{Digest, Sha256};
use tracing::{debug, warn};

use crate::types::config::credentials::DEFAULT_MIN_CODE_LENGTH;
use crate::user::User;

/// One-way hash used for credential and sponsor codes
pub trait CodeHasher {
    /// Hash a plaintext code. Must be deterministic.
    fn hash(&self, plaintext: &str) -> String;
}

/// Minimum requirements a plaintext code has to meet
pub trait CodePolicy {
    /// Whether the plaintext is acceptable as a code
    fn meets_minimum(&self, plaintext: &str) -> bool;
}

/// Salted SHA-256, hex encoded
#[derive(Debug, Clone, Default)]
pub struct Sha256CodeHasher {
    salt: String,
}

impl Sha256CodeHasher {
    /// Create a hasher mixing `salt` in front of every code
    pub fn new(salt: impl Into<String>) -> Self {
        Self { salt: salt.into() }
    }
}

impl CodeHasher for Sha256CodeHasher {
    fn hash(&self, plaintext: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.salt.as_bytes());
        hasher.update(plaintext.as_bytes());
        hex::encode(hasher.finalize())
    }
}

/// Accepts codes of at least `min_length` ASCII letters or digits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinimumLengthPolicy {
    /// Minimum number of characters
    pub min_length: usize,
}

impl MinimumLengthPolicy {
    /// Create a policy with the given minimum length
    pub fn new(min_length: usize) -> Self {
        Self { min_length }
    }
}

impl Default for MinimumLengthPolicy {
    fn default() -> Self {
        Self { min_length: DEFAULT_MIN_CODE_LENGTH }
    }
}

impl CodePolicy for MinimumLengthPolicy {
    fn meets_minimum(&self, plaintext: &str) -> bool {
        plaintext.chars().count() >= self.min_length
            && plaintext.chars().all(|c| c.is_ascii_alphanumeric())
    }
}

impl User {
    /// Set the credential code of this user
    ///
    /// Returns `false` and leaves the record untouched if the code fails the
    /// policy. On success the code list is replaced by the single new hash;
    /// earlier codes are discarded.
    // TODO: add-code semantics once the keypad frontend supports several codes per user
    pub fn set_auth_code(
        &mut self,
        plaintext: &str,
        policy: &impl CodePolicy,
        hasher: &impl CodeHasher,
    ) -> bool {
        if !policy.meets_minimum(plaintext) {
            warn!(user = %self.name, "Rejected code that does not meet minimum requirements");
            return false;
        }
        self.codes = vec![hasher.hash(plaintext)];
        debug!(user = %self.name, "Replaced auth code");
        true
    }

    /// Whether the hash of `plaintext` is one of this user's codes
    pub fn has_code(&self, plaintext: &str, hasher: &impl CodeHasher) -> bool {
        let hashed = hasher.hash(plaintext);
        self.codes.iter().any(|code| *code == hashed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Level;

    #[test]
    fn test_sha256_hasher_is_deterministic_and_salted() {
        let plain = Sha256CodeHasher::default();
        assert_eq!(plain.hash("123456"), plain.hash("123456"));
        assert_eq!(
            plain.hash("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );

        let salted = Sha256CodeHasher::new("pepper");
        assert_ne!(salted.hash("123456"), plain.hash("123456"));
        assert_eq!(salted.hash("123456").len(), 64);
    }

    #[test]
    fn test_minimum_length_policy() {
        let policy = MinimumLengthPolicy::default();
        assert!(policy.meets_minimum("123456"));
        assert!(policy.meets_minimum("abc123def"));
        assert!(!policy.meets_minimum("12345"));
        assert!(!policy.meets_minimum(""));
        assert!(!policy.meets_minimum("123 456"));
        assert!(!policy.meets_minimum("12345;"));

        assert!(MinimumLengthPolicy::new(4).meets_minimum("1234"));
    }

    #[test]
    fn test_weak_code_leaves_codes_unchanged() {
        let hasher = Sha256CodeHasher::default();
        let mut user = User::new("alice", "alice@example.org", Level::Member);
        user.codes = vec!["old".to_string()];

        assert!(!user.set_auth_code("123", &MinimumLengthPolicy::default(), &hasher));
        assert_eq!(user.codes, vec!["old".to_string()]);
    }

    #[test]
    fn test_strong_code_replaces_all_codes() {
        let hasher = Sha256CodeHasher::default();
        let mut user = User::new("alice", "alice@example.org", Level::Member);
        user.codes = vec!["old1".to_string(), "old2".to_string()];

        assert!(user.set_auth_code("424242", &MinimumLengthPolicy::default(), &hasher));
        assert_eq!(user.codes, vec![hasher.hash("424242")]);
        assert!(user.has_code("424242", &hasher));
        assert!(!user.has_code("000000", &hasher));
    }
}
