//! Email fingerprinting for Gravatar lookup and cache keys.
//!
//! Gravatar keys profiles and avatars by the MD5 of the normalised email
//! address, so the fingerprint doubles as the external lookup path segment
//! and as the enrichment cache key. The value appears in request URLs and
//! is not a secret, but it must stay stable across process restarts.

use std::fmt;

use md5::{Digest, Md5};

/// Normalised, hashed form of an email address.
///
/// The address is trimmed and lowercased before hashing, so case and
/// whitespace variants of the same address produce identical output.
///
/// # Examples
///
/// ```rust
/// use backend::domain::EmailFingerprint;
///
/// let padded = EmailFingerprint::new(" Ada@Example.COM ");
/// let plain = EmailFingerprint::new("ada@example.com");
///
/// assert_eq!(padded, plain);
/// assert_eq!(plain.as_str().len(), 32);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailFingerprint(String);

impl EmailFingerprint {
    /// Compute the fingerprint of an email address.
    #[must_use]
    pub fn new(email: &str) -> Self {
        let normalised = email.trim().to_lowercase();
        let mut hasher = Md5::new();
        hasher.update(normalised.as_bytes());
        Self(hex::encode(hasher.finalize()))
    }

    /// Hex form used in URLs and cache keys.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for EmailFingerprint {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for EmailFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn fingerprint_is_deterministic() {
        let first = EmailFingerprint::new("ada@example.com");
        let second = EmailFingerprint::new("ada@example.com");

        assert_eq!(first, second);
    }

    #[rstest]
    #[case::uppercase("A@B.com")]
    #[case::padded(" a@b.com ")]
    #[case::both("  A@B.COM")]
    fn fingerprint_normalises_case_and_whitespace(#[case] variant: &str) {
        assert_eq!(
            EmailFingerprint::new(variant),
            EmailFingerprint::new("a@b.com"),
        );
    }

    #[rstest]
    fn fingerprint_is_lowercase_hex_of_fixed_length() {
        let fingerprint = EmailFingerprint::new("grace@example.com");

        assert_eq!(fingerprint.as_str().len(), 32);
        assert!(
            fingerprint
                .as_str()
                .chars()
                .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()),
            "fingerprint should be lowercase hex"
        );
    }

    #[rstest]
    fn different_addresses_produce_different_fingerprints() {
        assert_ne!(
            EmailFingerprint::new("ada@example.com"),
            EmailFingerprint::new("grace@example.com"),
        );
    }
}
