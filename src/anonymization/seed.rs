//! Seed construction
//!
//! A seed is the secret concatenated with the normalized original
//! value. The format — `secret ++ uppercase(trim(original))` — is a
//! versioned public contract: changing normalization silently breaks
//! the idempotency guarantee for datasets anonymized under the old
//! rule, so any change here is a breaking change to the tool.
//!
//! Normalization makes the mapping robust to incidental formatting
//! differences in source data: `"david"`, `" DAVID "`, and `"David"`
//! all build the same seed and therefore receive the same replacement.
//! Without the secret, the seed cannot be reconstructed even knowing
//! the normalized original and this scheme.

use secrecy::{ExposeSecret, SecretString};

/// Normalize an original value for seeding
///
/// Strips leading/trailing whitespace and uppercases. Idempotent:
/// `normalize(normalize(v)) == normalize(v)`.
pub fn normalize(value: &str) -> String {
    value.trim().to_uppercase()
}

/// Build the deterministic seed for `(secret, original)`
pub fn build_seed(secret: &SecretString, original: &str) -> String {
    format!("{}{}", secret.expose_secret(), normalize(original))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_and_uppercases() {
        assert_eq!(normalize("  david "), "DAVID");
        assert_eq!(normalize("Jone"), "JONE");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize("  1 George st Sydney NSW 2112 ");
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn test_build_seed_concatenates() {
        let secret = SecretString::new("A!Ob3#".to_string());
        assert_eq!(build_seed(&secret, " David "), "A!Ob3#DAVID");
    }

    #[test]
    fn test_build_seed_ignores_case_and_padding() {
        let secret = SecretString::new("s".to_string());
        assert_eq!(
            build_seed(&secret, "david"),
            build_seed(&secret, "  DAVID  ")
        );
    }
}
