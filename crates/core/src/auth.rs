//! Shared-secret bearer credential checks.

/// Result of checking an `Authorization` header against the API key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BearerCheck {
    Authorized,
    /// No header, or a scheme other than `Bearer`.
    Missing,
    /// A bearer credential that does not equal the API key.
    Invalid,
}

/// Compare an `Authorization` header value with the expected key.
///
/// The scheme is matched case-insensitively. Everything after the first space
/// is the credential and must equal the key byte for byte.
pub fn check_bearer(header: Option<&str>, api_key: &str) -> BearerCheck {
    let Some(header) = header else {
        return BearerCheck::Missing;
    };

    let Some((scheme, credential)) = header.split_once(' ') else {
        return BearerCheck::Missing;
    };

    if !scheme.eq_ignore_ascii_case("bearer") {
        return BearerCheck::Missing;
    }

    if credential.is_empty() {
        return BearerCheck::Missing;
    }

    if credential == api_key {
        BearerCheck::Authorized
    } else {
        BearerCheck::Invalid
    }
}

/// Mask a secret for display, one `*` per character.
pub fn mask_secret(secret: &str) -> String {
    "*".repeat(secret.chars().count())
}
