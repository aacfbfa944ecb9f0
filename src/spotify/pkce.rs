//! PKCE (RFC 7636) helpers for the public-client authorization code flow.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use rand::Rng;
use sha2::{Digest, Sha256};

/// Unreserved characters allowed in a code verifier
const VERIFIER_CHARSET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-._~";

/// RFC 7636 bounds on verifier length
pub const MIN_VERIFIER_LEN: usize = 43;
pub const MAX_VERIFIER_LEN: usize = 128;

/// Random code verifier of `len` characters, clamped to 43..=128.
pub fn generate_code_verifier(len: usize) -> String {
    let len = len.clamp(MIN_VERIFIER_LEN, MAX_VERIFIER_LEN);
    let mut rng = rand::rng();
    (0..len)
        .map(|_| VERIFIER_CHARSET[rng.random_range(0..VERIFIER_CHARSET.len())] as char)
        .collect()
}

/// S256 challenge: base64url(sha256(verifier)) without padding.
pub fn code_challenge(verifier: &str) -> String {
    let digest = Sha256::digest(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(digest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rfc7636_appendix_b_vector() {
        let verifier = "dBjftJeZ4CVP-mB92K27uhbUJU1p1r_wW1gFWFOEjXk";
        assert_eq!(
            code_challenge(verifier),
            "E9Melhoa2OwvFrEMTJguCHaoeK1t8URWbuGJSstw-cM"
        );
    }

    #[test]
    fn test_default_length() {
        assert_eq!(generate_code_verifier(128).len(), 128);
    }

    #[test]
    fn test_length_is_clamped() {
        assert_eq!(generate_code_verifier(0).len(), MIN_VERIFIER_LEN);
        assert_eq!(generate_code_verifier(500).len(), MAX_VERIFIER_LEN);
    }

    #[test]
    fn test_challenge_has_no_padding_or_unsafe_chars() {
        let challenge = code_challenge(&generate_code_verifier(64));
        assert_eq!(challenge.len(), 43);
        assert!(!challenge.contains(['=', '+', '/']));
    }
}
