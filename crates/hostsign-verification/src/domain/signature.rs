//! # Host Signature
//!
//! ```text
//! signature = lowercase_hex(sha1(concat(sort_bytewise([identity, nonce, timestamp, secret]))))
//! ```
//!
//! Sorting makes the digest independent of the order in which the four values
//! are supplied. It does not protect against substituting one value for another
//! that sorts into the same position; the secret is what makes forgery hard.
//!
//! ## Security
//!
//! - The signing string contains the shared secret and is wrapped in
//!   `Zeroizing` so it is cleared once dropped
//! - Comparison uses `subtle` so timing does not leak matching prefixes

use sha1::{Digest, Sha1};
use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

/// Build the pre-hash string: the four inputs sorted byte-wise, concatenated
/// with no separator.
pub fn signing_string(
    identity: &str,
    nonce: &str,
    timestamp: &str,
    secret: &str,
) -> Zeroizing<String> {
    let mut parts = [identity, nonce, timestamp, secret];
    // `str` ordering is lexicographic over UTF-8 bytes
    parts.sort_unstable();

    let mut joined = Zeroizing::new(String::with_capacity(parts.iter().map(|p| p.len()).sum()));
    for part in parts {
        joined.push_str(part);
    }
    joined
}

/// Compute the expected host signature as lowercase hex.
pub fn compute_signature(identity: &str, nonce: &str, timestamp: &str, secret: &str) -> String {
    digest_signing_string(&signing_string(identity, nonce, timestamp, secret))
}

/// Lowercase hex SHA-1 of an already assembled signing string.
pub fn digest_signing_string(signing_string: &str) -> String {
    hex::encode(Sha1::digest(signing_string.as_bytes()))
}

/// Exact, constant-time equality of a computed and a supplied signature.
///
/// Both inputs are padded to the longer length with different fill bytes so
/// the comparison time depends only on the lengths, never on content.
pub fn signatures_match(computed: &str, supplied: &str) -> bool {
    let max_len = computed.len().max(supplied.len());

    let mut a = vec![0u8; max_len];
    let mut b = vec![0xFFu8; max_len];
    a[..computed.len()].copy_from_slice(computed.as_bytes());
    b[..supplied.len()].copy_from_slice(supplied.as_bytes());

    let lengths_equal = computed.len().ct_eq(&supplied.len());
    let contents_equal = a.ct_eq(&b);

    (lengths_equal & contents_equal).into()
}
