// Privacy: one-way anonymization of PII fields, candidate ID derivation,
// and the per-candidate JSON store. Digests are truncated hex prefixes of
// SHA-256 over raw UTF-8 bytes, unsalted and unkeyed; they obfuscate, they
// do not de-identify against a determined attacker with a small keyspace.

pub mod anonymize;
pub mod candidate_id;
pub mod handlers;
pub mod store;

use sha2::{Digest, Sha256};

/// Lowercase-hex prefix of SHA-256 over the input's UTF-8 bytes.
pub(crate) fn short_digest(input: &str, len: usize) -> String {
    let digest = hex::encode(Sha256::digest(input.as_bytes()));
    digest[..len].to_string()
}
