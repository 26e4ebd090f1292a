//! Content fingerprints for generated names.
//!
//! A fingerprint is a 6-character lowercase hex string derived from the full,
//! untruncated input name. Two names that share a truncated prefix still end
//! up with different generated names because their fingerprints differ.

use sha2::{Digest, Sha256};

/// Number of hex characters in a fingerprint.
pub const FINGERPRINT_LEN: usize = 6;

/// A pure hash from bytes to a 32-bit value.
///
/// Only the top 24 bits make it into the fingerprint.
pub type HashFn = fn(&[u8]) -> u32;

/// First 32 bits (big-endian) of the SHA-256 digest.
///
/// This is the default hash. Its fingerprint equals the first six hex digits
/// of `sha256(name)`.
pub fn sha256_prefix(bytes: &[u8]) -> u32 {
	let digest = Sha256::digest(bytes);
	u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]])
}

/// 32-bit FNV-1a.
pub const fn fnv1a_32(bytes: &[u8]) -> u32 {
	const FNV_OFFSET: u32 = 2166136261;
	const FNV_PRIME: u32 = 16777619;

	let mut hash = FNV_OFFSET;
	let mut i = 0;
	while i < bytes.len() {
		hash ^= bytes[i] as u32;
		hash = hash.wrapping_mul(FNV_PRIME);
		i += 1;
	}
	hash
}

/// Render a hash value as a fingerprint: zero-padded lowercase hex, cut to 6 chars.
pub fn hex6(hash: u32) -> String {
	let mut hex = format!("{:08x}", hash);
	hex.truncate(FINGERPRINT_LEN);
	hex
}

/// Fingerprint a name with the default hash.
pub fn fingerprint(name: &str) -> String {
	fingerprint_with(sha256_prefix, name)
}

/// Fingerprint a name with the given hash.
pub fn fingerprint_with(hash: HashFn, name: &str) -> String {
	hex6(hash(name.as_bytes()))
}
