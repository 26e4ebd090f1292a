//! Name generator for length-bounded resource names.
//!
//! Generates names in the format `<name>-<fingerprint>-<suffix>`, where the
//! name segment is truncated as needed to keep the result within the
//! Kubernetes 63 character limit. The fingerprint is computed from the full
//! name, so two names that truncate to the same prefix stay distinct.

use crate::error::{Error, Result};
use crate::fingerprint::{fingerprint_with, sha256_prefix, HashFn, FINGERPRINT_LEN};
use tracing::debug;

/// Maximum length of a generated name.
pub const MAX_NAME_LEN: usize = 63;

/// Separator between name, fingerprint and suffix.
pub const SEPARATOR: char = '-';

/// Longest suffix that still leaves room for both separators and the fingerprint.
pub const MAX_SUFFIX_LEN: usize = MAX_NAME_LEN - FINGERPRINT_LEN - 2;

/// Generator for length-bounded names.
#[derive(Debug, Clone, Copy)]
pub struct NameGenerator {
	hash: HashFn,
}

impl Default for NameGenerator {
	fn default() -> Self {
		Self::new()
	}
}

impl NameGenerator {
	/// Create a name generator using the SHA-256 based fingerprint.
	pub fn new() -> Self {
		Self::with_hash(sha256_prefix)
	}

	/// Create a name generator with a custom hash function.
	pub fn with_hash(hash: HashFn) -> Self {
		Self { hash }
	}

	/// Generate a name from `name` and `suffix`.
	///
	/// Format: `<name>-<fingerprint>-<suffix>`. A name segment that already
	/// ends with `-` reuses that dash instead of getting a second one. The
	/// suffix is never truncated; only the name segment is.
	///
	/// Fails with [`Error::SuffixTooLong`] when the suffix alone leaves no
	/// room for the fingerprint.
	pub fn generate(&self, name: &str, suffix: &str) -> Result<String> {
		if suffix.len() > MAX_SUFFIX_LEN {
			return Err(Error::SuffixTooLong {
				len: suffix.len(),
				max: MAX_SUFFIX_LEN,
			});
		}

		let fingerprint = fingerprint_with(self.hash, name);
		let budget = MAX_SUFFIX_LEN - suffix.len();

		let name_part = if name.len() <= budget {
			name
		} else {
			let truncated = truncate(name, budget);
			debug!(
				original = name,
				suffix,
				budget,
				truncated,
				"Truncated name to fit length limit"
			);
			truncated
		};

		let mut generated = String::with_capacity(MAX_NAME_LEN);
		generated.push_str(name_part);
		if !name_part.ends_with(SEPARATOR) {
			generated.push(SEPARATOR);
		}
		generated.push_str(&fingerprint);
		generated.push(SEPARATOR);
		generated.push_str(suffix);

		Ok(generated)
	}
}

/// Generate a name with the default generator.
///
/// See [`NameGenerator::generate`].
pub fn generate_name(name: &str, suffix: &str) -> Result<String> {
	NameGenerator::new().generate(name, suffix)
}

/// Whether `s` only contains characters valid in a DNS label
/// (lowercase ASCII letters, digits and `-`).
pub fn is_dns_label_safe(s: &str) -> bool {
	s.bytes()
		.all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}

/// Cut `s` to at most `max` bytes without splitting a character.
fn truncate(s: &str, max: usize) -> &str {
	if s.len() <= max {
		return s;
	}
	let mut end = max;
	while !s.is_char_boundary(end) {
		end -= 1;
	}
	&s[..end]
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::fingerprint::{fingerprint, fnv1a_32};

	#[test]
	fn test_generate_keeps_short_name() {
		let name = generate_name("composed-resource-c82ef4fa3e45", "fn-protection").unwrap();
		assert_eq!(name, "composed-resource-c82ef4fa3e45-bf2238-fn-protection");
		assert_eq!(name.len(), 52);
	}

	#[test]
	fn test_generate_truncates_long_name() {
		let name = generate_name(
			"a-very-long-string-that-is-more-than-sixty-three-characters-long",
			"fn-protection",
		)
		.unwrap();
		assert_eq!(
			name,
			"a-very-long-string-that-is-more-than-sixty-acc595-fn-protection"
		);
		assert_eq!(name.len(), MAX_NAME_LEN);
	}

	#[test]
	fn test_generate_truncated_name_ending_in_dash() {
		// budget for "suffix" is 49, and the 49th char is a dash
		let name = generate_name(&format!("{}-tail", "a".repeat(48)), "suffix").unwrap();
		assert!(name.starts_with(&format!("{}-", "a".repeat(48))));
		assert!(!name.contains("--"));
		assert_eq!(name.len(), MAX_NAME_LEN - 1);
	}

	#[test]
	fn test_generate_truncates_name_one_past_budget() {
		// budget for "fn-protection" is 42; the name ends in "--" one byte past it
		let name = format!("{}--", "a".repeat(41));
		let generated = generate_name(&name, "fn-protection").unwrap();
		assert_eq!(
			generated,
			format!("{}-{}-fn-protection", "a".repeat(41), fingerprint(&name))
		);
		assert_eq!(generated.len(), MAX_NAME_LEN);
	}

	#[test]
	fn test_generate_empty_inputs() {
		let name = generate_name("", "").unwrap();
		assert_eq!(name.len(), 1 + FINGERPRINT_LEN + 1);
		assert!(name.starts_with('-'));
		assert!(name.ends_with('-'));
	}

	#[test]
	fn test_generate_rejects_long_suffix() {
		let suffix = "s".repeat(MAX_SUFFIX_LEN + 1);
		let err = generate_name("name", &suffix).unwrap_err();
		assert!(matches!(err, Error::SuffixTooLong { len: 56, max: 55 }));
	}

	#[test]
	fn test_generate_accepts_longest_suffix() {
		let suffix = "s".repeat(MAX_SUFFIX_LEN);
		let name = generate_name("name", &suffix).unwrap();
		assert_eq!(name.len(), MAX_NAME_LEN);
		assert!(name.ends_with(&suffix));
	}

	#[test]
	fn test_generate_with_custom_hash() {
		let gen = NameGenerator::with_hash(fnv1a_32);
		let name = gen.generate("a", "x").unwrap();
		assert_eq!(name, "a-e40c29-x");
	}

	#[test]
	fn test_truncate_respects_char_boundaries() {
		assert_eq!(truncate("abc", 5), "abc");
		assert_eq!(truncate("abcdef", 3), "abc");
		// 'é' is two bytes; cutting at 2 would split it
		assert_eq!(truncate("aé", 2), "a");
	}

	#[test]
	fn test_is_dns_label_safe() {
		assert!(is_dns_label_safe("my-resource-01"));
		assert!(!is_dns_label_safe("My-Resource"));
		assert!(!is_dns_label_safe("under_score"));
		assert!(!is_dns_label_safe("café"));
	}
}
