//! Kubernetes Name Generation Library
//!
//! Builds deterministic resource names of the form
//! `<name>-<fingerprint>-<suffix>` that never exceed the 63 character limit
//! Kubernetes places on resource names.

pub mod error;
pub mod fingerprint;
pub mod input;
pub mod naming;

use rayon::prelude::*;
use serde::Serialize;

pub use error::{Error, Result};
pub use fingerprint::{fingerprint, fnv1a_32, sha256_prefix, HashFn};
pub use input::Input;
pub use naming::{generate_name, is_dns_label_safe, NameGenerator, MAX_NAME_LEN, MAX_SUFFIX_LEN};

/// A generated name alongside the name it was generated from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedName {
	pub name: String,
	pub generated: String,
}

/// Generate names for many inputs in parallel, sharing one suffix.
///
/// Results keep the order of `names`. Fails if the suffix is too long.
pub fn generate_all(
	generator: &NameGenerator,
	names: &[String],
	suffix: &str,
) -> Result<Vec<GeneratedName>> {
	names
		.par_iter()
		.map(|name| {
			Ok(GeneratedName {
				name: name.clone(),
				generated: generator.generate(name, suffix)?,
			})
		})
		.collect()
}
