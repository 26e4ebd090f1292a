//! Function input record.
//!
//! A KRM-like object that configures the surrounding function. The name
//! generator itself does not read it.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Input options with their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Input {
	#[serde(default = "Input::default_api_version")]
	pub api_version: String,

	#[serde(default = "Input::default_kind")]
	pub kind: String,

	/// Object metadata, kept as-is.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub metadata: Option<serde_json::Value>,

	/// Time-to-live for cached function responses, e.g. `1m` or `1h30m`.
	#[serde(rename = "cacheTTL", default = "Input::default_cache_ttl")]
	pub cache_ttl: String,

	/// Generate v1 usages instead of v2 usages and cluster usages.
	#[serde(default)]
	pub enable_v1_mode: bool,
}

impl Default for Input {
	fn default() -> Self {
		Self {
			api_version: Self::default_api_version(),
			kind: Self::default_kind(),
			metadata: None,
			cache_ttl: Self::default_cache_ttl(),
			enable_v1_mode: false,
		}
	}
}

impl Input {
	fn default_api_version() -> String {
		"protection.fn.crossplane.io/v1beta1".to_string()
	}

	fn default_kind() -> String {
		"Input".to_string()
	}

	fn default_cache_ttl() -> String {
		"1m".to_string()
	}

	/// Parse an input from JSON, filling in defaults for missing fields.
	pub fn from_json(json: &str) -> Result<Self> {
		Ok(serde_json::from_str(json)?)
	}

	/// Read and parse an input file.
	pub fn load(path: &Path) -> Result<Self> {
		let content = fs::read_to_string(path)?;
		Self::from_json(&content)
	}

	/// The cache TTL as a [`Duration`].
	pub fn cache_ttl_duration(&self) -> Result<Duration> {
		humantime::parse_duration(&self.cache_ttl).map_err(|source| Error::InvalidCacheTtl {
			value: self.cache_ttl.clone(),
			source,
		})
	}
}
