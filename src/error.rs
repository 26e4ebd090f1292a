use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
	#[error("suffix is {len} bytes long, at most {max} bytes fit in a generated name")]
	SuffixTooLong { len: usize, max: usize },

	#[error("invalid input: {0}")]
	InvalidInput(#[from] serde_json::Error),

	#[error("invalid cacheTTL {value:?}: {source}")]
	InvalidCacheTtl {
		value: String,
		#[source]
		source: humantime::DurationError,
	},

	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),
}
