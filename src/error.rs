//! Error types for the matching core

use thiserror::Error;

/// Failures raised by the matching engine.
///
/// A zero-norm vector is not an error: it scores 0.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MatchError {
	/// No document in the catalog yields a single vocabulary term.
	#[error("cannot fit term weights: corpus has no usable text ({documents} documents)")]
	EmptyCorpus { documents: usize },

	#[error("malformed persona: cannot read {field} from {value:?}")]
	MalformedPersona { field: &'static str, value: String },

	#[error("malformed listing #{index} ({name}): missing {field}")]
	MalformedListing {
		index: usize,
		name: String,
		field: &'static str,
	},
}

pub type Result<T> = std::result::Result<T, MatchError>;
