use scopeviz_primitives::RangeError;
use thiserror::Error;

/// Errors raised when a range cannot be decomposed against a document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecorationError {
	/// The range violates its ordering contract.
	#[error(transparent)]
	Range(#[from] RangeError),

	/// The range touches a line the document does not have.
	#[error("line {line} is outside the document ({line_count} lines)")]
	LineOutOfBounds {
		/// Offending line.
		line: usize,
		/// Number of lines in the document.
		line_count: usize,
	},

	/// A range endpoint lies past the end of its line.
	#[error("column {character} is past the end of line {line} (length {len})")]
	ColumnOutOfBounds {
		/// Line of the endpoint.
		line: usize,
		/// Column of the endpoint.
		character: usize,
		/// Length of the line.
		len: usize,
	},
}

/// Result type for decoration operations.
pub type Result<T> = std::result::Result<T, DecorationError>;
