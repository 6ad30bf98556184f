use scopeviz_decoration::DecorationError;
use thiserror::Error;

use crate::style::HighlightStyle;

/// Errors raised while rendering highlights.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HighlightError {
	/// The host rejected a decoration call.
	#[error("host decoration call failed: {0}")]
	Backend(String),

	/// A range could not be decomposed.
	#[error(transparent)]
	Decoration(#[from] DecorationError),

	/// The channel was used after disposal.
	#[error("highlight channel {0} has been disposed")]
	Disposed(HighlightStyle),
}

/// Result type for highlight operations.
pub type Result<T> = std::result::Result<T, HighlightError>;
