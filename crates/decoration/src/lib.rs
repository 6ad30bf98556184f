//! Range decoration engine.
//!
//! Turns logical text ranges into the rectangles a host editor can paint:
//! [`generate`] breaks one range into border segments that together trace a
//! single outline, and [`differentiate`] buckets segments by style so that no
//! two overlapping or touching segments share a host resource.

/// Border styles and preset border patterns.
pub mod borders;
/// Overlap differentiation of decorated ranges.
pub mod differentiate;
/// Decoration error types.
pub mod error;
/// Border segment generation.
pub mod generate;
/// Decorated range and style bucket types.
pub mod types;

pub use borders::{BorderStyle, Borders};
pub use differentiate::get_differentiated_ranges;
pub use error::{DecorationError, Result};
pub use generate::{Decorations, generate_decorations, generate_decorations_for_line_range, generate_decorations_for_range};
use scopeviz_primitives::{GeneralizedRange, TextDocument};
pub use types::{DecoratedRange, StyleParameters, StyleParametersRanges};

/// Computes the differentiated border segments for a frame of ranges.
///
/// Every range is decomposed first, so a malformed range rejects the whole
/// frame before any bucket is built.
pub fn get_decoration_ranges(document: &dyn TextDocument, ranges: &[GeneralizedRange]) -> Result<Vec<StyleParametersRanges>> {
	let mut decorated = Vec::with_capacity(ranges.len() * 2);
	for range in ranges {
		decorated.extend(generate_decorations(document, range)?);
	}

	let buckets = get_differentiated_ranges(decorated.iter().copied());
	tracing::trace!(ranges = ranges.len(), segments = decorated.len(), buckets = buckets.len(), "decoration.ranges");
	Ok(buckets)
}
