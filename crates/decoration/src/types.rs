use scopeviz_primitives::CharacterRange;

use crate::borders::Borders;

/// A range paired with the border pattern it should be drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DecoratedRange {
	/// Range to paint.
	pub range: CharacterRange,
	/// Border pattern for the range.
	pub style: Borders,
}

impl DecoratedRange {
	/// Creates a decorated range.
	pub const fn new(range: CharacterRange, style: Borders) -> Self {
		Self { range, style }
	}
}

/// Key of a style bucket: a border pattern plus a variant index.
///
/// Ranges that share a pattern but overlap are assigned increasing
/// `differentiation_index` values so each variant can be painted by its own
/// host resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StyleParameters {
	/// Border pattern shared by the bucket.
	pub style: Borders,
	/// Variant index within the pattern.
	pub differentiation_index: usize,
}

impl StyleParameters {
	/// Creates style parameters.
	pub const fn new(style: Borders, differentiation_index: usize) -> Self {
		Self {
			style,
			differentiation_index,
		}
	}
}

/// A style bucket and the mutually non-overlapping ranges assigned to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleParametersRanges {
	/// Bucket key.
	pub style_parameters: StyleParameters,
	/// Ranges in processing order.
	pub ranges: Vec<CharacterRange>,
}
