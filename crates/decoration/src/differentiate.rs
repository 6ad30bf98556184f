//! Overlap differentiation.
//!
//! A host paints every range of one resource with the same rectangle style and
//! merges ranges that overlap or touch. Segments sharing a border pattern are
//! therefore split into variant buckets, each rendered by its own resource,
//! so that no bucket holds two intersecting ranges.

use indexmap::IndexMap;
use scopeviz_primitives::CharacterRange;

use crate::borders::Borders;
use crate::types::{DecoratedRange, StyleParameters, StyleParametersRanges};


/// Buckets decorated ranges by style, splitting overlapping ranges into
/// variants.
///
/// Each range goes to the lowest-indexed variant of its style that holds no
/// intersecting range, opening a new variant when none fits. Input order is
/// processing order, and styles are emitted in order of first appearance,
/// so identical input always yields identical buckets.
pub fn get_differentiated_ranges<I>(decorated_ranges: I) -> Vec<StyleParametersRanges>
where
	I: IntoIterator<Item = DecoratedRange>,
{
	let mut groups: IndexMap<Borders, Vec<Vec<CharacterRange>>> = IndexMap::new();

	for DecoratedRange { range, style } in decorated_ranges {
		let variants = groups.entry(style).or_default();
		match variants.iter_mut().find(|ranges| !ranges.iter().any(|r| r.intersects(&range))) {
			Some(ranges) => ranges.push(range),
			None => variants.push(vec![range]),
		}
	}

	groups
		.into_iter()
		.flat_map(|(style, variants)| {
			variants.into_iter().enumerate().map(move |(differentiation_index, ranges)| StyleParametersRanges {
				style_parameters: StyleParameters::new(style, differentiation_index),
				ranges,
			})
		})
		.collect()
}
