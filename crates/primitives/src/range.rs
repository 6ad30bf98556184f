use std::fmt;

use thiserror::Error;

use crate::position::Position;


/// Errors raised when a range violates its ordering contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RangeError {
	/// A character range whose end precedes its start.
	#[error("character range end {end} precedes start {start}")]
	Inverted {
		/// Start position as given.
		start: Position,
		/// End position as given.
		end: Position,
	},
	/// A line range whose end precedes its start.
	#[error("line range end {end} precedes start {start}")]
	InvertedLines {
		/// Start line as given.
		start: usize,
		/// Exclusive end line as given.
		end: usize,
	},
}

/// A range of text addressed by line/character positions.
///
/// `start` is inclusive and `end` exclusive. A well-formed range has
/// `start <= end`; [`CharacterRange::validate`] checks this for ranges
/// assembled from raw fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CharacterRange {
	/// Start position (inclusive).
	pub start: Position,
	/// End position (exclusive).
	pub end: Position,
}

impl CharacterRange {
	/// Creates a range without checking ordering.
	pub const fn new(start: Position, end: Position) -> Self {
		Self { start, end }
	}

	/// Creates a range, rejecting `end < start`.
	pub fn try_new(start: Position, end: Position) -> Result<Self, RangeError> {
		let range = Self::new(start, end);
		range.validate()?;
		Ok(range)
	}

	/// Creates a range on a single line between two character offsets.
	pub const fn single_line(line: usize, start: usize, end: usize) -> Self {
		Self::new(Position::new(line, start), Position::new(line, end))
	}

	/// Creates a zero-width range at a position.
	pub const fn point(pos: Position) -> Self {
		Self::new(pos, pos)
	}

	/// Checks that the range is not inverted.
	pub fn validate(&self) -> Result<(), RangeError> {
		if self.end < self.start {
			return Err(RangeError::Inverted {
				start: self.start,
				end: self.end,
			});
		}
		Ok(())
	}

	/// Returns true if start equals end.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.start == self.end
	}

	/// Returns true if the range starts and ends on the same line.
	#[inline]
	pub fn is_single_line(&self) -> bool {
		self.start.line == self.end.line
	}

	/// Returns the number of lines the range touches.
	#[inline]
	pub fn line_count(&self) -> usize {
		self.end.line.saturating_sub(self.start.line) + 1
	}

	/// Returns a copy with a new start position.
	pub const fn with_start(self, start: Position) -> Self {
		Self::new(start, self.end)
	}

	/// Returns true if the position lies within `[start, end)`.
	pub fn contains(&self, pos: Position) -> bool {
		self.start <= pos && pos < self.end
	}

	/// Returns true if the two ranges share at least one position.
	///
	/// Intersection is closed: ranges that only touch at an endpoint
	/// intersect, as do empty ranges at the same position.
	pub fn intersects(&self, other: &CharacterRange) -> bool {
		self.start <= other.end && other.start <= self.end
	}
}

impl fmt::Display for CharacterRange {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}..{}", self.start, self.end)
	}
}

/// A range addressed at whole-line granularity.
///
/// Covers lines `start..end`; `end` is exclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineRange {
	/// First line (inclusive).
	pub start: usize,
	/// Line after the last covered line (exclusive).
	pub end: usize,
}

impl LineRange {
	/// Creates a line range without checking ordering.
	pub const fn new(start: usize, end: usize) -> Self {
		Self { start, end }
	}

	/// Creates a line range, rejecting `end < start`.
	pub fn try_new(start: usize, end: usize) -> Result<Self, RangeError> {
		let range = Self::new(start, end);
		range.validate()?;
		Ok(range)
	}

	/// Returns the line range covering every line the character range touches.
	pub const fn from_character_range(range: &CharacterRange) -> Self {
		Self::new(range.start.line, range.end.line + 1)
	}

	/// Checks that the range is not inverted.
	pub fn validate(&self) -> Result<(), RangeError> {
		if self.end < self.start {
			return Err(RangeError::InvertedLines {
				start: self.start,
				end: self.end,
			});
		}
		Ok(())
	}

	/// Returns the number of lines covered.
	#[inline]
	pub fn len(&self) -> usize {
		self.end.saturating_sub(self.start)
	}

	/// Returns true if no line is covered.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Returns the last covered line, if any.
	pub fn last_line(&self) -> Option<usize> {
		(!self.is_empty()).then(|| self.end - 1)
	}
}

impl fmt::Display for LineRange {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "lines {}..{}", self.start, self.end)
	}
}

/// Either a character range or a whole-line range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeneralizedRange {
	/// Character-granular range.
	Character(CharacterRange),
	/// Line-granular range.
	Line(LineRange),
}

impl GeneralizedRange {
	/// Returns true for the line variant.
	pub fn is_line_range(&self) -> bool {
		matches!(self, Self::Line(_))
	}

	/// Checks the ordering contract of the wrapped range.
	pub fn validate(&self) -> Result<(), RangeError> {
		match self {
			Self::Character(range) => range.validate(),
			Self::Line(range) => range.validate(),
		}
	}
}

impl From<CharacterRange> for GeneralizedRange {
	fn from(range: CharacterRange) -> Self {
		Self::Character(range)
	}
}

impl From<LineRange> for GeneralizedRange {
	fn from(range: LineRange) -> Self {
		Self::Line(range)
	}
}

/// Splits generalized ranges into line ranges and character ranges,
/// preserving relative order within each group.
pub fn partition_ranges(ranges: &[GeneralizedRange]) -> (Vec<LineRange>, Vec<CharacterRange>) {
	let mut lines = Vec::new();
	let mut characters = Vec::new();
	for range in ranges {
		match *range {
			GeneralizedRange::Line(range) => lines.push(range),
			GeneralizedRange::Character(range) => characters.push(range),
		}
	}
	(lines, characters)
}
