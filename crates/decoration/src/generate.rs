//! Border segment generation.
//!
//! A host can only paint rectangles, so a range spanning several lines is
//! broken into segments whose borders together trace one outline around the
//! range. Where two segments meet, the touching edges are both left open.
//!
//! Multi-line ranges are first classified by where they start and end within
//! their boundary lines. A range that effectively covers whole lines (for
//! example from the end of one line to the end of another) is drawn as
//! whole-line bands; anything else is drawn column by column by a handler
//! specialised for two, three, or more lines.

use scopeviz_primitives::{CharacterRange, GeneralizedRange, LineRange, Position, TextDocument};
use smallvec::SmallVec;

use crate::borders::Borders;
use crate::error::{DecorationError, Result};
use crate::types::DecoratedRange;

mod line_decorations;
mod many_lines;
mod three_lines;
mod two_lines;

#[cfg(test)]
mod tests;

/// Upper bound on the segments produced for one range.
const MAX_SEGMENTS: usize = 5;

pub(crate) type DecorationBuf = SmallVec<[DecoratedRange; MAX_SEGMENTS]>;

/// Segments produced for a single range.
pub type Decorations = smallvec::IntoIter<[DecoratedRange; MAX_SEGMENTS]>;

/// Decomposes a generalized range.
///
/// Line ranges go straight to whole-line bands without consulting line
/// lengths.
pub fn generate_decorations(document: &dyn TextDocument, range: &GeneralizedRange) -> Result<Decorations> {
	match range {
		GeneralizedRange::Character(range) => generate_decorations_for_range(document, range),
		GeneralizedRange::Line(range) => generate_decorations_for_line_range(range),
	}
}

/// Decomposes a whole-line range into bands.
///
/// An empty line range produces no segments.
pub fn generate_decorations_for_line_range(range: &LineRange) -> Result<Decorations> {
	range.validate()?;

	let mut out = DecorationBuf::new();
	if let Some(last) = range.last_line() {
		line_decorations::handle_line_decorations(range.start, last, &mut out);
	}
	Ok(out.into_iter())
}

/// Decomposes a character range into border segments.
///
/// Rejects inverted ranges and endpoints outside the document instead of
/// clamping them.
pub fn generate_decorations_for_range(document: &dyn TextDocument, range: &CharacterRange) -> Result<Decorations> {
	range.validate()?;

	let start_len = checked_line_len(document, range.start)?;
	let end_len = checked_line_len(document, range.end)?;

	let mut out = DecorationBuf::new();

	if range.is_single_line() {
		out.push(DecoratedRange::new(*range, Borders::FULL));
		return Ok(out.into_iter());
	}

	let first = range.start.line;
	let last = range.end.line;

	let start_type = EndingType::of(start_len, range.start.character);
	let end_type = EndingType::of(end_len, range.end.character);

	if let RangeMode::Line { start_offset, end_offset } = RangeMode::of(start_type, end_type) {
		line_decorations::handle_line_decorations(first + start_offset, last - end_offset, &mut out);
		return Ok(out.into_iter());
	}

	let first_line = CharacterRange::new(range.start, Position::new(first, start_len));
	let last_line = CharacterRange::new(Position::new(last, 0), range.end);

	match range.line_count() {
		2 => two_lines::handle_two_lines(first_line, last_line, &mut out),
		3 => {
			let second = full_line(document, first + 1)?;
			three_lines::handle_three_lines(first_line, second, last_line, &mut out);
		}
		_ => {
			let second_last = full_line(document, last - 1)?;
			many_lines::handle_many_lines(first_line, first + 1, second_last, last_line, &mut out);
		}
	}

	Ok(out.into_iter())
}

/// Returns the length of the line holding `pos`, checking that `pos` lies on it.
fn checked_line_len(document: &dyn TextDocument, pos: Position) -> Result<usize> {
	let len = line_len(document, pos.line)?;
	if pos.character > len {
		return Err(DecorationError::ColumnOutOfBounds {
			line: pos.line,
			character: pos.character,
			len,
		});
	}
	Ok(len)
}

fn line_len(document: &dyn TextDocument, line: usize) -> Result<usize> {
	document.line_len(line).ok_or_else(|| DecorationError::LineOutOfBounds {
		line,
		line_count: document.line_count(),
	})
}

fn full_line(document: &dyn TextDocument, line: usize) -> Result<CharacterRange> {
	Ok(CharacterRange::single_line(line, 0, line_len(document, line)?))
}

/// Where a range endpoint sits within its line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EndingType {
	/// The line has no text.
	Empty,
	/// At column zero of a non-empty line.
	LineStart,
	/// At the end of a non-empty line.
	LineEnd,
	/// Strictly inside the line.
	Middle,
}

impl EndingType {
	fn of(line_len: usize, character: usize) -> Self {
		if line_len == 0 {
			Self::Empty
		} else if character == 0 {
			Self::LineStart
		} else if character == line_len {
			Self::LineEnd
		} else {
			Self::Middle
		}
	}
}

/// How a multi-line range is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RangeMode {
	/// Column-accurate segments.
	Token,
	/// Whole-line bands over `first + start_offset ..= last - end_offset`.
	Line { start_offset: usize, end_offset: usize },
}

impl RangeMode {
	fn of(start: EndingType, end: EndingType) -> Self {
		use EndingType::*;

		const SKIP_FIRST: RangeMode = RangeMode::Line {
			start_offset: 1,
			end_offset: 0,
		};
		const SKIP_LAST: RangeMode = RangeMode::Line {
			start_offset: 0,
			end_offset: 1,
		};

		match (start, end) {
			(Middle, _) | (_, Middle) => Self::Token,
			(Empty | LineEnd, Empty | LineEnd) => SKIP_FIRST,
			(Empty, LineStart) => SKIP_LAST,
			(LineStart, Empty | LineStart) => SKIP_LAST,
			(LineStart, LineEnd) | (LineEnd, LineStart) => Self::Token,
		}
	}
}
