use scopeviz_primitives::{CharacterRange, Position};

use super::DecorationBuf;
use crate::borders::Borders;
use crate::types::DecoratedRange;

/// Draws a range spanning four or more lines.
///
/// Interior lines collapse into one border-less filler. Short strips on the
/// second and second-to-last lines extend the top and bottom edges where the
/// boundary lines do not cover those columns.
pub(super) fn handle_many_lines(
	first: CharacterRange,
	second_line: usize,
	second_last: CharacterRange,
	last: CharacterRange,
	out: &mut DecorationBuf,
) {
	let first_start = first.start.character;
	let second_last_line = second_last.start.line;
	let second_last_end = second_last.end.character;
	let last_end = last.end.character;

	out.push(DecoratedRange::new(first, Borders::TOP_LEFT));

	if first_start > 0 {
		out.push(DecoratedRange::new(
			CharacterRange::single_line(second_line, 0, first_start),
			Borders::TOP,
		));
	}

	out.push(DecoratedRange::new(
		CharacterRange::new(
			Position::new(second_line, first_start),
			Position::new(second_last_line, second_last_end.min(last_end)),
		),
		Borders::NONE,
	));

	if second_last_end > last_end {
		out.push(DecoratedRange::new(
			CharacterRange::single_line(second_last_line, last_end, second_last_end),
			Borders::BOTTOM,
		));
	}

	out.push(DecoratedRange::new(last, Borders::BOTTOM_RIGHT));
}
