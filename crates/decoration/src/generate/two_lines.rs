use scopeviz_primitives::CharacterRange;

use super::DecorationBuf;
use crate::borders::Borders;
use crate::types::DecoratedRange;

/// Draws a range spanning exactly two lines.
///
/// When the first line starts at or right of where the second line ends, the
/// lines share no columns and are drawn as two boxes open on the facing side.
/// Otherwise the overlapping columns form one shape: the first line carries
/// the top-left corner and the second line the bottom-right corner.
pub(super) fn handle_two_lines(first: CharacterRange, second: CharacterRange, out: &mut DecorationBuf) {
	let first_start = first.start.character;
	let first_end = first.end.character;
	let first_line = first.start.line;
	let second_line = second.start.line;
	let second_end = second.end.character;

	if first_start >= second_end {
		out.push(DecoratedRange::new(first, Borders::TOP_BOTTOM_LEFT));
		out.push(DecoratedRange::new(second, Borders::TOP_BOTTOM_RIGHT));
		return;
	}

	out.push(DecoratedRange::new(
		CharacterRange::single_line(first_line, first_start, first_end.min(second_end)),
		Borders::TOP_LEFT,
	));

	if first_end > second_end {
		out.push(DecoratedRange::new(
			CharacterRange::single_line(first_line, second_end, first_end),
			Borders::TOP_BOTTOM,
		));
	}

	if first_start > 0 {
		out.push(DecoratedRange::new(
			CharacterRange::single_line(second_line, 0, first_start),
			Borders::TOP_BOTTOM,
		));
	}

	out.push(DecoratedRange::new(
		CharacterRange::single_line(second_line, first_start, second_end),
		Borders::BOTTOM_RIGHT,
	));
}
