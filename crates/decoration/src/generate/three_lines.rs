use scopeviz_primitives::CharacterRange;

use super::DecorationBuf;
use crate::borders::{BorderStyle, Borders};
use crate::types::DecoratedRange;

/// Draws a range spanning exactly three lines.
pub(super) fn handle_three_lines(first: CharacterRange, second: CharacterRange, third: CharacterRange, out: &mut DecorationBuf) {
	out.push(DecoratedRange::new(first, Borders::TOP_LEFT));

	handle_second_line(
		second.start.line,
		first.start.character,
		second.end.character,
		third.end.character,
		out,
	);

	out.push(DecoratedRange::new(third, Borders::BOTTOM_RIGHT));
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Event {
	FirstLineStart,
	SecondLineEnd,
	ThirdLineEnd,
}

/// Cuts the middle line into bands at the critical columns.
///
/// Bands left of the first line's start are exposed above, bands right of the
/// third line's end are exposed below.
fn handle_second_line(line: usize, first_line_start: usize, second_line_end: usize, third_line_end: usize, out: &mut DecorationBuf) {
	let mut events = [
		(first_line_start, Event::FirstLineStart),
		(second_line_end, Event::SecondLineEnd),
		(third_line_end, Event::ThirdLineEnd),
	];
	// Stable, so ties keep the order above.
	events.sort_by_key(|&(offset, _)| offset);

	let mut current = Borders::TOP;
	let mut current_offset = 0;

	for (offset, event) in events {
		if offset > current_offset {
			out.push(DecoratedRange::new(
				CharacterRange::single_line(line, current_offset, offset),
				current,
			));
		}

		match event {
			Event::FirstLineStart => current = current.with_top(BorderStyle::None),
			Event::SecondLineEnd => return,
			Event::ThirdLineEnd => current = current.with_bottom(BorderStyle::Solid),
		}

		current_offset = offset;
	}
}
