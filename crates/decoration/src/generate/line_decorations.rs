use scopeviz_primitives::{CharacterRange, Position};

use super::DecorationBuf;
use crate::borders::Borders;
use crate::types::DecoratedRange;

/// Draws lines `start_line..=end_line` as whole-line bands.
///
/// The first band carries the top edge and the last band the bottom edge;
/// lines in between collapse into a single border-less band.
pub(super) fn handle_line_decorations(start_line: usize, end_line: usize, out: &mut DecorationBuf) {
	if start_line == end_line {
		out.push(DecoratedRange::new(line_band(start_line, start_line), Borders::TOP_BOTTOM.whole_line()));
		return;
	}

	out.push(DecoratedRange::new(line_band(start_line, start_line), Borders::TOP.whole_line()));

	if end_line - start_line > 1 {
		out.push(DecoratedRange::new(line_band(start_line + 1, end_line - 1), Borders::NONE.whole_line()));
	}

	out.push(DecoratedRange::new(line_band(end_line, end_line), Borders::BOTTOM.whole_line()));
}

fn line_band(first: usize, last: usize) -> CharacterRange {
	CharacterRange::new(Position::new(first, 0), Position::new(last, 0))
}
