use pretty_assertions::assert_eq;
use proptest::prelude::*;
use scopeviz_primitives::{Document, RangeError};

use crate::borders::BorderStyle;

use super::*;

/// Builds a document whose lines have the given lengths.
fn doc(line_lens: &[usize]) -> Document {
	let text = line_lens.iter().map(|&len| "x".repeat(len)).collect::<Vec<_>>().join("\n");
	Document::new(&text, "plaintext")
}

fn range(start: (usize, usize), end: (usize, usize)) -> CharacterRange {
	CharacterRange::new(Position::new(start.0, start.1), Position::new(end.0, end.1))
}

fn seg(line: usize, start: usize, end: usize, style: Borders) -> DecoratedRange {
	DecoratedRange::new(CharacterRange::single_line(line, start, end), style)
}

fn decorate(doc: &Document, range: CharacterRange) -> Vec<DecoratedRange> {
	generate_decorations_for_range(doc, &range).unwrap().collect()
}

#[test]
fn test_single_line_range_is_one_full_box() {
	let doc = doc(&[12, 12, 12]);
	assert_eq!(decorate(&doc, range((2, 4), (2, 10))), vec![seg(2, 4, 10, Borders::FULL)]);
}

#[test]
fn test_point_on_empty_line_is_visible() {
	let doc = doc(&[3, 0, 3]);
	assert_eq!(decorate(&doc, range((1, 0), (1, 0))), vec![seg(1, 0, 0, Borders::FULL)]);
}

#[test]
fn test_two_lines_without_shared_columns() {
	let doc = doc(&[4, 10, 8]);
	assert_eq!(
		decorate(&doc, range((1, 5), (2, 3))),
		vec![seg(1, 5, 10, Borders::TOP_BOTTOM_LEFT), seg(2, 0, 3, Borders::TOP_BOTTOM_RIGHT)]
	);
}

#[test]
fn test_two_lines_with_shared_columns() {
	let doc = doc(&[10, 8]);
	assert_eq!(
		decorate(&doc, range((0, 2), (1, 6))),
		vec![
			seg(0, 2, 6, Borders::TOP_LEFT),
			seg(0, 6, 10, Borders::TOP_BOTTOM),
			seg(1, 0, 2, Borders::TOP_BOTTOM),
			seg(1, 2, 6, Borders::BOTTOM_RIGHT),
		]
	);
}

#[test]
fn test_two_lines_second_line_longer() {
	let doc = doc(&[6, 9]);
	assert_eq!(
		decorate(&doc, range((0, 3), (1, 8))),
		vec![
			seg(0, 3, 6, Borders::TOP_LEFT),
			seg(1, 0, 3, Borders::TOP_BOTTOM),
			seg(1, 3, 8, Borders::BOTTOM_RIGHT),
		]
	);
}

#[test]
fn test_full_lines_from_line_start_to_line_end_stay_token_shaped() {
	let doc = doc(&[5, 4]);
	assert_eq!(
		decorate(&doc, range((0, 0), (1, 4))),
		vec![
			seg(0, 0, 4, Borders::TOP_LEFT),
			seg(0, 4, 5, Borders::TOP_BOTTOM),
			seg(1, 0, 4, Borders::BOTTOM_RIGHT),
		]
	);
}

#[test]
fn test_three_lines_middle_line_cut_at_critical_columns() {
	let doc = doc(&[10, 4, 7]);
	assert_eq!(
		decorate(&doc, range((0, 3), (2, 5))),
		vec![
			seg(0, 3, 10, Borders::TOP_LEFT),
			seg(1, 0, 3, Borders::TOP),
			seg(1, 3, 4, Borders::NONE),
			seg(2, 0, 5, Borders::BOTTOM_RIGHT),
		]
	);
}

#[test]
fn test_three_lines_middle_line_exposed_above_and_below() {
	let doc = doc(&[10, 12, 2]);
	assert_eq!(
		decorate(&doc, range((0, 6), (2, 1))),
		vec![
			seg(0, 6, 10, Borders::TOP_LEFT),
			seg(1, 0, 1, Borders::TOP),
			seg(1, 1, 6, Borders::TOP_BOTTOM),
			seg(1, 6, 12, Borders::BOTTOM),
			seg(2, 0, 1, Borders::BOTTOM_RIGHT),
		]
	);
}

#[test]
fn test_many_lines_collapse_interior_into_filler() {
	let doc = doc(&[8, 3, 9, 6, 4]);
	assert_eq!(
		decorate(&doc, range((0, 5), (4, 2))),
		vec![
			seg(0, 5, 8, Borders::TOP_LEFT),
			seg(1, 0, 5, Borders::TOP),
			DecoratedRange::new(range((1, 5), (3, 2)), Borders::NONE),
			seg(3, 2, 6, Borders::BOTTOM),
			seg(4, 0, 2, Borders::BOTTOM_RIGHT),
		]
	);
}

#[test]
fn test_many_lines_without_strips() {
	let doc = doc(&[8, 8, 8, 3, 5]);
	assert_eq!(
		decorate(&doc, range((0, 0), (4, 4))),
		vec![
			seg(0, 0, 8, Borders::TOP_LEFT),
			DecoratedRange::new(range((1, 0), (3, 3)), Borders::NONE),
			seg(4, 0, 4, Borders::BOTTOM_RIGHT),
		]
	);
}

#[test]
fn test_line_end_to_line_end_draws_whole_lines() {
	let doc = doc(&[5, 4, 4, 6]);
	assert_eq!(
		decorate(&doc, range((0, 5), (2, 4))),
		vec![seg(1, 0, 0, Borders::TOP.whole_line()), seg(2, 0, 0, Borders::BOTTOM.whole_line())]
	);
}

#[test]
fn test_line_start_to_line_start_drops_last_line() {
	let doc = doc(&[5, 4, 4, 6]);
	assert_eq!(
		decorate(&doc, range((0, 0), (3, 0))),
		vec![
			seg(0, 0, 0, Borders::TOP.whole_line()),
			seg(1, 0, 0, Borders::NONE.whole_line()),
			seg(2, 0, 0, Borders::BOTTOM.whole_line()),
		]
	);
}

#[test]
fn test_empty_start_line_is_skipped() {
	let doc = doc(&[0, 3, 3]);
	assert_eq!(
		decorate(&doc, range((0, 0), (2, 3))),
		vec![seg(1, 0, 0, Borders::TOP.whole_line()), seg(2, 0, 0, Borders::BOTTOM.whole_line())]
	);
}

#[test]
fn test_line_end_to_next_line_end_is_single_band() {
	let doc = doc(&[5, 4]);
	assert_eq!(decorate(&doc, range((0, 5), (1, 4))), vec![seg(1, 0, 0, Borders::TOP_BOTTOM.whole_line())]);
}

#[test]
fn test_line_end_to_line_start_stays_token_shaped() {
	let doc = doc(&[5, 4]);
	assert_eq!(
		decorate(&doc, range((0, 5), (1, 0))),
		vec![seg(0, 5, 5, Borders::TOP_BOTTOM_LEFT), seg(1, 0, 0, Borders::TOP_BOTTOM_RIGHT)]
	);
}

#[test]
fn test_line_range_bands() {
	let bands: Vec<_> = generate_decorations_for_line_range(&LineRange::new(2, 6)).unwrap().collect();
	assert_eq!(
		bands,
		vec![
			seg(2, 0, 0, Borders::TOP.whole_line()),
			DecoratedRange::new(range((3, 0), (4, 0)), Borders::NONE.whole_line()),
			seg(5, 0, 0, Borders::BOTTOM.whole_line()),
		]
	);
}

#[test]
fn test_single_line_range_band_has_top_and_bottom() {
	let bands: Vec<_> = generate_decorations_for_line_range(&LineRange::new(4, 5)).unwrap().collect();
	assert_eq!(bands, vec![seg(4, 0, 0, Borders::TOP_BOTTOM.whole_line())]);
}

#[test]
fn test_two_line_range_bands_have_no_filler() {
	let bands: Vec<_> = generate_decorations_for_line_range(&LineRange::new(0, 2)).unwrap().collect();
	assert_eq!(
		bands,
		vec![seg(0, 0, 0, Borders::TOP.whole_line()), seg(1, 0, 0, Borders::BOTTOM.whole_line())]
	);
}

#[test]
fn test_empty_line_range_yields_nothing() {
	assert_eq!(generate_decorations_for_line_range(&LineRange::new(3, 3)).unwrap().count(), 0);
}

#[test]
fn test_generalized_line_range_skips_document_lookup() {
	let doc = doc(&[1]);
	let bands: Vec<_> = generate_decorations(&doc, &GeneralizedRange::Line(LineRange::new(10, 11))).unwrap().collect();
	assert_eq!(bands, vec![seg(10, 0, 0, Borders::TOP_BOTTOM.whole_line())]);
}

#[test]
fn test_rejects_inverted_range() {
	let doc = doc(&[5, 5]);
	let err = generate_decorations_for_range(&doc, &range((1, 2), (0, 4))).unwrap_err();
	assert!(matches!(err, DecorationError::Range(RangeError::Inverted { .. })));
}

#[test]
fn test_rejects_inverted_line_range() {
	let err = generate_decorations_for_line_range(&LineRange::new(4, 2)).unwrap_err();
	assert_eq!(err, DecorationError::Range(RangeError::InvertedLines { start: 4, end: 2 }));
}

#[test]
fn test_rejects_line_outside_document() {
	let doc = doc(&[5, 5]);
	let err = generate_decorations_for_range(&doc, &range((0, 1), (2, 0))).unwrap_err();
	assert_eq!(err, DecorationError::LineOutOfBounds { line: 2, line_count: 2 });
}

#[test]
fn test_rejects_column_past_line_end() {
	let doc = doc(&[5, 5]);
	let err = generate_decorations_for_range(&doc, &range((0, 6), (1, 0))).unwrap_err();
	assert_eq!(
		err,
		DecorationError::ColumnOutOfBounds {
			line: 0,
			character: 6,
			len: 5,
		}
	);
}

/// Column interval `[start, end)` occupied by a segment on one line.
#[derive(Debug, Clone, Copy)]
struct Cell {
	line: usize,
	start: usize,
	end: usize,
	style: Borders,
}

/// Expands segments into per-line cells, the way a host paints them.
fn cells(doc: &Document, segments: &[DecoratedRange]) -> Vec<Cell> {
	let mut out = Vec::new();
	for &DecoratedRange { range, style } in segments {
		for line in range.start.line..=range.end.line {
			let (start, end) = if style.is_whole_line {
				(0, usize::MAX)
			} else {
				let len = doc.line_len(line).unwrap_or(0);
				let start = if line == range.start.line { range.start.character } else { 0 };
				let end = if line == range.end.line { range.end.character } else { len.max(start) };
				(start, end)
			};
			out.push(Cell { line, start, end, style });
		}
	}
	out
}

fn arb_doc_and_range() -> impl Strategy<Value = (Vec<usize>, CharacterRange)> {
	prop::collection::vec(0usize..12, 1..8).prop_flat_map(|lens| {
		let n = lens.len();
		let lens_a = lens.clone();
		let lens_b = lens.clone();
		let pos_a = (0..n).prop_flat_map(move |line| (Just(line), 0..=lens_a[line]));
		let pos_b = (0..n).prop_flat_map(move |line| (Just(line), 0..=lens_b[line]));
		(Just(lens), pos_a, pos_b).prop_map(|(lens, a, b)| {
			let a = Position::new(a.0, a.1);
			let b = Position::new(b.0, b.1);
			(lens, CharacterRange::new(a.min(b), a.max(b)))
		})
	})
}

proptest! {
	/// Single-line ranges always produce one fully boxed segment.
	#[test]
	fn prop_single_line_is_full_box((lens, range) in arb_doc_and_range()) {
		let doc = doc(&lens);
		let single = CharacterRange::new(range.start, Position::new(range.start.line, range.start.character.max(range.end.character.min(lens[range.start.line]))));
		let segments = decorate(&doc, single);
		prop_assert_eq!(segments, vec![DecoratedRange::new(single, Borders::FULL)]);
	}

	/// Segments stay within the lines of the input range and never exceed five.
	#[test]
	fn prop_segments_stay_within_range_lines((lens, range) in arb_doc_and_range()) {
		let doc = doc(&lens);
		let segments = decorate(&doc, range);
		prop_assert!(!segments.is_empty());
		prop_assert!(segments.len() <= MAX_SEGMENTS);
		for seg in &segments {
			prop_assert!(seg.range.start.line >= range.start.line);
			prop_assert!(seg.range.end.line <= range.end.line);
			prop_assert!(seg.range.start <= seg.range.end);
		}
	}

	/// Every character inside the range is painted by some segment.
	#[test]
	fn prop_segments_cover_range((lens, range) in arb_doc_and_range()) {
		let doc = doc(&lens);
		let segments = decorate(&doc, range);
		for line in range.start.line..=range.end.line {
			for character in 0..lens[line] {
				let pos = Position::new(line, character);
				if !range.contains(pos) {
					continue;
				}
				let covered = segments.iter().any(|seg| {
					if seg.style.is_whole_line {
						(seg.range.start.line..=seg.range.end.line).contains(&line)
					} else {
						seg.range.contains(pos)
					}
				});
				prop_assert!(covered, "{pos} not covered by {segments:?}");
			}
		}
	}

	/// Segments meeting on a line leave both facing edges open.
	#[test]
	fn prop_horizontal_seams_are_open((lens, range) in arb_doc_and_range()) {
		let doc = doc(&lens);
		let segments = decorate(&doc, range);
		for a in segments.iter().filter(|s| !s.style.is_whole_line && !s.range.is_empty()) {
			for b in segments.iter().filter(|s| !s.style.is_whole_line && !s.range.is_empty()) {
				if a.range.end == b.range.start {
					prop_assert_eq!(a.style.right, BorderStyle::None, "{:?} -> {:?}", a, b);
					prop_assert_eq!(b.style.left, BorderStyle::None, "{:?} -> {:?}", a, b);
				}
			}
		}
	}

	/// Cells stacked on adjacent lines agree on the edge they share.
	#[test]
	fn prop_vertical_seams_match((lens, range) in arb_doc_and_range()) {
		let doc = doc(&lens);
		let segments = decorate(&doc, range);
		let cells = cells(&doc, &segments);
		for upper in &cells {
			for lower in cells.iter().filter(|c| c.line == upper.line + 1) {
				let shares_columns = upper.start < lower.end && lower.start < upper.end;
				if shares_columns {
					prop_assert_eq!(upper.style.bottom, lower.style.top, "{:?} over {:?}", upper, lower);
				}
			}
		}
	}

	/// Column-accurate segments never paint the same character twice.
	#[test]
	fn prop_token_segments_are_disjoint((lens, range) in arb_doc_and_range()) {
		let doc = doc(&lens);
		let segments: Vec<_> = decorate(&doc, range).into_iter().filter(|s| !s.style.is_whole_line).collect();
		for (i, a) in segments.iter().enumerate() {
			for b in &segments[i + 1..] {
				prop_assert!(a.range.end <= b.range.start || b.range.end <= a.range.start, "{:?} overlaps {:?}", a, b);
			}
		}
	}
}
