use std::fmt;

/// Style of one edge of a decoration rectangle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum BorderStyle {
	/// Dashed edge, drawn with the porous border colour.
	Porous,
	/// Continuous edge.
	Solid,
	/// No edge.
	#[default]
	None,
}

impl BorderStyle {
	/// Returns the CSS keyword for this style.
	pub const fn as_css(self) -> &'static str {
		match self {
			Self::Porous => "dashed",
			Self::Solid => "solid",
			Self::None => "none",
		}
	}

	/// Returns true for a solid edge.
	pub const fn is_solid(self) -> bool {
		matches!(self, Self::Solid)
	}
}

impl fmt::Display for BorderStyle {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_css())
	}
}

/// Border pattern of a decoration rectangle.
///
/// Two decorations with equal `Borders` can share one host resource, so this
/// type is also the grouping key for overlap differentiation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Borders {
	/// Top edge.
	pub top: BorderStyle,
	/// Right edge.
	pub right: BorderStyle,
	/// Bottom edge.
	pub bottom: BorderStyle,
	/// Left edge.
	pub left: BorderStyle,
	/// Render as a full-width line band instead of a character box.
	pub is_whole_line: bool,
}

const fn borders(top: BorderStyle, right: BorderStyle, bottom: BorderStyle, left: BorderStyle) -> Borders {
	Borders {
		top,
		right,
		bottom,
		left,
		is_whole_line: false,
	}
}

use BorderStyle::{None as N, Solid as S};

impl Borders {
	pub const NONE: Self = borders(N, N, N, N);
	pub const TOP: Self = borders(S, N, N, N);
	pub const BOTTOM: Self = borders(N, N, S, N);
	pub const TOP_LEFT: Self = borders(S, N, N, S);
	pub const TOP_BOTTOM: Self = borders(S, N, S, N);
	pub const BOTTOM_RIGHT: Self = borders(N, S, S, N);
	pub const TOP_BOTTOM_LEFT: Self = borders(S, N, S, S);
	pub const TOP_BOTTOM_RIGHT: Self = borders(S, S, S, N);
	pub const FULL: Self = borders(S, S, S, S);

	/// Returns a copy with a different top edge.
	pub const fn with_top(self, top: BorderStyle) -> Self {
		Self { top, ..self }
	}

	/// Returns a copy with a different bottom edge.
	pub const fn with_bottom(self, bottom: BorderStyle) -> Self {
		Self { bottom, ..self }
	}

	/// Returns a copy rendered as a whole-line band.
	pub const fn whole_line(self) -> Self {
		Self {
			is_whole_line: true,
			..self
		}
	}

	/// Returns the edges in CSS order: top, right, bottom, left.
	pub const fn sides(&self) -> [BorderStyle; 4] {
		[self.top, self.right, self.bottom, self.left]
	}
}
