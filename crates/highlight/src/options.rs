//! Render options for decoration types.

use scopeviz_decoration::{BorderStyle, Borders};

use crate::config::HighlightColors;
use crate::style::HighlightStyle;

/// How a decoration grows when text is inserted at its edges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RangeBehavior {
	/// Grows at both edges.
	OpenOpen,
	/// Grows at neither edge.
	#[default]
	ClosedClosed,
	/// Grows at the start only.
	OpenClosed,
	/// Grows at the end only.
	ClosedOpen,
}

/// Render options for one host decoration type.
///
/// Border fields use CSS shorthand in top, right, bottom, left order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DecorationRenderOptions {
	/// Background colour or theme colour key.
	pub background_color: String,
	/// Per-side border colours.
	pub border_color: Option<String>,
	/// Per-side border styles.
	pub border_style: Option<String>,
	/// Border width.
	pub border_width: Option<String>,
	/// Per-corner radii in top-left, top-right, bottom-right, bottom-left order.
	pub border_radius: Option<String>,
	/// Paint the full width of each covered line.
	pub is_whole_line: bool,
	/// Edge growth on insertion.
	pub range_behavior: RangeBehavior,
}

/// Builds the options for an outline segment drawn with `borders`.
pub fn outline_options(style: HighlightStyle, borders: &Borders, colors: &HighlightColors) -> DecorationRenderOptions {
	let sides = borders.sides();

	let border_style = sides.map(BorderStyle::as_css).join(" ");
	let border_color = sides
		.map(|side| match side {
			BorderStyle::Solid => colors.solid_border.as_str(),
			BorderStyle::Porous | BorderStyle::None => colors.porous_border.as_str(),
		})
		.join(" ");

	let [top, right, bottom, left] = sides.map(BorderStyle::is_solid);
	let corner = |a: bool, b: bool| if a && b { colors.border_radius.as_str() } else { "0px" };
	let border_radius = [corner(top, left), corner(top, right), corner(bottom, right), corner(bottom, left)].join(" ");

	DecorationRenderOptions {
		background_color: colors.background(style),
		border_color: Some(border_color),
		border_style: Some(border_style),
		border_width: Some(colors.border_width.clone()),
		border_radius: Some(border_radius),
		is_whole_line: borders.is_whole_line,
		range_behavior: RangeBehavior::ClosedClosed,
	}
}

/// Builds the options for a borderless background channel.
pub fn background_options(style: HighlightStyle, colors: &HighlightColors, is_whole_line: bool) -> DecorationRenderOptions {
	DecorationRenderOptions {
		background_color: colors.background(style),
		border_color: None,
		border_style: None,
		border_width: None,
		border_radius: None,
		is_whole_line,
		range_behavior: RangeBehavior::ClosedClosed,
	}
}
