use scopeviz_decoration::DecorationError;
use scopeviz_primitives::{CharacterRange, EditorId, GeneralizedRange, LineRange, Position, partition_ranges};

use crate::backend::DecorationBackend;
use crate::config::HighlightColors;
use crate::error::Result;
use crate::options::background_options;
use crate::style::HighlightStyle;

/// Renderer for a flat background channel.
///
/// Holds two host resources: one for character ranges and one painting
/// whole lines.
#[derive(Debug)]
pub struct BackgroundHighlight<T> {
	style: HighlightStyle,
	token_type: T,
	line_type: T,
}

impl<T: Clone + std::fmt::Debug> BackgroundHighlight<T> {
	/// Allocates the channel's host resources.
	pub fn new<B>(backend: &mut B, style: HighlightStyle, colors: &HighlightColors) -> Result<Self>
	where
		B: DecorationBackend<DecorationType = T>,
	{
		let token_type = backend.create_decoration_type(&background_options(style, colors, false))?;
		let line_type = match backend.create_decoration_type(&background_options(style, colors, true)) {
			Ok(line_type) => line_type,
			Err(error) => {
				backend.dispose_decoration_type(token_type);
				return Err(error);
			}
		};
		Ok(Self {
			style,
			token_type,
			line_type,
		})
	}

	/// Returns the channel this renderer paints.
	pub fn style(&self) -> HighlightStyle {
		self.style
	}

	/// Replaces this channel's ranges in `editor`.
	///
	/// Line ranges paint from column zero of their first line to column zero
	/// of their last line on the whole-line resource.
	pub fn set_ranges<B>(&self, backend: &mut B, editor: EditorId, ranges: &[GeneralizedRange]) -> Result<()>
	where
		B: DecorationBackend<DecorationType = T>,
	{
		for range in ranges {
			range.validate().map_err(DecorationError::from)?;
		}

		let (lines, characters) = partition_ranges(ranges);
		let lines: Vec<CharacterRange> = lines.iter().filter_map(line_band).collect();

		backend.set_decorations(editor, &self.token_type, &characters)?;
		backend.set_decorations(editor, &self.line_type, &lines)
	}

	/// Clears this channel in `editor`.
	pub fn clear_editor<B>(&self, backend: &mut B, editor: EditorId) -> Result<()>
	where
		B: DecorationBackend<DecorationType = T>,
	{
		self.set_ranges(backend, editor, &[])
	}

	/// Releases the channel's host resources.
	pub fn dispose<B>(self, backend: &mut B)
	where
		B: DecorationBackend<DecorationType = T>,
	{
		backend.dispose_decoration_type(self.token_type);
		backend.dispose_decoration_type(self.line_type);
	}
}

fn line_band(range: &LineRange) -> Option<CharacterRange> {
	let last = range.last_line()?;
	Some(CharacterRange::new(Position::new(range.start, 0), Position::new(last, 0)))
}
