use rustc_hash::FxHashMap;
use scopeviz_primitives::{EditorId, GeneralizedRange, TextEditor};

use crate::background::BackgroundHighlight;
use crate::backend::DecorationBackend;
use crate::config::HighlightColors;
use crate::error::{HighlightError, Result};
use crate::outline::OutlineHighlight;
use crate::style::HighlightStyle;

enum Channel<T> {
	Background(BackgroundHighlight<T>),
	Outline(OutlineHighlight<T>),
}

/// Routes highlight channels to their renderers over one backend.
///
/// Background channels allocate their resources up front; outline channels
/// allocate lazily per border pattern.
pub struct Highlights<B: DecorationBackend> {
	backend: B,
	colors: HighlightColors,
	channels: FxHashMap<HighlightStyle, Channel<B::DecorationType>>,
}

impl<B: DecorationBackend> Highlights<B> {
	/// Creates renderers for every channel.
	///
	/// If a background resource cannot be allocated, everything allocated so
	/// far is disposed again.
	pub fn new(backend: B, colors: HighlightColors) -> Result<Self> {
		let mut highlights = Self {
			backend,
			colors,
			channels: FxHashMap::default(),
		};

		for style in HighlightStyle::ALL {
			let channel = if style.is_outline() {
				Channel::Outline(OutlineHighlight::new(style))
			} else {
				match BackgroundHighlight::new(&mut highlights.backend, style, &highlights.colors) {
					Ok(background) => Channel::Background(background),
					Err(error) => {
						highlights.dispose();
						return Err(error);
					}
				}
			};
			highlights.channels.insert(style, channel);
		}

		Ok(highlights)
	}

	/// Replaces the ranges of one channel in `editor`.
	pub fn set_highlight_ranges(&mut self, style: HighlightStyle, editor: &dyn TextEditor, ranges: &[GeneralizedRange]) -> Result<()> {
		let Some(channel) = self.channels.get_mut(&style) else {
			return Err(HighlightError::Disposed(style));
		};
		match channel {
			Channel::Background(background) => background.set_ranges(&mut self.backend, editor.id(), ranges),
			Channel::Outline(outline) => outline.set_ranges(&mut self.backend, &self.colors, editor, ranges),
		}
	}

	/// Clears every channel in `editor`.
	///
	/// Every channel is attempted; the first failure is returned.
	pub fn clear_editor(&mut self, editor: EditorId) -> Result<()> {
		let mut result = Ok(());
		for channel in self.channels.values_mut() {
			match channel {
				Channel::Background(background) => {
					if let Err(error) = background.clear_editor(&mut self.backend, editor) {
						result = result.and(Err(error));
					}
				}
				Channel::Outline(outline) => outline.clear_editor(&mut self.backend, editor),
			}
		}
		result
	}

	/// Drops bookkeeping for a closed editor and releases resources only it used.
	pub fn forget_editor(&mut self, editor: EditorId) {
		for channel in self.channels.values_mut() {
			if let Channel::Outline(outline) = channel {
				outline.forget_editor(&mut self.backend, editor);
			}
		}
	}

	/// Releases every resource of an outline channel in all editors.
	///
	/// The channel stays usable and allocates again on its next frame.
	/// Background channels keep their fixed pair until [`dispose`](Self::dispose).
	pub fn release_channel(&mut self, style: HighlightStyle) {
		if let Some(Channel::Outline(outline)) = self.channels.get_mut(&style) {
			outline.dispose(&mut self.backend);
			tracing::debug!(style = style.name(), "highlight.release_channel");
		}
	}

	/// Disposes every host resource. Later calls to
	/// [`set_highlight_ranges`](Self::set_highlight_ranges) fail with
	/// [`HighlightError::Disposed`].
	pub fn dispose(&mut self) {
		for (_, channel) in self.channels.drain() {
			match channel {
				Channel::Background(background) => background.dispose(&mut self.backend),
				Channel::Outline(mut outline) => outline.dispose(&mut self.backend),
			}
		}
		tracing::debug!("highlight.dispose");
	}

	/// Returns true once [`dispose`](Self::dispose) has run.
	pub fn is_disposed(&self) -> bool {
		self.channels.is_empty()
	}

	/// Returns the backend.
	pub fn backend(&self) -> &B {
		&self.backend
	}
}
