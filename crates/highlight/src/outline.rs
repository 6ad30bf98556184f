//! Outline channel rendering.
//!
//! Every frame is decomposed into differentiated border segments and each
//! `(channel, borders, variant)` bucket is painted by its own cached host
//! resource. Resources are released once no editor uses them.

use std::fmt;

use rustc_hash::{FxHashMap, FxHashSet};
use scopeviz_decoration::{StyleParameters, StyleParametersRanges, get_decoration_ranges};
use scopeviz_primitives::{EditorId, GeneralizedRange, TextEditor};

use crate::backend::DecorationBackend;
use crate::cache::DecorationTypeCache;
use crate::config::HighlightColors;
use crate::error::Result;
use crate::options::outline_options;
use crate::style::HighlightStyle;


/// Cache key for an outline resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DecorationKey {
	/// Channel the resource paints.
	pub style: HighlightStyle,
	/// Border pattern and variant.
	pub parameters: StyleParameters,
}

/// Renderer for one outline channel.
#[derive(Debug)]
pub struct OutlineHighlight<T> {
	style: HighlightStyle,
	decoration_types: DecorationTypeCache<DecorationKey, T>,
	applied: FxHashMap<EditorId, FxHashSet<DecorationKey>>,
}

impl<T: Clone + fmt::Debug> OutlineHighlight<T> {
	/// Creates a renderer for `style`.
	pub fn new(style: HighlightStyle) -> Self {
		Self {
			style,
			decoration_types: DecorationTypeCache::new(),
			applied: FxHashMap::default(),
		}
	}

	/// Returns the channel this renderer paints.
	pub fn style(&self) -> HighlightStyle {
		self.style
	}

	/// Returns the number of live host resources.
	pub fn decoration_type_count(&self) -> usize {
		self.decoration_types.len()
	}

	/// Replaces this channel's ranges in `editor`.
	///
	/// Buckets painted last frame but absent now are set to empty, then
	/// resources unused by every editor are disposed. A malformed range fails
	/// before any host call, leaving the previous frame in place.
	pub fn set_ranges<B>(&mut self, backend: &mut B, colors: &HighlightColors, editor: &dyn TextEditor, ranges: &[GeneralizedRange]) -> Result<()>
	where
		B: DecorationBackend<DecorationType = T>,
	{
		let decoration_ranges = get_decoration_ranges(editor.document(), ranges)?;
		let editor_id = editor.id();

		let previous = self.applied.remove(&editor_id).unwrap_or_default();
		let mut active = FxHashSet::default();
		let result = self.apply(backend, colors, editor_id, &decoration_ranges, &mut active);

		self.clear_keys(backend, editor_id, previous.difference(&active));
		if !active.is_empty() {
			self.applied.insert(editor_id, active);
		}
		self.release_unused(backend);

		tracing::trace!(
			style = self.style.name(),
			editor = %editor_id,
			buckets = decoration_ranges.len(),
			live = self.decoration_types.len(),
			"highlight.outline.set"
		);
		result
	}

	/// Clears this channel in `editor`.
	pub fn clear_editor<B>(&mut self, backend: &mut B, editor: EditorId)
	where
		B: DecorationBackend<DecorationType = T>,
	{
		if let Some(previous) = self.applied.remove(&editor) {
			self.clear_keys(backend, editor, previous.iter());
		}
		self.release_unused(backend);
	}

	/// Drops bookkeeping for an editor that no longer exists.
	pub fn forget_editor<B>(&mut self, backend: &mut B, editor: EditorId)
	where
		B: DecorationBackend<DecorationType = T>,
	{
		self.applied.remove(&editor);
		self.release_unused(backend);
	}

	/// Disposes every resource owned by this channel.
	pub fn dispose<B>(&mut self, backend: &mut B)
	where
		B: DecorationBackend<DecorationType = T>,
	{
		self.applied.clear();
		self.decoration_types.dispose_all(|_, decoration_type| backend.dispose_decoration_type(decoration_type));
	}

	fn apply<B>(
		&mut self,
		backend: &mut B,
		colors: &HighlightColors,
		editor: EditorId,
		decoration_ranges: &[StyleParametersRanges],
		active: &mut FxHashSet<DecorationKey>,
	) -> Result<()>
	where
		B: DecorationBackend<DecorationType = T>,
	{
		for bucket in decoration_ranges {
			let key = DecorationKey {
				style: self.style,
				parameters: bucket.style_parameters,
			};
			let decoration_type = self.decoration_types.resolve(key, |key| {
				tracing::debug!(
					style = key.style.name(),
					borders = ?key.parameters.style,
					index = key.parameters.differentiation_index,
					"highlight.decoration_type.create"
				);
				backend.create_decoration_type(&outline_options(key.style, &key.parameters.style, colors))
			})?;
			backend.set_decorations(editor, decoration_type, &bucket.ranges)?;
			active.insert(key);
		}
		Ok(())
	}

	fn clear_keys<'a, B>(&self, backend: &mut B, editor: EditorId, keys: impl Iterator<Item = &'a DecorationKey>)
	where
		B: DecorationBackend<DecorationType = T>,
	{
		for key in keys {
			let Some(decoration_type) = self.decoration_types.get(key) else {
				continue;
			};
			if let Err(error) = backend.set_decorations(editor, decoration_type, &[]) {
				tracing::warn!(style = self.style.name(), editor = %editor, %error, "highlight.outline.clear_failed");
			}
		}
	}

	fn release_unused<B>(&mut self, backend: &mut B)
	where
		B: DecorationBackend<DecorationType = T>,
	{
		let in_use: FxHashSet<DecorationKey> = self.applied.values().flatten().copied().collect();
		let released = self
			.decoration_types
			.release_unused(&in_use, |_, decoration_type| backend.dispose_decoration_type(decoration_type));
		if released > 0 {
			tracing::debug!(style = self.style.name(), released, "highlight.decoration_type.release");
		}
	}
}
