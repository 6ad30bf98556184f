use std::sync::Arc;

use scopeviz_highlight::{HighlightError, HighlightStyle};
use scopeviz_primitives::{EditorId, GeneralizedRange, TextEditor};

/// Host notifications that invalidate the current highlights.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdeEvent {
	/// A document was opened.
	DocumentOpened,
	/// A document was closed.
	DocumentClosed,
	/// The set of visible editors changed.
	VisibleEditorsChanged,
	/// A document's contents or state changed.
	DocumentChanged,
}

/// Host editor operations used by the visualizer.
pub trait Ide {
	/// Snapshot of the editors currently visible.
	fn visible_text_editors(&self) -> Vec<Arc<dyn TextEditor>>;

	/// Replaces the ranges of one highlight channel in `editor`.
	fn set_highlight_ranges(&mut self, style: HighlightStyle, editor: &dyn TextEditor, ranges: &[GeneralizedRange]) -> Result<(), HighlightError>;

	/// Drops highlight state held for an editor that is no longer visible.
	fn forget_editor(&mut self, editor: EditorId);

	/// Releases every host resource behind one highlight channel.
	fn release_highlights(&mut self, style: HighlightStyle);
}
