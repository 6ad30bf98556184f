use std::fmt;

use scopeviz_primitives::{CharacterRange, EditorId};

use crate::error::Result;
use crate::options::DecorationRenderOptions;

/// Host operations needed to paint highlights.
///
/// A decoration type is a host resource carrying fixed render options.
/// Setting its ranges for an editor replaces whatever that type previously
/// painted there; disposing it removes its paint from every editor.
pub trait DecorationBackend {
	/// Host handle for a decoration type.
	type DecorationType: Clone + fmt::Debug;

	/// Allocates a decoration type.
	fn create_decoration_type(&mut self, options: &DecorationRenderOptions) -> Result<Self::DecorationType>;

	/// Replaces the ranges painted by `decoration_type` in `editor`.
	fn set_decorations(&mut self, editor: EditorId, decoration_type: &Self::DecorationType, ranges: &[CharacterRange]) -> Result<()>;

	/// Releases a decoration type.
	fn dispose_decoration_type(&mut self, decoration_type: Self::DecorationType);
}
