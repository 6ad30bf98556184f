//! Scope handler seam.
//!
//! Scope discovery lives outside this crate. A [`ScopeHandlerFactory`] maps
//! a scope type and language to a [`ScopeHandler`], which enumerates
//! [`Scope`]s from a position; each scope exposes its domain and the
//! [`Target`]s it yields.

use scopeviz_primitives::{CharacterRange, Position, TextEditor};

use crate::target::ScopeType;

/// Iteration direction for scope enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
	/// Towards the document end.
	Forward,
	/// Towards the document start.
	Backward,
}

/// Constraints on scope enumeration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScopeIteratorRequirements {
	/// Also yield scopes nested inside other yielded scopes.
	pub include_descendant_scopes: bool,
}

/// A highlightable range derived from a scope.
pub trait Target {
	/// The target's content.
	fn content_range(&self) -> CharacterRange;

	/// True if the target addresses whole lines.
	fn is_line(&self) -> bool;

	/// Range that removing this target would delete.
	fn removal_highlight_range(&self) -> CharacterRange;
}

/// A semantically meaningful span of text.
pub trait Scope {
	/// Full span of the scope.
	fn domain(&self) -> CharacterRange;

	/// Targets derived from the scope.
	fn get_targets(&self, is_reversed: bool) -> Vec<Box<dyn Target>>;
}

/// Enumerates scopes of one type in a document.
pub trait ScopeHandler {
	/// Yields scopes starting at `position` in `direction`.
	fn generate_scopes<'a>(
		&'a self,
		editor: &'a dyn TextEditor,
		position: Position,
		direction: Direction,
		requirements: ScopeIteratorRequirements,
	) -> Box<dyn Iterator<Item = Box<dyn Scope>> + 'a>;
}

/// Resolves scope handlers.
pub trait ScopeHandlerFactory {
	/// Returns a handler for `scope_type` in `language_id`, if one exists.
	fn create(&self, scope_type: &ScopeType, language_id: &str) -> Option<Box<dyn ScopeHandler>>;
}
