use std::fmt;

use serde::Deserialize;

/// An independently rendered highlight channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HighlightStyle {
	/// General-purpose background highlight.
	Highlight0,
	/// Second general-purpose background highlight.
	Highlight1,
	/// Outline around full scope domains.
	ScopeDomain,
	/// Outline around target content ranges.
	ScopeContent,
	/// Outline around target removal ranges.
	ScopeRemoval,
}

impl HighlightStyle {
	/// Every channel, in declaration order.
	pub const ALL: [Self; 5] = [
		Self::Highlight0,
		Self::Highlight1,
		Self::ScopeDomain,
		Self::ScopeContent,
		Self::ScopeRemoval,
	];

	/// Channels used by scope visualization.
	pub const SCOPE: [Self; 3] = [Self::ScopeDomain, Self::ScopeContent, Self::ScopeRemoval];

	/// Returns the camelCase channel name used in colour keys.
	pub const fn name(self) -> &'static str {
		match self {
			Self::Highlight0 => "highlight0",
			Self::Highlight1 => "highlight1",
			Self::ScopeDomain => "scopeDomain",
			Self::ScopeContent => "scopeContent",
			Self::ScopeRemoval => "scopeRemoval",
		}
	}

	/// Returns true for channels drawn as outlines.
	pub const fn is_outline(self) -> bool {
		matches!(self, Self::ScopeDomain | Self::ScopeContent | Self::ScopeRemoval)
	}
}

impl fmt::Display for HighlightStyle {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}
