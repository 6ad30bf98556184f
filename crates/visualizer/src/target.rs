use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::VisualizerError;

/// Identifier of a kind of scope, resolved by a scope handler factory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct ScopeType(String);

impl ScopeType {
	/// Creates a scope type identifier.
	pub fn new(name: impl Into<String>) -> Self {
		Self(name.into())
	}

	/// Returns the identifier.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for ScopeType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

/// Which sub-range of each target is shown alongside the domains.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisualizationType {
	/// Domains only.
	#[default]
	Standard,
	/// Domains plus target content ranges.
	Content,
	/// Domains plus target removal ranges.
	Removal,
}

impl VisualizationType {
	/// Returns the lowercase name.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Standard => "standard",
			Self::Content => "content",
			Self::Removal => "removal",
		}
	}
}

impl fmt::Display for VisualizationType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for VisualizationType {
	type Err = VisualizerError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"standard" => Ok(Self::Standard),
			"content" => Ok(Self::Content),
			"removal" => Ok(Self::Removal),
			other => Err(VisualizerError::UnknownVisualizationType(other.to_string())),
		}
	}
}

/// What to visualize: a scope type and how to show its targets.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VisualizationTarget {
	/// Scope type to enumerate.
	pub scope_type: ScopeType,
	/// Which target ranges to show.
	#[serde(default)]
	pub visualization_type: VisualizationType,
}

impl VisualizationTarget {
	/// Creates a target.
	pub fn new(scope_type: ScopeType, visualization_type: VisualizationType) -> Self {
		Self {
			scope_type,
			visualization_type,
		}
	}
}
