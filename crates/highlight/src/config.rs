//! Colours and border metrics for highlight resources.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::style::HighlightStyle;

/// Default colour for solid outline edges.
pub const DEFAULT_SOLID_BORDER: &str = "#ebdeec84";

/// Default colour for porous (dashed) outline edges.
pub const DEFAULT_POROUS_BORDER: &str = "rgba(235, 222, 236, 0.23)";

/// Colour configuration for highlight channels.
///
/// Backgrounds default to a theme colour key derived from the channel name,
/// e.g. `scopeviz.scopeDomainBackground`, and can be overridden per channel.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HighlightColors {
	/// Colour for solid edges.
	pub solid_border: String,
	/// Colour for porous edges.
	pub porous_border: String,
	/// CSS border width.
	pub border_width: String,
	/// CSS radius applied to corners where both adjoining edges are solid.
	pub border_radius: String,
	/// Per-channel background overrides.
	pub backgrounds: BTreeMap<HighlightStyle, String>,
}

impl Default for HighlightColors {
	fn default() -> Self {
		Self {
			solid_border: DEFAULT_SOLID_BORDER.to_string(),
			porous_border: DEFAULT_POROUS_BORDER.to_string(),
			border_width: "1px".to_string(),
			border_radius: "2px".to_string(),
			backgrounds: BTreeMap::new(),
		}
	}
}

impl HighlightColors {
	/// Returns the background colour for a channel.
	pub fn background(&self, style: HighlightStyle) -> String {
		self.backgrounds
			.get(&style)
			.cloned()
			.unwrap_or_else(|| format!("scopeviz.{}Background", style.name()))
	}
}
