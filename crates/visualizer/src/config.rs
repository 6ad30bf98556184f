//! Visualizer configuration.

use std::path::Path;
use std::time::Duration;

use scopeviz_highlight::HighlightColors;
use serde::Deserialize;

use crate::debounce::DEFAULT_DEBOUNCE;
use crate::error::ConfigError;

/// Settings for a [`ScopeVisualizer`](crate::ScopeVisualizer).
///
/// ```toml
/// debounce_delay_ms = 80
///
/// [colors]
/// solid_border = "#ffffffaa"
///
/// [colors.backgrounds]
/// scopeDomain = "#00000010"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VisualizerConfig {
	/// Delay between the last event and a recompute, in milliseconds.
	pub debounce_delay_ms: u64,
	/// Highlight colours.
	pub colors: HighlightColors,
}

impl Default for VisualizerConfig {
	fn default() -> Self {
		Self {
			debounce_delay_ms: DEFAULT_DEBOUNCE.as_millis() as u64,
			colors: HighlightColors::default(),
		}
	}
}

impl VisualizerConfig {
	/// Parses a TOML document.
	pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
		Ok(toml::from_str(input)?)
	}

	/// Reads and parses a TOML file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
		let path = path.as_ref();
		let input = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		let config = Self::from_toml_str(&input)?;
		tracing::debug!(path = %path.display(), debounce_ms = config.debounce_delay_ms, "visualizer.config.load");
		Ok(config)
	}

	/// Returns the debounce delay.
	pub fn debounce_delay(&self) -> Duration {
		Duration::from_millis(self.debounce_delay_ms)
	}
}
