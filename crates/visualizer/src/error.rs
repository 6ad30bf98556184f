//! Error types for the visualizer.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error reading a configuration file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// Error parsing TOML.
	#[error("TOML parse error: {0}")]
	Parse(#[from] toml::de::Error),
}

/// Errors raised by the visualizer surface.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VisualizerError {
	/// The driver task has stopped.
	#[error("visualizer task has stopped")]
	Closed,

	/// A visualization type name was not recognised.
	#[error("unknown visualization type: {0} (expected 'standard', 'content' or 'removal')")]
	UnknownVisualizationType(String),
}
