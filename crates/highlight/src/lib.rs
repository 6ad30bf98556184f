//! Highlight rendering on top of host decoration resources.
//!
//! [`Highlights`] routes each [`HighlightStyle`] channel to a renderer:
//! outline channels decompose ranges into border segments and paint them
//! through a [`DecorationTypeCache`] of per-style host resources, background
//! channels paint ranges directly.

/// Background channel renderer.
pub mod background;
/// Host decoration backend seam.
pub mod backend;
/// Keyed host resource pool.
pub mod cache;
/// Colour and border configuration.
pub mod config;
/// Highlight error types.
pub mod error;
/// Channel router.
pub mod highlights;
/// Render options derived from border patterns.
pub mod options;
/// Outline channel renderer.
pub mod outline;
/// Highlight channel identifiers.
pub mod style;

#[cfg(test)]
mod testing;

pub use background::BackgroundHighlight;
pub use backend::DecorationBackend;
pub use cache::DecorationTypeCache;
pub use config::HighlightColors;
pub use error::{HighlightError, Result};
pub use highlights::Highlights;
pub use options::{DecorationRenderOptions, RangeBehavior};
pub use outline::{DecorationKey, OutlineHighlight};
pub use style::HighlightStyle;
