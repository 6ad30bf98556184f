//! Live scope visualization.
//!
//! [`ScopeVisualizer`] keeps the scope highlight channels of every visible
//! editor in sync with a [`VisualizationTarget`]. Editor events schedule a
//! trailing-debounced recompute; the controller is a synchronous state machine
//! polled with explicit instants, and [`task::start`] wraps it in a tokio task
//! fed through a [`VisualizerHandle`].

/// Visualizer configuration.
pub mod config;
/// Trailing debounce timer.
pub mod debounce;
/// Visualizer error types.
pub mod error;
/// Host editor seam.
pub mod ide;
/// Scope handler seam.
pub mod scope;
/// Visualization targets.
pub mod target;
/// Async driver task.
pub mod task;
/// The live controller.
pub mod visualizer;

pub use config::VisualizerConfig;
pub use debounce::Debouncer;
pub use error::{ConfigError, VisualizerError};
pub use ide::{Ide, IdeEvent};
pub use scope::{Direction, Scope, ScopeHandler, ScopeHandlerFactory, ScopeIteratorRequirements, Target};
pub use target::{ScopeType, VisualizationTarget, VisualizationType};
pub use task::{VisualizerCommand, VisualizerHandle};
pub use visualizer::ScopeVisualizer;
