//! Async driver for [`ScopeVisualizer`].
//!
//! The driver owns the visualizer and runs each recompute inline, so
//! recomputes never overlap and none can start after disposal. Commands
//! arrive over an unbounded channel from any number of [`VisualizerHandle`]s.

use std::future::Future;
use std::time::Instant;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::error::VisualizerError;
use crate::ide::{Ide, IdeEvent};
use crate::scope::ScopeHandlerFactory;
use crate::target::VisualizationTarget;
use crate::visualizer::ScopeVisualizer;

/// Messages accepted by the driver task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VisualizerCommand {
	/// Replace the target.
	SetTarget(Option<VisualizationTarget>),
	/// Forward a host event.
	Event(IdeEvent),
}

/// Cloneable handle to a running driver task.
#[derive(Debug, Clone)]
pub struct VisualizerHandle {
	tx: mpsc::UnboundedSender<VisualizerCommand>,
	cancel: CancellationToken,
}

impl VisualizerHandle {
	/// Replaces the target.
	pub fn set_target(&self, target: Option<VisualizationTarget>) -> Result<(), VisualizerError> {
		self.send(VisualizerCommand::SetTarget(target))
	}

	/// Forwards a host event.
	pub fn notify(&self, event: IdeEvent) -> Result<(), VisualizerError> {
		self.send(VisualizerCommand::Event(event))
	}

	/// Sends a command to the driver.
	pub fn send(&self, command: VisualizerCommand) -> Result<(), VisualizerError> {
		if self.cancel.is_cancelled() {
			return Err(VisualizerError::Closed);
		}
		self.tx.send(command).map_err(|_| VisualizerError::Closed)
	}

	/// Stops the driver, which disposes the visualizer.
	pub fn dispose(&self) {
		self.cancel.cancel();
	}

	/// Returns true once disposal was requested.
	pub fn is_disposed(&self) -> bool {
		self.cancel.is_cancelled()
	}
}

/// Creates a driver for `visualizer`.
///
/// The returned future must be polled (spawned or awaited) for the
/// visualizer to run. It resolves to the disposed visualizer once the handle
/// is disposed or every handle has been dropped.
pub fn start<I, F>(visualizer: ScopeVisualizer<I, F>) -> (VisualizerHandle, impl Future<Output = ScopeVisualizer<I, F>>)
where
	I: Ide,
	F: ScopeHandlerFactory,
{
	let (tx, rx) = mpsc::unbounded_channel();
	let cancel = CancellationToken::new();
	let handle = VisualizerHandle {
		tx,
		cancel: cancel.clone(),
	};
	(handle, run(visualizer, rx, cancel))
}

async fn run<I, F>(
	mut visualizer: ScopeVisualizer<I, F>,
	mut rx: mpsc::UnboundedReceiver<VisualizerCommand>,
	cancel: CancellationToken,
) -> ScopeVisualizer<I, F>
where
	I: Ide,
	F: ScopeHandlerFactory,
{
	tracing::debug!("visualizer.task.start");
	loop {
		let deadline = visualizer.next_deadline();
		tokio::select! {
			biased;
			_ = cancel.cancelled() => break,
			command = rx.recv() => match command {
				Some(VisualizerCommand::SetTarget(target)) => visualizer.set_target(target, now()),
				Some(VisualizerCommand::Event(event)) => visualizer.handle_event(event, now()),
				None => break,
			},
			_ = sleep_until(deadline) => {
				visualizer.poll(now());
			}
		}
	}

	rx.close();
	visualizer.dispose();
	tracing::debug!(recomputes = visualizer.recompute_count(), "visualizer.task.stop");
	visualizer
}

async fn sleep_until(deadline: Option<Instant>) {
	match deadline {
		Some(deadline) => tokio::time::sleep_until(deadline.into()).await,
		None => std::future::pending().await,
	}
}

fn now() -> Instant {
	tokio::time::Instant::now().into_std()
}
