//! The live scope visualization controller.

use std::sync::Arc;
use std::time::{Duration, Instant};

use rustc_hash::FxHashSet;
use scopeviz_highlight::HighlightStyle;
use scopeviz_primitives::{EditorId, GeneralizedRange, LineRange, TextEditor};

use crate::config::VisualizerConfig;
use crate::debounce::Debouncer;
use crate::ide::{Ide, IdeEvent};
use crate::scope::{Direction, Scope, ScopeHandlerFactory, ScopeIteratorRequirements, Target};
use crate::target::{VisualizationTarget, VisualizationType};


/// Keeps the scope channels of every visible editor in sync with a target.
///
/// With no target the visualizer is off and recomputes do nothing. Host
/// events and target changes schedule a trailing-debounced recompute, which
/// [`poll`](Self::poll) runs once due. Each recompute reads the target and
/// the visible editors as they are at that moment. Editors painted by an
/// earlier frame that are no longer visible are forgotten by the host.
pub struct ScopeVisualizer<I, F> {
	ide: I,
	factory: F,
	target: Option<VisualizationTarget>,
	debouncer: Debouncer,
	painted: FxHashSet<EditorId>,
	disposed: bool,
	recomputes: u64,
}

impl<I: Ide, F: ScopeHandlerFactory> ScopeVisualizer<I, F> {
	/// Creates a visualizer and schedules an initial recompute.
	pub fn new(ide: I, factory: F, debounce: Duration, now: Instant) -> Self {
		let mut debouncer = Debouncer::new(debounce);
		debouncer.run(now);
		Self {
			ide,
			factory,
			target: None,
			debouncer,
			painted: FxHashSet::default(),
			disposed: false,
			recomputes: 0,
		}
	}

	/// Creates a visualizer using the configured debounce delay.
	pub fn with_config(ide: I, factory: F, config: &VisualizerConfig, now: Instant) -> Self {
		Self::new(ide, factory, config.debounce_delay(), now)
	}

	/// Returns the current target.
	pub fn target(&self) -> Option<&VisualizationTarget> {
		self.target.as_ref()
	}

	/// Returns true while a target is set and the visualizer is live.
	pub fn is_active(&self) -> bool {
		!self.disposed && self.target.is_some()
	}

	/// Returns true once [`dispose`](Self::dispose) has run.
	pub fn is_disposed(&self) -> bool {
		self.disposed
	}

	/// Number of recomputes executed so far.
	pub fn recompute_count(&self) -> u64 {
		self.recomputes
	}

	/// Returns when the pending recompute becomes due.
	pub fn next_deadline(&self) -> Option<Instant> {
		self.debouncer.deadline()
	}

	/// Returns the host.
	pub fn ide(&self) -> &I {
		&self.ide
	}

	/// Returns the host mutably.
	pub fn ide_mut(&mut self) -> &mut I {
		&mut self.ide
	}

	/// Replaces the target.
	///
	/// The scope channels are cleared on every visible editor before this
	/// returns; the new target is drawn by the next recompute.
	pub fn set_target(&mut self, target: Option<VisualizationTarget>, now: Instant) {
		if self.disposed {
			tracing::trace!("visualizer.set_target.ignored");
			return;
		}
		tracing::debug!(
			scope_type = ?target.as_ref().map(|target| target.scope_type.as_str()),
			visualization = ?target.as_ref().map(|target| target.visualization_type.as_str()),
			"visualizer.set_target"
		);
		self.target = target;
		self.clear_highlights();
		self.debouncer.run(now);
	}

	/// Schedules a recompute in response to a host event.
	pub fn handle_event(&mut self, event: IdeEvent, now: Instant) {
		if self.disposed {
			tracing::trace!(?event, "visualizer.event.ignored");
			return;
		}
		tracing::trace!(?event, "visualizer.event");
		self.debouncer.run(now);
	}

	/// Runs the pending recompute if it is due. Returns true if it ran.
	pub fn poll(&mut self, now: Instant) -> bool {
		if self.disposed || !self.debouncer.take_due(now) {
			return false;
		}
		self.highlight_scopes();
		true
	}

	/// Stops the visualizer.
	///
	/// Later events are ignored, the pending recompute is dropped, the
	/// scope channels are cleared and their host resources released.
	/// Calling this twice is a no-op.
	pub fn dispose(&mut self) {
		if self.disposed {
			return;
		}
		self.disposed = true;
		let cancelled = self.debouncer.cancel();
		self.clear_highlights();
		for style in HighlightStyle::SCOPE {
			self.ide.release_highlights(style);
		}
		tracing::debug!(cancelled, recomputes = self.recomputes, "visualizer.dispose");
	}

	fn clear_highlights(&mut self) {
		let editors = self.ide.visible_text_editors();
		self.forget_hidden(&editors);
		for editor in &editors {
			for style in HighlightStyle::SCOPE {
				self.set_channel(style, editor.as_ref(), &[]);
			}
		}
		self.painted.clear();
	}

	/// Forgets painted editors missing from `visible`.
	fn forget_hidden(&mut self, visible: &[Arc<dyn TextEditor>]) {
		let visible: FxHashSet<EditorId> = visible.iter().map(|editor| editor.id()).collect();
		let mut hidden: Vec<EditorId> = self.painted.difference(&visible).copied().collect();
		hidden.sort_unstable();
		for editor in hidden {
			tracing::debug!(editor = %editor, "visualizer.forget_editor");
			self.painted.remove(&editor);
			self.ide.forget_editor(editor);
		}
	}

	fn highlight_scopes(&mut self) {
		self.recomputes += 1;
		let Some(target) = self.target.clone() else {
			tracing::trace!("visualizer.recompute.off");
			return;
		};

		let editors: Vec<Arc<dyn TextEditor>> = self.ide.visible_text_editors();
		self.forget_hidden(&editors);
		for editor in &editors {
			let frame = ScopeFrame::collect(&self.factory, &target, editor.as_ref());
			tracing::debug!(
				editor = %editor.id(),
				scope_type = target.scope_type.as_str(),
				domains = frame.domains.len(),
				targets = frame.targets,
				"visualizer.recompute"
			);
			self.render(editor.as_ref(), &frame);
			self.painted.insert(editor.id());
		}
	}

	fn render(&mut self, editor: &dyn TextEditor, frame: &ScopeFrame) {
		self.set_channel(HighlightStyle::ScopeDomain, editor, &frame.domains);
		self.set_channel(HighlightStyle::ScopeContent, editor, &frame.content);
		self.set_channel(HighlightStyle::ScopeRemoval, editor, &frame.removal);
	}

	fn set_channel(&mut self, style: HighlightStyle, editor: &dyn TextEditor, ranges: &[GeneralizedRange]) {
		if let Err(error) = self.ide.set_highlight_ranges(style, editor, ranges) {
			tracing::warn!(style = style.name(), editor = %editor.id(), %error, "visualizer.highlight_failed");
		}
	}
}

/// Ranges for the three scope channels of one editor.
#[derive(Debug, Default)]
struct ScopeFrame {
	domains: Vec<GeneralizedRange>,
	content: Vec<GeneralizedRange>,
	removal: Vec<GeneralizedRange>,
	targets: usize,
}

impl ScopeFrame {
	fn collect<F: ScopeHandlerFactory>(factory: &F, target: &VisualizationTarget, editor: &dyn TextEditor) -> Self {
		let document = editor.document();
		let Some(handler) = factory.create(&target.scope_type, document.language_id()) else {
			tracing::debug!(
				scope_type = target.scope_type.as_str(),
				language = document.language_id(),
				"visualizer.no_scope_handler"
			);
			return Self::default();
		};

		let requirements = ScopeIteratorRequirements {
			include_descendant_scopes: true,
		};
		let scopes: Vec<Box<dyn Scope>> = handler
			.generate_scopes(editor, document.range().start, Direction::Forward, requirements)
			.collect();
		let targets: Vec<Box<dyn Target>> = scopes.iter().flat_map(|scope| scope.get_targets(false)).collect();

		let mut frame = Self {
			domains: scopes.iter().map(|scope| scope.domain().into()).collect(),
			targets: targets.len(),
			..Self::default()
		};

		match target.visualization_type {
			VisualizationType::Standard => {}
			VisualizationType::Content => {
				frame.content = targets.iter().map(|target| target.content_range().into()).collect();
			}
			VisualizationType::Removal => {
				frame.removal = targets.iter().map(|target| removal_range(target.as_ref())).collect();
			}
		}
		frame
	}
}

fn removal_range(target: &dyn Target) -> GeneralizedRange {
	let range = target.removal_highlight_range();
	if target.is_line() {
		LineRange::from_character_range(&range).into()
	} else {
		range.into()
	}
}
