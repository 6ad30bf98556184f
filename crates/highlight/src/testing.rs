use std::collections::{BTreeMap, BTreeSet};

use scopeviz_primitives::{CharacterRange, EditorId};

use crate::backend::DecorationBackend;
use crate::error::{HighlightError, Result};
use crate::options::DecorationRenderOptions;

/// Backend that records every call and tracks what is painted.
#[derive(Debug, Default)]
pub(crate) struct RecordingBackend {
	next_id: u64,
	pub created: Vec<(u64, DecorationRenderOptions)>,
	pub disposed: Vec<u64>,
	pub set_calls: Vec<(EditorId, u64, Vec<CharacterRange>)>,
	live: BTreeSet<u64>,
	painted: BTreeMap<(EditorId, u64), Vec<CharacterRange>>,
	/// Fails creation once this many types have been created.
	pub fail_create_after: Option<usize>,
	pub fail_set: bool,
}

impl RecordingBackend {
	/// Backend that refuses creation once `limit` types exist.
	pub fn failing_after(limit: usize) -> Self {
		Self {
			fail_create_after: Some(limit),
			..Self::default()
		}
	}

	pub fn live_count(&self) -> usize {
		self.live.len()
	}

	pub fn is_live(&self, id: u64) -> bool {
		self.live.contains(&id)
	}

	pub fn options(&self, id: u64) -> &DecorationRenderOptions {
		&self.created.iter().find(|(created, _)| *created == id).unwrap().1
	}

	/// Non-empty paint in `editor`, ordered by type id, tagged by whole-line flag.
	pub fn painted_in(&self, editor: EditorId) -> Vec<(bool, Vec<CharacterRange>)> {
		self.painted
			.iter()
			.filter(|((painted_editor, _), ranges)| *painted_editor == editor && !ranges.is_empty())
			.map(|((_, id), ranges)| (self.options(*id).is_whole_line, ranges.clone()))
			.collect()
	}

	/// Non-empty paint in `editor` keyed by type id.
	pub fn painted_by_type(&self, editor: EditorId) -> BTreeMap<u64, Vec<CharacterRange>> {
		self.painted
			.iter()
			.filter(|((painted_editor, _), ranges)| *painted_editor == editor && !ranges.is_empty())
			.map(|((_, id), ranges)| (*id, ranges.clone()))
			.collect()
	}
}

impl DecorationBackend for RecordingBackend {
	type DecorationType = u64;

	fn create_decoration_type(&mut self, options: &DecorationRenderOptions) -> Result<u64> {
		if self.fail_create_after.is_some_and(|limit| self.created.len() >= limit) {
			return Err(HighlightError::Backend("create refused".to_string()));
		}
		let id = self.next_id;
		self.next_id += 1;
		self.created.push((id, options.clone()));
		self.live.insert(id);
		Ok(id)
	}

	fn set_decorations(&mut self, editor: EditorId, decoration_type: &u64, ranges: &[CharacterRange]) -> Result<()> {
		assert!(self.live.contains(decoration_type), "set on disposed type {decoration_type}");
		if self.fail_set {
			return Err(HighlightError::Backend("set refused".to_string()));
		}
		self.set_calls.push((editor, *decoration_type, ranges.to_vec()));
		self.painted.insert((editor, *decoration_type), ranges.to_vec());
		Ok(())
	}

	fn dispose_decoration_type(&mut self, decoration_type: u64) {
		assert!(self.live.remove(&decoration_type), "double dispose of {decoration_type}");
		self.disposed.push(decoration_type);
		self.painted.retain(|(_, id), _| *id != decoration_type);
	}
}
