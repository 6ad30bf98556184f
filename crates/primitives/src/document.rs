//! Read-only document access used by range decoration.
//!
//! The decoration engine only needs line lengths and the full-document range,
//! so hosts expose their buffers through [`TextDocument`]. [`Document`] is a
//! ropey-backed implementation for hosts and tests that hold text directly.

use std::fmt;

use ropey::{Rope, RopeSlice};

use crate::position::Position;
use crate::range::CharacterRange;

/// Identifier for an editor (a view onto a document).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EditorId(pub u64);

impl fmt::Display for EditorId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "editor#{}", self.0)
	}
}

/// Line-oriented view of a document snapshot.
pub trait TextDocument {
	/// Language identifier used to pick a scope handler.
	fn language_id(&self) -> &str;

	/// Number of lines, counting the empty line after a trailing newline.
	fn line_count(&self) -> usize;

	/// Length of a line in characters, excluding its terminator.
	///
	/// Returns `None` when `line` is past the end of the document.
	fn line_len(&self, line: usize) -> Option<usize>;

	/// Range of a single line, excluding its terminator.
	fn line_range(&self, line: usize) -> Option<CharacterRange> {
		self.line_len(line).map(|len| CharacterRange::single_line(line, 0, len))
	}

	/// Range spanning the whole document.
	fn range(&self) -> CharacterRange {
		let last = self.line_count().saturating_sub(1);
		let end = self.line_len(last).unwrap_or(0);
		CharacterRange::new(Position::new(0, 0), Position::new(last, end))
	}
}

/// An editor showing a document.
pub trait TextEditor {
	/// Stable identifier for this editor.
	fn id(&self) -> EditorId;

	/// The document shown in this editor.
	fn document(&self) -> &dyn TextDocument;
}

/// A rope-backed document snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
	text: Rope,
	language_id: String,
}

impl Document {
	/// Creates a document from text.
	pub fn new(text: &str, language_id: impl Into<String>) -> Self {
		Self::from_rope(Rope::from_str(text), language_id)
	}

	/// Creates a document from an existing rope.
	pub fn from_rope(text: Rope, language_id: impl Into<String>) -> Self {
		Self {
			text,
			language_id: language_id.into(),
		}
	}

	/// Returns the document text.
	pub fn text(&self) -> &Rope {
		&self.text
	}

	/// Replaces the document text, keeping the language.
	pub fn set_text(&mut self, text: &str) {
		self.text = Rope::from_str(text);
	}
}

impl TextDocument for Document {
	fn language_id(&self) -> &str {
		&self.language_id
	}

	fn line_count(&self) -> usize {
		self.text.len_lines()
	}

	fn line_len(&self, line: usize) -> Option<usize> {
		let slice = self.text.get_line(line)?;
		Some(slice.len_chars() - line_ending_len(slice))
	}
}

/// Returns the number of chars taken by the line terminator at the end of `line`.
fn line_ending_len(line: RopeSlice) -> usize {
	let len = line.len_chars();
	if len == 0 {
		return 0;
	}
	match line.char(len - 1) {
		'\n' if len >= 2 && line.char(len - 2) == '\r' => 2,
		'\n' | '\r' | '\u{000B}' | '\u{000C}' | '\u{0085}' | '\u{2028}' | '\u{2029}' => 1,
		_ => 0,
	}
}

/// An editor over an owned document snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorSnapshot {
	/// Editor identifier.
	pub id: EditorId,
	/// Document contents at snapshot time.
	pub document: Document,
}

impl EditorSnapshot {
	/// Creates a snapshot for an editor.
	pub fn new(id: EditorId, document: Document) -> Self {
		Self { id, document }
	}
}

impl TextEditor for EditorSnapshot {
	fn id(&self) -> EditorId {
		self.id
	}

	fn document(&self) -> &dyn TextDocument {
		&self.document
	}
}
