//! Core types for scope highlighting: positions, ranges, and document access.

/// Document and editor seams consumed by the highlight pipeline.
pub mod document;
/// Line/character positions.
pub mod position;
/// Character, line, and generalized ranges.
pub mod range;

pub use document::{Document, EditorId, EditorSnapshot, TextDocument, TextEditor};
pub use position::Position;
pub use range::{CharacterRange, GeneralizedRange, LineRange, RangeError, partition_ranges};
pub use ropey::Rope;
