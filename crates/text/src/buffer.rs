//! Buffer capability surface consumed by the picker core.

use crate::span::{CharIdx, Span};

/// Editor-buffer primitives the preview machinery needs.
///
/// Every method is synchronous: it returns once the document reflects the
/// change. `insert` and `delete` are low-level primitives and apply even
/// while the buffer is flagged read-only; the read-only flag guards
/// command-level editing in the embedding editor, which is what keeps the
/// preview session the only mutator while the candidate list is open.
pub trait TextBuffer {
	/// Document length in characters.
	fn len_chars(&self) -> usize;

	/// Text covered by `span`.
	fn slice(&self, span: Span) -> String;

	/// Inserts `text` at `at`.
	fn insert(&mut self, at: CharIdx, text: &str);

	/// Deletes the text covered by `span`.
	fn delete(&mut self, span: Span);

	/// Current cursor position.
	fn cursor(&self) -> CharIdx;

	/// Moves the cursor to `pos`.
	fn set_cursor(&mut self, pos: CharIdx);

	/// The active selection, if one exists.
	fn selection(&self) -> Option<Span>;

	/// Marks `span` as the active selection.
	fn set_selection(&mut self, span: Span);

	/// Drops the active selection, leaving the cursor where it is.
	fn clear_selection(&mut self);

	/// Bounds of the symbol-like token touching `pos`, if any.
	fn symbol_span_at(&self, pos: CharIdx) -> Option<Span>;

	/// Whether the buffer currently refuses command-level edits.
	fn is_read_only(&self) -> bool;

	/// Flags or unflags the buffer as read-only.
	fn set_read_only(&mut self, read_only: bool);

	/// Toggles undo-history recording, returning the previous state.
	fn set_undo_recording(&mut self, enabled: bool) -> bool;

	/// Forces a synchronous redisplay of the buffer.
	fn redisplay(&mut self);
}
