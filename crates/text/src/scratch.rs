//! Rope-backed in-memory buffer.
//!
//! `ScratchBuffer` backs scratch documents in embedders that have no buffer
//! of their own, and every test suite in this workspace. It keeps the same
//! remapping rules a real editor buffer would: positions after an edit are
//! shifted by the edit's net size, positions inside a deleted range collapse
//! to its start.

use ropey::Rope;

use crate::buffer::TextBuffer;
use crate::span::{CharIdx, Span};
use crate::word::symbol_bounds;

/// In-memory [`TextBuffer`] implementation.
#[derive(Debug, Clone)]
pub struct ScratchBuffer {
	content: Rope,
	cursor: CharIdx,
	selection: Option<Span>,
	read_only: bool,
	undo_recording: bool,
	redraws: usize,
}

impl ScratchBuffer {
	/// Creates a buffer holding `text` with the cursor at 0.
	pub fn new(text: &str) -> Self {
		Self {
			content: Rope::from_str(text),
			cursor: 0,
			selection: None,
			read_only: false,
			undo_recording: true,
			redraws: 0,
		}
	}

	/// Creates a buffer holding `text` with the cursor at `cursor`.
	pub fn with_cursor(text: &str, cursor: CharIdx) -> Self {
		let mut buffer = Self::new(text);
		buffer.set_cursor(cursor);
		buffer
	}

	/// Full document text.
	pub fn text(&self) -> String {
		self.content.to_string()
	}

	/// Whether undo-history recording is currently enabled.
	pub fn undo_recording(&self) -> bool {
		self.undo_recording
	}

	/// Number of forced redisplays since creation.
	pub fn redraw_count(&self) -> usize {
		self.redraws
	}

	fn remap_after_insert(pos: CharIdx, at: CharIdx, inserted: usize) -> CharIdx {
		if pos >= at { pos + inserted } else { pos }
	}

	fn remap_after_delete(pos: CharIdx, span: Span) -> CharIdx {
		if pos >= span.end {
			pos - span.len()
		} else if pos > span.start {
			span.start
		} else {
			pos
		}
	}
}

impl TextBuffer for ScratchBuffer {
	fn len_chars(&self) -> usize {
		self.content.len_chars()
	}

	fn slice(&self, span: Span) -> String {
		let span = span.clamp_to(self.content.len_chars());
		self.content.slice(span.start..span.end).to_string()
	}

	fn insert(&mut self, at: CharIdx, text: &str) {
		let at = at.min(self.content.len_chars());
		self.content.insert(at, text);
		let inserted = text.chars().count();
		self.cursor = Self::remap_after_insert(self.cursor, at, inserted);
		self.selection = self.selection.map(|span| {
			Span::new(
				Self::remap_after_insert(span.start, at, inserted),
				Self::remap_after_insert(span.end, at, inserted),
			)
		});
	}

	fn delete(&mut self, span: Span) {
		let span = span.clamp_to(self.content.len_chars());
		if span.is_empty() {
			return;
		}
		self.content.remove(span.start..span.end);
		self.cursor = Self::remap_after_delete(self.cursor, span);
		self.selection = self
			.selection
			.map(|sel| {
				Span::new(
					Self::remap_after_delete(sel.start, span),
					Self::remap_after_delete(sel.end, span),
				)
			})
			.filter(|sel| !sel.is_empty());
	}

	fn cursor(&self) -> CharIdx {
		self.cursor
	}

	fn set_cursor(&mut self, pos: CharIdx) {
		self.cursor = pos.min(self.content.len_chars());
	}

	fn selection(&self) -> Option<Span> {
		self.selection
	}

	fn set_selection(&mut self, span: Span) {
		self.selection = Some(span.clamp_to(self.content.len_chars()));
	}

	fn clear_selection(&mut self) {
		self.selection = None;
	}

	fn symbol_span_at(&self, pos: CharIdx) -> Option<Span> {
		symbol_bounds(&self.content, pos)
	}

	fn is_read_only(&self) -> bool {
		self.read_only
	}

	fn set_read_only(&mut self, read_only: bool) {
		self.read_only = read_only;
	}

	fn set_undo_recording(&mut self, enabled: bool) -> bool {
		std::mem::replace(&mut self.undo_recording, enabled)
	}

	fn redisplay(&mut self) {
		self.redraws += 1;
	}
}
