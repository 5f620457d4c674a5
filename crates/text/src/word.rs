//! Symbol boundary detection.

use ropey::Rope;

use crate::span::{CharIdx, Span};

/// Returns true for characters that form symbol-like tokens.
pub fn is_symbol_char(ch: char) -> bool {
	ch.is_alphanumeric() || ch == '_'
}

/// Bounds of the symbol-like token touching `pos` in `content`.
///
/// Scans outward from `pos` in both directions. A position with no symbol
/// character on either side yields `None`.
pub fn symbol_bounds(content: &Rope, pos: CharIdx) -> Option<Span> {
	let len = content.len_chars();
	let mut start = pos.min(len);
	let mut end = start;

	while start > 0 && is_symbol_char(content.char(start - 1)) {
		start -= 1;
	}
	while end < len && is_symbol_char(content.char(end)) {
		end += 1;
	}

	if start == end {
		return None;
	}
	Some(Span::new(start, end))
}
