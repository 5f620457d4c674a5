//! Target-region resolution.

use stencil_engine::Template;
use stencil_text::{Span, TextBuffer};

use crate::options::PickerOptions;

/// Decides the span a candidate expansion should replace.
///
/// Pure with respect to the buffer: reads the cursor and the symbol under
/// it, never edits. With thing-at-point off the answer is always the empty
/// span at the cursor. With it on, the token under the cursor is consumed
/// only when the always-overwrite option is set or the token text equals
/// the candidate's name. "Does this token match this candidate" is a
/// per-candidate predicate, which is why the preview session calls back in
/// here on every highlight change.
pub fn resolve_target(
	buf: &dyn TextBuffer,
	template: Option<&Template>,
	options: &PickerOptions,
) -> Span {
	let cursor = buf.cursor();
	if !options.use_thing_at_point {
		return Span::point(cursor);
	}

	let Some(token) = buf.symbol_span_at(cursor) else {
		return Span::point(cursor);
	};

	if options.always_overwrite_thing_at_point {
		return token;
	}
	let thing = buf.slice(token);
	if template.is_some_and(|t| t.name() == thing) {
		token
	} else {
		Span::point(cursor)
	}
}
