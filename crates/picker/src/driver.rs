//! Unattended expansion.

use stencil_engine::{ExpandError, Template, TemplateEngine, Unattended};
use stencil_text::{Span, TextBuffer};

/// Runs one expansion with every prompt answered from defaults.
///
/// A non-empty target span is re-established as the active selection first
/// so the engine overwrites it instead of inserting beside it. Synchronous:
/// the [`Unattended`] policy guarantees the engine never waits on input,
/// and a prompt shape it cannot answer comes back as an error instead of a
/// hang.
pub fn expand_unattended(
	engine: &mut dyn TemplateEngine,
	buf: &mut dyn TextBuffer,
	template: &Template,
	span: Span,
) -> Result<(), ExpandError> {
	if span.is_empty() {
		buf.clear_selection();
		buf.set_cursor(span.start);
	} else {
		buf.set_selection(span);
		buf.set_cursor(span.end);
	}

	let mut prompts = Unattended;
	engine.expand(buf, template, span, &mut prompts)
}
