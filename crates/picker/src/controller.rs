//! Top-level command: wires candidates, session, and frontend together.

use stencil_engine::{PromptPolicy, Template, TemplateEngine};
use stencil_text::{Span, TextBuffer};

use crate::candidates::{CandidateList, CandidateRow, build_candidates};
use crate::error::{PickerError, Result};
use crate::options::PickerOptions;
use crate::region::resolve_target;
use crate::session::{PreviewSession, SessionOutcome};

/// Outcome of one picker run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerOutcome {
	/// The user confirmed this template and its real expansion has run.
	Expanded(Template),
	/// The user left without confirming; the document is pristine.
	Cancelled,
}

/// Candidate-list request handed to the selection frontend.
#[derive(Debug)]
pub struct PickerRequest<'a> {
	/// Rows in display order.
	pub rows: &'a [CandidateRow],
	/// Query the input field starts out with.
	pub initial_query: &'a str,
}

/// Hook surface the frontend drives while the list is open.
pub trait PreviewObserver {
	/// Invoked synchronously on every highlight change. `None` means no
	/// candidate is highlighted (e.g. the query matches nothing).
	///
	/// An error reports a failed preview expansion; the document has
	/// already been restored, so the frontend should display the message
	/// and keep its loop running.
	fn highlighted(&mut self, label: Option<&str>) -> Result<()>;
}

/// External selection framework boundary.
///
/// Implementations own the event loop: they render `request.rows`, narrow
/// them as the user types, call [`PreviewObserver::highlighted`] on every
/// highlight change, and return once the user confirms or cancels. The
/// core never calls into the frontend's loop itself.
pub trait CandidatePicker {
	/// Runs the selection loop to completion.
	fn pick(
		&mut self,
		request: PickerRequest<'_>,
		observer: &mut dyn PreviewObserver,
	) -> std::result::Result<PickOutcome, String>;
}

/// Terminal answer from the frontend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickOutcome {
	/// The user confirmed the row with this label.
	Confirmed(String),
	/// The user closed the list without confirming.
	Cancelled,
}

struct SessionObserver<'a> {
	session: &'a mut PreviewSession,
	buf: &'a mut dyn TextBuffer,
	engine: &'a mut dyn TemplateEngine,
	list: &'a CandidateList,
}

impl PreviewObserver for SessionObserver<'_> {
	fn highlighted(&mut self, label: Option<&str>) -> Result<()> {
		// A label the list does not know (stale frontend state) previews
		// nothing, which still reverts the previous candidate.
		let template = label.and_then(|label| self.list.lookup(label)).cloned();
		self.session.on_candidate_changed(&mut *self.buf, &mut *self.engine, template.as_ref())
	}
}

/// Runs the snippet picker command end to end.
///
/// Builds the candidate list (aborting before any document mutation when
/// it comes up empty), opens a preview session, hands both to `frontend`,
/// and finalizes whatever the frontend reports: a confirmed row gets the
/// one real, fully-interactive expansion through `interactive`; anything
/// else leaves the document byte-identical to how it started. Session
/// teardown runs on every path, including a frontend error.
pub fn run_picker(
	buf: &mut dyn TextBuffer,
	engine: &mut dyn TemplateEngine,
	frontend: &mut dyn CandidatePicker,
	options: &PickerOptions,
	interactive: &mut dyn PromptPolicy,
) -> Result<PickerOutcome> {
	let list = build_candidates(engine, buf, options)?;
	let initial_query = if options.use_thing_at_point {
		buf.symbol_span_at(buf.cursor()).map(|span| buf.slice(span)).unwrap_or_default()
	} else {
		String::new()
	};

	let mut session = PreviewSession::begin(buf, options.clone())?;
	tracing::debug!(candidates = list.len(), query = %initial_query, "snippet picker opened");

	let picked = {
		let request = PickerRequest { rows: list.rows(), initial_query: &initial_query };
		let mut observer = SessionObserver {
			session: &mut session,
			buf: &mut *buf,
			engine: &mut *engine,
			list: &list,
		};
		frontend.pick(request, &mut observer)
	};

	match picked {
		Err(message) => {
			session.finish(buf, SessionOutcome::Cancelled);
			Err(PickerError::Frontend(message))
		}
		Ok(PickOutcome::Cancelled) => {
			session.finish(buf, SessionOutcome::Cancelled);
			tracing::debug!("snippet picker cancelled");
			Ok(PickerOutcome::Cancelled)
		}
		Ok(PickOutcome::Confirmed(label)) => {
			let Some(template) = list.lookup(&label).cloned() else {
				session.finish(buf, SessionOutcome::Cancelled);
				return Err(PickerError::UnknownLabel(label));
			};

			session.on_commit(buf, engine, &template);
			session.finish(buf, SessionOutcome::Committed);

			let target = match buf.selection().filter(|span| !span.is_empty()) {
				Some(span) => span,
				None => stage_target(buf, &template, options),
			};
			engine.expand(buf, &template, target, interactive)?;
			buf.redisplay();
			tracing::debug!(snippet = template.name(), "snippet committed");
			Ok(PickerOutcome::Expanded(template))
		}
	}
}

/// Expands a template resolved by label or bare name, without opening the
/// selection UI.
pub fn expand_named(
	buf: &mut dyn TextBuffer,
	engine: &mut dyn TemplateEngine,
	name: &str,
	options: &PickerOptions,
	interactive: &mut dyn PromptPolicy,
) -> Result<Template> {
	if buf.is_read_only() {
		return Err(PickerError::ReadOnly);
	}
	let list = build_candidates(engine, buf, options)?;
	let Some(template) = list.lookup_name(name).cloned() else {
		return Err(PickerError::UnknownLabel(name.to_string()));
	};

	let target = match buf.selection().filter(|span| !span.is_empty()) {
		Some(span) => span,
		None => stage_target(buf, &template, options),
	};
	engine.expand(buf, &template, target, interactive)?;
	buf.redisplay();
	tracing::debug!(snippet = template.name(), "named snippet expanded");
	Ok(template)
}

/// Resolves and activates the span the real expansion should consume.
fn stage_target(buf: &mut dyn TextBuffer, template: &Template, options: &PickerOptions) -> Span {
	let target = resolve_target(buf, Some(template), options);
	if target.is_empty() {
		buf.clear_selection();
		buf.set_cursor(target.start);
	} else {
		buf.set_selection(target);
		buf.set_cursor(target.end);
	}
	target
}
