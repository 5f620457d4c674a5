//! Preview session state machine.

use stencil_engine::{Template, TemplateEngine};
use stencil_text::{CharIdx, Span, TextBuffer};

use crate::driver::expand_unattended;
use crate::error::{PickerError, Result};
use crate::options::PickerOptions;
use crate::region::resolve_target;

/// How a finished session leaves the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
	/// Original text restored.
	Cancelled,
	/// Target region staged for the real expansion.
	Committed,
}

/// Stateful controller for one invocation of the selection UI.
///
/// The session is the only mutator of the document while it lives: the
/// buffer is flagged read-only for the duration, undo recording is
/// suspended, and both are restored unconditionally by [`Self::finish`].
///
/// Every candidate-highlight event is a full revert-then-reapply against
/// the captured `initial_text`, never an incremental diff. Invariant:
/// outside a transition the content of `current_region` is either exactly
/// the original text or exactly the last candidate's expansion, with
/// nothing left over from earlier previews.
#[derive(Debug)]
pub struct PreviewSession {
	options: PickerOptions,
	selection_was_active: bool,
	initial_cursor: CharIdx,
	initial_region: Span,
	initial_text: String,
	current_region: Span,
	active: bool,
	finished: bool,
	prior_undo_recording: bool,
}

impl PreviewSession {
	/// Starts a session on `buf`.
	///
	/// Refuses a read-only buffer before touching anything. A non-empty
	/// active selection becomes the fixed target region for the whole
	/// session; otherwise the region is re-resolved per candidate.
	pub fn begin(buf: &mut dyn TextBuffer, options: PickerOptions) -> Result<Self> {
		if buf.is_read_only() {
			return Err(PickerError::ReadOnly);
		}

		let selection = buf.selection().filter(|span| !span.is_empty());
		let initial_cursor = buf.cursor();
		let initial_region = match selection {
			Some(span) => span,
			None => resolve_target(buf, None, &options),
		};
		let initial_text = buf.slice(initial_region);
		let prior_undo_recording = buf.set_undo_recording(false);
		buf.set_read_only(true);

		tracing::debug!(
			start = initial_region.start,
			end = initial_region.end,
			selection = selection.is_some(),
			"preview session started"
		);

		Ok(Self {
			options,
			selection_was_active: selection.is_some(),
			initial_cursor,
			initial_region,
			initial_text,
			current_region: initial_region,
			active: false,
			finished: false,
			prior_undo_recording,
		})
	}

	/// Candidate-highlight transition.
	///
	/// Reverts whatever the last highlight materialized, re-resolves the
	/// target region for `template` when the session did not start from a
	/// selection, then renders `template`'s unattended expansion. `None`
	/// reverts without rendering anything.
	pub fn on_candidate_changed(
		&mut self,
		buf: &mut dyn TextBuffer,
		engine: &mut dyn TemplateEngine,
		template: Option<&Template>,
	) -> Result<()> {
		debug_assert!(!self.finished, "transition on a finished session");
		self.revert(buf);
		if !self.selection_was_active {
			self.retarget(buf, template);
		}

		let Some(template) = template else {
			return Ok(());
		};
		self.apply_preview(buf, engine, template)
	}

	/// Final-confirm transition.
	///
	/// Reverts the last preview and, when the user's own selection opened
	/// the session, re-activates it over the target region so the real
	/// expansion that follows overwrites it. No unattended expansion runs
	/// here; the real, interactive one happens outside the session.
	pub fn on_commit(
		&mut self,
		buf: &mut dyn TextBuffer,
		engine: &mut dyn TemplateEngine,
		template: &Template,
	) {
		debug_assert!(!self.finished, "commit on a finished session");
		engine.abort_pending(buf);
		self.revert(buf);
		if !self.selection_was_active {
			self.retarget(buf, Some(template));
			return;
		}
		if !self.current_region.is_empty() {
			buf.set_selection(self.current_region);
			buf.set_cursor(self.current_region.end);
		}
	}

	/// Tears the session down, restoring undo recording and the read-only
	/// flag unconditionally.
	///
	/// With [`SessionOutcome::Cancelled`] the original text is restored
	/// first; with [`SessionOutcome::Committed`] the document is left as
	/// [`Self::on_commit`] staged it. Safe to call more than once.
	pub fn finish(&mut self, buf: &mut dyn TextBuffer, outcome: SessionOutcome) {
		if self.finished {
			return;
		}
		if outcome == SessionOutcome::Cancelled {
			self.revert(buf);
		}
		buf.set_read_only(false);
		buf.set_undo_recording(self.prior_undo_recording);
		buf.redisplay();
		self.finished = true;
		tracing::debug!(outcome = ?outcome, "preview session finished");
	}

	/// The region currently showing in place of the original content.
	pub fn current_region(&self) -> Span {
		self.current_region
	}

	/// The untouched target region the session restores to.
	pub fn initial_region(&self) -> Span {
		self.initial_region
	}

	/// Whether a selection was active when the session began.
	pub fn selection_was_active(&self) -> bool {
		self.selection_was_active
	}

	/// Whether a preview is materialized in the document right now.
	pub fn is_active(&self) -> bool {
		self.active
	}

	/// Restores `initial_text` over whatever `current_region` shows and
	/// puts the cursor back where the session found it.
	///
	/// Idempotent: with no preview materialized, `current_region` equals
	/// `initial_region` and its content already equals `initial_text`, so
	/// the delete/insert pair rewrites the same bytes. The cursor reset
	/// keeps per-candidate region resolution anchored to the position the
	/// user actually sat at, not wherever the last preview parked it.
	fn revert(&mut self, buf: &mut dyn TextBuffer) {
		buf.delete(self.current_region);
		buf.insert(self.initial_region.start, &self.initial_text);
		buf.set_cursor(self.initial_cursor);
		self.current_region = self.initial_region;
		self.active = false;
	}

	/// Re-resolves the target region for `template` and recaptures its
	/// text. Only called when the session did not start from a selection.
	fn retarget(&mut self, buf: &mut dyn TextBuffer, template: Option<&Template>) {
		let region = resolve_target(buf, template, &self.options);
		self.initial_region = region;
		self.current_region = region;
		self.initial_text = buf.slice(region);
	}

	/// Renders `template`'s unattended expansion over `current_region`.
	///
	/// The document length delta tells us where the expansion ends; that
	/// becomes the new `current_region` so the next revert removes exactly
	/// the preview. On failure the revert runs immediately with the same
	/// delta bookkeeping, so a half-applied expansion never survives the
	/// error.
	fn apply_preview(
		&mut self,
		buf: &mut dyn TextBuffer,
		engine: &mut dyn TemplateEngine,
		template: &Template,
	) -> Result<()> {
		let len_before = buf.len_chars() as isize;
		let result = expand_unattended(engine, buf, template, self.current_region);
		let delta = buf.len_chars() as isize - len_before;
		let end = (self.current_region.end as isize + delta).max(self.current_region.start as isize);
		self.current_region = Span::new(self.current_region.start, end as usize);

		if let Err(e) = result {
			tracing::warn!(
				error = %e,
				snippet = template.name(),
				"preview expansion failed, restoring original text"
			);
			self.revert(buf);
			buf.redisplay();
			return Err(e.into());
		}

		self.active = true;
		buf.clear_selection();
		buf.redisplay();
		Ok(())
	}
}
