//! End-to-end picker scenarios driven through scripted collaborators.

use proptest::prelude::*;
use stencil_engine::{
	ExpandError, PromptAnswer, PromptPolicy, PromptRequest, Template, TemplateEngine, Unattended,
};
use stencil_text::{ScratchBuffer, Span, TextBuffer};

use crate::controller::{CandidatePicker, PickOutcome, PickerRequest, PreviewObserver};
use crate::error::PickerError;
use crate::options::PickerOptions;
use crate::session::{PreviewSession, SessionOutcome};
use crate::{PickerOutcome, expand_named, run_picker};

#[derive(Clone, Copy)]
enum Body {
	Literal(&'static str),
	Choice { default: &'static str },
	Fail,
}

/// Scriptable engine: each template carries a group and a body kind.
struct TestEngine {
	templates: Vec<(Template, String, Body)>,
}

impl TestEngine {
	fn new(entries: &[(&str, &str, Body)]) -> Self {
		let templates = entries
			.iter()
			.enumerate()
			.map(|(i, (name, group, body))| (Template::new(i as u32, *name), group.to_string(), *body))
			.collect();
		Self { templates }
	}

	fn template(&self, name: &str) -> Template {
		self.templates
			.iter()
			.find(|(t, _, _)| t.name() == name)
			.map(|(t, _, _)| t.clone())
			.expect("template exists")
	}

	fn template_at(&self, index: usize) -> Template {
		self.templates[index].0.clone()
	}
}

impl TemplateEngine for TestEngine {
	fn applicable(&self, _buf: &dyn TextBuffer) -> Vec<Template> {
		self.templates.iter().map(|(t, _, _)| t.clone()).collect()
	}

	fn group_of(&self, template: &Template) -> Option<String> {
		self.templates
			.iter()
			.find(|(t, _, _)| t.id() == template.id())
			.map(|(_, group, _)| group.clone())
	}

	fn expand(
		&mut self,
		buf: &mut dyn TextBuffer,
		template: &Template,
		_span: Span,
		prompts: &mut dyn PromptPolicy,
	) -> Result<(), ExpandError> {
		let body = self
			.templates
			.iter()
			.find(|(t, _, _)| t.id() == template.id())
			.map(|(_, _, body)| *body)
			.expect("template exists");

		let target = buf.selection().unwrap_or(Span::point(buf.cursor()));
		buf.delete(target);
		let text = match body {
			Body::Literal(text) => text.to_string(),
			Body::Choice { default } => {
				let options = vec![default.to_string(), "other".to_string()];
				let answer = prompts.answer(PromptRequest::Choice {
					prompt: "value",
					options: &options,
					default: Some(default),
					initial: None,
				})?;
				let PromptAnswer::Text(text) = answer else {
					return Err(ExpandError::Engine("expected text answer".to_string()));
				};
				text
			}
			Body::Fail => {
				buf.insert(target.start, "JUNK");
				return Err(ExpandError::Engine("template body rejected".to_string()));
			}
		};
		buf.insert(target.start, &text);
		buf.set_cursor(target.start + text.chars().count());
		buf.clear_selection();
		Ok(())
	}
}

/// Frontend that replays a fixed highlight script, then answers.
struct ScriptedPicker {
	events: Vec<Option<&'static str>>,
	outcome: std::result::Result<PickOutcome, String>,
	seen_query: Option<String>,
	preview_errors: usize,
}

impl ScriptedPicker {
	fn cancelled(events: &[Option<&'static str>]) -> Self {
		Self {
			events: events.to_vec(),
			outcome: Ok(PickOutcome::Cancelled),
			seen_query: None,
			preview_errors: 0,
		}
	}

	fn confirmed(events: &[Option<&'static str>], label: &str) -> Self {
		Self {
			events: events.to_vec(),
			outcome: Ok(PickOutcome::Confirmed(label.to_string())),
			seen_query: None,
			preview_errors: 0,
		}
	}

	fn failing(message: &str) -> Self {
		Self {
			events: Vec::new(),
			outcome: Err(message.to_string()),
			seen_query: None,
			preview_errors: 0,
		}
	}
}

impl CandidatePicker for ScriptedPicker {
	fn pick(
		&mut self,
		request: PickerRequest<'_>,
		observer: &mut dyn PreviewObserver,
	) -> std::result::Result<PickOutcome, String> {
		self.seen_query = Some(request.initial_query.to_string());
		for event in &self.events {
			if observer.highlighted(*event).is_err() {
				self.preview_errors += 1;
			}
		}
		self.outcome.clone()
	}
}

/// Interactive stand-in that answers every prompt with a fixed string.
struct ScriptedPrompts {
	answer: &'static str,
	calls: usize,
}

impl ScriptedPrompts {
	fn new(answer: &'static str) -> Self {
		Self { answer, calls: 0 }
	}
}

impl PromptPolicy for ScriptedPrompts {
	fn answer(&mut self, request: PromptRequest<'_>) -> Result<PromptAnswer, ExpandError> {
		self.calls += 1;
		match request {
			PromptRequest::Choice { .. } | PromptRequest::Free { .. } => {
				Ok(PromptAnswer::Text(self.answer.to_string()))
			}
			PromptRequest::MultiChoice { .. } => Ok(PromptAnswer::Many(vec![self.answer.to_string()])),
			PromptRequest::Number { default, .. } => Ok(PromptAnswer::Number(default.unwrap_or(0))),
		}
	}
}

fn browse_engine() -> TestEngine {
	TestEngine::new(&[
		("abc", "rust", Body::Literal("ABC-EXPANSION")),
		("xyz", "rust", Body::Choice { default: "X" }),
		("bad", "rust", Body::Fail),
	])
}

#[test]
fn browsing_then_cancel_restores_the_document() {
	let mut buf = ScratchBuffer::with_cursor("hello world", 6);
	let mut engine = browse_engine();
	let mut frontend =
		ScriptedPicker::cancelled(&[Some("abc"), Some("xyz"), None, Some("abc")]);

	let outcome = run_picker(
		&mut buf,
		&mut engine,
		&mut frontend,
		&PickerOptions::default(),
		&mut Unattended,
	)
	.unwrap();

	assert_eq!(outcome, PickerOutcome::Cancelled);
	assert_eq!(buf.text(), "hello world");
	assert_eq!(buf.cursor(), 6);
	assert!(buf.undo_recording());
	assert!(!buf.is_read_only());
}

#[test]
fn confirming_runs_the_real_interactive_expansion() {
	let mut buf = ScratchBuffer::with_cursor("hello world", 6);
	let mut engine = browse_engine();
	let mut frontend = ScriptedPicker::confirmed(&[Some("abc"), Some("xyz")], "xyz");
	let mut interactive = ScriptedPrompts::new("REAL");

	let outcome = run_picker(
		&mut buf,
		&mut engine,
		&mut frontend,
		&PickerOptions::default(),
		&mut interactive,
	)
	.unwrap();

	let xyz = engine.template("xyz");
	assert_eq!(outcome, PickerOutcome::Expanded(xyz));
	// The previews answered prompts from defaults; only the final commit
	// went through the interactive policy.
	assert_eq!(interactive.calls, 1);
	assert_eq!(buf.text(), "hello REALworld");
	assert!(buf.undo_recording());
	assert!(!buf.is_read_only());
}

#[test]
fn frontend_failure_still_tears_the_session_down() {
	let mut buf = ScratchBuffer::with_cursor("hello world", 6);
	buf.set_undo_recording(false);
	let mut engine = browse_engine();
	let mut frontend = ScriptedPicker::failing("widget exploded");

	let err = run_picker(
		&mut buf,
		&mut engine,
		&mut frontend,
		&PickerOptions::default(),
		&mut Unattended,
	)
	.unwrap_err();

	assert!(matches!(err, PickerError::Frontend(_)));
	assert_eq!(buf.text(), "hello world");
	assert!(!buf.is_read_only());
	// Undo recording goes back to what it was, not blindly to enabled.
	assert!(!buf.undo_recording());
}

#[test]
fn empty_candidate_list_aborts_before_any_mutation() {
	let mut buf = ScratchBuffer::with_cursor("hello world", 6);
	let mut engine = TestEngine::new(&[]);
	let mut frontend = ScriptedPicker::cancelled(&[]);

	let err = run_picker(
		&mut buf,
		&mut engine,
		&mut frontend,
		&PickerOptions::default(),
		&mut Unattended,
	)
	.unwrap_err();

	assert!(matches!(err, PickerError::NoTemplates));
	assert_eq!(buf.text(), "hello world");
	assert_eq!(buf.redraw_count(), 0);
	assert!(frontend.seen_query.is_none());
}

#[test]
fn read_only_buffer_is_refused() {
	let mut buf = ScratchBuffer::with_cursor("hello world", 6);
	buf.set_read_only(true);
	let mut engine = browse_engine();
	let mut frontend = ScriptedPicker::cancelled(&[]);

	let err = run_picker(
		&mut buf,
		&mut engine,
		&mut frontend,
		&PickerOptions::default(),
		&mut Unattended,
	)
	.unwrap_err();

	assert!(matches!(err, PickerError::ReadOnly));
	assert_eq!(buf.text(), "hello world");
}

#[test]
fn unknown_confirmed_label_errors_with_a_pristine_document() {
	let mut buf = ScratchBuffer::with_cursor("hello world", 6);
	let mut engine = browse_engine();
	let mut frontend = ScriptedPicker::confirmed(&[Some("abc")], "no-such-row");

	let err = run_picker(
		&mut buf,
		&mut engine,
		&mut frontend,
		&PickerOptions::default(),
		&mut Unattended,
	)
	.unwrap_err();

	assert!(matches!(err, PickerError::UnknownLabel(_)));
	assert_eq!(buf.text(), "hello world");
	assert!(!buf.is_read_only());
}

#[test]
fn thing_at_point_seeds_the_initial_query() {
	let mut buf = ScratchBuffer::with_cursor("say foo now", 5);
	let mut engine = browse_engine();
	let mut frontend = ScriptedPicker::cancelled(&[]);
	let options = PickerOptions { use_thing_at_point: true, ..Default::default() };

	run_picker(&mut buf, &mut engine, &mut frontend, &options, &mut Unattended).unwrap();
	assert_eq!(frontend.seen_query.as_deref(), Some("foo"));

	let mut frontend = ScriptedPicker::cancelled(&[]);
	run_picker(&mut buf, &mut engine, &mut frontend, &PickerOptions::default(), &mut Unattended)
		.unwrap();
	assert_eq!(frontend.seen_query.as_deref(), Some(""));
}

#[test]
fn preview_failure_is_reported_and_the_loop_survives() {
	let mut buf = ScratchBuffer::with_cursor("hello world", 6);
	let mut engine = browse_engine();
	let mut frontend = ScriptedPicker::cancelled(&[Some("bad"), Some("abc")]);

	let outcome = run_picker(
		&mut buf,
		&mut engine,
		&mut frontend,
		&PickerOptions::default(),
		&mut Unattended,
	)
	.unwrap();

	assert_eq!(outcome, PickerOutcome::Cancelled);
	assert_eq!(frontend.preview_errors, 1);
	assert_eq!(buf.text(), "hello world");
}

#[test]
fn expand_named_resolves_bare_names_and_rejects_unknown_ones() {
	let mut buf = ScratchBuffer::with_cursor("hello world", 6);
	let mut engine = browse_engine();

	let template = expand_named(
		&mut buf,
		&mut engine,
		"abc",
		&PickerOptions::default(),
		&mut Unattended,
	)
	.unwrap();
	assert_eq!(template.name(), "abc");
	assert_eq!(buf.text(), "hello ABC-EXPANSIONworld");

	let err = expand_named(
		&mut buf,
		&mut engine,
		"missing",
		&PickerOptions::default(),
		&mut Unattended,
	)
	.unwrap_err();
	assert!(matches!(err, PickerError::UnknownLabel(_)));
}

proptest! {
	#[test]
	fn no_residue_for_any_event_sequence(events in prop::collection::vec(prop::option::of(0usize..3), 1..24)) {
		let bodies = ["A1", "BB22", "<ccc>"];
		let mut engine = TestEngine::new(&[
			("t0", "misc", Body::Literal("A1")),
			("t1", "misc", Body::Literal("BB22")),
			("t2", "misc", Body::Literal("<ccc>")),
		]);
		let mut buf = ScratchBuffer::with_cursor("hello world", 6);
		let mut session = PreviewSession::begin(&mut buf, PickerOptions::default()).unwrap();

		for event in events {
			let template = event.map(|i| engine.template_at(i));
			session.on_candidate_changed(&mut buf, &mut engine, template.as_ref()).unwrap();
			let expected = match event {
				Some(i) => format!("hello {}world", bodies[i]),
				None => "hello world".to_string(),
			};
			prop_assert_eq!(buf.text(), expected);
		}

		session.finish(&mut buf, SessionOutcome::Cancelled);
		prop_assert_eq!(buf.text(), "hello world");
		prop_assert_eq!(buf.cursor(), 6);
	}
}
