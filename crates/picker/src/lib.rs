#![cfg_attr(test, allow(unused_crate_dependencies))]
//! Snippet selection with live in-buffer preview.
//!
//! The picker lets a user browse templates through an incremental-filter
//! selection UI while each highlighted candidate is materialized directly
//! in the document, then fully reverted before the next one renders. The
//! centerpiece is [`PreviewSession`]: every highlight change is a full
//! revert-then-reapply against the captured original text, never an
//! incremental diff, so no preview residue can accumulate and the user's
//! undo history stays clean.
//!
//! # Collaborators
//!
//! - the template engine, behind [`stencil_engine::TemplateEngine`];
//! - the selection frontend, behind [`CandidatePicker`], which owns the
//!   event loop and calls back on every highlight change;
//! - the document, behind [`stencil_text::TextBuffer`].
//!
//! [`run_picker`] wires the three together for the interactive command;
//! [`expand_named`] is the direct, no-UI entry point.

pub mod candidates;
pub mod controller;
pub mod driver;
pub mod error;
pub mod options;
pub mod region;
pub mod session;

#[cfg(test)]
mod tests;

pub use candidates::{CandidateList, CandidateRow, build_candidates};
pub use controller::{
	CandidatePicker, PickOutcome, PickerOutcome, PickerRequest, PreviewObserver, expand_named,
	run_picker,
};
pub use error::{PickerError, Result};
pub use options::PickerOptions;
pub use region::resolve_target;
pub use session::{PreviewSession, SessionOutcome};
