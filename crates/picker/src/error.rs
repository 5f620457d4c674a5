//! Error types for the picker.

use stencil_engine::ExpandError;
use thiserror::Error;

/// Errors surfaced by the snippet picker.
#[derive(Debug, Error)]
pub enum PickerError {
	/// No templates are applicable in the current context.
	#[error("no snippets available in this context")]
	NoTemplates,

	/// The target document refuses edits.
	#[error("buffer is read-only")]
	ReadOnly,

	/// A label has no matching candidate row.
	#[error("unknown snippet: {0}")]
	UnknownLabel(String),

	/// Template expansion failed.
	#[error(transparent)]
	Expand(#[from] ExpandError),

	/// The selection frontend failed.
	#[error("selection frontend error: {0}")]
	Frontend(String),
}

/// Result type for picker operations.
pub type Result<T> = std::result::Result<T, PickerError>;
