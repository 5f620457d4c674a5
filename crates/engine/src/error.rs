//! Error types for template expansion.

use thiserror::Error;

use crate::prompt::PromptKind;

/// Errors surfaced by template expansion.
#[derive(Debug, Error)]
pub enum ExpandError {
	/// The active prompt policy has no answer for this prompt shape.
	#[error("{kind} prompt cannot be answered unattended")]
	UnanswerablePrompt {
		/// Shape of the prompt that could not be answered.
		kind: PromptKind,
	},

	/// The engine rejected or failed the expansion.
	#[error("expansion failed: {0}")]
	Engine(String),
}
