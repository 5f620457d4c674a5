//! Prompt strategy injected into expansion.
//!
//! An expansion that wants input does not talk to a UI; it hands a
//! [`PromptRequest`] to whatever [`PromptPolicy`] the caller supplied.
//! [`Unattended`] answers from defaults and never blocks, which is what
//! makes preview transitions synchronous. Embedders provide an interactive
//! policy that routes to their real prompt UI for the final commit.

use std::fmt;

use crate::error::ExpandError;

/// A single interactive request issued by the engine mid-expansion.
#[derive(Debug)]
pub enum PromptRequest<'a> {
	/// Pick one option.
	Choice {
		prompt: &'a str,
		options: &'a [String],
		default: Option<&'a str>,
		initial: Option<&'a str>,
	},
	/// Pick any number of options.
	MultiChoice {
		prompt: &'a str,
		options: &'a [String],
		default: &'a [String],
		initial: Option<&'a str>,
	},
	/// Read an integer.
	Number { prompt: &'a str, default: Option<i64> },
	/// Free-form input with no default the policy could fall back to.
	Free { prompt: &'a str },
}

impl PromptRequest<'_> {
	/// The shape of this request.
	pub fn kind(&self) -> PromptKind {
		match self {
			Self::Choice { .. } => PromptKind::Choice,
			Self::MultiChoice { .. } => PromptKind::MultiChoice,
			Self::Number { .. } => PromptKind::Number,
			Self::Free { .. } => PromptKind::Free,
		}
	}
}

/// Shape of a prompt request, used in error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
	Choice,
	MultiChoice,
	Number,
	Free,
}

impl fmt::Display for PromptKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			Self::Choice => "choice",
			Self::MultiChoice => "multi-choice",
			Self::Number => "number",
			Self::Free => "free-form",
		};
		f.write_str(name)
	}
}

/// Answer to a [`PromptRequest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptAnswer {
	Text(String),
	Many(Vec<String>),
	Number(i64),
}

/// Strategy for answering the interactive prompts an expansion raises.
pub trait PromptPolicy {
	/// Answers `request`, or reports that this policy cannot.
	fn answer(&mut self, request: PromptRequest<'_>) -> Result<PromptAnswer, ExpandError>;
}

/// Any `FnMut` over a request is a policy, which is how embedders route
/// the final commit's prompts to their real UI without a dedicated type.
impl<F> PromptPolicy for F
where
	F: FnMut(PromptRequest<'_>) -> Result<PromptAnswer, ExpandError>,
{
	fn answer(&mut self, request: PromptRequest<'_>) -> Result<PromptAnswer, ExpandError> {
		self(request)
	}
}

/// Defaults-only policy used while previewing.
///
/// Choice and multi-choice requests answer with the supplied default, else
/// the caller-supplied initial text, else nothing; number requests answer
/// with the default, else 0. Free-form requests have no unattended answer
/// and surface as [`ExpandError::UnanswerablePrompt`].
#[derive(Debug, Default, Clone, Copy)]
pub struct Unattended;

impl PromptPolicy for Unattended {
	fn answer(&mut self, request: PromptRequest<'_>) -> Result<PromptAnswer, ExpandError> {
		match request {
			PromptRequest::Choice { default, initial, .. } => {
				Ok(PromptAnswer::Text(default.or(initial).unwrap_or("").to_string()))
			}
			PromptRequest::MultiChoice { default, initial, .. } => {
				if !default.is_empty() {
					Ok(PromptAnswer::Many(default.to_vec()))
				} else if let Some(initial) = initial {
					Ok(PromptAnswer::Many(vec![initial.to_string()]))
				} else {
					Ok(PromptAnswer::Many(Vec::new()))
				}
			}
			PromptRequest::Number { default, .. } => Ok(PromptAnswer::Number(default.unwrap_or(0))),
			PromptRequest::Free { .. } => Err(ExpandError::UnanswerablePrompt { kind: PromptKind::Free }),
		}
	}
}
