//! Contract surface for the external template-expansion engine.
//!
//! The picker core never stores template bodies or performs expansion
//! itself. It drives an engine through [`TemplateEngine`], and the engine
//! routes every interactive question it would normally ask through the
//! [`PromptPolicy`](prompt::PromptPolicy) the caller injected: the
//! defaults-only [`Unattended`](prompt::Unattended) policy while previewing,
//! the embedder's real UI on final commit.

pub mod error;
pub mod prompt;
pub mod template;

pub use error::ExpandError;
pub use prompt::{PromptAnswer, PromptKind, PromptPolicy, PromptRequest, Unattended};
pub use template::Template;

use stencil_text::{Span, TextBuffer};

/// Capability contract for the external expansion engine.
pub trait TemplateEngine {
	/// Templates applicable in the buffer's current editing context.
	fn applicable(&self, buf: &dyn TextBuffer) -> Vec<Template>;

	/// Owning group label for a template.
	///
	/// When a template is ambiguously owned, the first owning group wins.
	fn group_of(&self, template: &Template) -> Option<String>;

	/// Expands `template` over `span`, issuing prompts through `prompts`.
	///
	/// A non-empty active selection is the text to overwrite; with no
	/// selection the expansion is inserted at the cursor. The engine must
	/// return once the document reflects the finished expansion and must
	/// never block on input `prompts` cannot answer.
	fn expand(
		&mut self,
		buf: &mut dyn TextBuffer,
		template: &Template,
		span: Span,
		prompts: &mut dyn PromptPolicy,
	) -> Result<(), ExpandError>;

	/// Aborts any in-flight stateful sub-session a previous expansion left
	/// behind (e.g. multi-field placeholders still active).
	///
	/// Called before the revert that precedes a final commit. Engines
	/// without nested sub-sessions keep the default no-op.
	fn abort_pending(&mut self, buf: &mut dyn TextBuffer) {
		let _ = buf;
	}
}
