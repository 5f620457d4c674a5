//! Core text types for the snippet picker: spans, the buffer capability
//! surface, and a rope-backed scratch buffer.
//!
//! The picker never owns a document. Everything it does goes through the
//! [`TextBuffer`] trait, which an embedding editor implements over its own
//! buffer type. [`ScratchBuffer`] is the reference implementation used for
//! scratch documents and by the test suites.

pub mod buffer;
pub mod scratch;
pub mod span;
pub mod word;

pub use buffer::TextBuffer;
pub use scratch::ScratchBuffer;
pub use span::{CharIdx, Span};
pub use word::is_symbol_char;
