//! User-facing picker options.

use serde::Deserialize;

/// Behavior toggles recognized by the picker.
///
/// All fields default off/empty, so embedders can splice this table into
/// their own configuration files and omit what they do not set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct PickerOptions {
	/// Seed the query and region matching from the symbol under the cursor.
	pub use_thing_at_point: bool,

	/// Always replace the matched symbol, even when it does not equal the
	/// chosen candidate's name. Only meaningful with `use_thing_at_point`.
	pub always_overwrite_thing_at_point: bool,

	/// Groups whose templates never appear in the candidate list.
	pub excluded_groups: Vec<String>,
}
