//! Candidate projection for the selection frontend.

use rustc_hash::FxHashMap;
use stencil_engine::{Template, TemplateEngine};
use stencil_text::TextBuffer;

use crate::error::{PickerError, Result};
use crate::options::PickerOptions;

/// Display row handed to the selection frontend.
#[derive(Debug, Clone)]
pub struct CandidateRow {
	/// Unique display label; the frontend hands it back on confirm.
	pub label: String,
	/// Owning group, used for list grouping and annotation.
	pub group_label: String,
	/// The template this row stands for.
	pub template: Template,
}

/// Built candidate set: display rows plus the label reverse lookup.
#[derive(Debug, Clone, Default)]
pub struct CandidateList {
	rows: Vec<CandidateRow>,
	by_label: FxHashMap<String, usize>,
}

impl CandidateList {
	/// Rows in display order (grouped, then sorted by label).
	pub fn rows(&self) -> &[CandidateRow] {
		&self.rows
	}

	/// Maps a display label back to its template.
	pub fn lookup(&self, label: &str) -> Option<&Template> {
		self.by_label.get(label).map(|&i| &self.rows[i].template)
	}

	/// Resolves a template by display label, falling back to the bare
	/// template name when no label matches.
	pub fn lookup_name(&self, name: &str) -> Option<&Template> {
		if let Some(template) = self.lookup(name) {
			return Some(template);
		}
		self.rows
			.iter()
			.find(|row| row.template.name() == name)
			.map(|row| &row.template)
	}

	/// Number of rows.
	pub fn len(&self) -> usize {
		self.rows.len()
	}

	/// Returns true when the list holds no rows.
	pub fn is_empty(&self) -> bool {
		self.rows.is_empty()
	}
}

/// Projects the engine's applicable templates into grouped display rows.
///
/// Fails with [`PickerError::NoTemplates`] when nothing is applicable (or
/// everything applicable sits in an excluded group), before any document
/// mutation has happened. Templates sharing a name across groups get their
/// group appended to the label so labels stay unique; an exact duplicate
/// within one group keeps its first row only.
pub fn build_candidates(
	engine: &dyn TemplateEngine,
	buf: &dyn TextBuffer,
	options: &PickerOptions,
) -> Result<CandidateList> {
	let mut rows: Vec<CandidateRow> = Vec::new();
	for template in engine.applicable(buf) {
		let group_label = engine.group_of(&template).unwrap_or_default();
		if options.excluded_groups.contains(&group_label) {
			continue;
		}
		rows.push(CandidateRow {
			label: template.name().to_string(),
			group_label,
			template,
		});
	}

	if rows.is_empty() {
		return Err(PickerError::NoTemplates);
	}

	rows.sort_by(|a, b| {
		(a.group_label.as_str(), a.label.as_str()).cmp(&(b.group_label.as_str(), b.label.as_str()))
	});

	let mut name_counts: FxHashMap<&str, usize> = FxHashMap::default();
	for row in &rows {
		*name_counts.entry(row.template.name()).or_default() += 1;
	}
	let ambiguous: Vec<String> = name_counts
		.into_iter()
		.filter(|(_, count)| *count > 1)
		.map(|(name, _)| name.to_string())
		.collect();
	for row in &mut rows {
		if ambiguous.iter().any(|name| name == row.template.name()) {
			row.label = format!("{} [{}]", row.template.name(), row.group_label);
		}
	}

	let mut by_label = FxHashMap::default();
	let mut unique: Vec<CandidateRow> = Vec::with_capacity(rows.len());
	for row in rows {
		if by_label.contains_key(&row.label) {
			tracing::debug!(label = %row.label, "dropping duplicate candidate row");
			continue;
		}
		by_label.insert(row.label.clone(), unique.len());
		unique.push(row);
	}

	Ok(CandidateList { rows: unique, by_label })
}
