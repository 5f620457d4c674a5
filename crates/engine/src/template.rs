/// Opaque handle to a template owned by the expansion engine.
///
/// The picker core only ever reads the name; the body and any engine
/// bookkeeping stay behind the [`TemplateEngine`](crate::TemplateEngine)
/// boundary. The id is engine-assigned and unique within one engine
/// instance, which is what keeps equally-named templates from different
/// groups distinct.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Template {
	id: u32,
	name: String,
}

impl Template {
	/// Creates a handle. Engines call this; the picker core never does.
	pub fn new(id: u32, name: impl Into<String>) -> Self {
		Self { id, name: name.into() }
	}

	/// Engine-assigned identity.
	pub fn id(&self) -> u32 {
		self.id
	}

	/// Display name, also the identifier thing-at-point matching compares
	/// against.
	pub fn name(&self) -> &str {
		&self.name
	}
}
