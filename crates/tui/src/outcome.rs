use docpal_core::SearchableRecord;

/// How an interactive run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteOutcome {
	/// Whether a record was committed.
	pub accepted: bool,
	/// The last query typed before the run ended.
	pub query: String,
	pub selection: Option<SearchableRecord>,
}

impl PaletteOutcome {
	#[must_use]
	pub fn committed(query: impl Into<String>, record: SearchableRecord) -> Self {
		Self {
			accepted: true,
			query: query.into(),
			selection: Some(record),
		}
	}

	#[must_use]
	pub fn dismissed(query: impl Into<String>) -> Self {
		Self {
			accepted: false,
			query: query.into(),
			selection: None,
		}
	}
}
