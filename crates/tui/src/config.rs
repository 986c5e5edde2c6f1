use crate::style::ThemeMode;

/// Title of the palette border when none is configured.
pub const DEFAULT_PROMPT_TITLE: &str = "Search docs";
/// Text shown in place of results while the query is blank.
pub const PROMPT_STATE_TEXT: &str = "Type to search…";

/// Startup options for the terminal palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiOptions {
	/// Title rendered on the palette border.
	pub prompt_title: String,
	/// Query typed into the palette the first time it opens.
	pub initial_query: String,
	pub theme: ThemeMode,
	/// Open the palette immediately instead of waiting for the toggle.
	pub start_open: bool,
}

impl Default for UiOptions {
	fn default() -> Self {
		Self {
			prompt_title: DEFAULT_PROMPT_TITLE.to_string(),
			initial_query: String::new(),
			theme: ThemeMode::default(),
			start_open: true,
		}
	}
}
