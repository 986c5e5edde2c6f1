use docpal_tui::DEFAULT_PROMPT_TITLE;
use serde::Deserialize;

use crate::cli::CliArgs;

/// UI related configuration values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) theme: Option<String>,
	pub(super) prompt_title: Option<String>,
	pub(super) initial_query: Option<String>,
	pub(super) start_open: Option<bool>,
}

pub(super) struct UiResolution {
	pub(super) theme: Option<String>,
	pub(super) prompt_title: String,
	pub(super) initial_query: String,
	pub(super) start_open: bool,
}

impl UiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(theme) = cli.theme.clone() {
			self.theme = Some(theme);
		}
		if let Some(title) = cli.title.clone() {
			self.prompt_title = Some(title);
		}
		if let Some(query) = cli.initial_query.clone() {
			self.initial_query = Some(query);
		}
		if cli.closed {
			self.start_open = Some(false);
		}
	}

	/// Fill defaults. A blank title falls back to the default one.
	pub(super) fn finalize(self) -> UiResolution {
		let prompt_title = self
			.prompt_title
			.map(|title| title.trim().to_string())
			.filter(|title| !title.is_empty())
			.unwrap_or_else(|| DEFAULT_PROMPT_TITLE.to_string());

		UiResolution {
			theme: self.theme,
			prompt_title,
			initial_query: self.initial_query.unwrap_or_default(),
			start_open: self.start_open.unwrap_or(true),
		}
	}
}
