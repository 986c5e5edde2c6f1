use docpal_core::SearchConfig;
use serde::Deserialize;

use crate::cli::CliArgs;

/// Search tunables prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct SearchSection {
	pub(super) max_results: Option<usize>,
}

impl SearchSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(max_results) = cli.max_results {
			self.max_results = Some(max_results);
		}
	}

	pub(super) fn finalize(self) -> SearchConfig {
		let mut config = SearchConfig::default();
		if let Some(max_results) = self.max_results {
			config.max_results = max_results;
		}
		config
	}
}
