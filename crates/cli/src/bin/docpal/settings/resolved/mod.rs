use std::path::PathBuf;

use docpal_core::SearchConfig;
use docpal_tui::{ThemeMode, UiOptions, style};

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Where the manifest comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestSource {
	/// The sample manifest compiled into the binary.
	Demo,
	File(PathBuf),
}

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
	pub manifest: ManifestSource,
	pub search: SearchConfig,
	/// Theme name as given; validated against the built-in themes.
	pub theme: Option<String>,
	pub prompt_title: String,
	pub initial_query: String,
	pub start_open: bool,
}

impl ResolvedConfig {
	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		summary::print_summary(self);
	}

	pub(crate) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	#[must_use]
	pub fn theme_mode(&self) -> ThemeMode {
		self.theme
			.as_deref()
			.and_then(style::by_name)
			.unwrap_or_default()
	}

	/// Startup options for the terminal palette.
	#[must_use]
	pub fn ui_options(&self) -> UiOptions {
		UiOptions {
			prompt_title: self.prompt_title.clone(),
			initial_query: self.initial_query.clone(),
			theme: self.theme_mode(),
			start_open: self.start_open,
		}
	}
}
