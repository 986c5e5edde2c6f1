use std::fmt;

/// Layer a validated setting was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) search_max_results: Option<SettingSource>,
	pub(crate) ui_theme: Option<SettingSource>,
}

impl ConfigSources {
	pub(crate) fn source_for_max_results(&self) -> SettingSource {
		self.search_max_results
			.clone()
			.unwrap_or(SettingSource::ConfigKey("search.max_results"))
	}

	pub(crate) fn source_for_theme(&self) -> SettingSource {
		self.ui_theme
			.clone()
			.unwrap_or(SettingSource::ConfigKey("ui.theme"))
	}
}
