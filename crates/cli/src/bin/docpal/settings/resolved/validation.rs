use docpal_tui::style;

use super::{ConfigError, ConfigSources, ResolvedConfig};

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	if config.search.max_results == 0 {
		return Err(ConfigError::invalid(
			"search.max_results",
			"0",
			sources.source_for_max_results(),
			"must be greater than zero",
		));
	}

	let unknown_theme = config
		.theme
		.as_deref()
		.filter(|theme| style::by_name(theme).is_none());
	if let Some(theme) = unknown_theme {
		return Err(ConfigError::invalid(
			"ui.theme",
			theme,
			sources.source_for_theme(),
			format!("unknown theme; expected one of {}", style::names().join(", ")),
		));
	}

	Ok(())
}
