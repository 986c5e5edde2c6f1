use std::env;
use std::path::PathBuf;

use anyhow::{Error, Result};
use serde::Deserialize;

use crate::app_dirs;
use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ManifestSource, ResolvedConfig, SettingSource};

mod search;
mod ui;

use search::SearchSection;
use ui::UiSection;

const DEFAULT_MANIFEST_FILE: &str = "manifest.json";

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	manifest: ManifestSection,
	search: SearchSection,
	ui: UiSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ManifestSection {
	path: Option<PathBuf>,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(path) = cli.manifest.clone() {
			self.manifest.path = Some(path);
		}
		self.search.apply_cli_overrides(cli);
		self.ui.apply_cli_overrides(cli);
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			search_max_results: detect_source(
				cli.max_results.is_some(),
				self.search.max_results.is_some(),
				"DOCPAL__SEARCH__MAX_RESULTS",
				"--max-results",
				"search.max_results",
			),
			ui_theme: detect_source(
				cli.theme.is_some(),
				self.ui.theme.is_some(),
				"DOCPAL__UI__THEME",
				"--theme",
				"ui.theme",
			),
		};

		let manifest = if cli.demo {
			ManifestSource::Demo
		} else {
			ManifestSource::File(resolve_manifest_path(self.manifest.path)?)
		};
		let search = self.search.finalize();
		let ui = self.ui.finalize();

		let config = ResolvedConfig {
			manifest,
			search,
			theme: ui.theme,
			prompt_title: ui.prompt_title,
			initial_query: ui.initial_query,
			start_open: ui.start_open,
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

/// Fall back to `manifest.json` in the data directory.
fn resolve_manifest_path(path: Option<PathBuf>) -> Result<PathBuf> {
	match path {
		Some(path) => Ok(path),
		None => Ok(app_dirs::get_data_dir()?.join(DEFAULT_MANIFEST_FILE)),
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}
