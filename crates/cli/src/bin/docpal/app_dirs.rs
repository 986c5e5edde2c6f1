//! Directories docpal reads configuration from and writes logs to.
//!
//! Each location can be pinned with an environment variable; otherwise the
//! platform default from `directories` is used.

use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

const CONFIG_DIR_ENV: &str = "DOCPAL_CONFIG_DIR";
const DATA_DIR_ENV: &str = "DOCPAL_DATA_DIR";
const CACHE_DIR_ENV: &str = "DOCPAL_CACHE_DIR";

/// Where `config.toml` is looked up.
pub(crate) fn get_config_dir() -> Result<PathBuf> {
	resolve(CONFIG_DIR_ENV, ProjectDirs::config_local_dir)
}

/// Home of the default `manifest.json`.
pub(crate) fn get_data_dir() -> Result<PathBuf> {
	resolve(DATA_DIR_ENV, ProjectDirs::data_local_dir)
}

/// Receives `docpal.log`.
pub(crate) fn get_cache_dir() -> Result<PathBuf> {
	resolve(CACHE_DIR_ENV, ProjectDirs::cache_dir)
}

fn resolve(var: &str, platform: fn(&ProjectDirs) -> &Path) -> Result<PathBuf> {
	if let Some(dir) = override_from(env::var_os(var)) {
		return Ok(dir);
	}
	let dirs = ProjectDirs::from("io", "docpal", "docpal")
		.ok_or_else(|| anyhow!("unable to determine a home directory for docpal"))?;
	Ok(platform(&dirs).to_path_buf())
}

/// An empty override counts as unset.
fn override_from(value: Option<std::ffi::OsString>) -> Option<PathBuf> {
	value.filter(|value| !value.is_empty()).map(PathBuf::from)
}

#[cfg(test)]
mod tests {
	use std::ffi::OsString;

	use super::*;

	#[test]
	fn empty_override_is_ignored() {
		assert_eq!(override_from(None), None);
		assert_eq!(override_from(Some(OsString::new())), None);
		assert_eq!(
			override_from(Some(OsString::from("/tmp/docpal"))),
			Some(PathBuf::from("/tmp/docpal"))
		);
	}
}
