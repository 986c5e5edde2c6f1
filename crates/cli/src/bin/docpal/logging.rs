//! File-backed `tracing` setup. The terminal belongs to the palette, so log
//! lines go to `docpal.log` in the cache directory.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::app_dirs;

const LOG_ENV: &str = "DOCPAL_LOG";
const DEFAULT_FILTER: &str = "warn";
const LOG_FILE: &str = "docpal.log";

/// Install the global subscriber and return the log file path.
///
/// `DOCPAL_LOG` wins over `level`, which wins over the `warn` default.
pub(crate) fn initialize(level: Option<&str>) -> Result<PathBuf> {
	let filter = EnvFilter::try_from_env(LOG_ENV)
		.or_else(|_| EnvFilter::try_new(level.unwrap_or(DEFAULT_FILTER)))
		.with_context(|| format!("invalid log filter {:?}", level.unwrap_or(DEFAULT_FILTER)))?;

	let dir = app_dirs::get_cache_dir()?;
	fs::create_dir_all(&dir)
		.with_context(|| format!("failed to create log directory {}", dir.display()))?;
	let path = dir.join(LOG_FILE);
	let file = OpenOptions::new()
		.create(true)
		.append(true)
		.open(&path)
		.with_context(|| format!("failed to open log file {}", path.display()))?;

	tracing_subscriber::registry()
		.with(filter)
		.with(
			tracing_subscriber::fmt::layer()
				.with_target(true)
				.with_ansi(false)
				.with_writer(Mutex::new(file)),
		)
		.try_init()?;

	Ok(path)
}
