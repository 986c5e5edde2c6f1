use anyhow::{Context, Result};
use docpal_core::{ManifestSnapshot, Palette, SearchResults, SearchIndex, search};
use docpal_tui::{App, PaletteOutcome};
use tracing::info;

use crate::settings::{ManifestSource, ResolvedConfig};

const DEMO_MANIFEST: &str = include_str!("../../../assets/demo-manifest.json");

/// Read the manifest named by `source`.
pub(crate) fn load_snapshot(source: &ManifestSource) -> Result<ManifestSnapshot> {
	let snapshot = match source {
		ManifestSource::Demo => ManifestSnapshot::from_json_str(DEMO_MANIFEST)
			.context("bundled demo manifest is invalid")?,
		ManifestSource::File(path) => ManifestSnapshot::load(path).with_context(|| {
			format!(
				"no usable manifest at {}; pass --manifest PATH or --demo",
				path.display()
			)
		})?,
	};
	info!(entries = snapshot.len(), "manifest loaded");
	Ok(snapshot)
}

/// Run the query from the configuration once, without the terminal UI.
pub(crate) fn list(config: &ResolvedConfig, snapshot: &ManifestSnapshot) -> SearchResults {
	let index = SearchIndex::build(snapshot);
	search(&index, &config.initial_query, &config.search)
}

/// Coordinates building and running the interactive palette.
pub(crate) struct PaletteWorkflow {
	app: App,
}

impl PaletteWorkflow {
	pub(crate) fn from_config(config: &ResolvedConfig, snapshot: &ManifestSnapshot) -> Self {
		let palette = Palette::new(snapshot, config.search);
		let mut app = App::new(palette, config.ui_options());
		if let ManifestSource::File(path) = &config.manifest {
			app = app.with_manifest_path(path.clone());
		}
		Self { app }
	}

	pub(crate) fn run(self) -> Result<PaletteOutcome> {
		docpal_tui::run(self.app)
	}
}
