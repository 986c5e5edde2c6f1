use std::path::PathBuf;

use docpal_core::{ManifestSnapshot, Navigator, Palette, SearchableRecord, Store};
use tracing::{debug, info, warn};

use crate::config::UiOptions;
use crate::input::QueryInput;
use crate::scroll::ResultsViewport;
use crate::style::{Theme, ThemeMode};

/// Receives committed records from the palette.
#[derive(Debug, Default)]
pub(crate) struct Router {
	pub(crate) committed: Option<SearchableRecord>,
}

impl Navigator for Router {
	fn navigate(&mut self, record: &SearchableRecord) {
		debug!(destination = %record.target, "routing to committed record");
		self.committed = Some(record.clone());
	}
}

/// Aggregate state shared across the terminal UI.
pub struct App {
	pub(crate) palette: Palette,
	pub(crate) input: QueryInput,
	pub(crate) viewport: ResultsViewport,
	pub(crate) theme_mode: Store<ThemeMode>,
	pub(crate) options: UiOptions,
	pub(crate) router: Router,
	/// Query as last typed, kept across cancel for the final outcome.
	pub(crate) last_query: String,
	/// Consumed by the first open.
	pub(crate) initial_query: Option<String>,
	pub(crate) manifest_path: Option<PathBuf>,
	/// One-line notice shown behind the palette.
	pub(crate) status: Option<String>,
}

impl App {
	/// Wrap `palette`, opening it right away when `options.start_open` is set.
	pub fn new(palette: Palette, options: UiOptions) -> Self {
		let mut theme_mode = Store::new(options.theme);
		theme_mode.subscribe(|mode| debug!(theme = %mode, "theme changed"));
		let initial_query = (!options.initial_query.is_empty()).then(|| options.initial_query.clone());

		let mut app = Self {
			palette,
			input: QueryInput::default(),
			viewport: ResultsViewport::new(),
			theme_mode,
			options,
			router: Router::default(),
			last_query: String::new(),
			initial_query,
			manifest_path: None,
			status: None,
		};
		if app.options.start_open {
			app.open_palette();
		}
		app
	}

	/// Allow reloading the manifest from `path` while running.
	#[must_use]
	pub fn with_manifest_path(mut self, path: impl Into<PathBuf>) -> Self {
		self.manifest_path = Some(path.into());
		self
	}

	#[must_use]
	pub fn palette(&self) -> &Palette {
		&self.palette
	}

	/// Text currently in the query field.
	#[must_use]
	pub fn query(&self) -> &str {
		self.input.text()
	}

	#[must_use]
	pub fn theme_mode(&self) -> ThemeMode {
		*self.theme_mode.get()
	}

	#[must_use]
	pub fn theme(&self) -> Theme {
		self.theme_mode.get().theme()
	}

	/// Latest status notice, if any.
	#[must_use]
	pub fn status(&self) -> Option<&str> {
		self.status.as_deref()
	}

	/// Notify the app that a frame was drawn, completing deferred focus.
	pub fn frame_rendered(&mut self) {
		if self.palette.frame_rendered() {
			self.input.set_focused(true);
		}
	}

	pub(crate) fn open_palette(&mut self) {
		let query = self.initial_query.take().unwrap_or_default();
		self.palette.open_with_query(&query);
		self.input.set_focused(false);
		self.input.set_text(query.clone());
		self.viewport.reset();
		self.last_query = query;
	}

	pub(crate) fn close_palette(&mut self) {
		self.palette.close();
		self.reset_input();
	}

	pub(crate) fn toggle_palette(&mut self) {
		if self.palette.is_open() {
			self.close_palette();
		} else {
			self.open_palette();
		}
	}

	pub(crate) fn reset_input(&mut self) {
		self.input.set_focused(false);
		self.input.clear();
	}

	/// Re-read the manifest file; the index is only rebuilt if it changed.
	pub(crate) fn reload_manifest(&mut self) {
		let Some(path) = self.manifest_path.as_ref() else {
			self.status = Some("No manifest file to reload".to_string());
			return;
		};

		match ManifestSnapshot::load(path) {
			Ok(snapshot) => {
				let rebuilt = self.palette.refresh(&snapshot, &mut self.viewport);
				info!(rebuilt, records = snapshot.len(), "manifest reloaded");
				let notice = if rebuilt {
					"Manifest reloaded"
				} else {
					"Manifest unchanged"
				};
				self.status = Some(notice.to_string());
			}
			Err(error) => {
				warn!(%error, "manifest reload failed");
				self.status = Some(error.to_string());
			}
		}
	}
}
