//! State of one open/close cycle of the palette.

use tracing::debug;

use crate::index::SearchIndex;
use crate::record::SearchableRecord;
use crate::search::{SearchConfig, SearchResults, search};
use crate::selection::{EnsureVisible, Intent, SelectionController};

/// What the owner of a session should do after an intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
	/// Keep the session open.
	Continue,
	/// The user chose this record; close and navigate.
	Commit(SearchableRecord),
	/// The user dismissed the palette; close without navigating.
	Cancelled,
}

/// Query text, its results and the current selection.
///
/// Results are recomputed in full whenever the query changes, and the
/// selection is reset before any later intent can observe it.
#[derive(Debug, Clone)]
pub struct SearchSession {
	index: SearchIndex,
	config: SearchConfig,
	query: String,
	results: SearchResults,
	selection: SelectionController,
}

impl SearchSession {
	pub fn new(index: SearchIndex, config: SearchConfig) -> Self {
		Self {
			results: SearchResults::empty(index.clone()),
			index,
			config,
			query: String::new(),
			selection: SelectionController::default(),
		}
	}

	/// Open a session with `query` already typed.
	pub fn with_query(index: SearchIndex, config: SearchConfig, query: impl Into<String>) -> Self {
		let mut session = Self::new(index, config);
		session.query = query.into();
		session.recompute();
		session
	}

	#[must_use]
	pub fn query(&self) -> &str {
		&self.query
	}

	#[must_use]
	pub fn results(&self) -> &SearchResults {
		&self.results
	}

	/// Selected offset into the flattened list.
	#[must_use]
	pub fn selected(&self) -> usize {
		self.selection.selected()
	}

	#[must_use]
	pub fn selected_record(&self) -> Option<&SearchableRecord> {
		self.results.get(self.selection.selected())
	}

	/// Apply one intent. `view` is told to reveal the selection whenever it
	/// moves to an item that exists. A new result list always counts as a
	/// move, even when the selection was already at the top.
	pub fn dispatch(&mut self, intent: Intent, view: &mut impl EnsureVisible) -> SessionEvent {
		match intent {
			Intent::MoveDown => {
				let changed = self.selection.move_down(self.results.len());
				self.reveal_if(changed, view);
				SessionEvent::Continue
			}
			Intent::MoveUp => {
				let changed = self.selection.move_up();
				self.reveal_if(changed, view);
				SessionEvent::Continue
			}
			Intent::QueryChanged(query) => {
				self.query = query;
				self.recompute();
				self.reveal(view);
				SessionEvent::Continue
			}
			Intent::Commit => match self.selected_record() {
				Some(record) => {
					debug!(destination = %record.target, kind = %record.kind, "committed selection");
					SessionEvent::Commit(record.clone())
				}
				None => SessionEvent::Continue,
			},
			Intent::Cancel => {
				self.query.clear();
				self.recompute();
				SessionEvent::Cancelled
			}
		}
	}

	/// Swap in a rebuilt index and rerun the current query against it.
	pub fn replace_index(&mut self, index: SearchIndex, view: &mut impl EnsureVisible) {
		self.index = index;
		self.recompute();
		self.reveal(view);
	}

	/// Rerun the pipeline and reset the selection.
	fn recompute(&mut self) {
		self.results = search(&self.index, &self.query, &self.config);
		self.selection.reset();
	}

	fn reveal_if(&self, changed: bool, view: &mut impl EnsureVisible) {
		if changed {
			self.reveal(view);
		}
	}

	fn reveal(&self, view: &mut impl EnsureVisible) {
		if !self.results.is_empty() {
			view.ensure_visible(self.selection.selected());
		}
	}
}
