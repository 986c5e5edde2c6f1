//! Open/close lifecycle of the command palette widget.
//!
//! [`Palette`] is the composition root for one widget instance. It owns the
//! memoized index, the visibility store, the live [`SearchSession`] (only
//! while open) and the deferred input focus.

use tracing::{debug, info};

use crate::index::{IndexCache, SearchIndex};
use crate::manifest::ManifestSnapshot;
use crate::record::SearchableRecord;
use crate::search::SearchConfig;
use crate::selection::{EnsureVisible, Intent};
use crate::session::{SearchSession, SessionEvent};
use crate::store::Store;

/// Receives the committed record; typically a router.
pub trait Navigator {
	fn navigate(&mut self, record: &SearchableRecord);
}

impl<T: Navigator + ?Sized> Navigator for &mut T {
	fn navigate(&mut self, record: &SearchableRecord) {
		(**self).navigate(record);
	}
}

/// Outcome of [`Palette::dispatch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteEvent {
	/// The palette is closed; the intent was dropped.
	Ignored,
	/// The session handled the intent and stays open.
	Updated,
	/// A record was handed to the navigator and the palette closed.
	Navigated(SearchableRecord),
	/// The palette closed without navigating.
	Closed,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Focus {
	pending: bool,
	focused: bool,
}

#[derive(Debug)]
pub struct Palette {
	cache: IndexCache,
	config: SearchConfig,
	visible: Store<bool>,
	session: Option<SearchSession>,
	focus: Focus,
}

impl Palette {
	/// Build the index for `snapshot`; the palette starts closed.
	pub fn new(snapshot: &ManifestSnapshot, config: SearchConfig) -> Self {
		Self {
			cache: IndexCache::new(snapshot),
			config,
			visible: Store::new(false),
			session: None,
			focus: Focus::default(),
		}
	}

	#[must_use]
	pub fn is_open(&self) -> bool {
		*self.visible.get()
	}

	/// Visibility as an observable store.
	pub fn visibility(&self) -> &Store<bool> {
		&self.visible
	}

	pub fn visibility_mut(&mut self) -> &mut Store<bool> {
		&mut self.visible
	}

	#[must_use]
	pub fn session(&self) -> Option<&SearchSession> {
		self.session.as_ref()
	}

	#[must_use]
	pub fn index(&self) -> &SearchIndex {
		self.cache.index()
	}

	#[must_use]
	pub fn config(&self) -> &SearchConfig {
		&self.config
	}

	/// Open with an empty query. No-op if already open.
	pub fn open(&mut self) {
		self.open_with_query("");
	}

	/// Open with `query` pre-filled. No-op if already open.
	pub fn open_with_query(&mut self, query: &str) {
		if self.is_open() {
			return;
		}
		let index = self.cache.index().clone();
		self.session = Some(if query.is_empty() {
			SearchSession::new(index, self.config)
		} else {
			SearchSession::with_query(index, self.config, query)
		});
		self.focus = Focus {
			pending: true,
			focused: false,
		};
		self.visible.set(true);
		debug!(records = self.cache.index().len(), "palette opened");
	}

	/// Close and discard the session.
	pub fn close(&mut self) {
		if !self.is_open() {
			return;
		}
		self.session = None;
		self.focus = Focus::default();
		self.visible.set(false);
		debug!("palette closed");
	}

	/// The global open/close shortcut.
	pub fn toggle(&mut self) {
		if self.is_open() {
			self.close();
		} else {
			self.open();
		}
	}

	/// Whether the query field currently holds input focus.
	#[must_use]
	pub fn input_focused(&self) -> bool {
		self.focus.focused
	}

	/// Called by the frontend after each rendered frame. Completes the focus
	/// scheduled by [`open`](Self::open) so it never lands on an input that
	/// has not been drawn yet. Returns `true` on the frame focus was applied.
	pub fn frame_rendered(&mut self) -> bool {
		if !self.focus.pending {
			return false;
		}
		self.focus = Focus {
			pending: false,
			focused: true,
		};
		true
	}

	/// Route an intent to the open session.
	pub fn dispatch(
		&mut self,
		intent: Intent,
		view: &mut impl EnsureVisible,
		navigator: &mut impl Navigator,
	) -> PaletteEvent {
		let Some(session) = self.session.as_mut() else {
			return PaletteEvent::Ignored;
		};

		match session.dispatch(intent, view) {
			SessionEvent::Continue => PaletteEvent::Updated,
			SessionEvent::Commit(record) => {
				info!(destination = %record.target, title = %record.title, "navigating");
				navigator.navigate(&record);
				self.close();
				PaletteEvent::Navigated(record)
			}
			SessionEvent::Cancelled => {
				self.close();
				PaletteEvent::Closed
			}
		}
	}

	/// Adopt a new manifest snapshot. The index is rebuilt only if the
	/// contents changed, in which case an open session reruns its query.
	pub fn refresh(&mut self, snapshot: &ManifestSnapshot, view: &mut impl EnsureVisible) -> bool {
		if !self.cache.refresh(snapshot) {
			return false;
		}
		if let Some(session) = self.session.as_mut() {
			session.replace_index(self.cache.index().clone(), view);
		}
		true
	}
}
