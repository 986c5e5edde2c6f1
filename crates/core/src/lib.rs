//! Search core for the `docpal` command palette.
//!
//! The crate turns a documentation manifest into an immutable index of
//! [`SearchableRecord`]s and runs the per-keystroke pipeline over it:
//! substring matching, ranking, grouping by [`RecordKind`], keyboard
//! selection and match highlighting. Nothing here knows about terminals or
//! browsers; rendering surfaces plug in through [`EnsureVisible`] and
//! [`Navigator`].

pub mod highlight;
pub mod index;
pub mod manifest;
pub mod normalize;
pub mod palette;
pub mod record;
pub mod search;
pub mod selection;
pub mod session;
pub mod store;

pub use crate::highlight::{Segment, highlight};
pub use crate::index::{IndexCache, SearchIndex};
pub use crate::manifest::{
	AgentEntry, ManifestError, ManifestSnapshot, PageEntry, ScaffoldEntry, SkillEntry,
};
pub use crate::palette::{Navigator, Palette, PaletteEvent};
pub use crate::record::{RecordKind, SearchableRecord, Target};
pub use crate::search::{
	DEFAULT_MAX_RESULTS, GroupedResults, ResultGroup, SearchConfig, SearchResults, search,
};
pub use crate::selection::{EnsureVisible, Intent, NoScroll, SelectionController};
pub use crate::session::{SearchSession, SessionEvent};
pub use crate::store::{Store, SubscriptionId};
