//! Per-keystroke search pipeline.
//!
//! A query flows through [`matcher`], [`ranker`] and [`group`] synchronously
//! and produces a [`SearchResults`]. The pipeline is cheap enough for a few
//! hundred records that it simply reruns in full on every edit.

pub mod group;
pub mod matcher;
pub mod ranker;

use serde::{Deserialize, Serialize};
use tracing::trace;

pub use group::{GroupedResults, ResultGroup};

use crate::index::SearchIndex;
use crate::record::{RecordKind, SearchableRecord};

/// Number of results shown when not configured otherwise.
pub const DEFAULT_MAX_RESULTS: usize = 10;

/// Tunables for the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
	/// Display cap applied after ranking.
	pub max_results: usize,
}

impl Default for SearchConfig {
	fn default() -> Self {
		Self {
			max_results: DEFAULT_MAX_RESULTS,
		}
	}
}

/// Ranked, grouped matches for one query.
///
/// Holds a handle to the index it was computed against so positions always
/// resolve to the records they were derived from.
#[derive(Debug, Clone, Default)]
pub struct SearchResults {
	index: SearchIndex,
	grouped: GroupedResults,
}

impl SearchResults {
	/// Results with nothing in them, used for the prompt state.
	pub fn empty(index: SearchIndex) -> Self {
		Self {
			index,
			grouped: GroupedResults::default(),
		}
	}

	/// Length of the flattened navigation list.
	#[must_use]
	pub fn len(&self) -> usize {
		self.grouped.flattened.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.grouped.flattened.is_empty()
	}

	/// Record at flattened position `item`.
	#[must_use]
	pub fn get(&self, item: usize) -> Option<&SearchableRecord> {
		let position = *self.grouped.flattened.get(item)?;
		self.index.get(position)
	}

	/// Records in navigation order.
	pub fn flattened(&self) -> impl Iterator<Item = &SearchableRecord> {
		self.grouped
			.flattened
			.iter()
			.filter_map(|&position| self.index.get(position))
	}

	/// Display groups in kind order, each with its records in rank order.
	pub fn groups(&self) -> impl Iterator<Item = (RecordKind, Vec<&SearchableRecord>)> {
		self.grouped.groups.iter().map(|group| {
			let records = group
				.positions
				.iter()
				.filter_map(|&position| self.index.get(position))
				.collect();
			(group.kind, records)
		})
	}

	/// Number of items in each group, in display order.
	pub fn group_sizes(&self) -> impl Iterator<Item = (RecordKind, usize)> + '_ {
		self.grouped
			.groups
			.iter()
			.map(|group| (group.kind, group.positions.len()))
	}

	#[must_use]
	pub fn grouped(&self) -> &GroupedResults {
		&self.grouped
	}

	#[must_use]
	pub fn index(&self) -> &SearchIndex {
		&self.index
	}
}

/// Match, rank and group `query` against `index`.
pub fn search(index: &SearchIndex, query: &str, config: &SearchConfig) -> SearchResults {
	let candidates = matcher::match_query(index, query);
	let matched = candidates.len();
	let ranked = ranker::rank(index, candidates, query, config.max_results);
	let grouped = group::group(index, &ranked);
	trace!(query, matched, shown = grouped.flattened.len(), "search pipeline ran");

	SearchResults {
		index: index.clone(),
		grouped,
	}
}
