//! The immutable, memoized record index.

use std::sync::Arc;

use tracing::debug;

use crate::manifest::ManifestSnapshot;
use crate::normalize;
use crate::record::SearchableRecord;

/// A record plus the lowercased fields the matcher compares against.
#[derive(Debug, Clone)]
pub(crate) struct IndexedRecord {
	pub(crate) record: SearchableRecord,
	pub(crate) title: String,
	pub(crate) description: String,
	pub(crate) category: Option<String>,
}

impl IndexedRecord {
	fn new(record: SearchableRecord) -> Self {
		Self {
			title: record.title.to_lowercase(),
			description: record.description.to_lowercase(),
			category: record.category.as_deref().map(str::to_lowercase),
			record,
		}
	}
}

/// Every normalized record in fixed source order.
///
/// Cloning shares the underlying storage; the index is never mutated after
/// it is built.
#[derive(Debug, Clone)]
pub struct SearchIndex {
	records: Arc<[IndexedRecord]>,
}

impl Default for SearchIndex {
	fn default() -> Self {
		Self {
			records: Arc::from(Vec::new()),
		}
	}
}

impl SearchIndex {
	/// Normalize and concatenate agents, skills, scaffolds and pages, matching
	/// [`RecordKind::ALL`](crate::record::RecordKind::ALL).
	pub fn build(snapshot: &ManifestSnapshot) -> Self {
		let records = snapshot
			.agents
			.iter()
			.map(normalize::agent)
			.chain(snapshot.skills.iter().map(normalize::skill))
			.chain(snapshot.scaffolds.iter().map(normalize::scaffold))
			.chain(snapshot.pages.iter().map(normalize::page));
		Self::from_records(records)
	}

	/// Build an index from already-normalized records, keeping their order.
	pub fn from_records(records: impl IntoIterator<Item = SearchableRecord>) -> Self {
		Self {
			records: records.into_iter().map(IndexedRecord::new).collect(),
		}
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.records.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}

	/// Record at `position` in index order.
	#[must_use]
	pub fn get(&self, position: usize) -> Option<&SearchableRecord> {
		self.records.get(position).map(|entry| &entry.record)
	}

	pub fn records(&self) -> impl ExactSizeIterator<Item = &SearchableRecord> {
		self.records.iter().map(|entry| &entry.record)
	}

	pub(crate) fn entries(&self) -> &[IndexedRecord] {
		&self.records
	}

	/// Whether two handles share the same storage.
	#[must_use]
	pub fn ptr_eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.records, &other.records)
	}
}

/// Memoizes [`SearchIndex::build`] per distinct manifest snapshot.
#[derive(Debug, Default)]
pub struct IndexCache {
	fingerprint: Option<u64>,
	index: SearchIndex,
	builds: usize,
}

impl IndexCache {
	pub fn new(snapshot: &ManifestSnapshot) -> Self {
		let mut cache = Self::default();
		cache.refresh(snapshot);
		cache
	}

	/// Rebuild the index if `snapshot` differs from the one last seen.
	///
	/// Returns `true` when a rebuild happened.
	pub fn refresh(&mut self, snapshot: &ManifestSnapshot) -> bool {
		let fingerprint = snapshot.fingerprint();
		if self.fingerprint == Some(fingerprint) {
			return false;
		}

		self.index = SearchIndex::build(snapshot);
		self.fingerprint = Some(fingerprint);
		self.builds += 1;
		debug!(
			records = self.index.len(),
			fingerprint = %format!("{fingerprint:016x}"),
			"rebuilt search index"
		);
		true
	}

	/// Return the index for `snapshot`, building it only when needed.
	pub fn get_or_build(&mut self, snapshot: &ManifestSnapshot) -> &SearchIndex {
		self.refresh(snapshot);
		&self.index
	}

	/// The most recently built index.
	#[must_use]
	pub fn index(&self) -> &SearchIndex {
		&self.index
	}

	/// Number of builds performed so far.
	#[must_use]
	pub fn builds(&self) -> usize {
		self.builds
	}
}
