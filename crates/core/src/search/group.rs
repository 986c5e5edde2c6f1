//! Partition ranked matches into kind buckets and the navigation order.

use crate::index::SearchIndex;
use crate::record::RecordKind;

/// One non-empty display bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultGroup {
	pub kind: RecordKind,
	/// Index positions in rank order.
	pub positions: Vec<usize>,
}

/// Grouped display structure plus the flattened navigation list.
///
/// `flattened` is exactly the concatenation of every group's positions, so
/// "item `n`" means the same record in both views.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupedResults {
	pub groups: Vec<ResultGroup>,
	pub flattened: Vec<usize>,
}

/// Bucket `ranked` by kind, visiting kinds in [`RecordKind::ALL`] order.
pub fn group(index: &SearchIndex, ranked: &[usize]) -> GroupedResults {
	let mut grouped = GroupedResults::default();

	for kind in RecordKind::ALL {
		let positions: Vec<usize> = ranked
			.iter()
			.copied()
			.filter(|&position| index.get(position).is_some_and(|record| record.kind == kind))
			.collect();
		if positions.is_empty() {
			continue;
		}
		grouped.flattened.extend_from_slice(&positions);
		grouped.groups.push(ResultGroup { kind, positions });
	}

	grouped
}
