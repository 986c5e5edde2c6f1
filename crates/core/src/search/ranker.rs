//! Priority ordering of matched records.

use crate::index::SearchIndex;

/// Order `candidates` by relevance and keep at most `limit` of them.
///
/// Title matches come before description or category matches, and an exact
/// title match comes before a partial one. The sort is stable, so remaining
/// ties keep index order.
pub fn rank(index: &SearchIndex, mut candidates: Vec<usize>, query: &str, limit: usize) -> Vec<usize> {
	let needle = query.to_lowercase();
	let entries = index.entries();

	candidates.sort_by_key(|&position| {
		let title = entries[position].title.as_str();
		let title_match = title.contains(needle.as_str());
		let exact = title_match && title == needle;
		(!title_match, !exact)
	});
	candidates.truncate(limit);
	candidates
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::record::{RecordKind, SearchableRecord};

	fn record(title: &str, description: &str) -> SearchableRecord {
		SearchableRecord::new(RecordKind::Page, title, title, description, "/")
	}

	#[test]
	fn title_matches_rank_above_description_matches() {
		let index = SearchIndex::from_records([
			record("Getting Started", "Install Builder tooling"),
			record("Builder", "Implements PRDs"),
		]);
		assert_eq!(rank(&index, vec![0, 1], "builder", 10), vec![1, 0]);
	}

	#[test]
	fn exact_titles_rank_above_partial_titles() {
		let index = SearchIndex::from_records([
			record("Builder Guide", ""),
			record("Mentions", "builder"),
			record("builder", ""),
		]);
		assert_eq!(rank(&index, vec![0, 1, 2], "Builder", 10), vec![2, 0, 1]);
	}

	#[test]
	fn ties_keep_index_order() {
		let index = SearchIndex::from_records([
			record("Alpha test", ""),
			record("Beta test", ""),
			record("Gamma test", ""),
		]);
		assert_eq!(rank(&index, vec![0, 1, 2], "test", 10), vec![0, 1, 2]);
	}

	#[test]
	fn results_are_capped() {
		let index = SearchIndex::from_records((0..25).map(|idx| record(&format!("Doc {idx}"), "")));
		let ranked = rank(&index, (0..25).collect(), "doc", 10);
		assert_eq!(ranked, (0..10).collect::<Vec<_>>());
	}
}
