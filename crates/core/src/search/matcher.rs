//! Case-insensitive substring filter over the index.

use crate::index::{IndexedRecord, SearchIndex};

/// Positions of every record whose title, description or category contains
/// `query`, in index order.
///
/// An empty or whitespace-only query matches nothing.
pub fn match_query(index: &SearchIndex, query: &str) -> Vec<usize> {
	if query.trim().is_empty() {
		return Vec::new();
	}

	let needle = query.to_lowercase();
	index
		.entries()
		.iter()
		.enumerate()
		.filter(|(_, entry)| matches(entry, &needle))
		.map(|(position, _)| position)
		.collect()
}

/// `needle` must already be lowercase.
pub(crate) fn matches(entry: &IndexedRecord, needle: &str) -> bool {
	entry.title.contains(needle)
		|| entry.description.contains(needle)
		|| entry
			.category
			.as_deref()
			.is_some_and(|category| category.contains(needle))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::record::{RecordKind, SearchableRecord};

	fn index() -> SearchIndex {
		SearchIndex::from_records([
			SearchableRecord::new(RecordKind::Agent, "builder", "Builder", "Implements PRDs", "/a/builder"),
			SearchableRecord::new(
				RecordKind::Page,
				"start",
				"Getting Started",
				"Install Builder tooling",
				"/docs/start",
			),
			SearchableRecord::new(RecordKind::Skill, "lint", "Lint", "Static checks", "/s/lint")
				.with_category("Quality"),
		])
	}

	#[test]
	fn blank_queries_match_nothing() {
		let index = index();
		assert!(match_query(&index, "").is_empty());
		assert!(match_query(&index, "   \t").is_empty());
	}

	#[test]
	fn matching_ignores_case_and_keeps_index_order() {
		assert_eq!(match_query(&index(), "bUiLdEr"), vec![0, 1]);
	}

	#[test]
	fn substring_needs_no_word_boundary() {
		assert_eq!(match_query(&index(), "ildi"), Vec::<usize>::new());
		assert_eq!(match_query(&index(), "uild"), vec![0, 1]);
		assert_eq!(match_query(&index(), "ements"), vec![0]);
	}

	#[test]
	fn category_is_searchable() {
		assert_eq!(match_query(&index(), "qual"), vec![2]);
	}

	#[test]
	fn query_whitespace_is_part_of_the_needle() {
		assert_eq!(match_query(&index(), "getting "), vec![1]);
		assert!(match_query(&index(), " lint").is_empty());
	}
}
