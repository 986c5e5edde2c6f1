//! Conversion of manifest collections into [`SearchableRecord`]s.
//!
//! Inputs are trusted to be well formed; validation belongs to whoever
//! produced the manifest.

use crate::manifest::{AgentEntry, PageEntry, ScaffoldEntry, SkillEntry};
use crate::record::{RecordKind, SearchableRecord, Target};

pub fn page(entry: &PageEntry) -> SearchableRecord {
	SearchableRecord {
		kind: RecordKind::Page,
		id: entry.id.clone(),
		title: entry.title.clone(),
		description: entry.description.clone(),
		target: Target::new(entry.href.as_str()),
		category: entry.section.clone(),
	}
}

pub fn agent(entry: &AgentEntry) -> SearchableRecord {
	SearchableRecord {
		kind: RecordKind::Agent,
		id: entry.id.clone(),
		title: entry.name.clone(),
		description: entry.description.clone(),
		target: Target::new(entry.href.as_str()),
		category: entry.category.clone(),
	}
}

pub fn skill(entry: &SkillEntry) -> SearchableRecord {
	SearchableRecord {
		kind: RecordKind::Skill,
		id: entry.id.clone(),
		title: entry.name.clone(),
		description: entry.description.clone(),
		target: Target::new(entry.href.as_str()),
		category: entry.category.clone(),
	}
}

/// Scaffolds without a usable description get one synthesized from the
/// number of files they generate.
pub fn scaffold(entry: &ScaffoldEntry) -> SearchableRecord {
	let description = entry
		.description
		.as_deref()
		.filter(|text| !text.trim().is_empty())
		.map(str::to_string)
		.unwrap_or_else(|| scaffold_description(entry.files.len()));

	SearchableRecord {
		kind: RecordKind::Scaffold,
		id: entry.id.clone(),
		title: entry.name.clone(),
		description,
		target: Target::new(entry.href.as_str()),
		category: entry.category.clone(),
	}
}

fn scaffold_description(file_count: usize) -> String {
	format!("Project scaffold with {file_count} files")
}
