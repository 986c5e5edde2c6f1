//! The uniform record shape every manifest collection is normalized into.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Closed set of record categories.
///
/// Declaration order is significant: it is the display grouping order and the
/// keyboard navigation order. Iterate with [`RecordKind::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
	Agent,
	Skill,
	Scaffold,
	Page,
}

impl RecordKind {
	/// Every kind in canonical order.
	pub const ALL: [RecordKind; 4] = [
		RecordKind::Agent,
		RecordKind::Skill,
		RecordKind::Scaffold,
		RecordKind::Page,
	];

	/// Stable lowercase identifier, also used in serialized output.
	#[must_use]
	pub fn id(self) -> &'static str {
		match self {
			RecordKind::Page => "page",
			RecordKind::Agent => "agent",
			RecordKind::Skill => "skill",
			RecordKind::Scaffold => "scaffold",
		}
	}

	/// Plural heading shown above a result group.
	#[must_use]
	pub fn label(self) -> &'static str {
		match self {
			RecordKind::Page => "Pages",
			RecordKind::Agent => "Agents",
			RecordKind::Skill => "Skills",
			RecordKind::Scaffold => "Scaffolds",
		}
	}
}

impl fmt::Display for RecordKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.id())
	}
}

/// Opaque navigation destination handed back on commit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Target(String);

impl Target {
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	#[must_use]
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for Target {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<&str> for Target {
	fn from(value: &str) -> Self {
		Self::new(value)
	}
}

impl From<String> for Target {
	fn from(value: String) -> Self {
		Self(value)
	}
}

/// The unit of search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchableRecord {
	pub kind: RecordKind,
	/// Identifier from the source collection.
	pub id: String,
	/// Primary match field and highest ranking weight.
	pub title: String,
	pub description: String,
	pub target: Target,
	/// Short sub-type tag, searchable and displayed as a badge.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub category: Option<String>,
}

impl SearchableRecord {
	pub fn new(
		kind: RecordKind,
		id: impl Into<String>,
		title: impl Into<String>,
		description: impl Into<String>,
		target: impl Into<Target>,
	) -> Self {
		Self {
			kind,
			id: id.into(),
			title: title.into(),
			description: description.into(),
			target: target.into(),
			category: None,
		}
	}

	#[must_use]
	pub fn with_category(mut self, category: impl Into<String>) -> Self {
		self.category = Some(category.into());
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn kinds_are_ordered_like_their_declaration() {
		let mut sorted = RecordKind::ALL;
		sorted.sort();
		assert_eq!(sorted, RecordKind::ALL);
		assert!(RecordKind::Agent < RecordKind::Page);
	}

	#[test]
	fn kind_serializes_as_lowercase_id() {
		let json = serde_json::to_string(&RecordKind::Scaffold).unwrap();
		assert_eq!(json, "\"scaffold\"");
		let kind: RecordKind = serde_json::from_str("\"agent\"").unwrap();
		assert_eq!(kind, RecordKind::Agent);
	}

	#[test]
	fn target_is_transparent_in_json() {
		let record = SearchableRecord::new(RecordKind::Page, "intro", "Intro", "", "/docs/intro");
		let value = serde_json::to_value(&record).unwrap();
		assert_eq!(value["target"], "/docs/intro");
		assert!(value.get("category").is_none());
	}
}
