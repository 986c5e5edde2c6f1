//! Read-only snapshot of the documentation site's content collections.
//!
//! The manifest is produced by the site build and handed to the palette as
//! JSON. Every collection is optional so partial manifests still load.

use std::collections::hash_map::DefaultHasher;
use std::fs;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading a manifest from disk or text.
#[derive(Debug, Error)]
pub enum ManifestError {
	#[error("failed to read manifest {}: {source}", .path.display())]
	Read {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("failed to parse manifest {}: {source}", .path.display())]
	Parse {
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},

	#[error("failed to parse manifest: {0}")]
	Json(#[from] serde_json::Error),
}

/// A documentation page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageEntry {
	pub id: String,
	pub title: String,
	#[serde(default)]
	pub description: String,
	pub href: String,
	/// Navigation section the page lives under.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub section: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AgentEntry {
	pub id: String,
	pub name: String,
	#[serde(default)]
	pub description: String,
	pub href: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SkillEntry {
	pub id: String,
	pub name: String,
	#[serde(default)]
	pub description: String,
	pub href: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub category: Option<String>,
}

/// A project scaffold; `files` lists the paths it generates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScaffoldEntry {
	pub id: String,
	pub name: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	pub href: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub category: Option<String>,
	#[serde(default)]
	pub files: Vec<String>,
}

/// All content collections at one point in time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ManifestSnapshot {
	pub pages: Vec<PageEntry>,
	pub agents: Vec<AgentEntry>,
	pub skills: Vec<SkillEntry>,
	pub scaffolds: Vec<ScaffoldEntry>,
}

impl ManifestSnapshot {
	/// Parse a manifest from JSON text.
	pub fn from_json_str(text: &str) -> Result<Self, ManifestError> {
		Ok(serde_json::from_str(text)?)
	}

	/// Read and parse the manifest stored at `path`.
	pub fn load(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
		let path = path.as_ref();
		let text = fs::read_to_string(path).map_err(|source| ManifestError::Read {
			path: path.to_path_buf(),
			source,
		})?;
		serde_json::from_str(&text).map_err(|source| ManifestError::Parse {
			path: path.to_path_buf(),
			source,
		})
	}

	/// Total number of entries across every collection.
	#[must_use]
	pub fn len(&self) -> usize {
		self.pages.len() + self.agents.len() + self.skills.len() + self.scaffolds.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Digest of the snapshot contents, keyed on by the index cache.
	///
	/// Two snapshots with equal contents share a fingerprint within one
	/// process. It is not meant to be persisted.
	#[must_use]
	pub fn fingerprint(&self) -> u64 {
		let mut hasher = DefaultHasher::new();
		self.hash(&mut hasher);
		hasher.finish()
	}
}

#[cfg(test)]
mod tests {
	use std::io::Write;

	use super::*;

	const SAMPLE: &str = r#"{
		"pages": [
			{ "id": "start", "title": "Getting Started", "description": "Install Builder tooling", "href": "/docs/start", "section": "Guides" }
		],
		"agents": [
			{ "id": "builder", "name": "Builder", "description": "Implements PRDs", "href": "/agents/builder", "category": "implementation" }
		],
		"scaffolds": [
			{ "id": "web", "name": "Web App", "href": "/scaffolds/web", "files": ["index.html", "main.ts"] }
		]
	}"#;

	#[test]
	fn missing_collections_default_to_empty() {
		let manifest = ManifestSnapshot::from_json_str(SAMPLE).unwrap();
		assert_eq!(manifest.pages.len(), 1);
		assert_eq!(manifest.agents.len(), 1);
		assert!(manifest.skills.is_empty());
		assert_eq!(manifest.scaffolds[0].files.len(), 2);
		assert_eq!(manifest.scaffolds[0].description, None);
		assert_eq!(manifest.len(), 3);
	}

	#[test]
	fn equal_contents_share_a_fingerprint() {
		let first = ManifestSnapshot::from_json_str(SAMPLE).unwrap();
		let second = ManifestSnapshot::from_json_str(SAMPLE).unwrap();
		assert_eq!(first.fingerprint(), second.fingerprint());

		let mut changed = second.clone();
		changed.pages[0].title.push('!');
		assert_ne!(first.fingerprint(), changed.fingerprint());
	}

	#[test]
	fn reordering_a_collection_changes_the_fingerprint() {
		let mut manifest = ManifestSnapshot::from_json_str(SAMPLE).unwrap();
		manifest.pages.push(PageEntry {
			id: "deploy".into(),
			title: "Deploying".into(),
			description: String::new(),
			href: "/docs/deploy".into(),
			section: None,
		});
		let before = manifest.fingerprint();
		manifest.pages.reverse();
		assert_ne!(before, manifest.fingerprint());
		assert_eq!(manifest.fingerprint(), manifest.clone().fingerprint());
	}

	#[test]
	fn load_reports_the_failing_path() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("manifest.json");
		let mut file = fs::File::create(&path).unwrap();
		file.write_all(b"{ not json").unwrap();

		let err = ManifestSnapshot::load(&path).unwrap_err();
		assert!(matches!(err, ManifestError::Parse { .. }));
		assert!(err.to_string().contains("manifest.json"));

		let missing = ManifestSnapshot::load(dir.path().join("absent.json")).unwrap_err();
		assert!(matches!(missing, ManifestError::Read { .. }));
	}

	#[test]
	fn load_reads_valid_files() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("manifest.json");
		fs::write(&path, SAMPLE).unwrap();
		let manifest = ManifestSnapshot::load(&path).unwrap();
		assert_eq!(manifest.agents[0].name, "Builder");
	}
}
