use docpal_core::{
	EnsureVisible, Intent, ManifestSnapshot, Navigator, NoScroll, Palette, PaletteEvent,
	RecordKind, SearchConfig, SearchIndex, SearchSession, SearchableRecord, highlight,
};

const MANIFEST: &str = r#"{
	"pages": [
		{ "id": "start", "title": "Getting Started", "description": "Install Builder tooling", "href": "/docs/start", "section": "Guides" }
	],
	"agents": [
		{ "id": "builder", "name": "Builder", "description": "Implements PRDs", "href": "/agents/builder", "category": "Implementation" }
	],
	"scaffolds": [
		{ "id": "cli", "name": "CLI starter", "href": "/scaffolds/cli", "files": ["Cargo.toml", "src/main.rs"] }
	]
}"#;

fn snapshot() -> ManifestSnapshot {
	ManifestSnapshot::from_json_str(MANIFEST).expect("manifest parses")
}

#[derive(Default)]
struct Router(Vec<String>);

impl Navigator for Router {
	fn navigate(&mut self, record: &SearchableRecord) {
		self.0.push(record.target.to_string());
	}
}

#[derive(Default)]
struct Revealed(Vec<usize>);

impl EnsureVisible for Revealed {
	fn ensure_visible(&mut self, item: usize) {
		self.0.push(item);
	}
}

#[test]
fn title_match_outranks_description_match() {
	let index = SearchIndex::build(&snapshot());
	let session = SearchSession::with_query(index, SearchConfig::default(), "Builder");
	let titles: Vec<_> = session
		.results()
		.flattened()
		.map(|record| record.title.as_str())
		.collect();
	assert_eq!(titles, vec!["Builder", "Getting Started"]);
}

#[test]
fn empty_query_shows_the_prompt_state() {
	let index = SearchIndex::build(&snapshot());
	assert_eq!(index.len(), 3);
	let session = SearchSession::with_query(index, SearchConfig::default(), "");
	assert!(session.results().is_empty());
}

#[test]
fn move_down_on_the_last_item_is_clamped() {
	let index = SearchIndex::build(&snapshot());
	let mut session = SearchSession::with_query(index, SearchConfig::default(), "i");
	assert_eq!(session.results().len(), 3);

	let mut view = Revealed::default();
	session.dispatch(Intent::MoveDown, &mut view);
	session.dispatch(Intent::MoveDown, &mut view);
	assert_eq!(session.selected(), 2);
	session.dispatch(Intent::MoveDown, &mut view);
	assert_eq!(session.selected(), 2);
	assert_eq!(view.0, vec![1, 2]);
}

#[test]
fn scaffold_without_description_is_searchable_by_file_count() {
	let index = SearchIndex::build(&snapshot());
	let session = SearchSession::with_query(index, SearchConfig::default(), "2 files");
	let record = session.selected_record().expect("scaffold matches");
	assert_eq!(record.kind, RecordKind::Scaffold);
	assert_eq!(record.description, "Project scaffold with 2 files");
}

#[test]
fn category_is_searchable() {
	let index = SearchIndex::build(&snapshot());
	let session = SearchSession::with_query(index, SearchConfig::default(), "guides");
	assert_eq!(session.selected_record().map(|record| record.id.as_str()), Some("start"));
}

#[test]
fn full_palette_cycle_navigates_to_the_selection() {
	let mut palette = Palette::new(&snapshot(), SearchConfig::default());
	let mut router = Router::default();
	let mut view = Revealed::default();

	palette.toggle();
	assert!(palette.frame_rendered());
	palette.dispatch(Intent::QueryChanged("builder".into()), &mut view, &mut router);
	palette.dispatch(Intent::MoveDown, &mut view, &mut router);

	let session = palette.session().expect("palette is open");
	let selected = session.selected_record().expect("selection exists");
	let marked: Vec<_> = highlight(&selected.description, session.query())
		.into_iter()
		.filter(|segment| segment.matched)
		.map(|segment| segment.text)
		.collect();
	assert_eq!(marked, vec!["Builder"]);

	let event = palette.dispatch(Intent::Commit, &mut view, &mut router);
	assert!(matches!(event, PaletteEvent::Navigated(_)));
	assert_eq!(router.0, vec!["/docs/start".to_string()]);
	assert!(!palette.is_open());

	let event = palette.dispatch(Intent::MoveDown, &mut NoScroll, &mut router);
	assert_eq!(event, PaletteEvent::Ignored);
}
