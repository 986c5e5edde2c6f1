use docpal_core::{ManifestSnapshot, Palette, SearchConfig};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{App, PaletteOutcome, ThemeMode, UiOptions};

const MANIFEST: &str = r#"{
	"agents": [
		{ "id": "builder", "name": "Builder", "description": "Implements PRDs", "href": "/agents/builder", "category": "Implementation" }
	],
	"skills": [
		{ "id": "review", "name": "Review", "description": "Reviews builder output", "href": "/skills/review" }
	],
	"pages": [
		{ "id": "start", "title": "Getting Started", "description": "Install Builder tooling", "href": "/docs/start" }
	]
}"#;

fn app_with(manifest: &str, options: UiOptions) -> App {
	let snapshot = ManifestSnapshot::from_json_str(manifest).expect("manifest parses");
	App::new(Palette::new(&snapshot, SearchConfig::default()), options)
}

fn app() -> App {
	app_with(MANIFEST, UiOptions::default())
}

fn draw(app: &mut App, width: u16, height: u16) -> String {
	let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("terminal");
	terminal
		.draw(|frame| app.draw(frame))
		.expect("draw frame");
	app.frame_rendered();
	buffer_to_string(terminal.backend().buffer())
}

fn buffer_to_string(buf: &Buffer) -> String {
	let mut lines = Vec::new();
	for y in 0..buf.area.height {
		let mut line = String::new();
		for x in 0..buf.area.width {
			line.push_str(buf[(x, y)].symbol());
		}
		lines.push(line);
	}
	lines.join("\n")
}

/// Text between the palette's side borders on the row containing `needle`.
fn palette_row(screen: &str, needle: &str) -> Option<String> {
	let line = screen.lines().find(|line| line.contains(needle))?;
	let inner = line.split('│').nth(1)?;
	Some(inner.trim_end().to_string())
}

fn press(app: &mut App, code: KeyCode) -> Option<PaletteOutcome> {
	app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn ctrl(app: &mut App, ch: char) -> Option<PaletteOutcome> {
	app.handle_key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL))
}

fn many_skills(count: usize) -> String {
	let skills: Vec<String> = (0..count)
		.map(|idx| {
			format!(r#"{{ "id": "s{idx}", "name": "Skill {idx}", "description": "", "href": "/skills/{idx}" }}"#)
		})
		.collect();
	format!(r#"{{ "skills": [{}] }}"#, skills.join(","))
}

fn type_text(app: &mut App, text: &str) {
	for ch in text.chars() {
		assert!(press(app, KeyCode::Char(ch)).is_none());
	}
}

#[test]
fn blank_query_shows_the_prompt_state() {
	let mut app = app();
	let screen = draw(&mut app, 60, 16);
	assert!(screen.contains(" Search docs "));
	assert!(screen.contains("❯"));
	assert!(screen.contains("Type to search…"));
	assert!(!screen.contains("Agents"));
}

#[test]
fn typed_query_renders_grouped_rows() {
	let mut app = app();
	draw(&mut app, 60, 16);
	type_text(&mut app, "builder");
	let screen = draw(&mut app, 60, 16);

	let agents = screen.find("Agents").expect("agents header");
	let skills = screen.find("Skills").expect("skills header");
	let pages = screen.find("Pages").expect("pages header");
	assert!(agents < skills && skills < pages);

	let selected = palette_row(&screen, "▶").expect("selected row");
	insta::assert_snapshot!(selected, @"▶ Builder  Implements PRDs [Implementation]");
	let other = palette_row(&screen, "Getting Started").expect("page row");
	insta::assert_snapshot!(other, @"  Getting Started  Install Builder tooling");
}

#[test]
fn commit_returns_the_selected_record() {
	let mut app = app();
	draw(&mut app, 60, 16);
	type_text(&mut app, "builder");
	assert!(press(&mut app, KeyCode::Down).is_none());

	let outcome = press(&mut app, KeyCode::Enter).expect("commit ends the run");
	assert!(outcome.accepted);
	assert_eq!(outcome.query, "builder");
	let selection = outcome.selection.expect("selection");
	assert_eq!(selection.target.as_str(), "/skills/review");
	assert!(!app.palette().is_open());
	assert_eq!(app.query(), "");
}

#[test]
fn enter_without_results_keeps_the_palette_open() {
	let mut app = app();
	draw(&mut app, 60, 16);
	type_text(&mut app, "zzz");
	assert!(press(&mut app, KeyCode::Enter).is_none());
	assert!(app.palette().is_open());

	let screen = draw(&mut app, 60, 16);
	assert!(screen.contains("No results for \"zzz\""));
}

#[test]
fn cancel_closes_and_quit_reports_the_last_query() {
	let mut app = app();
	draw(&mut app, 60, 16);
	type_text(&mut app, "rev");
	assert!(press(&mut app, KeyCode::Esc).is_none());
	assert!(!app.palette().is_open());

	let screen = draw(&mut app, 60, 16);
	assert!(screen.contains("Ctrl-K search"));
	assert!(!screen.contains("Search docs"));

	let outcome = press(&mut app, KeyCode::Char('q')).expect("q quits while closed");
	assert_eq!(outcome, PaletteOutcome::dismissed("rev"));
}

#[test]
fn keys_before_the_first_frame_are_dropped() {
	let mut app = app();
	assert!(!app.palette().input_focused());
	press(&mut app, KeyCode::Char('x'));
	assert_eq!(app.query(), "");

	draw(&mut app, 60, 16);
	assert!(app.palette().input_focused());
	press(&mut app, KeyCode::Char('x'));
	assert_eq!(app.query(), "x");
}

#[test]
fn toggle_reopens_with_a_fresh_session() {
	let mut app = app();
	draw(&mut app, 60, 16);
	type_text(&mut app, "builder");

	assert!(ctrl(&mut app, 'k').is_none());
	assert!(!app.palette().is_open());
	assert!(ctrl(&mut app, 'k').is_none());
	assert!(app.palette().is_open());
	assert_eq!(app.query(), "");
	assert_eq!(app.palette().session().map(|session| session.query()), Some(""));
}

#[test]
fn closed_start_waits_for_the_toggle() {
	let options = UiOptions {
		start_open: false,
		initial_query: "review".to_string(),
		..UiOptions::default()
	};
	let mut app = app_with(MANIFEST, options);
	let screen = draw(&mut app, 60, 16);
	assert!(screen.contains("docpal"));
	assert!(!app.palette().is_open());

	ctrl(&mut app, 'k');
	assert_eq!(app.query(), "review");
	let screen = draw(&mut app, 60, 16);
	assert!(screen.contains("▶ Review"));
}

#[test]
fn theme_toggle_flips_the_mode() {
	let mut app = app();
	assert_eq!(app.theme_mode(), ThemeMode::Dark);
	ctrl(&mut app, 't');
	assert_eq!(app.theme_mode(), ThemeMode::Light);
	assert_eq!(app.theme(), ThemeMode::Light.theme());
}

#[test]
fn selection_stays_visible_in_a_short_viewport() {
	let mut app = app_with(&many_skills(10), UiOptions::default());

	draw(&mut app, 60, 10);
	type_text(&mut app, "skill");
	for _ in 0..6 {
		press(&mut app, KeyCode::Down);
	}
	let screen = draw(&mut app, 60, 10);

	assert!(screen.contains("▶ Skill 6"));
	assert!(screen.contains("Skill 3"));
	assert!(!screen.contains("Skill 2"));
	assert!(!screen.contains("Skills"));
}

#[test]
fn results_returning_after_no_matches_scroll_back_to_the_top() {
	let mut app = app_with(&many_skills(10), UiOptions::default());

	draw(&mut app, 60, 10);
	type_text(&mut app, "skill");
	for _ in 0..6 {
		press(&mut app, KeyCode::Down);
	}
	draw(&mut app, 60, 10);

	type_text(&mut app, "z");
	let screen = draw(&mut app, 60, 10);
	assert!(screen.contains("No results for \"skillz\""));

	press(&mut app, KeyCode::Backspace);
	let screen = draw(&mut app, 60, 10);
	assert!(screen.contains("Skills"));
	assert!(screen.contains("▶ Skill 0"));
}

#[test]
fn reload_without_a_manifest_file_reports_it() {
	let mut app = app();
	ctrl(&mut app, 'r');
	assert_eq!(app.status(), Some("No manifest file to reload"));
}
