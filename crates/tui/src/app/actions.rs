use docpal_core::{Intent, PaletteEvent};
use ratatui::crossterm::event::KeyEvent;

use super::App;
use crate::keymap::{KeyAction, map_key};
use crate::outcome::PaletteOutcome;

impl App {
	/// Process a key press and return the outcome once the run is over.
	pub fn handle_key(&mut self, key: KeyEvent) -> Option<PaletteOutcome> {
		match map_key(key, self.palette.is_open()) {
			KeyAction::Quit => return Some(PaletteOutcome::dismissed(self.last_query.clone())),
			KeyAction::TogglePalette => self.toggle_palette(),
			KeyAction::ToggleTheme => {
				self.theme_mode.update(|mode| mode.toggled());
			}
			KeyAction::Reload => self.reload_manifest(),
			KeyAction::Intent(intent) => return self.dispatch(intent),
			KeyAction::Edit(key) => {
				// Keys that arrive before the first frame are dropped.
				if self.palette.input_focused() && self.input.input(key) {
					let query = self.input.text().to_string();
					return self.dispatch(Intent::QueryChanged(query));
				}
			}
			KeyAction::None => {}
		}
		None
	}

	fn dispatch(&mut self, intent: Intent) -> Option<PaletteOutcome> {
		if let Intent::QueryChanged(query) = &intent {
			self.last_query.clone_from(query);
		}

		match self
			.palette
			.dispatch(intent, &mut self.viewport, &mut self.router)
		{
			PaletteEvent::Navigated(_) => {
				self.reset_input();
				let record = self.router.committed.take()?;
				Some(PaletteOutcome::committed(self.last_query.clone(), record))
			}
			PaletteEvent::Closed => {
				self.reset_input();
				None
			}
			PaletteEvent::Updated | PaletteEvent::Ignored => None,
		}
	}
}
