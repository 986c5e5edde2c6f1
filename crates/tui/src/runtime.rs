//! Application runtime and event loop.

use std::time::Duration;

use anyhow::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{self, Event, KeyEventKind};
use tracing::debug;

use crate::App;
use crate::outcome::PaletteOutcome;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Run `app` in the terminal until the user commits or quits.
pub fn run(mut app: App) -> Result<PaletteOutcome> {
	app.run()
}

impl App {
	/// Take over the terminal and pump events until the run ends. The
	/// terminal is restored even when drawing or reading fails.
	pub fn run(&mut self) -> Result<PaletteOutcome> {
		let mut terminal = ratatui::init();
		let result = self.event_loop(&mut terminal);
		ratatui::restore();
		result
	}

	fn event_loop(&mut self, terminal: &mut DefaultTerminal) -> Result<PaletteOutcome> {
		terminal.clear()?;
		loop {
			terminal.draw(|frame| self.draw(frame))?;
			self.frame_rendered();

			if !event::poll(POLL_INTERVAL)? {
				continue;
			}
			match event::read()? {
				Event::Key(key) if key.kind == KeyEventKind::Press => {
					if let Some(outcome) = self.handle_key(key) {
						debug!(accepted = outcome.accepted, "palette run finished");
						return Ok(outcome);
					}
				}
				_ => {}
			}
		}
	}
}
