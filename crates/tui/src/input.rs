//! Single-line query field backed by `tui-textarea`.

use ratatui::crossterm::event::KeyEvent;
use ratatui::style::{Modifier, Style};
use tui_textarea::{CursorMove, Input, Key, TextArea};

/// The palette's query text field.
#[derive(Debug, Clone)]
pub struct QueryInput {
	textarea: TextArea<'static>,
	focused: bool,
}

impl Default for QueryInput {
	fn default() -> Self {
		Self::new("")
	}
}

impl QueryInput {
	/// Create a field holding `text` with the cursor at the end.
	pub fn new(text: impl Into<String>) -> Self {
		let mut input = Self {
			textarea: TextArea::new(vec![text.into()]),
			focused: false,
		};
		input.textarea.move_cursor(CursorMove::End);
		input.textarea.set_cursor_line_style(Style::default());
		input.apply_cursor_style();
		input
	}

	/// Current text.
	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or("")
	}

	/// Feed one key to the field. Returns `true` when the text changed.
	///
	/// Line breaks are swallowed so the field stays single-line.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		let input = Input::from(key);
		if breaks_line(&input) {
			return false;
		}
		self.textarea.input(input)
	}

	/// Replace the text, keeping focus.
	pub fn set_text(&mut self, text: impl Into<String>) {
		let focused = self.focused;
		*self = Self::new(text);
		self.set_focused(focused);
	}

	pub fn clear(&mut self) {
		self.set_text(String::new());
	}

	#[must_use]
	pub fn is_focused(&self) -> bool {
		self.focused
	}

	/// Show or hide the cursor.
	pub fn set_focused(&mut self, focused: bool) {
		self.focused = focused;
		self.apply_cursor_style();
	}

	/// Widget to render.
	#[must_use]
	pub fn widget(&self) -> &TextArea<'static> {
		&self.textarea
	}

	fn apply_cursor_style(&mut self) {
		let style = if self.focused {
			Style::default().add_modifier(Modifier::REVERSED)
		} else {
			Style::default()
		};
		self.textarea.set_cursor_style(style);
	}
}

fn breaks_line(input: &Input) -> bool {
	matches!(
		input,
		Input {
			key: Key::Enter,
			..
		} | Input {
			key: Key::Char('m' | 'j'),
			ctrl: true,
			..
		}
	)
}

#[cfg(test)]
mod tests {
	use ratatui::crossterm::event::{KeyCode, KeyModifiers};

	use super::*;

	fn key(code: KeyCode) -> KeyEvent {
		KeyEvent::new(code, KeyModifiers::NONE)
	}

	#[test]
	fn typing_reports_changes() {
		let mut input = QueryInput::default();
		assert!(input.input(key(KeyCode::Char('a'))));
		assert!(input.input(key(KeyCode::Char('b'))));
		assert_eq!(input.text(), "ab");

		assert!(!input.input(key(KeyCode::Left)));
		assert!(input.input(key(KeyCode::Backspace)));
		assert_eq!(input.text(), "b");
	}

	#[test]
	fn line_breaks_are_ignored() {
		let mut input = QueryInput::new("builder");
		assert!(!input.input(key(KeyCode::Enter)));
		assert!(!input.input(KeyEvent::new(KeyCode::Char('m'), KeyModifiers::CONTROL)));
		assert_eq!(input.text(), "builder");
	}

	#[test]
	fn set_text_keeps_focus_and_moves_cursor_to_end() {
		let mut input = QueryInput::default();
		input.set_focused(true);
		input.set_text("rev");
		assert!(input.is_focused());
		assert!(input.input(key(KeyCode::Char('s'))));
		assert_eq!(input.text(), "revs");

		input.clear();
		assert_eq!(input.text(), "");
	}
}
