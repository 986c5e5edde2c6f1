//! Physical keys to palette intents.
//!
//! Global shortcuts are resolved before the query field sees the key, so the
//! toggle also works while typing.

use docpal_core::Intent;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press means in the current state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
	/// Leave the application without a selection.
	Quit,
	/// The global open/close shortcut.
	TogglePalette,
	ToggleTheme,
	/// Re-read the manifest from disk.
	Reload,
	/// Forward to the palette.
	Intent(Intent),
	/// Give the key to the query field.
	Edit(KeyEvent),
	None,
}

/// Resolve `key` given whether the palette is currently open.
#[must_use]
pub fn map_key(key: KeyEvent, palette_open: bool) -> KeyAction {
	let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

	match key.code {
		KeyCode::Char('c') if ctrl => return KeyAction::Quit,
		KeyCode::Char('k') if ctrl => return KeyAction::TogglePalette,
		KeyCode::Char('t') if ctrl => return KeyAction::ToggleTheme,
		KeyCode::Char('r') if ctrl => return KeyAction::Reload,
		_ => {}
	}

	if !palette_open {
		return match key.code {
			KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
			_ => KeyAction::None,
		};
	}

	match key.code {
		KeyCode::Down => KeyAction::Intent(Intent::MoveDown),
		KeyCode::Char('n') if ctrl => KeyAction::Intent(Intent::MoveDown),
		KeyCode::Up => KeyAction::Intent(Intent::MoveUp),
		KeyCode::Char('p') if ctrl => KeyAction::Intent(Intent::MoveUp),
		KeyCode::Enter => KeyAction::Intent(Intent::Commit),
		KeyCode::Esc => KeyAction::Intent(Intent::Cancel),
		_ => KeyAction::Edit(key),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn plain(code: KeyCode) -> KeyEvent {
		KeyEvent::new(code, KeyModifiers::NONE)
	}

	fn ctrl(ch: char) -> KeyEvent {
		KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
	}

	#[test]
	fn navigation_keys_map_to_intents() {
		assert_eq!(map_key(plain(KeyCode::Down), true), KeyAction::Intent(Intent::MoveDown));
		assert_eq!(map_key(ctrl('n'), true), KeyAction::Intent(Intent::MoveDown));
		assert_eq!(map_key(plain(KeyCode::Up), true), KeyAction::Intent(Intent::MoveUp));
		assert_eq!(map_key(ctrl('p'), true), KeyAction::Intent(Intent::MoveUp));
		assert_eq!(map_key(plain(KeyCode::Enter), true), KeyAction::Intent(Intent::Commit));
		assert_eq!(map_key(plain(KeyCode::Esc), true), KeyAction::Intent(Intent::Cancel));
	}

	#[test]
	fn toggle_wins_over_text_entry() {
		assert_eq!(map_key(ctrl('k'), true), KeyAction::TogglePalette);
		assert_eq!(map_key(ctrl('k'), false), KeyAction::TogglePalette);
		assert_eq!(map_key(ctrl('t'), true), KeyAction::ToggleTheme);
	}

	#[test]
	fn q_types_while_open_and_quits_while_closed() {
		let q = plain(KeyCode::Char('q'));
		assert_eq!(map_key(q, true), KeyAction::Edit(q));
		assert_eq!(map_key(q, false), KeyAction::Quit);
		assert_eq!(map_key(plain(KeyCode::Esc), false), KeyAction::Quit);
		assert_eq!(map_key(plain(KeyCode::Down), false), KeyAction::None);
		assert_eq!(map_key(ctrl('c'), true), KeyAction::Quit);
	}
}
