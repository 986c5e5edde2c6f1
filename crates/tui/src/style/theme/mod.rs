mod builtins;
mod types;

use std::fmt;

pub use types::Theme;

/// Which built-in theme is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ThemeMode {
	#[default]
	Dark,
	Light,
}

impl ThemeMode {
	pub const ALL: [ThemeMode; 2] = [ThemeMode::Dark, ThemeMode::Light];

	#[must_use]
	pub fn name(self) -> &'static str {
		match self {
			ThemeMode::Dark => "dark",
			ThemeMode::Light => "light",
		}
	}

	/// The other mode; bound to the theme toggle.
	#[must_use]
	pub fn toggled(self) -> Self {
		match self {
			ThemeMode::Dark => ThemeMode::Light,
			ThemeMode::Light => ThemeMode::Dark,
		}
	}

	#[must_use]
	pub fn theme(self) -> Theme {
		match self {
			ThemeMode::Dark => builtins::DARK,
			ThemeMode::Light => builtins::LIGHT,
		}
	}
}

impl fmt::Display for ThemeMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl Default for Theme {
	fn default() -> Self {
		ThemeMode::default().theme()
	}
}

/// Look up a built-in theme by name, ignoring case and surrounding space.
#[must_use]
pub fn by_name(name: &str) -> Option<ThemeMode> {
	let name = name.trim();
	ThemeMode::ALL
		.into_iter()
		.find(|mode| mode.name().eq_ignore_ascii_case(name))
}

/// Names of every built-in theme.
#[must_use]
pub fn names() -> Vec<&'static str> {
	ThemeMode::ALL.into_iter().map(ThemeMode::name).collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn lookup_is_case_insensitive() {
		assert_eq!(by_name(" Light "), Some(ThemeMode::Light));
		assert_eq!(by_name("DARK"), Some(ThemeMode::Dark));
		assert_eq!(by_name("solarized"), None);
	}

	#[test]
	fn toggling_alternates_between_builtins() {
		let mode = ThemeMode::default();
		assert_eq!(mode.toggled(), ThemeMode::Light);
		assert_eq!(mode.toggled().toggled(), mode);
		assert_ne!(ThemeMode::Dark.theme(), ThemeMode::Light.theme());
		assert_eq!(names(), vec!["dark", "light"]);
	}
}
