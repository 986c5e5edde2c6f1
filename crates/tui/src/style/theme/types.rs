use ratatui::style::{Color, Style};

/// A theme containing styles for various UI elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	/// Style for group headers.
	pub header: Style,
	/// Style for the selected row.
	pub row_highlight: Style,
	/// Style for the prompt marker and title.
	pub prompt: Style,
	/// Style for the prompt and "no results" states.
	pub empty: Style,
	/// Style for query matches inside titles and descriptions.
	pub highlight: Style,
	/// Style for record descriptions.
	pub description: Style,
	/// Style for category badges.
	pub badge: Style,
	/// Style for the palette border.
	pub border: Style,
}

impl Theme {
	/// Color used by the scrollbar track and thumb.
	#[must_use]
	pub fn scrollbar_style(&self) -> Style {
		Style::new().fg(self.border.fg.unwrap_or(Color::Reset))
	}
}
