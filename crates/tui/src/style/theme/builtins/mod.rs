use ratatui::style::{Color, Modifier, Style};

use crate::style::theme::types::Theme;

pub(crate) const DARK: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(125, 207, 255))
		.add_modifier(Modifier::BOLD),
	row_highlight: Style::new().bg(Color::Rgb(41, 46, 66)),
	prompt: Style::new().fg(Color::Rgb(187, 154, 247)),
	empty: Style::new()
		.fg(Color::Rgb(86, 95, 137))
		.add_modifier(Modifier::ITALIC),
	highlight: Style::new()
		.fg(Color::Rgb(224, 175, 104))
		.add_modifier(Modifier::BOLD),
	description: Style::new().fg(Color::Rgb(169, 177, 214)),
	badge: Style::new().fg(Color::Rgb(158, 206, 106)),
	border: Style::new().fg(Color::Rgb(122, 162, 247)),
};

pub(crate) const LIGHT: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(46, 126, 233))
		.add_modifier(Modifier::BOLD),
	row_highlight: Style::new().bg(Color::Rgb(220, 222, 232)),
	prompt: Style::new().fg(Color::Rgb(152, 84, 241)),
	empty: Style::new()
		.fg(Color::Rgb(132, 140, 181))
		.add_modifier(Modifier::ITALIC),
	highlight: Style::new()
		.fg(Color::Rgb(177, 92, 0))
		.add_modifier(Modifier::BOLD),
	description: Style::new().fg(Color::Rgb(55, 96, 191)),
	badge: Style::new().fg(Color::Rgb(88, 117, 57)),
	border: Style::new().fg(Color::Rgb(46, 126, 233)),
};
