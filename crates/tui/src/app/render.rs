use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::symbols::border;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use super::App;
use crate::components::{
	PromptContext, ResultsContext, ScrollMetrics, render_message, render_prompt,
	render_scrollbar, result_lines,
};
use crate::config::PROMPT_STATE_TEXT;
use crate::style::Theme;

const MAX_PALETTE_WIDTH: u16 = 80;
const MAX_PALETTE_HEIGHT: u16 = 18;
const KEY_HINTS: &str = " ↑↓ move · enter open · esc close ";
const BACKDROP_HINT: &str = "Ctrl-K search · Ctrl-T theme · Ctrl-R reload · q quit";

impl App {
	/// Render the whole screen: the backdrop and, when open, the palette.
	pub fn draw(&mut self, frame: &mut Frame) {
		let theme = self.theme();
		let area = frame.area();
		self.render_backdrop(frame, area, &theme);

		if !self.palette.is_open() {
			return;
		}

		let popup = palette_area(area);
		frame.render_widget(Clear, popup);

		let block = Block::bordered()
			.border_set(border::ROUNDED)
			.border_style(theme.border)
			.title(Line::styled(format!(" {} ", self.options.prompt_title), theme.prompt))
			.title_bottom(Line::styled(KEY_HINTS, theme.empty).right_aligned());
		let inner = block.inner(popup);
		frame.render_widget(block, popup);

		let [prompt_area, divider_area, results_area] = Layout::vertical([
			Constraint::Length(1),
			Constraint::Length(1),
			Constraint::Min(0),
		])
		.areas(inner);

		render_prompt(
			frame,
			PromptContext {
				input: &self.input,
				area: prompt_area,
				theme: &theme,
			},
		);
		frame.render_widget(
			Block::default()
				.borders(Borders::TOP)
				.border_style(theme.border),
			divider_area,
		);
		self.render_results(frame, results_area, &theme);
	}

	fn render_backdrop(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
		let mut lines = vec![
			Line::styled("docpal", theme.header),
			Line::raw(""),
			Line::styled(BACKDROP_HINT, theme.empty),
		];
		if let Some(status) = self.status.as_deref() {
			lines.push(Line::raw(""));
			lines.push(Line::styled(status.to_string(), theme.description));
		}

		let height = u16::try_from(lines.len()).unwrap_or(u16::MAX);
		let top = area.height.saturating_sub(height) / 2;
		let area = Rect {
			y: area.y + top,
			height: area.height - top,
			..area
		};
		frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
	}

	fn render_results(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
		let Some(session) = self.palette.session() else {
			return;
		};
		let query = session.query();
		let results = session.results();

		if query.trim().is_empty() {
			render_message(frame, area, PROMPT_STATE_TEXT, theme.empty);
			return;
		}
		if results.is_empty() {
			render_message(frame, area, &format!("No results for \"{query}\""), theme.empty);
			return;
		}

		let height = usize::from(area.height);
		self.viewport
			.layout(results.group_sizes().map(|(_, size)| size), height);

		let metrics = ScrollMetrics::compute(self.viewport.total_rows(), height);
		let content = if metrics.needs_scrollbar {
			let mut state = metrics.state(self.viewport.offset());
			render_scrollbar(frame, area, &mut state, theme)
		} else {
			area
		};

		let lines: Vec<Line<'_>> = result_lines(&ResultsContext {
			results,
			query,
			selected: session.selected(),
			width: usize::from(content.width),
			theme,
		})
		.into_iter()
		.skip(self.viewport.offset())
		.take(height)
		.collect();
		frame.render_widget(Paragraph::new(lines), content);
	}
}

/// Centered box in the upper part of the screen.
fn palette_area(area: Rect) -> Rect {
	let width = area
		.width
		.saturating_sub(4)
		.clamp(area.width.min(24), MAX_PALETTE_WIDTH);
	let height = area
		.height
		.saturating_sub(2)
		.clamp(area.height.min(6), MAX_PALETTE_HEIGHT);
	Rect {
		x: area.x + (area.width - width) / 2,
		y: area.y + (area.height - height) / 3,
		width,
		height,
	}
}
