use docpal_core::{SearchResults, SearchableRecord};
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use super::highlight::{highlight_spans, truncate_highlighted};
use crate::style::Theme;

/// Marker drawn in front of the selected row.
pub const HIGHLIGHT_SYMBOL: &str = "▶ ";
const UNSELECTED_SYMBOL: &str = "  ";
const DESCRIPTION_GAP: &str = "  ";

/// Data needed to lay out the grouped result rows.
pub struct ResultsContext<'a> {
	pub results: &'a SearchResults,
	pub query: &'a str,
	/// Selected flattened position.
	pub selected: usize,
	/// Columns available for each row.
	pub width: usize,
	pub theme: &'a Theme,
}

/// One line per group header and per record, in display order.
///
/// Row numbering matches [`ResultsViewport`](crate::scroll::ResultsViewport).
#[must_use]
pub fn result_lines(ctx: &ResultsContext<'_>) -> Vec<Line<'static>> {
	let mut lines = Vec::with_capacity(ctx.results.len() + 4);
	let mut item = 0;

	for (kind, records) in ctx.results.groups() {
		lines.push(Line::from(Span::styled(kind.label(), ctx.theme.header)));
		for record in records {
			lines.push(record_line(ctx, record, item == ctx.selected));
			item += 1;
		}
	}

	lines
}

fn record_line(ctx: &ResultsContext<'_>, record: &SearchableRecord, selected: bool) -> Line<'static> {
	let theme = ctx.theme;
	let marker = if selected {
		HIGHLIGHT_SYMBOL
	} else {
		UNSELECTED_SYMBOL
	};
	let badge_width = record
		.category
		.as_deref()
		.map_or(0, |category| category.width() + 3);

	let mut remaining = ctx.width.saturating_sub(marker.width() + badge_width);
	let mut spans = vec![Span::styled(marker, theme.prompt)];

	spans.extend(truncate_highlighted(
		&record.title,
		ctx.query,
		remaining,
		Style::default(),
		theme.highlight,
	));
	remaining = remaining.saturating_sub(record.title.width());

	let gap = DESCRIPTION_GAP.width();
	if !record.description.is_empty() && remaining > gap {
		spans.push(Span::raw(DESCRIPTION_GAP));
		spans.extend(truncate_highlighted(
			&record.description,
			ctx.query,
			remaining - gap,
			theme.description,
			theme.highlight,
		));
	}

	if let Some(category) = record.category.as_deref() {
		spans.push(Span::styled(" [", theme.badge));
		spans.extend(highlight_spans(category, ctx.query, theme.badge, theme.highlight));
		spans.push(Span::styled("]", theme.badge));
	}

	let line = Line::from(spans);
	if selected {
		line.style(theme.row_highlight)
	} else {
		line
	}
}

/// Centered single-line notice used for the prompt and "no results" states.
pub fn render_message(frame: &mut Frame, area: Rect, text: &str, style: Style) {
	let message = Paragraph::new(Line::styled(text.to_string(), style)).alignment(Alignment::Center);
	frame.render_widget(message, area);
}
