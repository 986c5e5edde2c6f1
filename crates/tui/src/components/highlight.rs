use docpal_core::highlight;
use ratatui::style::Style;
use ratatui::text::Span;
use unicode_truncate::UnicodeTruncateStr;
use unicode_width::UnicodeWidthStr;

const ELLIPSIS: &str = "…";

/// Spans for `text` with every occurrence of `query` styled as a match.
#[must_use]
pub fn highlight_spans(text: &str, query: &str, base: Style, matched: Style) -> Vec<Span<'static>> {
	highlight(text, query)
		.into_iter()
		.map(|segment| {
			let style = if segment.matched {
				base.patch(matched)
			} else {
				base
			};
			Span::styled(segment.text.to_string(), style)
		})
		.collect()
}

/// Fit `text` into `max_width` columns, ending in an ellipsis when cut, and
/// highlight the part that remains visible.
#[must_use]
pub fn truncate_highlighted(
	text: &str,
	query: &str,
	max_width: usize,
	base: Style,
	matched: Style,
) -> Vec<Span<'static>> {
	if max_width == 0 {
		return Vec::new();
	}
	if text.width() <= max_width {
		return highlight_spans(text, query, base, matched);
	}

	let ellipsis_width = ELLIPSIS.width();
	if max_width <= ellipsis_width {
		return vec![Span::styled(ELLIPSIS, base)];
	}

	let (visible, _) = text.unicode_truncate(max_width - ellipsis_width);
	let mut spans = highlight_spans(visible, query, base, matched);
	spans.push(Span::styled(ELLIPSIS, base));
	spans
}

#[cfg(test)]
mod tests {
	use ratatui::style::{Color, Modifier};

	use super::*;

	fn marked(spans: &[Span<'_>]) -> String {
		spans
			.iter()
			.map(|span| {
				if span.style.add_modifier.contains(Modifier::BOLD) {
					format!("[{}]", span.content)
				} else {
					span.content.to_string()
				}
			})
			.collect()
	}

	fn styles() -> (Style, Style) {
		(
			Style::new().fg(Color::Gray),
			Style::new().add_modifier(Modifier::BOLD),
		)
	}

	#[test]
	fn matches_keep_the_source_casing() {
		let (base, matched) = styles();
		let spans = highlight_spans("Install Builder tooling", "builder", base, matched);
		insta::assert_snapshot!(marked(&spans), @"Install [Builder] tooling");
		assert_eq!(spans[0].style, base);
	}

	#[test]
	fn truncation_highlights_only_what_is_visible() {
		let (base, matched) = styles();
		let spans = truncate_highlighted("Reviews builder output", "builder", 12, base, matched);
		insta::assert_snapshot!(marked(&spans), @"Reviews bui…");

		let spans = truncate_highlighted("Reviews builder output", "rev", 12, base, matched);
		insta::assert_snapshot!(marked(&spans), @"[Rev]iews bui…");
	}

	#[test]
	fn tiny_widths_collapse_to_an_ellipsis() {
		let (base, matched) = styles();
		assert!(truncate_highlighted("Builder", "b", 0, base, matched).is_empty());
		let spans = truncate_highlighted("Builder", "b", 1, base, matched);
		assert_eq!(marked(&spans), "…");
		let spans = truncate_highlighted("Builder", "b", 7, base, matched);
		assert_eq!(marked(&spans), "[B]uilder");
	}
}
