use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::Span;
use unicode_width::UnicodeWidthStr;

use crate::input::QueryInput;
use crate::style::Theme;

/// Marker drawn before the query text.
pub const PROMPT_SYMBOL: &str = "❯ ";

/// Inputs required to render the query prompt.
pub struct PromptContext<'a> {
	pub input: &'a QueryInput,
	pub area: Rect,
	pub theme: &'a Theme,
}

/// Render the prompt marker followed by the query field.
pub fn render_prompt(frame: &mut Frame, ctx: PromptContext<'_>) {
	let marker_width = u16::try_from(PROMPT_SYMBOL.width()).unwrap_or(2);
	let [marker_area, input_area] =
		Layout::horizontal([Constraint::Length(marker_width), Constraint::Min(1)]).areas(ctx.area);

	frame.render_widget(Span::styled(PROMPT_SYMBOL, ctx.theme.prompt), marker_area);
	frame.render_widget(ctx.input.widget(), input_area);
}
