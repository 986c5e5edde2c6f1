//! UI building blocks shared across rendering and state modules.

/// Match highlighting and width-aware truncation.
pub mod highlight;
/// Query prompt rendering.
pub mod prompt;
/// Grouped result rows and the empty states.
pub mod results;
/// Scrollbar for viewports.
pub mod scrollbar;

pub use highlight::{highlight_spans, truncate_highlighted};
pub use prompt::{PromptContext, render_prompt};
pub use results::{HIGHLIGHT_SYMBOL, ResultsContext, render_message, result_lines};
pub use scrollbar::{ScrollMetrics, render_scrollbar};
