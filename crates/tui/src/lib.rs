//! Interactive terminal frontend for `docpal`.
//!
//! Wraps the [`docpal_core::Palette`] state machine in a ratatui event loop:
//! keys are mapped to intents, results are drawn as grouped rows with match
//! highlighting, and the viewport follows the selection.

mod app;
pub mod components;
mod config;
pub mod input;
pub mod keymap;
mod outcome;
mod runtime;
pub mod scroll;
pub mod style;

#[cfg(test)]
mod snapshot_tests;

pub use app::App;
pub use config::{DEFAULT_PROMPT_TITLE, PROMPT_STATE_TEXT, UiOptions};
pub use outcome::PaletteOutcome;
pub use runtime::run;

pub use crate::input::QueryInput;
pub use crate::scroll::ResultsViewport;
pub use crate::style::{Theme, ThemeMode};
