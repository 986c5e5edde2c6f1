//! Core application state and behavior for the terminal palette.
//!
//! The [`App`] type wraps a [`docpal_core::Palette`] with the terminal-only
//! pieces: the query field, the results viewport and the theme store.
//! Supporting modules split the implementation into key handling and
//! rendering.

mod actions;
mod render;
mod state;

pub use state::App;
