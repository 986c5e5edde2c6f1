//! Visual styling utilities.
//!
//! Themes are plain bundles of [`ratatui::style::Style`]s. The active one is
//! chosen through a [`ThemeMode`], which the application keeps in a
//! [`docpal_core::Store`] so it can be flipped at runtime.

pub mod theme;

pub use theme::{Theme, ThemeMode, by_name, names};
