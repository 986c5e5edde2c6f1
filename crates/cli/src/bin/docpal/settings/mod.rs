//! Configuration loading and resolution.
//!
//! Values are layered from default config files, explicit `--config` files,
//! `DOCPAL__SECTION__KEY` environment variables and finally CLI flags.
//! [`load`] returns a validated [`ResolvedConfig`].

mod loader;
mod raw;
mod resolved;
mod sources;

pub use loader::load;
pub use resolved::{ManifestSource, ResolvedConfig};
