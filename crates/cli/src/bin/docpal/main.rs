mod app_dirs;
mod cli;
mod logging;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{CliArgs, OutputFormat, parse_cli, print_json, print_listing, print_plain};
use settings::ResolvedConfig;
use tracing::warn;
use workflow::PaletteWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in docpal_tui::style::names() {
			println!("{name}");
		}
		return Ok(());
	}

	if let Err(err) = logging::initialize(cli.log_level.as_deref()) {
		eprintln!("docpal: logging disabled: {err:#}");
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	run(&cli, &resolved)
}

/// Either list results for the query or run the palette, then print the
/// outcome in the chosen format.
fn run(cli: &CliArgs, config: &ResolvedConfig) -> Result<()> {
	let snapshot = workflow::load_snapshot(&config.manifest)?;
	if snapshot.is_empty() {
		warn!("manifest has no entries");
	}

	if cli.list {
		let results = workflow::list(config, &snapshot);
		return print_listing(&results, cli.output);
	}

	let outcome = PaletteWorkflow::from_config(config, &snapshot).run()?;
	match cli.output {
		OutputFormat::Plain => print_plain(&outcome),
		OutputFormat::Json => print_json(&outcome)?,
	}

	Ok(())
}
