use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::OutputFormat;
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `docpal` binary.
#[derive(Parser, Debug)]
#[command(
	name = "docpal",
	version,
	long_version = long_version(),
	about = "Keyboard-driven command palette for documentation manifests",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "DOCPAL_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'm',
		long,
		value_name = "PATH",
		conflicts_with = "demo",
		help = "Manifest JSON to search (default: manifest.json in the data directory)"
	)]
	pub(crate) manifest: Option<PathBuf>,
	#[arg(long, help = "Search the bundled sample manifest instead of a file")]
	pub(crate) demo: bool,
	#[arg(
		short = 'q',
		long = "query",
		value_name = "QUERY",
		help = "Provide an initial search query (default: empty)"
	)]
	pub(crate) initial_query: Option<String>,
	#[arg(
		long = "max-results",
		value_name = "N",
		help = "Maximum number of results shown (default: 10)"
	)]
	pub(crate) max_results: Option<usize>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: dark)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		long,
		value_name = "TITLE",
		help = "Set the palette title (default: \"Search docs\")"
	)]
	pub(crate) title: Option<String>,
	#[arg(
		long,
		help = "Start with the palette closed; press Ctrl-K to open it"
	)]
	pub(crate) closed: bool,
	#[arg(
		long,
		help = "Print the grouped results for --query and exit without the TUI"
	)]
	pub(crate) list: bool,
	#[arg(
		short = 'o',
		long,
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how the outcome is printed"
	)]
	pub(crate) output: OutputFormat,
	#[arg(long = "print-config", help = "Print the effective configuration before running")]
	pub(crate) print_config: bool,
	#[arg(long = "list-themes", help = "List available themes and exit")]
	pub(crate) list_themes: bool,
	#[arg(
		long = "log-level",
		value_name = "FILTER",
		help = "Log filter written to docpal.log when DOCPAL_LOG is unset (default: warn)"
	)]
	pub(crate) log_level: Option<String>,
}
