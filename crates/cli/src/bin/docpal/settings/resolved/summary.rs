use super::{ManifestSource, ResolvedConfig};

pub(super) fn print_summary(config: &ResolvedConfig) {
	println!("Effective configuration:");
	match &config.manifest {
		ManifestSource::Demo => println!("  Manifest: (bundled demo)"),
		ManifestSource::File(path) => println!("  Manifest: {}", path.display()),
	}
	println!("  Max results: {}", config.search.max_results);
	println!("  Theme: {}", config.theme_mode());
	println!("  Prompt title: {}", config.prompt_title);
	if config.initial_query.is_empty() {
		println!("  Initial query: (none)");
	} else {
		println!("  Initial query: {}", config.initial_query);
	}
	println!("  Start open: {}", bool_to_word(config.start_open));
}

fn bool_to_word(value: bool) -> &'static str {
	if value { "yes" } else { "no" }
}
