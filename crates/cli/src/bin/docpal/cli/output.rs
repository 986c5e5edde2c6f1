use std::fmt::Write;

use anyhow::Result;
use docpal_core::{SearchResults, SearchableRecord};
use docpal_tui::PaletteOutcome;
use serde_json::{Value, json};

use super::OutputFormat;

/// Print a plain-text representation of the palette outcome.
pub(crate) fn print_plain(outcome: &PaletteOutcome) {
	if !outcome.accepted {
		println!("Search cancelled (query: '{}')", outcome.query);
		return;
	}

	match &outcome.selection {
		Some(record) => println!("{}", record.target),
		None => println!("No selection"),
	}
}

fn record_json(record: &SearchableRecord) -> Value {
	json!({
		"kind": record.kind.id(),
		"id": record.id,
		"title": record.title,
		"target": record.target.as_str(),
		"category": record.category,
	})
}

/// Format the palette outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &PaletteOutcome) -> Result<String> {
	let selection = outcome
		.selection
		.as_ref()
		.map_or(Value::Null, record_json);

	let payload = json!({
		"accepted": outcome.accepted,
		"query": outcome.query,
		"selection": selection,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

pub(crate) fn print_json(outcome: &PaletteOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}

/// Kind headings with the matching titles indented beneath them.
pub(crate) fn format_listing(results: &SearchResults) -> String {
	let mut out = String::new();
	for (kind, records) in results.groups() {
		let _ = writeln!(out, "{}", kind.label());
		for record in records {
			let _ = writeln!(out, "  {}  {}", record.title, record.target);
		}
	}
	out
}

/// Results in navigation order as a JSON array.
pub(crate) fn format_listing_json(results: &SearchResults) -> Result<String> {
	let records: Vec<Value> = results.flattened().map(record_json).collect();
	Ok(serde_json::to_string_pretty(&records)?)
}

/// Print the non-interactive listing for `--list`.
pub(crate) fn print_listing(results: &SearchResults, format: OutputFormat) -> Result<()> {
	match format {
		OutputFormat::Plain => {
			if results.is_empty() {
				println!("No results");
			} else {
				print!("{}", format_listing(results));
			}
		}
		OutputFormat::Json => println!("{}", format_listing_json(results)?),
	}
	Ok(())
}
