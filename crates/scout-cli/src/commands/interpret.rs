//! Interpret command implementation.

use anyhow::Result;
use colored::Colorize;
use scout_core::{FilterFingerprint, ParsedQuery, SearchFilters};

use crate::OutputFormat;

/// Run the interpret command.
pub fn run(phrase: &str, format: OutputFormat, default_location: Option<&str>) -> Result<()> {
    let mut parsed = ParsedQuery::parse(phrase);
    if let Some(location) = default_location {
        parsed.filters = parsed.filters.with_default_location(location);
    }
    tracing::debug!(fingerprint = %FilterFingerprint::of(&parsed.filters), "interpreted phrase");

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&parsed)?),
        OutputFormat::Query => println!("{}", parsed.filters.to_query_string()),
        OutputFormat::Text => print_text(&parsed),
    }

    Ok(())
}

fn print_text(parsed: &ParsedQuery) {
    println!("{} Searching for: {}", "→".blue(), parsed.filters.query.yellow());
    for (label, value) in filter_lines(&parsed.filters) {
        println!("  {} {}: {}", "•".dimmed(), label, value.cyan());
    }
    match parsed.interpreted_as {
        Some(ref summary) => println!("{} Interpreted as: {}", "✓".green(), summary),
        None => println!("{} No filters detected.", "→".yellow()),
    }
}

/// `(label, value)` lines for each set filter, in display order.
pub(crate) fn filter_lines(filters: &SearchFilters) -> Vec<(&'static str, String)> {
    filters
        .to_query_pairs()
        .into_iter()
        .filter(|(key, _)| *key != "query")
        .collect()
}
