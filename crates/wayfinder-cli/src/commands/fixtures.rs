//! Fixtures command handler listing the built-in maps.

use std::io::{self, Write};

use anyhow::{Context, Result};

use wayfinder_lib::fixtures::{by_name, FIXTURE_NAMES};

use crate::output::{MapSummary, OutputFormat};

/// Handle the fixtures subcommand.
pub fn handle_fixtures_command(format: OutputFormat) -> Result<()> {
    let summaries: Vec<MapSummary> = FIXTURE_NAMES
        .iter()
        .filter_map(|&name| by_name(name).map(|map| MapSummary::new(name, map)))
        .collect();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &summaries)
                .context("failed to serialize fixtures")?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            for summary in &summaries {
                writeln!(
                    out,
                    "{}: {} intersections, {} roads",
                    summary.source, summary.intersections, summary.roads
                )?;
            }
        }
    }
    out.flush().context("failed to flush output")
}
