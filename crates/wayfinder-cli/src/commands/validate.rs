//! Validate command handler for checking road map files.

use std::io::{self, Write};

use anyhow::{Context, Result};

use crate::commands::MapSource;
use crate::output::{render_map_summary, MapSummary, OutputFormat};

/// Handle the validate subcommand.
///
/// Loading the map runs every shape check; a map that loads is valid.
pub fn handle_validate_command(source: &MapSource, format: OutputFormat) -> Result<()> {
    let map = source.load()?;
    let summary = MapSummary::new(source.label(), &map);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    render_map_summary(&mut out, &summary, format).context("failed to write map summary")?;
    out.flush().context("failed to flush output")
}
