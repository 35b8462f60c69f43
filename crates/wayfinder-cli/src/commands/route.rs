//! Route command handler for computing paths between intersections.

use std::io::{self, Write};

use anyhow::{Context, Result};

use wayfinder_lib::{plan_route, RouteRequest};

use crate::commands::MapSource;
use crate::output::{render_route, OutputFormat};
use crate::terminal::ColorPalette;

/// Arguments for the route command.
#[derive(Debug, Clone)]
pub struct RouteCommandArgs {
    /// Starting intersection id, as typed by the user.
    pub from: String,
    /// Destination intersection id, as typed by the user.
    pub to: String,
}

impl RouteCommandArgs {
    /// Convert CLI args to a library RouteRequest.
    pub fn to_request(&self) -> RouteRequest {
        RouteRequest::new(self.from.clone(), self.to.clone())
    }
}

/// Handle the route subcommand.
///
/// An unreachable goal is reported on stdout and is not a failure.
pub fn handle_route_command(
    source: &MapSource,
    format: OutputFormat,
    args: &RouteCommandArgs,
) -> Result<()> {
    let map = source.load()?;
    let plan = plan_route(&map, &args.to_request())
        .with_context(|| format!("failed to plan route on {}", source.label()))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    render_route(&mut out, &map, &plan, format, ColorPalette::for_environment())
        .context("failed to write route")?;
    out.flush().context("failed to flush output")
}
