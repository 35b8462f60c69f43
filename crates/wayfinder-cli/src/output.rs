//! Output formatting for route and map rendering.

use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;
use wayfinder_lib::{NodeId, RoadMap, RoutePlan};

use crate::terminal::ColorPalette;

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable listing.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Shape summary reported by the `validate` command.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapSummary {
    pub source: String,
    pub intersections: usize,
    pub roads: usize,
    pub isolated: Vec<NodeId>,
}

impl MapSummary {
    pub fn new(source: impl Into<String>, map: &RoadMap) -> Self {
        Self {
            source: source.into(),
            intersections: map.node_count(),
            roads: map.road_count(),
            isolated: map.isolated_nodes(),
        }
    }
}

/// Render a planned route.
pub fn render_route<W: Write>(
    out: &mut W,
    map: &RoadMap,
    plan: &RoutePlan,
    format: OutputFormat,
    palette: ColorPalette,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, plan)?;
            writeln!(out)
        }
        OutputFormat::Text => render_route_text(out, map, plan, palette),
    }
}

fn render_route_text<W: Write>(
    out: &mut W,
    map: &RoadMap,
    plan: &RoutePlan,
    palette: ColorPalette,
) -> io::Result<()> {
    if !plan.is_found() {
        return writeln!(out, "No route found from {} to {}.", plan.start, plan.goal);
    }

    writeln!(
        out,
        "Route from {} to {} ({} hops):",
        plan.start,
        plan.goal,
        plan.hop_count()
    )?;

    let last = plan.steps.len() - 1;
    for (index, &node) in plan.steps.iter().enumerate() {
        let tag = if index == 0 {
            format!("{}STRT{}", palette.tag_start, palette.reset)
        } else if index == last {
            format!("{}GOAL{}", palette.tag_goal, palette.reset)
        } else {
            "    ".to_string()
        };
        let coordinates = map
            .position(node)
            .map(|p| format!(" {}({:.4}, {:.4}){}", palette.gray, p.x, p.y, palette.reset))
            .unwrap_or_default();
        writeln!(
            out,
            " {tag} {}{node}{}{coordinates}",
            palette.white_bold, palette.reset
        )?;
    }

    writeln!(out, "\nTotal distance: {:.4}", plan.distance)
}

/// Render the summary of a loaded map.
pub fn render_map_summary<W: Write>(
    out: &mut W,
    summary: &MapSummary,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, summary)?;
            writeln!(out)
        }
        OutputFormat::Text => {
            writeln!(
                out,
                "Map {} is valid: {} intersections, {} roads.",
                summary.source, summary.intersections, summary.roads
            )?;
            if !summary.isolated.is_empty() {
                let ids: Vec<String> = summary.isolated.iter().map(ToString::to_string).collect();
                writeln!(out, "Isolated intersections: {}", ids.join(", "))?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wayfinder_lib::{fixtures, plan_route, RouteRequest};

    fn render(plan: &RoutePlan, format: OutputFormat) -> String {
        let mut buffer = Vec::new();
        render_route(
            &mut buffer,
            fixtures::map_10(),
            plan,
            format,
            ColorPalette::plain(),
        )
        .expect("render route");
        String::from_utf8(buffer).expect("utf-8 output")
    }

    #[test]
    fn text_route_lists_every_stop() {
        let plan = plan_route(fixtures::map_10(), &RouteRequest::new("6", "4")).unwrap();
        let text = render(&plan, OutputFormat::Text);

        assert!(text.starts_with("Route from 6 to 4 (4 hops):"));
        assert!(text.contains(" STRT 6 (0.8820, 0.6792)"));
        assert!(text.contains("      5 (0.4902, 0.5465)"));
        assert!(text.contains(" GOAL 4 (0.8326, 0.0231)"));
        assert!(text.contains("Total distance: "));
    }

    #[test]
    fn text_route_reports_missing_route() {
        let plan = plan_route(fixtures::map_10(), &RouteRequest::new("8", "6")).unwrap();
        assert_eq!(
            render(&plan, OutputFormat::Text),
            "No route found from 8 to 6.\n"
        );
    }

    #[test]
    fn json_route_is_machine_readable() {
        let plan = plan_route(fixtures::map_10(), &RouteRequest::new("8", "9")).unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&render(&plan, OutputFormat::Json)).expect("valid json");
        assert_eq!(value["steps"], serde_json::json!([8, 9]));
    }

    #[test]
    fn map_summary_mentions_isolated_nodes() {
        let map = wayfinder_lib::RoadMapBuilder::new()
            .intersection(0, 0.0, 0.0)
            .intersection(1, 1.0, 0.0)
            .intersection(2, 5.0, 5.0)
            .road(0, 1)
            .build()
            .unwrap();
        let summary = MapSummary::new("inline", &map);

        let mut buffer = Vec::new();
        render_map_summary(&mut buffer, &summary, OutputFormat::Text).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.contains("Map inline is valid: 3 intersections, 1 roads."));
        assert!(text.contains("Isolated intersections: 2"));
    }
}
