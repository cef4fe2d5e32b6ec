//! One-shot shortest path command handler.

use std::io::Write;

use anyhow::{bail, Result};
use routefinder_lib::{shortest_path, RouteGraph, Station};
use tracing::debug;

use super::unknown_station_message;
use crate::output::OutputFormat;

/// Arguments for the path command.
#[derive(Debug, Clone)]
pub struct PathCommandArgs {
    /// Station to start from.
    pub from: String,
    /// Station to arrive at.
    pub to: String,
}

/// Handle the path subcommand.
///
/// Writes the result to `out` and returns whether a path was found. Station
/// names the graph has never seen are reported as errors with suggestions,
/// unless both ends are the same station.
pub fn handle_path_command<W: Write>(
    graph: &RouteGraph,
    format: OutputFormat,
    args: &PathCommandArgs,
    out: &mut W,
) -> Result<bool> {
    let from = Station::new(args.from.trim());
    let to = Station::new(args.to.trim());

    if from != to {
        for station in [&from, &to] {
            if let Some(message) = unknown_station_message(graph, station) {
                bail!(message);
            }
        }
    }

    let result = shortest_path(graph, &from, &to);
    debug!(from = %from, to = %to, found = result.is_some(), "path query");
    format.render_path(out, &from, &to, result.as_ref())?;
    Ok(result.is_some())
}
