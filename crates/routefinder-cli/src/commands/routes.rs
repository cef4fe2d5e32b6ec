//! Route table command handler.

use std::io::Write;

use anyhow::Result;
use routefinder_lib::RouteGraph;

use crate::output::OutputFormat;

/// Print every distinct route in the graph.
pub fn handle_routes_command<W: Write>(
    graph: &RouteGraph,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    format.render_routes(out, &graph.list_edges())
}
