// Module exports for CLI subcommands
//
// Each module handles a specific CLI subcommand. main.rs dispatches to these
// handlers, keeping the entry point focused on parsing and coordination.

pub mod path;
pub mod prompt;
pub mod routes;

use routefinder_lib::{RouteGraph, Station};

use crate::output::format_suggestions;

/// Number of "did you mean" candidates offered for an unknown station.
const MAX_SUGGESTIONS: usize = 3;

/// Describe `station` if the graph has never seen it.
///
/// Returns `None` for known stations. The query engine treats unknown names
/// as unreachable; this only exists so the user learns about a typo.
pub fn unknown_station_message(graph: &RouteGraph, station: &Station) -> Option<String> {
    if graph.contains_station(station) {
        return None;
    }
    let suggestions = graph.suggest_stations(station.as_str(), MAX_SUGGESTIONS);
    Some(format!(
        "Unknown station '{}'{}",
        station,
        format_suggestions(&suggestions)
    ))
}
