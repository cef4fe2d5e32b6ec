//! Graph loading from raw route records.
//!
//! [`load_graph`] is the core entry point and performs no I/O. The CSV helpers
//! below read header-less `source,destination,weight` files and hand their
//! rows to it unchanged.

use std::fs;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::graph::RouteGraph;
use crate::validate::validate_record;

/// Build a route graph from raw records.
///
/// Records are validated in order and the first failure aborts the load, so a
/// partially populated graph is never returned. Input that yields no edges at
/// all fails with [`Error::EmptyInput`].
pub fn load_graph<I, R, S>(records: I) -> Result<RouteGraph>
where
    I: IntoIterator<Item = R>,
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    let mut graph = RouteGraph::new();
    for (idx, record) in records.into_iter().enumerate() {
        let edge = validate_record(record.as_ref(), idx + 1)?;
        graph.add_edge(edge);
    }

    if graph.is_empty() {
        return Err(Error::EmptyInput);
    }

    debug!(
        stations = graph.stations().len(),
        edges = graph.edge_count(),
        "route graph loaded"
    );
    Ok(graph)
}

/// Read every row of a header-less CSV route file.
///
/// Rows may have any number of fields; short rows are left for the validator
/// to reject with a precise position. Fields are trimmed of surrounding
/// whitespace.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<Vec<String>>> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::Fields)
        .from_reader(reader);

    let mut records = Vec::new();
    for result in csv_reader.records() {
        let record = result?;
        records.push(record.iter().map(str::to_string).collect());
    }
    Ok(records)
}

/// Read CSV records from `reader` and build a graph from them.
pub fn load_graph_from_reader<R: Read>(reader: R) -> Result<RouteGraph> {
    let records = read_records(reader)?;
    load_graph(&records)
}

/// Open the CSV route file at `path` and build a graph from it.
pub fn load_graph_from_path(path: &Path) -> Result<RouteGraph> {
    let file = fs::File::open(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let graph = load_graph_from_reader(file)?;
    info!(
        path = %path.display(),
        stations = graph.stations().len(),
        edges = graph.edge_count(),
        "loaded routes"
    );
    Ok(graph)
}
