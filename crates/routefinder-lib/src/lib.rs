//! Routefinder library entry points.
//!
//! This crate validates raw route records, builds a directed weighted route
//! graph from them, and answers shortest-path queries between named stations.
//! The core never touches the filesystem; [`load_graph`] takes records that
//! were already read. [`load_graph_from_path`] wraps the CSV reader for
//! callers that start from a file. Higher-level consumers (the CLI) should
//! only depend on the functions exported here instead of reimplementing
//! behavior.
//!

#![deny(warnings)]

pub mod error;
pub mod graph;
pub mod loader;
pub mod path;
pub mod station;
pub mod validate;

pub use error::{Error, Result, RouteRule};
pub use graph::{Edge, RouteGraph};
pub use loader::{load_graph, load_graph_from_path, load_graph_from_reader, read_records};
pub use path::{shortest_path, PathResult};
pub use station::Station;
pub use validate::validate_record;
