use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use serde::Serialize;
use tracing::debug;

use crate::station::Station;

/// Minimum Jaro-Winkler similarity for a station to be suggested.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Directed, validated edge between two stations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub source: Station,
    pub destination: Station,
    pub weight: u64,
}

/// Directed weighted graph of routes.
///
/// Adjacency and weights are kept in separate maps; weights are keyed on
/// the directed pair, nested by source. Adjacency lists keep
/// insertion order and are not deduplicated: a repeated `(source,
/// destination)` pair appends a second entry, while the weight map keeps
/// only the latest weight for that pair.
#[derive(Debug, Clone, Default)]
pub struct RouteGraph {
    adjacency: HashMap<Station, Vec<Station>>,
    weights: HashMap<Station, HashMap<Station, u64>>,
    stations: Vec<Station>,
    known: HashSet<Station>,
    pairs: Vec<(Station, Station)>,
}

impl RouteGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a validated edge.
    pub fn add_edge(&mut self, edge: Edge) {
        let Edge {
            source,
            destination,
            weight,
        } = edge;

        self.remember_station(&source);
        self.remember_station(&destination);

        self.adjacency
            .entry(source.clone())
            .or_default()
            .push(destination.clone());

        let previous = self
            .weights
            .entry(source.clone())
            .or_default()
            .insert(destination.clone(), weight);
        match previous {
            Some(previous) if previous != weight => {
                debug!(
                    source = %source,
                    destination = %destination,
                    previous,
                    weight,
                    "duplicate route overrides earlier weight"
                );
            }
            Some(_) => {}
            None => self.pairs.push((source, destination)),
        }
    }

    /// Destinations reachable from `station` by one direct edge, in insertion
    /// order. Stations without outgoing edges yield an empty slice.
    pub fn neighbors(&self, station: &Station) -> &[Station] {
        self.adjacency
            .get(station)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Weight of the directed edge `source -> destination`, if recorded.
    pub fn weight(&self, source: &Station, destination: &Station) -> Option<u64> {
        self.weights
            .get(source)
            .and_then(|targets| targets.get(destination))
            .copied()
    }

    /// Whether `station` has at least one outgoing edge and can therefore
    /// start a route.
    pub fn is_known_start_candidate(&self, station: &Station) -> bool {
        self.adjacency.contains_key(station)
    }

    /// Whether `station` appears anywhere in the graph, as source or destination.
    pub fn contains_station(&self, station: &Station) -> bool {
        self.known.contains(station)
    }

    /// Every station mentioned by an edge, in first-seen order.
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// Number of distinct directed pairs.
    pub fn edge_count(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Distinct directed edges in first-seen order, each with its current weight.
    pub fn list_edges(&self) -> Vec<Edge> {
        self.pairs
            .iter()
            .filter_map(|(source, destination)| {
                self.weight(source, destination).map(|weight| Edge {
                    source: source.clone(),
                    destination: destination.clone(),
                    weight,
                })
            })
            .collect()
    }

    /// Known station names similar to `name`, best match first.
    pub fn suggest_stations(&self, name: &str, limit: usize) -> Vec<String> {
        let needle = Station::new(name);
        let mut scored: Vec<(f64, &Station)> = self
            .stations
            .iter()
            .map(|station| (strsim::jaro_winkler(needle.as_str(), station.as_str()), station))
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();

        scored.sort_by(|a, b| {
            b.0.partial_cmp(&a.0)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.1.cmp(b.1))
        });

        scored
            .into_iter()
            .take(limit)
            .map(|(_, station)| station.to_string())
            .collect()
    }

    fn remember_station(&mut self, station: &Station) {
        if self.known.insert(station.clone()) {
            self.stations.push(station.clone());
        }
    }
}
