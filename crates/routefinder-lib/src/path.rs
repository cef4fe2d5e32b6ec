use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use serde::Serialize;
use tracing::{debug, trace};

use crate::graph::RouteGraph;
use crate::station::Station;

/// Shortest path found between two stations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathResult {
    /// Stations from start to end, both inclusive.
    pub stations: Vec<Station>,
    /// Sum of the weights of every traversed edge.
    pub total_weight: u64,
}

impl PathResult {
    /// Number of edges traversed.
    pub fn hop_count(&self) -> usize {
        self.stations.len().saturating_sub(1)
    }
}

/// Find the minimum-total-weight path from `start` to `end`.
///
/// Returns `None` when `end` cannot be reached, which includes a `start` that
/// has no outgoing edges. Asking for the path from a station to itself always
/// yields that single station with weight 0, whether or not the graph knows
/// the station.
///
/// Edge weights are non-negative (enforced when the graph is loaded), which
/// is what makes settling the cheapest frontier station final. Each call owns
/// its working state and never mutates the graph.
pub fn shortest_path(graph: &RouteGraph, start: &Station, end: &Station) -> Option<PathResult> {
    if start == end {
        return Some(PathResult {
            stations: vec![start.clone()],
            total_weight: 0,
        });
    }

    if !graph.is_known_start_candidate(start) {
        debug!(start = %start, "start station has no outgoing routes");
        return None;
    }

    let mut tentative: HashMap<&Station, u64> = HashMap::new();
    let mut predecessor: HashMap<&Station, &Station> = HashMap::new();
    let mut settled: HashSet<&Station> = HashSet::new();
    let mut frontier = BinaryHeap::new();

    tentative.insert(start, 0);
    frontier.push(FrontierEntry::new(start, 0));

    while let Some(FrontierEntry { station, cost }) = frontier.pop() {
        // Stale entries remain in the heap after a cheaper relaxation.
        if !settled.insert(station) {
            continue;
        }

        if station == end {
            break;
        }

        for next in graph.neighbors(station) {
            if settled.contains(next) {
                continue;
            }
            let Some(weight) = graph.weight(station, next) else {
                continue;
            };

            let candidate = cost.saturating_add(weight);
            let improves = tentative
                .get(next)
                .map_or(true, |&current| candidate < current);
            if improves {
                trace!(from = %station, to = %next, candidate, "relaxed");
                tentative.insert(next, candidate);
                predecessor.insert(next, station);
                frontier.push(FrontierEntry::new(next, candidate));
            }
        }
    }

    let Some(&total_weight) = tentative.get(end) else {
        debug!(start = %start, end = %end, settled = settled.len(), "no path");
        return None;
    };

    let stations = reconstruct_path(&predecessor, start, end);
    debug!(
        start = %start,
        end = %end,
        total_weight,
        hops = stations.len().saturating_sub(1),
        "shortest path found"
    );

    Some(PathResult {
        stations,
        total_weight,
    })
}

fn reconstruct_path(
    predecessor: &HashMap<&Station, &Station>,
    start: &Station,
    end: &Station,
) -> Vec<Station> {
    let mut path = vec![end.clone()];
    let mut current = end;
    while current != start {
        match predecessor.get(current) {
            Some(&previous) => {
                path.push(previous.clone());
                current = previous;
            }
            None => break,
        }
    }
    path.reverse();
    path
}

#[derive(Clone, Debug, Eq, PartialEq)]
struct FrontierEntry<'a> {
    station: &'a Station,
    cost: u64,
}

impl<'a> FrontierEntry<'a> {
    fn new(station: &'a Station, cost: u64) -> Self {
        Self { station, cost }
    }
}

impl Ord for FrontierEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.station.cmp(self.station))
    }
}

impl PartialOrd for FrontierEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
