//! Property tests for validation and shortest-path invariants.

use std::collections::HashMap;

use proptest::prelude::*;
use routefinder_lib::{
    load_graph, shortest_path, validate_record, Error, PathResult, RouteGraph, Station,
};

const NAMES: [&str; 6] = ["A", "B", "C", "D", "E", "F"];
const SINK: &str = "SINK";

/// Raw records over a small station alphabet. Self-loops always carry 0 so
/// every generated record is valid.
fn valid_records() -> impl Strategy<Value = Vec<[String; 3]>> {
    prop::collection::vec((0..NAMES.len(), 0..NAMES.len(), 1u64..20), 1..24).prop_map(|edges| {
        edges
            .into_iter()
            .map(|(from, to, weight)| {
                let weight = if from == to { 0 } else { weight };
                [
                    NAMES[from].to_string(),
                    NAMES[to].to_string(),
                    weight.to_string(),
                ]
            })
            .collect()
    })
}

fn station() -> impl Strategy<Value = Station> {
    (0..NAMES.len()).prop_map(|idx| Station::new(NAMES[idx]))
}

/// Bellman-Ford distances from `start`, used as an independent reference.
fn reference_distances(graph: &RouteGraph, start: &Station) -> HashMap<Station, u64> {
    let edges = graph.list_edges();
    let mut distances = HashMap::from([(start.clone(), 0u64)]);
    for _ in 0..graph.stations().len() {
        let mut changed = false;
        for edge in &edges {
            let Some(&base) = distances.get(&edge.source) else {
                continue;
            };
            let candidate = base + edge.weight;
            if distances
                .get(&edge.destination)
                .map_or(true, |&current| candidate < current)
            {
                distances.insert(edge.destination.clone(), candidate);
                changed = true;
            }
        }
        if !changed {
            break;
        }
    }
    distances
}

fn path_weight(graph: &RouteGraph, result: &PathResult) -> Option<u64> {
    result
        .stations
        .windows(2)
        .map(|pair| graph.weight(&pair[0], &pair[1]))
        .sum()
}

proptest! {
    /// Accepted edges are self-loops exactly when their weight is zero.
    #[test]
    fn validated_edges_zero_weight_iff_self_loop(
        from in 0..NAMES.len(),
        to in 0..NAMES.len(),
        weight in -5i64..20,
    ) {
        let fields = [NAMES[from].to_string(), NAMES[to].to_string(), weight.to_string()];
        if let Ok(edge) = validate_record(&fields, 1) {
            prop_assert_eq!(edge.source == edge.destination, edge.weight == 0);
        }
    }

    /// Non-integer weights are parse failures, never rule violations.
    #[test]
    fn non_integer_weight_is_malformed(
        from in 0..NAMES.len(),
        to in 0..NAMES.len(),
        weight in "[a-z]{1,5}|[0-9]+\\.[0-9]+",
    ) {
        let records = vec![[NAMES[from].to_string(), NAMES[to].to_string(), weight]];
        let result = load_graph(&records);
        let malformed = matches!(result, Err(Error::MalformedWeight { .. }));
        prop_assert!(malformed, "got {:?}", result);
    }

    /// A station always reaches itself for free.
    #[test]
    fn self_path_is_single_station(records in valid_records(), target in station()) {
        let graph = load_graph(&records).expect("generated records are valid");
        let result = shortest_path(&graph, &target, &target).expect("self path");
        prop_assert_eq!(result.stations, vec![target]);
        prop_assert_eq!(result.total_weight, 0);
    }

    /// Stations without outgoing edges never start a route elsewhere.
    #[test]
    fn sink_has_no_outgoing_path(
        mut records in valid_records(),
        feeder in 0..NAMES.len(),
        weight in 1u64..20,
        to in station(),
    ) {
        // SINK is only ever a destination, so it has no outgoing edges.
        records.push([NAMES[feeder].to_string(), SINK.to_string(), weight.to_string()]);
        let graph = load_graph(&records).expect("generated records are valid");
        let sink = Station::new(SINK);

        prop_assert!(graph.neighbors(&sink).is_empty());
        prop_assert!(!graph.is_known_start_candidate(&sink));
        prop_assert!(shortest_path(&graph, &sink, &to).is_none());
    }

    /// Identical queries give identical answers.
    #[test]
    fn queries_are_idempotent(records in valid_records(), from in station(), to in station()) {
        let graph = load_graph(&records).expect("generated records are valid");
        prop_assert_eq!(shortest_path(&graph, &from, &to), shortest_path(&graph, &from, &to));
    }

    /// The returned weight is the true minimum and matches the returned path.
    #[test]
    fn returns_minimum_weight_path(records in valid_records(), from in station(), to in station()) {
        let graph = load_graph(&records).expect("generated records are valid");
        prop_assume!(from != to);
        prop_assume!(graph.is_known_start_candidate(&from));

        let reference = reference_distances(&graph, &from);
        match shortest_path(&graph, &from, &to) {
            Some(result) => {
                prop_assert_eq!(result.stations.first(), Some(&from));
                prop_assert_eq!(result.stations.last(), Some(&to));
                prop_assert_eq!(path_weight(&graph, &result), Some(result.total_weight));
                prop_assert_eq!(reference.get(&to).copied(), Some(result.total_weight));
            }
            None => prop_assert!(!reference.contains_key(&to)),
        }
    }
}
