//! Shared generators and oracles for planner property tests.

use std::collections::HashSet;

use proptest::prelude::*;

use crate::domain::{CityId, Coordinates};
use crate::network::RoadNetwork;

pub(crate) fn node_name(i: usize) -> String {
    format!("Node{i} PT")
}

pub(crate) fn sight_name(i: usize) -> String {
    format!("Sight {i}")
}

/// Build a network whose city `i` has id `CityId(i)` and attraction
/// `Sight i`, with the given roads. Self-loops are dropped.
pub(crate) fn build(n: usize, roads: &[(usize, usize, u32)]) -> RoadNetwork {
    let mut network = RoadNetwork::new();
    for i in 0..n {
        network
            .place_city(
                &node_name(i),
                Coordinates {
                    latitude: 0.0,
                    longitude: 0.0,
                },
            )
            .unwrap();
        network
            .add_attraction(&sight_name(i), &node_name(i))
            .unwrap();
    }
    for &(a, b, w) in roads {
        if a != b {
            network.add_road(&node_name(a), &node_name(b), w).unwrap();
        }
    }
    network
}

/// Random graph of 2..=8 cities plus a source and target.
pub(crate) fn arb_network() -> impl Strategy<Value = (RoadNetwork, CityId, CityId)> {
    (2usize..=8)
        .prop_flat_map(|n| {
            (
                Just(n),
                proptest::collection::vec((0..n, 0..n, 1u32..50), 0..=n * 2),
                0..n,
                0..n,
            )
        })
        .prop_map(|(n, roads, from, to)| (build(n, &roads), CityId(from), CityId(to)))
}

/// Random graph plus a trip request: source, destination and waypoint
/// attractions (possibly repeated).
pub(crate) fn arb_trip(
    max_waypoints: usize,
) -> impl Strategy<Value = (RoadNetwork, String, String, Vec<String>)> {
    (2usize..=8)
        .prop_flat_map(move |n| {
            (
                Just(n),
                proptest::collection::vec((0..n, 0..n, 1u32..50), n..=n * 3),
                0..n,
                0..n,
                proptest::collection::vec(0..n, 0..=max_waypoints),
            )
        })
        .prop_map(|(n, roads, from, to, stops)| {
            (
                build(n, &roads),
                node_name(from),
                node_name(to),
                stops.into_iter().map(sight_name).collect(),
            )
        })
}

/// Minimum distance over all simple paths, by exhaustive enumeration.
pub(crate) fn brute_force_distance(
    network: &RoadNetwork,
    from: CityId,
    to: CityId,
) -> Option<u32> {
    fn walk(
        network: &RoadNetwork,
        current: CityId,
        to: CityId,
        so_far: u32,
        visited: &mut HashSet<CityId>,
        best: &mut Option<u32>,
    ) {
        if current == to {
            *best = Some(best.map_or(so_far, |b| b.min(so_far)));
            return;
        }
        for (&next, &weight) in network.connections(current) {
            if visited.insert(next) {
                walk(network, next, to, so_far + weight, visited, best);
                visited.remove(&next);
            }
        }
    }

    let mut best = None;
    let mut visited = HashSet::from([from]);
    walk(network, from, to, 0, &mut visited, &mut best);
    best
}
