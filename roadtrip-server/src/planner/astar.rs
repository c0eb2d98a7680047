//! Heuristic-guided (A*) search.
//!
//! Expands the open city with the lowest `f = g + h`, where `g` is the best
//! known distance from the source and `h` is [`heuristic`]. Expanded cities
//! move to a closed set and are never expanded again.
//!
//! # Optimality
//!
//! The heuristic uses only local edge weights and is **not admissible**: a
//! city with a long direct road to the target reports that road's length even
//! when a chain of short roads gets there sooner. When `h` overestimates, the
//! target can be reached and closed along a longer path first, so the result
//! may be longer than the one [`dijkstra_path`](super::dijkstra::dijkstra_path)
//! returns. Use [`Algorithm::Dijkstra`](super::Algorithm::Dijkstra) when the
//! shortest route is required.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

use tracing::trace;

use crate::domain::CityId;
use crate::network::RoadNetwork;

use super::path::{ShortestPath, reconstruct};

/// Estimated remaining distance from `city` to `target`.
///
/// - zero at the target itself;
/// - the direct road's distance if `city` is adjacent to `target`;
/// - otherwise half (rounded down) of the shortest road leaving `city`,
///   or zero if no road leaves it.
pub fn heuristic(network: &RoadNetwork, city: CityId, target: CityId) -> u32 {
    if city == target {
        return 0;
    }
    if let Some(direct) = network.edge_weight(city, target) {
        return direct;
    }
    network
        .city_by_id(city)
        .min_connection()
        .map_or(0, |shortest| shortest / 2)
}

/// Search for a path from `source` to `target` guided by [`heuristic`].
///
/// Returns `None` if `target` is unreachable.
pub fn astar(network: &RoadNetwork, source: CityId, target: CityId) -> Option<ShortestPath> {
    let mut g_score: HashMap<CityId, u32> = HashMap::new();
    let mut previous: HashMap<CityId, CityId> = HashMap::new();
    let mut closed: HashSet<CityId> = HashSet::new();
    let mut open = BinaryHeap::new();

    g_score.insert(source, 0);
    open.push(Reverse((heuristic(network, source, target), source)));

    while let Some(Reverse((_, current))) = open.pop() {
        if !closed.insert(current) {
            continue;
        }

        let Some(&g_current) = g_score.get(&current) else {
            continue;
        };

        if current == target {
            trace!(
                source = %network.city_by_id(source).full_name(),
                target = %network.city_by_id(target).full_name(),
                expanded = closed.len(),
                distance = g_current,
                "Heuristic search reached target"
            );
            return reconstruct(&previous, source, target, g_current);
        }

        for (&next, &weight) in network.connections(current) {
            if closed.contains(&next) {
                continue;
            }

            let tentative = g_current.saturating_add(weight);
            if g_score.get(&next).is_none_or(|&known| tentative < known) {
                g_score.insert(next, tentative);
                previous.insert(next, current);
                let f = tentative.saturating_add(heuristic(network, next, target));
                open.push(Reverse((f, next)));
            }
        }
    }

    trace!(
        source = %network.city_by_id(source).full_name(),
        target = %network.city_by_id(target).full_name(),
        expanded = closed.len(),
        "Heuristic search exhausted open set"
    );

    None
}
