//! Relaxation (Dijkstra) search.
//!
//! Settles cities in order of increasing distance from the source using a
//! binary min-heap. Road distances are always positive, so the first time a
//! city is popped its distance is final.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

use tracing::trace;

use crate::domain::CityId;
use crate::network::RoadNetwork;

use super::path::{ShortestPath, reconstruct};

/// Distances and predecessors produced by a relaxation search.
#[derive(Debug, Clone)]
pub struct SearchTree {
    source: CityId,
    distances: HashMap<CityId, u32>,
    previous: HashMap<CityId, CityId>,
    settled: HashSet<CityId>,
}

impl SearchTree {
    pub fn source(&self) -> CityId {
        self.source
    }

    /// Final distance to `city`, if the search settled it.
    pub fn distance_to(&self, city: CityId) -> Option<u32> {
        if !self.settled.contains(&city) {
            return None;
        }
        self.distances.get(&city).copied()
    }

    /// Shortest path to `city`, if the search settled it.
    ///
    /// A search stopped early at its target has only settled part of the
    /// graph; cities beyond the frontier report `None`.
    pub fn path_to(&self, city: CityId) -> Option<ShortestPath> {
        let distance = self.distance_to(city)?;
        reconstruct(&self.previous, self.source, city, distance)
    }

    /// Number of settled cities.
    pub fn settled_count(&self) -> usize {
        self.settled.len()
    }
}

/// Run a relaxation search from `source`.
///
/// With a `target` the search stops as soon as the target is settled;
/// without one it settles every city reachable from `source`.
pub fn dijkstra(network: &RoadNetwork, source: CityId, target: Option<CityId>) -> SearchTree {
    let mut distances: HashMap<CityId, u32> = HashMap::new();
    let mut previous: HashMap<CityId, CityId> = HashMap::new();
    let mut settled: HashSet<CityId> = HashSet::new();
    let mut frontier = BinaryHeap::new();

    distances.insert(source, 0);
    frontier.push(Reverse((0u32, source)));

    while let Some(Reverse((distance, current))) = frontier.pop() {
        // Stale heap entry for a city already settled at a smaller distance
        if !settled.insert(current) {
            continue;
        }

        if Some(current) == target {
            break;
        }

        for (&next, &weight) in network.connections(current) {
            if settled.contains(&next) {
                continue;
            }

            let candidate = distance.saturating_add(weight);
            if distances.get(&next).is_none_or(|&known| candidate < known) {
                distances.insert(next, candidate);
                previous.insert(next, current);
                frontier.push(Reverse((candidate, next)));
            }
        }
    }

    trace!(
        source = %network.city_by_id(source).full_name(),
        settled = settled.len(),
        "Relaxation search finished"
    );

    SearchTree {
        source,
        distances,
        previous,
        settled,
    }
}

/// Shortest path between two cities by relaxation search.
pub fn dijkstra_path(
    network: &RoadNetwork,
    source: CityId,
    target: CityId,
) -> Option<ShortestPath> {
    dijkstra(network, source, Some(target)).path_to(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::NetworkBuilder;

    fn id(network: &RoadNetwork, name: &str) -> CityId {
        network.city_id(name).unwrap()
    }

    /// A --4-- B --1-- C
    ///  \             /
    ///   -----10------
    /// D isolated.
    fn triangle() -> RoadNetwork {
        let mut network = NetworkBuilder::new()
            .road("Alpha AA", "Beta AA", 4)
            .road("Beta AA", "Gamma AA", 1)
            .road("Alpha AA", "Gamma AA", 10)
            .build();
        network.add_attraction("Lonely Tower", "Delta AA").unwrap();
        network
    }

    #[test]
    fn prefers_two_short_hops() {
        let network = triangle();
        let path = dijkstra_path(&network, id(&network, "Alpha AA"), id(&network, "Gamma AA"))
            .unwrap();

        assert_eq!(path.distance, 5);
        assert_eq!(
            path.full_names(&network),
            vec!["Alpha AA", "Beta AA", "Gamma AA"]
        );
    }

    #[test]
    fn unreachable_is_none() {
        let network = triangle();
        let path = dijkstra_path(&network, id(&network, "Alpha AA"), id(&network, "Delta AA"));
        assert!(path.is_none());
    }

    #[test]
    fn source_equals_target_is_zero_length() {
        let network = triangle();
        let alpha = id(&network, "Alpha AA");
        let path = dijkstra_path(&network, alpha, alpha).unwrap();

        assert_eq!(path.cities, vec![alpha]);
        assert_eq!(path.distance, 0);
    }

    #[test]
    fn full_tree_settles_component() {
        let network = triangle();
        let tree = dijkstra(&network, id(&network, "Alpha AA"), None);

        assert_eq!(tree.settled_count(), 3);
        assert_eq!(tree.distance_to(id(&network, "Beta AA")), Some(4));
        assert_eq!(tree.distance_to(id(&network, "Gamma AA")), Some(5));
        assert_eq!(tree.distance_to(id(&network, "Delta AA")), None);
    }

    #[test]
    fn early_stop_leaves_far_cities_unsettled() {
        let network = NetworkBuilder::new()
            .road("One XX", "Two XX", 1)
            .road("Two XX", "Three XX", 1)
            .road("Three XX", "Four XX", 1)
            .build();
        let tree = dijkstra(&network, id(&network, "One XX"), Some(id(&network, "Two XX")));

        assert_eq!(tree.distance_to(id(&network, "Two XX")), Some(1));
        assert!(tree.path_to(id(&network, "Four XX")).is_none());
    }

    #[test]
    fn sample_houston_to_philadelphia() {
        let network = crate::network::sample::us_network();
        let path = dijkstra_path(
            &network,
            id(&network, "Houston TX"),
            id(&network, "Philadelphia PA"),
        )
        .unwrap();

        assert_eq!(path.full_names(&network).first().unwrap(), "Houston TX");
        assert_eq!(path.full_names(&network).last().unwrap(), "Philadelphia PA");

        let recomputed: u32 = path
            .cities
            .windows(2)
            .map(|pair| network.edge_weight(pair[0], pair[1]).unwrap())
            .sum();
        assert_eq!(recomputed, path.distance);
    }
}
