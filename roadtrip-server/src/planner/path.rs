//! Shortest-path results and algorithm selection.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::CityId;
use crate::network::RoadNetwork;

use super::astar::astar;
use super::dijkstra::dijkstra_path;

/// Which single-pair search to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Label-setting relaxation search. Always optimal.
    #[default]
    Dijkstra,
    /// Heuristic-guided search. Its heuristic can overestimate, so the
    /// result is not guaranteed to be the shortest path.
    #[serde(alias = "a*")]
    AStar,
}

/// A path through the network and its length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPath {
    /// Cities from source to target inclusive.
    pub cities: Vec<CityId>,

    /// Sum of road distances along `cities`.
    pub distance: u32,
}

impl ShortestPath {
    /// The zero-length path that starts and ends at `city`.
    pub fn trivial(city: CityId) -> Self {
        Self {
            cities: vec![city],
            distance: 0,
        }
    }

    pub fn source(&self) -> CityId {
        self.cities[0]
    }

    pub fn target(&self) -> CityId {
        self.cities[self.cities.len() - 1]
    }

    /// Number of roads travelled.
    pub fn hops(&self) -> usize {
        self.cities.len() - 1
    }

    /// Append `next`, which must start where `self` ends.
    pub(crate) fn extend(&mut self, next: &ShortestPath) {
        debug_assert_eq!(self.target(), next.source());
        self.cities.extend_from_slice(&next.cities[1..]);
        self.distance = self.distance.saturating_add(next.distance);
    }

    /// Canonical names of the cities on the path.
    pub fn full_names(&self, network: &RoadNetwork) -> Vec<String> {
        self.cities
            .iter()
            .map(|id| network.city_by_id(*id).full_name().to_string())
            .collect()
    }
}

/// Run a single-pair search with the chosen algorithm.
///
/// Returns `None` when `target` cannot be reached from `source`. A request
/// with `source == target` yields the trivial path, never `None`.
pub fn shortest_path(
    network: &RoadNetwork,
    source: CityId,
    target: CityId,
    algorithm: Algorithm,
) -> Option<ShortestPath> {
    match algorithm {
        Algorithm::Dijkstra => dijkstra_path(network, source, target),
        Algorithm::AStar => astar(network, source, target),
    }
}

/// Walk predecessor links back from `target` and reverse them.
///
/// A missing link before reaching `source` means `target` was never reached.
pub(super) fn reconstruct(
    previous: &HashMap<CityId, CityId>,
    source: CityId,
    target: CityId,
    distance: u32,
) -> Option<ShortestPath> {
    if source == target {
        return Some(ShortestPath::trivial(source));
    }

    let mut cities = vec![target];
    let mut current = target;
    while current != source {
        current = *previous.get(&current)?;
        cities.push(current);
    }
    cities.reverse();

    Some(ShortestPath { cities, distance })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reconstruct_walks_back() {
        let mut previous = HashMap::new();
        previous.insert(CityId(2), CityId(1));
        previous.insert(CityId(1), CityId(0));

        let path = reconstruct(&previous, CityId(0), CityId(2), 7).unwrap();
        assert_eq!(path.cities, vec![CityId(0), CityId(1), CityId(2)]);
        assert_eq!(path.distance, 7);
        assert_eq!(path.hops(), 2);
    }

    #[test]
    fn reconstruct_missing_link_is_no_path() {
        let mut previous = HashMap::new();
        previous.insert(CityId(2), CityId(1));

        assert!(reconstruct(&previous, CityId(0), CityId(2), 7).is_none());
        assert!(reconstruct(&HashMap::new(), CityId(0), CityId(3), 0).is_none());
    }

    #[test]
    fn reconstruct_source_is_trivial() {
        let path = reconstruct(&HashMap::new(), CityId(4), CityId(4), 0).unwrap();
        assert_eq!(path, ShortestPath::trivial(CityId(4)));
        assert_eq!(path.hops(), 0);
    }

    #[test]
    fn extend_drops_junction() {
        let mut first = ShortestPath {
            cities: vec![CityId(0), CityId(1)],
            distance: 3,
        };
        let second = ShortestPath {
            cities: vec![CityId(1), CityId(2), CityId(3)],
            distance: 4,
        };
        first.extend(&second);

        assert_eq!(first.cities, vec![CityId(0), CityId(1), CityId(2), CityId(3)]);
        assert_eq!(first.distance, 7);
    }

    #[test]
    fn algorithm_serde_names() {
        assert_eq!(
            serde_json::to_string(&Algorithm::AStar).unwrap(),
            "\"astar\""
        );
        let parsed: Algorithm = serde_json::from_str("\"dijkstra\"").unwrap();
        assert_eq!(parsed, Algorithm::Dijkstra);
        let parsed: Algorithm = serde_json::from_str("\"a*\"").unwrap();
        assert_eq!(parsed, Algorithm::AStar);
    }
}
