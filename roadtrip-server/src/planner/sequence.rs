//! Multi-stop route planning.
//!
//! A route runs from a source city to a destination city through the cities
//! of the requested attractions. The sequencer decides the visiting order,
//! asks the path finder for each leg, and stitches the legs together.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::domain::CityId;
use crate::network::RoadNetwork;

use super::config::PlannerConfig;
use super::dijkstra::dijkstra;
use super::path::{Algorithm, ShortestPath, shortest_path};

/// How the waypoints of a request are ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WaypointOrder {
    /// Visit waypoints exactly in the order given.
    #[default]
    Ordered,
    /// Try every ordering and keep the shortest. Factorial in the waypoint
    /// count, so capped by [`PlannerConfig::max_unordered_waypoints`].
    Unordered,
    /// Repeatedly go to the nearest unvisited waypoint. Cheap, but not
    /// guaranteed to find the shortest ordering.
    Greedy,
}

/// What kind of name failed to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    City,
    Attraction,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::City => f.write_str("city"),
            EntityKind::Attraction => f.write_str("attraction"),
        }
    }
}

/// Error from route planning.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    /// A city or attraction name is not in the network
    #[error("{kind} not found: {token}")]
    NotFound { kind: EntityKind, token: String },

    /// Two required stops are not connected by any road path
    #[error("no route from {from} to {to}")]
    Unreachable { from: String, to: String },

    /// Too many waypoints for the requested mode
    #[error("{count} waypoints requested, at most {max} allowed")]
    TooManyWaypoints { count: usize, max: usize },

    /// Consecutive cities of an assembled route share no road
    #[error("no direct road between {from} and {to}")]
    MissingRoad { from: String, to: String },
}

/// Request for a route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRequest {
    /// Canonical full name of the starting city.
    pub source: String,

    /// Canonical full name of the final city.
    pub destination: String,

    /// Exact names of attractions to visit.
    pub attractions: Vec<String>,

    /// How to order the attractions.
    pub order: WaypointOrder,

    /// Which path finder to use for each leg.
    pub algorithm: Algorithm,
}

impl RouteRequest {
    /// Create a request with no waypoints, using the default order and algorithm.
    pub fn new(source: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            attractions: Vec::new(),
            order: WaypointOrder::default(),
            algorithm: Algorithm::default(),
        }
    }

    /// Add attractions to visit.
    pub fn via<I, S>(mut self, attractions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.attractions.extend(attractions.into_iter().map(Into::into));
        self
    }

    pub fn with_order(mut self, order: WaypointOrder) -> Self {
        self.order = order;
        self
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }
}

/// An attraction visited on a route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stop {
    /// Attraction name.
    pub attraction: String,

    /// Full name of the city the attraction is in.
    pub city: String,
}

/// A planned route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Every city passed through, source first and destination last.
    pub cities: Vec<String>,

    /// Sum of road distances between consecutive cities.
    pub total_distance: u32,

    /// Attractions in the order they are visited.
    pub stops: Vec<Stop>,
}

impl Route {
    pub fn origin(&self) -> &str {
        &self.cities[0]
    }

    pub fn destination(&self) -> &str {
        &self.cities[self.cities.len() - 1]
    }

    /// Number of roads travelled.
    pub fn hop_count(&self) -> usize {
        self.cities.len() - 1
    }
}

/// A resolved waypoint: the attraction and the city it sits in.
#[derive(Debug, Clone)]
struct Waypoint {
    attraction: String,
    city: CityId,
}

/// Per-query memo of leg searches, keyed by (from, to).
///
/// Permutation search evaluates the same legs many times over; each pair is
/// searched at most once per query.
struct LegCache<'a> {
    network: &'a RoadNetwork,
    algorithm: Algorithm,
    legs: HashMap<(CityId, CityId), Option<ShortestPath>>,
}

impl<'a> LegCache<'a> {
    fn new(network: &'a RoadNetwork, algorithm: Algorithm) -> Self {
        Self {
            network,
            algorithm,
            legs: HashMap::new(),
        }
    }

    fn leg(&mut self, from: CityId, to: CityId) -> Option<&ShortestPath> {
        self.legs
            .entry((from, to))
            .or_insert_with(|| {
                trace!(?from, ?to, "Searching leg");
                shortest_path(self.network, from, to, self.algorithm)
            })
            .as_ref()
    }

    /// Distances from `from` to each of `targets`.
    ///
    /// Relaxation search builds one full tree and fills every leg from it;
    /// guided search has to run once per target.
    fn distances_from(&mut self, from: CityId, targets: &[CityId]) -> Vec<Option<u32>> {
        if self.algorithm == Algorithm::Dijkstra
            && targets.iter().any(|to| !self.legs.contains_key(&(from, *to)))
        {
            let tree = dijkstra(self.network, from, None);
            for &to in targets {
                self.legs
                    .entry((from, to))
                    .or_insert_with(|| tree.path_to(to));
            }
        }

        targets
            .iter()
            .map(|&to| self.leg(from, to).map(|path| path.distance))
            .collect()
    }

    /// Chain legs through `stops` in order.
    ///
    /// On failure returns the first pair of consecutive stops with no path.
    fn chain(&mut self, stops: &[CityId]) -> Result<ShortestPath, (CityId, CityId)> {
        let mut route = ShortestPath::trivial(stops[0]);
        for pair in stops.windows(2) {
            match self.leg(pair[0], pair[1]) {
                Some(leg) => route.extend(leg),
                None => return Err((pair[0], pair[1])),
            }
        }
        Ok(route)
    }
}

/// Route planner over a road network.
pub struct Planner<'a> {
    network: &'a RoadNetwork,
    config: &'a PlannerConfig,
}

impl<'a> Planner<'a> {
    /// Create a new planner.
    pub fn new(network: &'a RoadNetwork, config: &'a PlannerConfig) -> Self {
        Self { network, config }
    }

    /// Plan a route for `request`.
    ///
    /// Names in the request must be canonical: city full names and exact
    /// attraction names. Use [`NameResolver`](crate::resolver::NameResolver)
    /// first to turn free text into canonical names.
    pub fn route(&self, request: &RouteRequest) -> Result<Route, PlanError> {
        let source = self.lookup_city(&request.source)?;
        let destination = self.lookup_city(&request.destination)?;
        let waypoints = request
            .attractions
            .iter()
            .map(|name| self.lookup_attraction(name))
            .collect::<Result<Vec<_>, _>>()?;

        if waypoints.len() > self.config.max_waypoints {
            return Err(PlanError::TooManyWaypoints {
                count: waypoints.len(),
                max: self.config.max_waypoints,
            });
        }

        debug!(
            source = %request.source,
            destination = %request.destination,
            waypoints = waypoints.len(),
            order = ?request.order,
            algorithm = ?request.algorithm,
            "Planning route"
        );

        let mut legs = LegCache::new(self.network, request.algorithm);

        let (visit_order, path) = if waypoints.is_empty() {
            let path = legs
                .leg(source, destination)
                .cloned()
                .ok_or_else(|| self.unreachable(source, destination))?;
            (Vec::new(), path)
        } else {
            match request.order {
                WaypointOrder::Ordered => {
                    let order: Vec<usize> = (0..waypoints.len()).collect();
                    let stops = stop_sequence(source, &waypoints, &order, destination);
                    let path = legs
                        .chain(&stops)
                        .map_err(|(from, to)| self.unreachable(from, to))?;
                    (order, path)
                }
                WaypointOrder::Unordered => {
                    self.best_permutation(&mut legs, source, &waypoints, destination)?
                }
                WaypointOrder::Greedy => {
                    self.nearest_first(&mut legs, source, &waypoints, destination)?
                }
            }
        };

        let total_distance = self.sum_roads(&path.cities)?;
        if total_distance != path.distance {
            warn!(
                searched = path.distance,
                recomputed = total_distance,
                "Leg distances disagree with road lookup"
            );
        }

        let cities = path.full_names(self.network);
        let stops = visit_order
            .into_iter()
            .map(|i| {
                let waypoint = &waypoints[i];
                Stop {
                    attraction: waypoint.attraction.clone(),
                    city: self.network.city_by_id(waypoint.city).full_name().to_string(),
                }
            })
            .collect();

        debug!(cities = cities.len(), total_distance, "Route planned");

        Ok(Route {
            cities,
            total_distance,
            stops,
        })
    }

    /// Total road distance along a sequence of city full names.
    ///
    /// Every consecutive pair must share a direct road.
    pub fn total_distance(&self, cities: &[String]) -> Result<u32, PlanError> {
        let ids = cities
            .iter()
            .map(|name| self.lookup_city(name))
            .collect::<Result<Vec<_>, _>>()?;
        self.sum_roads(&ids)
    }

    /// Try every ordering of the waypoints and keep the shortest.
    ///
    /// Orderings are enumerated lexicographically starting from the given
    /// order; on equal totals the earlier ordering is kept.
    fn best_permutation(
        &self,
        legs: &mut LegCache<'_>,
        source: CityId,
        waypoints: &[Waypoint],
        destination: CityId,
    ) -> Result<(Vec<usize>, ShortestPath), PlanError> {
        let max = self.config.max_unordered_waypoints;
        if waypoints.len() > max {
            return Err(PlanError::TooManyWaypoints {
                count: waypoints.len(),
                max,
            });
        }

        let mut order: Vec<usize> = (0..waypoints.len()).collect();
        let mut best: Option<(Vec<usize>, ShortestPath)> = None;
        let mut first_failure: Option<(CityId, CityId)> = None;
        let mut evaluated = 0usize;

        loop {
            evaluated += 1;
            let stops = stop_sequence(source, waypoints, &order, destination);
            match legs.chain(&stops) {
                Ok(path) => {
                    let better = best
                        .as_ref()
                        .is_none_or(|(_, current)| path.distance < current.distance);
                    if better {
                        best = Some((order.clone(), path));
                    }
                }
                Err(pair) => {
                    first_failure.get_or_insert(pair);
                }
            }

            if !next_permutation(&mut order) {
                break;
            }
        }

        debug!(
            permutations = evaluated,
            legs_searched = legs.legs.len(),
            best_distance = best.as_ref().map(|(_, path)| path.distance),
            "Permutation search complete"
        );

        match (best, first_failure) {
            (Some(found), _) => Ok(found),
            (None, Some((from, to))) => Err(self.unreachable(from, to)),
            (None, None) => Err(self.unreachable(source, destination)),
        }
    }

    /// Visit the nearest remaining waypoint first.
    ///
    /// Ties go to the waypoint listed earlier in the request.
    fn nearest_first(
        &self,
        legs: &mut LegCache<'_>,
        source: CityId,
        waypoints: &[Waypoint],
        destination: CityId,
    ) -> Result<(Vec<usize>, ShortestPath), PlanError> {
        let mut remaining: Vec<usize> = (0..waypoints.len()).collect();
        let mut order = Vec::with_capacity(waypoints.len());
        let mut current = source;

        while !remaining.is_empty() {
            let targets: Vec<CityId> = remaining.iter().map(|&i| waypoints[i].city).collect();
            let distances = legs.distances_from(current, &targets);

            let mut nearest: Option<(usize, u32)> = None;
            for (pos, distance) in distances.into_iter().enumerate() {
                if let Some(distance) = distance {
                    if nearest.is_none_or(|(_, best)| distance < best) {
                        nearest = Some((pos, distance));
                    }
                }
            }

            let Some((pos, _)) = nearest else {
                return Err(self.unreachable(current, targets[0]));
            };

            let next = remaining.remove(pos);
            current = waypoints[next].city;
            order.push(next);
        }

        let stops = stop_sequence(source, waypoints, &order, destination);
        let path = legs
            .chain(&stops)
            .map_err(|(from, to)| self.unreachable(from, to))?;

        Ok((order, path))
    }

    /// Sum road distances between consecutive cities by direct lookup.
    fn sum_roads(&self, cities: &[CityId]) -> Result<u32, PlanError> {
        cities.windows(2).try_fold(0u32, |total, pair| {
            self.network
                .edge_weight(pair[0], pair[1])
                .map(|weight| total.saturating_add(weight))
                .ok_or_else(|| PlanError::MissingRoad {
                    from: self.full_name(pair[0]),
                    to: self.full_name(pair[1]),
                })
        })
    }

    fn lookup_city(&self, name: &str) -> Result<CityId, PlanError> {
        self.network
            .city_id(name)
            .ok_or_else(|| PlanError::NotFound {
                kind: EntityKind::City,
                token: name.to_string(),
            })
    }

    fn lookup_attraction(&self, name: &str) -> Result<Waypoint, PlanError> {
        let city = self
            .network
            .city_for_attraction(name)
            .ok_or_else(|| PlanError::NotFound {
                kind: EntityKind::Attraction,
                token: name.to_string(),
            })?;

        Ok(Waypoint {
            attraction: name.to_string(),
            city: city.id(),
        })
    }

    fn unreachable(&self, from: CityId, to: CityId) -> PlanError {
        PlanError::Unreachable {
            from: self.full_name(from),
            to: self.full_name(to),
        }
    }

    fn full_name(&self, id: CityId) -> String {
        self.network.city_by_id(id).full_name().to_string()
    }
}

/// `[source, waypoint cities in order..., destination]`
fn stop_sequence(
    source: CityId,
    waypoints: &[Waypoint],
    order: &[usize],
    destination: CityId,
) -> Vec<CityId> {
    let mut stops = Vec::with_capacity(order.len() + 2);
    stops.push(source);
    stops.extend(order.iter().map(|&i| waypoints[i].city));
    stops.push(destination);
    stops
}

/// Advance `order` to the next lexicographic permutation.
///
/// Returns `false` (leaving `order` unchanged) once the last permutation has
/// been reached.
fn next_permutation(order: &mut [usize]) -> bool {
    if order.len() < 2 {
        return false;
    }

    // Longest non-increasing suffix starts at `pivot + 1`
    let Some(pivot) = (0..order.len() - 1).rev().find(|&i| order[i] < order[i + 1]) else {
        return false;
    };

    let successor = (pivot + 1..order.len())
        .rev()
        .find(|&j| order[j] > order[pivot])
        .unwrap_or(pivot + 1);

    order.swap(pivot, successor);
    order[pivot + 1..].reverse();
    true
}

#[cfg(test)]
#[path = "sequence_tests.rs"]
mod tests;
