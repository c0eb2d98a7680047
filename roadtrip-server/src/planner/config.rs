//! Configuration for the route planner.

use super::path::Algorithm;
use super::sequence::WaypointOrder;

/// Configuration parameters for route planning.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Largest waypoint count accepted in unordered mode.
    /// Permutation search is factorial in this number.
    pub max_unordered_waypoints: usize,

    /// Largest waypoint count accepted in any mode.
    pub max_waypoints: usize,

    /// Search algorithm used when a request does not name one.
    pub default_algorithm: Algorithm,

    /// Waypoint ordering used when a request does not name one.
    pub default_order: WaypointOrder,
}

impl PlannerConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        max_unordered_waypoints: usize,
        max_waypoints: usize,
        default_algorithm: Algorithm,
        default_order: WaypointOrder,
    ) -> Self {
        Self {
            max_unordered_waypoints,
            max_waypoints,
            default_algorithm,
            default_order,
        }
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_unordered_waypoints: 8, // 8! = 40320 orderings
            max_waypoints: 20,
            default_algorithm: Algorithm::Dijkstra,
            default_order: WaypointOrder::Ordered,
        }
    }
}
