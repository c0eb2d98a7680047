//! Road trip planner.
//!
//! Two layers:
//!
//! - single-pair path finding over the road network, either by relaxation
//!   search ([`dijkstra`]) or heuristic-guided search ([`astar`]);
//! - route sequencing ([`Planner`]), which orders a trip's attractions and
//!   stitches the legs between them into one route.

mod astar;
mod config;
mod dijkstra;
mod path;
mod sequence;

#[cfg(test)]
pub(crate) mod testing;

pub use astar::{astar, heuristic};
pub use config::PlannerConfig;
pub use dijkstra::{SearchTree, dijkstra, dijkstra_path};
pub use path::{Algorithm, ShortestPath, shortest_path};
pub use sequence::{EntityKind, PlanError, Planner, Route, RouteRequest, Stop, WaypointOrder};
