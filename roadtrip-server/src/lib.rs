//! Road trip planner server.
//!
//! Plans a drive between two cities of a weighted road network, optionally
//! passing through named attractions, and resolves the loosely typed names
//! a user enters to the network's canonical ones.

pub mod domain;
pub mod network;
pub mod planner;
pub mod resolver;
pub mod web;
