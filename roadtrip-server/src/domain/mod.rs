//! Domain types for the road trip planner.
//!
//! This module contains the validated value types the rest of the crate is
//! built on. City names are checked at construction time, so code that
//! receives a `CityKey` can trust its `"<Name> <Region>"` shape.

mod attraction;
mod city;

pub use attraction::Attraction;
pub use city::{City, CityId, CityKey, Coordinates, InvalidCityName};
