//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Attraction, City, Coordinates};
use crate::planner::{Algorithm, Route, Stop, WaypointOrder};
use crate::resolver::Resolution;

/// Query for the search endpoints.
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    /// Free-text query
    pub q: String,

    /// Maximum number of results (default 10, at most 50)
    pub limit: Option<usize>,
}

/// Names matching a search query.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub matches: Vec<String>,
}

/// Query for the resolve endpoints.
#[derive(Debug, Deserialize)]
pub struct ResolveRequest {
    /// Free-text query
    pub q: String,
}

/// Result of resolving one name.
#[derive(Debug, Serialize)]
pub struct ResolveResponse {
    /// The query as given
    pub query: String,

    pub resolution: Resolution,
}

/// A city in the network listing.
#[derive(Debug, Serialize)]
pub struct CityResult {
    /// Canonical full name (e.g., "Houston TX")
    pub full_name: String,

    /// City name without region
    pub name: String,

    /// Region code
    pub region: String,

    /// Attraction located in the city
    pub attraction: Option<String>,

    /// Number of roads leaving the city
    pub roads: usize,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
}

/// Every city in the network.
#[derive(Debug, Serialize)]
pub struct CityListResponse {
    pub cities: Vec<CityResult>,
}

/// An attraction in the network listing.
#[derive(Debug, Serialize)]
pub struct AttractionResult {
    /// Attraction name
    pub name: String,

    /// Full name of the city it is in
    pub city: String,
}

/// Every attraction in the network.
#[derive(Debug, Serialize)]
pub struct AttractionListResponse {
    pub attractions: Vec<AttractionResult>,
}

/// Request to plan a route.
///
/// Names may be free text; they are resolved before planning.
#[derive(Debug, Deserialize)]
pub struct PlanRouteRequest {
    /// Starting city
    pub source: String,

    /// Final city
    pub destination: String,

    /// Attractions to visit on the way
    #[serde(default)]
    pub attractions: Vec<String>,

    /// Waypoint ordering (server default if absent)
    pub order: Option<WaypointOrder>,

    /// Path finder (server default if absent)
    pub algorithm: Option<Algorithm>,
}

/// A planned route.
#[derive(Debug, Serialize)]
pub struct PlanRouteResponse {
    /// Cities from source to destination
    pub cities: Vec<String>,

    /// Total road distance
    pub total_distance: u32,

    /// Number of roads travelled
    pub hops: usize,

    /// Attractions in visiting order
    pub stops: Vec<Stop>,

    /// Waypoint ordering used
    pub order: WaypointOrder,

    /// Path finder used
    pub algorithm: Algorithm,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,

    /// Possible intended names, for ambiguous input
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub candidates: Vec<String>,
}

// Conversion implementations

impl From<&City> for CityResult {
    fn from(city: &City) -> Self {
        Self {
            full_name: city.full_name().to_string(),
            name: city.name().to_string(),
            region: city.region().to_string(),
            attraction: city.attraction().map(str::to_string),
            roads: city.connections().len(),
            coordinates: city.coordinates(),
        }
    }
}

impl From<&Attraction> for AttractionResult {
    fn from(attraction: &Attraction) -> Self {
        Self {
            name: attraction.name().to_string(),
            city: attraction.city_full_name(),
        }
    }
}

impl PlanRouteResponse {
    /// Create from a planned route and the settings that produced it.
    pub fn from_route(route: Route, order: WaypointOrder, algorithm: Algorithm) -> Self {
        Self {
            hops: route.hop_count(),
            cities: route.cities,
            total_distance: route.total_distance,
            stops: route.stops,
            order,
            algorithm,
        }
    }
}
