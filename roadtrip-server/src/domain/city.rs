//! City identity and city records.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// Error returned when parsing a malformed city full name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid city name {input:?}: {reason}")]
pub struct InvalidCityName {
    input: String,
    reason: &'static str,
}

/// A city's identity: its name plus the region (state) it sits in.
///
/// The canonical textual form is `"<Name> <Region>"`, where the region is the
/// final whitespace-delimited token. Any run of whitespace inside the name is
/// collapsed to a single space, so a `CityKey` always round-trips through
/// [`CityKey::full_name`].
///
/// # Examples
///
/// ```
/// use roadtrip_server::domain::CityKey;
///
/// let key = CityKey::parse("New York NY").unwrap();
/// assert_eq!(key.name(), "New York");
/// assert_eq!(key.region(), "NY");
/// assert_eq!(key.full_name(), "New York NY");
///
/// // A region on its own is not a city
/// assert!(CityKey::parse("NY").is_err());
/// assert!(CityKey::parse("   ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CityKey {
    name: String,
    region: String,
}

impl CityKey {
    /// Parse a full name of the form `"<Name> <Region>"`.
    pub fn parse(full_name: &str) -> Result<Self, InvalidCityName> {
        let mut tokens: Vec<&str> = full_name.split_whitespace().collect();

        let region = match tokens.pop() {
            Some(region) => region,
            None => {
                return Err(InvalidCityName {
                    input: full_name.to_string(),
                    reason: "must not be blank",
                });
            }
        };

        if tokens.is_empty() {
            return Err(InvalidCityName {
                input: full_name.to_string(),
                reason: "must contain a name followed by a region",
            });
        }

        Ok(Self {
            name: tokens.join(" "),
            region: region.to_string(),
        })
    }

    /// The city name without its region.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The region (state abbreviation).
    pub fn region(&self) -> &str {
        &self.region
    }

    /// The canonical `"<Name> <Region>"` form.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.region)
    }
}

impl fmt::Debug for CityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CityKey({} {})", self.name, self.region)
    }
}

impl fmt::Display for CityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.region)
    }
}

/// Dense index of a city inside a [`RoadNetwork`](crate::network::RoadNetwork).
///
/// Ids are only meaningful for the network that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CityId(pub usize);

/// Decorative map position. Never consulted by path finding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// A node of the road network.
#[derive(Debug, Clone)]
pub struct City {
    id: CityId,
    key: CityKey,
    full_name: String,
    connections: BTreeMap<CityId, u32>,
    attraction: Option<String>,
    coordinates: Option<Coordinates>,
}

impl City {
    pub(crate) fn new(id: CityId, key: CityKey) -> Self {
        let full_name = key.full_name();
        Self {
            id,
            key,
            full_name,
            connections: BTreeMap::new(),
            attraction: None,
            coordinates: None,
        }
    }

    pub fn id(&self) -> CityId {
        self.id
    }

    pub fn key(&self) -> &CityKey {
        &self.key
    }

    /// The canonical `"<Name> <Region>"` form, cached at construction.
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn name(&self) -> &str {
        self.key.name()
    }

    pub fn region(&self) -> &str {
        self.key.region()
    }

    /// Neighbouring cities and the road distance to each.
    pub fn connections(&self) -> &BTreeMap<CityId, u32> {
        &self.connections
    }

    /// Smallest outgoing road distance, or `None` for an isolated city.
    pub fn min_connection(&self) -> Option<u32> {
        self.connections.values().copied().min()
    }

    /// Name of the attraction bound to this city, if any.
    pub fn attraction(&self) -> Option<&str> {
        self.attraction.as_deref()
    }

    pub fn has_attraction(&self) -> bool {
        self.attraction.is_some()
    }

    pub fn coordinates(&self) -> Option<Coordinates> {
        self.coordinates
    }

    pub(crate) fn connect(&mut self, other: CityId, distance: u32) {
        self.connections.insert(other, distance);
    }

    pub(crate) fn bind_attraction(&mut self, name: String) {
        self.attraction = Some(name);
    }

    pub(crate) fn unbind_attraction(&mut self) {
        self.attraction = None;
    }

    pub(crate) fn place(&mut self, coordinates: Coordinates) {
        self.coordinates = Some(coordinates);
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Parsing a canonical full name gives back the same full name.
        #[test]
        fn roundtrip(name in "[A-Z][a-z]{1,8}( [A-Z][a-z]{1,8}){0,2}", region in "[A-Z]{2}") {
            let full = format!("{name} {region}");
            let key = CityKey::parse(&full).unwrap();
            prop_assert_eq!(key.full_name(), full);
            prop_assert_eq!(key.region(), region.as_str());
        }

        /// Anything without whitespace is never a valid city.
        #[test]
        fn single_token_rejected(s in "[A-Za-z]{0,12}") {
            prop_assert!(CityKey::parse(&s).is_err());
        }
    }
}
