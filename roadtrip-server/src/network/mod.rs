//! The road network: cities, roads between them, and attractions.
//!
//! Cities live in an arena addressed by [`CityId`]; each city stores its
//! neighbours as `CityId -> distance`. Roads are undirected, so every insert
//! writes both directions with the same distance.
//!
//! A network is built once (directly, or through [`NetworkBuilder`]) and is
//! read-only afterwards. Searches borrow it immutably, which makes sharing
//! one network between concurrent queries safe without locking.

mod error;
pub mod sample;

use std::collections::HashMap;

use tracing::warn;

use crate::domain::{Attraction, City, CityId, CityKey, Coordinates};

pub use error::NetworkError;

/// A weighted, undirected graph of cities plus the attractions bound to them.
#[derive(Debug, Clone, Default)]
pub struct RoadNetwork {
    /// City arena; a `CityId` is an index into this vector.
    cities: Vec<City>,

    /// Canonical full name -> arena index.
    index: HashMap<String, CityId>,

    /// Attraction name -> attraction.
    attractions: HashMap<String, Attraction>,

    /// City full name -> name of the attraction bound to it.
    city_to_attraction: HashMap<String, String>,

    /// Number of distinct undirected roads.
    roads: usize,
}

impl RoadNetwork {
    /// Create an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an undirected road between two cities, creating either city if
    /// this is its first mention.
    ///
    /// Adding a road that already exists replaces its distance in both
    /// directions.
    pub fn add_road(&mut self, from: &str, to: &str, distance: u32) -> Result<(), NetworkError> {
        let from_key = CityKey::parse(from)?;
        let to_key = CityKey::parse(to)?;

        if distance == 0 {
            return Err(NetworkError::ZeroDistance {
                from: from_key.full_name(),
                to: to_key.full_name(),
            });
        }

        let a = self.intern(from_key);
        let b = self.intern(to_key);

        if !self.cities[a.0].connections().contains_key(&b) {
            self.roads += 1;
        }
        self.cities[a.0].connect(b, distance);
        self.cities[b.0].connect(a, distance);

        Ok(())
    }

    /// Add an attraction located in `location` ("Name Region"), creating the
    /// city if needed and binding the attraction to it.
    ///
    /// A city holds at most one attraction; a later binding replaces the
    /// earlier one in the city's record. Re-adding a known attraction in a
    /// different city moves it there.
    pub fn add_attraction(&mut self, name: &str, location: &str) -> Result<(), NetworkError> {
        let attraction = Attraction::new(name, location)?;

        if let Some(previous) = self.attractions.get(attraction.name()) {
            let old_city = previous.city_full_name();
            if previous.location() != attraction.location() {
                warn!(
                    attraction = attraction.name(),
                    from = %old_city,
                    to = %attraction.city_full_name(),
                    "Attraction moved to another city"
                );
                self.unbind(&old_city, attraction.name());
            }
        }

        let id = self.intern(attraction.location().clone());
        let city = &mut self.cities[id.0];

        if let Some(previous) = city.attraction() {
            if previous != attraction.name() {
                warn!(
                    city = %city.full_name(),
                    previous,
                    replacement = attraction.name(),
                    "City already has an attraction, rebinding"
                );
            }
        }

        city.bind_attraction(attraction.name().to_string());
        self.city_to_attraction
            .insert(city.full_name().to_string(), attraction.name().to_string());
        self.attractions.insert(attraction.name().to_string(), attraction);

        Ok(())
    }

    /// Attach decorative coordinates to a city, creating it if needed.
    pub fn place_city(
        &mut self,
        full_name: &str,
        coordinates: Coordinates,
    ) -> Result<CityId, NetworkError> {
        let id = self.intern(CityKey::parse(full_name)?);
        self.cities[id.0].place(coordinates);
        Ok(id)
    }

    /// Clear `city`'s binding if it still names `attraction`.
    fn unbind(&mut self, city: &str, attraction: &str) {
        if self.attraction_in_city(city) != Some(attraction) {
            return;
        }
        self.city_to_attraction.remove(city);
        if let Some(id) = self.city_id(city) {
            self.cities[id.0].unbind_attraction();
        }
    }

    /// Return the id for `key`, inserting a new city if it is unknown.
    fn intern(&mut self, key: CityKey) -> CityId {
        let full_name = key.full_name();
        if let Some(id) = self.index.get(&full_name) {
            return *id;
        }

        let id = CityId(self.cities.len());
        self.cities.push(City::new(id, key));
        self.index.insert(full_name, id);
        id
    }

    /// Check whether a city with this exact full name exists.
    pub fn city_exists(&self, full_name: &str) -> bool {
        self.index.contains_key(full_name)
    }

    /// Check whether an attraction with this exact name exists.
    pub fn attraction_exists(&self, name: &str) -> bool {
        self.attractions.contains_key(name)
    }

    /// Look up a city by its exact full name.
    pub fn city(&self, full_name: &str) -> Option<&City> {
        self.city_id(full_name).map(|id| self.city_by_id(id))
    }

    /// Look up the arena id for a full name.
    pub fn city_id(&self, full_name: &str) -> Option<CityId> {
        self.index.get(full_name).copied()
    }

    /// Access a city by id.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this network.
    pub fn city_by_id(&self, id: CityId) -> &City {
        &self.cities[id.0]
    }

    /// Look up an attraction by exact name.
    pub fn attraction(&self, name: &str) -> Option<&Attraction> {
        self.attractions.get(name)
    }

    /// The city an attraction is located in.
    pub fn city_for_attraction(&self, name: &str) -> Option<&City> {
        let attraction = self.attractions.get(name)?;
        self.city(&attraction.city_full_name())
    }

    /// Name of the attraction bound to a city, if any.
    pub fn attraction_in_city(&self, full_name: &str) -> Option<&str> {
        self.city_to_attraction.get(full_name).map(String::as_str)
    }

    /// All cities, in the order they were first mentioned.
    pub fn cities(&self) -> impl Iterator<Item = &City> {
        self.cities.iter()
    }

    /// All attractions, in no particular order.
    pub fn attractions(&self) -> impl Iterator<Item = &Attraction> {
        self.attractions.values()
    }

    /// Neighbours of a city and the distance to each.
    pub fn connections(&self, id: CityId) -> &std::collections::BTreeMap<CityId, u32> {
        self.city_by_id(id).connections()
    }

    /// Distance of the direct road between two cities, if there is one.
    pub fn edge_weight(&self, from: CityId, to: CityId) -> Option<u32> {
        self.connections(from).get(&to).copied()
    }

    /// Number of cities.
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Returns true if the network has no cities.
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Number of undirected roads.
    pub fn road_count(&self) -> usize {
        self.roads
    }

    /// Number of attractions.
    pub fn attraction_count(&self) -> usize {
        self.attractions.len()
    }
}

/// Builder for loading a network from records.
///
/// Malformed records are skipped with a warning rather than aborting the
/// load, so one bad row does not take the whole dataset down.
#[derive(Debug, Default)]
pub struct NetworkBuilder {
    inner: RoadNetwork,
    skipped: usize,
}

impl NetworkBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a road record.
    pub fn road(mut self, from: &str, to: &str, distance: u32) -> Self {
        if let Err(e) = self.inner.add_road(from, to, distance) {
            warn!(from, to, distance, error = %e, "Skipping road record");
            self.skipped += 1;
        }
        self
    }

    /// Add an attraction record.
    pub fn attraction(mut self, name: &str, location: &str) -> Self {
        if let Err(e) = self.inner.add_attraction(name, location) {
            warn!(name, location, error = %e, "Skipping attraction record");
            self.skipped += 1;
        }
        self
    }

    /// Attach decorative coordinates to a city.
    pub fn place(mut self, full_name: &str, latitude: f64, longitude: f64) -> Self {
        let coordinates = Coordinates {
            latitude,
            longitude,
        };
        if let Err(e) = self.inner.place_city(full_name, coordinates) {
            warn!(full_name, error = %e, "Skipping coordinates record");
            self.skipped += 1;
        }
        self
    }

    /// Number of records skipped so far.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Build the network.
    pub fn build(self) -> RoadNetwork {
        self.inner
    }
}
