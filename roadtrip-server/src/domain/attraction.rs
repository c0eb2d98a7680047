//! Points of interest.

use super::{CityKey, InvalidCityName};

/// A named point of interest anchored to exactly one city.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attraction {
    name: String,
    location: CityKey,
}

impl Attraction {
    /// Create an attraction from its name and the full name of its city.
    ///
    /// # Examples
    ///
    /// ```
    /// use roadtrip_server::domain::Attraction;
    ///
    /// let sign = Attraction::new("Hollywood Sign", "Los Angeles CA").unwrap();
    /// assert_eq!(sign.location().name(), "Los Angeles");
    /// assert_eq!(sign.city_full_name(), "Los Angeles CA");
    /// ```
    pub fn new(name: &str, location: &str) -> Result<Self, InvalidCityName> {
        Ok(Self {
            name: name.trim().to_string(),
            location: CityKey::parse(location)?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The city this attraction belongs to.
    pub fn location(&self) -> &CityKey {
        &self.location
    }

    /// Lookup key of the owning city.
    pub fn city_full_name(&self) -> String {
        self.location.full_name()
    }
}
