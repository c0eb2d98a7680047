//! Free-text name resolution.
//!
//! Maps what a user typed to canonical city full names and attraction names.
//! Each lookup runs a cascade of increasingly lenient matching stages and
//! stops at the first stage that matches anything.

mod attraction;
mod city;
mod levenshtein;

pub use levenshtein::levenshtein_distance;

use serde::Serialize;
use tracing::debug;

use crate::network::RoadNetwork;

/// Outcome of resolving a name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum Resolution {
    /// Exactly one canonical name.
    Resolved(String),
    /// Several equally good names, sorted. The caller must pick one.
    Candidates(Vec<String>),
    NoMatch,
}

impl Resolution {
    /// The resolved name, if there is exactly one.
    pub fn resolved(&self) -> Option<&str> {
        match self {
            Resolution::Resolved(name) => Some(name),
            _ => None,
        }
    }

    pub fn is_ambiguous(&self) -> bool {
        matches!(self, Resolution::Candidates(_))
    }
}

/// How a stage's matches turn into a [`Resolution`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Narrow {
    /// One match resolves; several are candidates.
    Unique,
    /// Always candidates, even for a single match.
    Always,
    /// The shortest name resolves; names tied on length are candidates.
    Shortest,
}

/// Matches from the first stage of a cascade that found anything.
#[derive(Debug)]
struct StageMatch {
    stage: &'static str,
    narrow: Narrow,
    names: Vec<String>,
}

impl StageMatch {
    fn new(stage: &'static str, narrow: Narrow, mut names: Vec<String>) -> Self {
        names.sort();
        names.dedup();
        Self {
            stage,
            narrow,
            names,
        }
    }

    fn into_resolution(self) -> Resolution {
        let mut names = self.names;
        match self.narrow {
            Narrow::Always => Resolution::Candidates(names),
            Narrow::Unique if names.len() == 1 => Resolution::Resolved(names.remove(0)),
            Narrow::Unique => Resolution::Candidates(names),
            Narrow::Shortest => {
                let chars = |name: &String| name.chars().count();
                let shortest = names.iter().map(chars).min().unwrap_or(0);
                names.retain(|name| chars(name) == shortest);
                if names.len() == 1 {
                    Resolution::Resolved(names.remove(0))
                } else {
                    Resolution::Candidates(names)
                }
            }
        }
    }
}

/// Trim and lower-case; `None` for blank input.
fn normalize(input: &str) -> Option<String> {
    let trimmed = input.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_lowercase())
}

/// Resolves free text against a road network.
pub struct NameResolver<'a> {
    network: &'a RoadNetwork,
}

impl<'a> NameResolver<'a> {
    pub fn new(network: &'a RoadNetwork) -> Self {
        Self { network }
    }

    /// Resolve free text to a city full name.
    ///
    /// An exact region code (e.g. `"ny"`) always yields every city in that
    /// region as candidates.
    pub fn resolve_city(&self, input: &str) -> Resolution {
        let resolution = self
            .city_stage(input)
            .map_or(Resolution::NoMatch, StageMatch::into_resolution);
        debug!(input, ?resolution, "Resolved city");
        resolution
    }

    /// Resolve free text to an attraction name.
    pub fn resolve_attraction(&self, input: &str) -> Resolution {
        let resolution = self
            .attraction_stage(input)
            .map_or(Resolution::NoMatch, StageMatch::into_resolution);
        debug!(input, ?resolution, "Resolved attraction");
        resolution
    }

    /// Every city matched by the first matching stage, sorted.
    pub fn city_candidates(&self, input: &str) -> Vec<String> {
        self.city_stage(input)
            .map(|found| found.names)
            .unwrap_or_default()
    }

    /// Every attraction matched by the first matching stage, sorted.
    pub fn attraction_candidates(&self, input: &str) -> Vec<String> {
        self.attraction_stage(input)
            .map(|found| found.names)
            .unwrap_or_default()
    }

    fn city_stage(&self, input: &str) -> Option<StageMatch> {
        let input = normalize(input)?;
        let cities: Vec<_> = self.network.cities().collect();
        let found = city::first_stage(&input, &cities)?;
        debug!(stage = found.stage, matches = found.names.len(), "City stage matched");
        Some(found)
    }

    fn attraction_stage(&self, input: &str) -> Option<StageMatch> {
        let input = normalize(input)?;
        let names: Vec<&str> = self.network.attractions().map(|a| a.name()).collect();
        let found = attraction::first_stage(&input, &names)?;
        debug!(
            stage = found.stage,
            matches = found.names.len(),
            "Attraction stage matched"
        );
        Some(found)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::network::sample::us_network;
    use proptest::prelude::*;

    proptest! {
        /// A resolved name is canonical, so resolving it again is a no-op.
        #[test]
        fn city_resolution_is_idempotent(input in "[A-Za-z ]{0,12}") {
            let network = us_network();
            let resolver = NameResolver::new(&network);

            if let Resolution::Resolved(name) = resolver.resolve_city(&input) {
                prop_assert!(network.city_exists(&name));
                prop_assert_eq!(resolver.resolve_city(&name), Resolution::Resolved(name));
            }
        }

        /// Candidate lists are sorted, unique and all canonical.
        #[test]
        fn candidates_are_canonical(input in "[a-z ]{1,8}") {
            let network = us_network();
            let resolver = NameResolver::new(&network);

            let cities = resolver.city_candidates(&input);
            prop_assert!(cities.windows(2).all(|pair| pair[0] < pair[1]));
            prop_assert!(cities.iter().all(|name| network.city_exists(name)));

            let attractions = resolver.attraction_candidates(&input);
            prop_assert!(attractions.windows(2).all(|pair| pair[0] < pair[1]));
            prop_assert!(attractions.iter().all(|name| network.attraction_exists(name)));
        }
    }
}
