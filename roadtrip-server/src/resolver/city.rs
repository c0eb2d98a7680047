//! City matching stages.

use crate::domain::City;

use super::{Narrow, StageMatch};

/// Run the city stages against `input` (trimmed, lower-cased) and return
/// the first stage with any matches.
pub(super) fn first_stage(input: &str, cities: &[&City]) -> Option<StageMatch> {
    let exact = matching(cities, |city| city.full_name().to_lowercase() == input);
    if !exact.is_empty() {
        return Some(StageMatch::new("exact", Narrow::Unique, exact));
    }

    let region = matching(cities, |city| city.region().to_lowercase() == input);
    if !region.is_empty() {
        return Some(StageMatch::new("region", Narrow::Always, region));
    }

    let name = matching(cities, |city| city.name().to_lowercase() == input);
    if !name.is_empty() {
        return Some(StageMatch::new("name", Narrow::Unique, name));
    }

    let substring = matching(cities, |city| {
        city.full_name().to_lowercase().contains(input)
    });
    if !substring.is_empty() {
        return Some(StageMatch::new("substring", Narrow::Shortest, substring));
    }

    let tokens: Vec<&str> = input.split_whitespace().collect();
    if tokens.len() < 2 {
        return None;
    }
    let all_tokens = matching(cities, |city| {
        let full_name = city.full_name().to_lowercase();
        tokens.iter().all(|token| full_name.contains(token))
    });
    (!all_tokens.is_empty()).then(|| StageMatch::new("tokens", Narrow::Shortest, all_tokens))
}

fn matching(cities: &[&City], predicate: impl Fn(&City) -> bool) -> Vec<String> {
    cities
        .iter()
        .filter(|city| predicate(city))
        .map(|city| city.full_name().to_string())
        .collect()
}
