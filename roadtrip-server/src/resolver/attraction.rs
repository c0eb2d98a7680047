//! Attraction matching stages.

use super::levenshtein::levenshtein_distance;
use super::{Narrow, StageMatch};

/// Input tokens this short never score.
const MIN_SCORING_TOKEN: usize = 3;

/// Run the attraction stages against `input` (trimmed, lower-cased) and
/// return the first stage with any matches.
///
/// `names` are canonical attraction names.
pub(super) fn first_stage(input: &str, names: &[&str]) -> Option<StageMatch> {
    let exact = matching(names, |lower| lower == input);
    if !exact.is_empty() {
        return Some(StageMatch::new("exact", Narrow::Unique, exact));
    }

    let substring = matching(names, |lower| lower.contains(input));
    if !substring.is_empty() {
        return Some(StageMatch::new("substring", Narrow::Unique, substring));
    }

    let partial = matching(names, |lower| {
        lower
            .split_whitespace()
            .any(|word| word.contains(input) || input.contains(word))
    });
    if !partial.is_empty() {
        return Some(StageMatch::new("word", Narrow::Unique, partial));
    }

    if let Some(best) = best_scoring(input, names) {
        return Some(StageMatch::new("score", Narrow::Unique, best));
    }

    closest(input, names).map(|name| StageMatch::new("edit distance", Narrow::Unique, vec![name]))
}

fn matching(names: &[&str], predicate: impl Fn(&str) -> bool) -> Vec<String> {
    names
        .iter()
        .filter(|name| predicate(&name.to_lowercase()))
        .map(|name| name.to_string())
        .collect()
}

/// Token-overlap score of `name` for the given input tokens.
///
/// A token found anywhere in the name scores 2; otherwise a token that
/// overlaps one of the name's words scores 1.
fn score(tokens: &[&str], name: &str) -> u32 {
    let lower = name.to_lowercase();
    tokens
        .iter()
        .filter(|token| token.chars().count() >= MIN_SCORING_TOKEN)
        .map(|token| {
            if lower.contains(token) {
                2
            } else if lower
                .split_whitespace()
                .any(|word| word.contains(token) || token.contains(word))
            {
                1
            } else {
                0
            }
        })
        .sum()
}

/// Names sharing the highest positive score. Multi-token input only.
fn best_scoring(input: &str, names: &[&str]) -> Option<Vec<String>> {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    if tokens.len() < 2 {
        return None;
    }

    let scored: Vec<(u32, &str)> = names
        .iter()
        .map(|name| (score(&tokens, name), *name))
        .filter(|(score, _)| *score > 0)
        .collect();
    let top = scored.iter().map(|(score, _)| *score).max()?;

    Some(
        scored
            .into_iter()
            .filter(|(score, _)| *score == top)
            .map(|(_, name)| name.to_string())
            .collect(),
    )
}

/// Closest name by edit distance, if close enough.
///
/// Ties go to the lexically smallest name. Accepted when the distance is at
/// most `max(3, input chars / 3)`.
fn closest(input: &str, names: &[&str]) -> Option<String> {
    let (distance, name) = names
        .iter()
        .map(|name| (levenshtein_distance(input, &name.to_lowercase()), *name))
        .min()?;

    let limit = 3.max(input.chars().count() / 3);
    (distance <= limit).then(|| name.to_string())
}
