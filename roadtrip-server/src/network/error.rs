//! Road network load errors.

use crate::domain::InvalidCityName;

/// Errors raised while loading roads and attractions into a network.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NetworkError {
    /// A city or attraction location was not of the form "Name Region"
    #[error(transparent)]
    InvalidCityName(#[from] InvalidCityName),

    /// Road distances must be positive
    #[error("road between {from} and {to} has zero distance")]
    ZeroDistance { from: String, to: String },
}
