//! Web layer for the road trip planner.
//!
//! Provides JSON endpoints for browsing the network, resolving names and
//! planning routes.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
