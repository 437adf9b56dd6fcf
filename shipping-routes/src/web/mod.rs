//! Web layer for the shipping route planner.
//!
//! Provides JSON endpoints for listing ports and calculating journeys.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
