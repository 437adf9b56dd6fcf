//! Port and route catalogue.
//!
//! The catalogue is the graph the planner walks: ports are nodes, shipping
//! routes are directed, weighted edges. It is loaded once before any query
//! and is read-only afterwards.

mod error;
mod memory;

use std::sync::Arc;

use crate::domain::{PortCode, ShippingRoute};

pub use error::CatalogueError;
pub use memory::{CatalogueBuilder, CatalogueFile, InMemoryCatalogue};

/// Read access to the route graph.
///
/// This abstraction allows the planner to be tested with mock data. It must
/// be `Sync` because the explorer queries it from many threads at once.
pub trait RouteCatalogue: Sync {
    /// All routes departing `port`, or an empty slice for a port with no
    /// routes (including ports the catalogue has never heard of).
    fn routes_from(&self, port: &PortCode) -> &[Arc<ShippingRoute>];

    /// The direct route from `from` to `to`, if one exists.
    ///
    /// When several routes join the same pair of ports, the first loaded
    /// wins.
    fn route_between(&self, from: &PortCode, to: &PortCode) -> Option<Arc<ShippingRoute>> {
        self.routes_from(from)
            .iter()
            .find(|route| &route.to == to)
            .cloned()
    }
}

/// Create the sample landscape of five ports and nine routes.
///
/// Used as the default dataset when no catalogue file is configured.
pub fn landscape() -> InMemoryCatalogue {
    CatalogueBuilder::new()
        .port("BA", "Buenos Aires")
        .port("NY", "New York")
        .port("CB", "Casablanca")
        .port("CT", "Cape Town")
        .port("LV", "Liverpool")
        .route("BA", "NY", 6)
        .route("BA", "CB", 5)
        .route("BA", "CT", 4)
        .route("NY", "LV", 4)
        .route("LV", "CB", 3)
        .route("LV", "CT", 6)
        .route("CB", "LV", 3)
        .route("CB", "CT", 6)
        .route("CT", "NY", 8)
        .build()
}
