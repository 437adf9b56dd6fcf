//! Domain types for the shipping route planner.
//!
//! This module contains the core model: ports, the routes between them and
//! journeys built from those routes. Types enforce their invariants at
//! construction time, so code that receives them can trust their validity.

mod error;
mod journey;
mod port;
mod route;

pub use error::DomainError;
pub use journey::Journey;
pub use port::{InvalidPortCode, Port, PortCode};
pub use route::{ShippingRoute, TravelDays};
