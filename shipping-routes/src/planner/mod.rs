//! Journey planner.
//!
//! Answers two questions over a route catalogue:
//!
//! - How long does this exact sequence of stops take?
//! - Which journeys lead from one port to another, within optional limits
//!   on stops and days?
//!
//! The second is an exhaustive enumeration of simple paths, explored in
//! parallel, from which aggregates such as the shortest voyage are read.

mod config;
mod permutations;
mod processor;

pub use config::JourneyFilter;
pub use permutations::JourneyPermutations;
pub use processor::{PlanError, RouteProcessor};
