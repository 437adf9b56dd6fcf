//! Domain error types.
//!
//! These errors represent validation failures and data inconsistencies
//! in the domain layer. They are distinct from catalogue and web errors.

use super::PortCode;

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Consecutive routes don't share a port
    #[error("routes do not connect: arrive at {0} but next departs from {1}")]
    RoutesNotConnected(PortCode, PortCode),

    /// Journey has no routes
    #[error("journey must have at least one route")]
    EmptyJourney,
}
