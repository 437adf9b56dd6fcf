//! Catalogue error types.

use crate::domain::{InvalidPortCode, PortCode};

/// Errors that can occur when loading a route catalogue.
#[derive(Debug, thiserror::Error)]
pub enum CatalogueError {
    /// Reading the catalogue file failed
    #[error("failed to read catalogue: {0}")]
    Io(#[from] std::io::Error),

    /// Catalogue file is not valid JSON (or has invalid port codes)
    #[error("catalogue JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A port code failed validation
    #[error(transparent)]
    InvalidPortCode(#[from] InvalidPortCode),

    /// The same port code was listed twice
    #[error("duplicate port code {0}")]
    DuplicatePort(PortCode),

    /// A route refers to a port that is not in the catalogue
    #[error("route {from} -> {to} refers to unknown port {missing}")]
    UnknownPort {
        from: PortCode,
        to: PortCode,
        missing: PortCode,
    },
}
