//! In-memory route catalogue.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::domain::{Port, PortCode, ShippingRoute};

use super::RouteCatalogue;
use super::error::CatalogueError;

/// On-disk shape of a catalogue: every port, then every route.
///
/// ```json
/// {
///   "ports": [{ "code": "BA", "name": "Buenos Aires" }],
///   "routes": [{ "from": "BA", "to": "NY", "days": 6 }]
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogueFile {
    pub ports: Vec<Port>,
    #[serde(default)]
    pub routes: Vec<ShippingRoute>,
}

/// Ports and the direct routes between them, held in memory.
///
/// Routes are indexed by departure port so the explorer's
/// "routes leaving P" lookup is a single hash probe. The catalogue is
/// populated once and is read-only afterwards, so it can be shared freely
/// across threads.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalogue {
    ports: HashMap<PortCode, Port>,
    /// Map from departure port to routes leaving it, in load order.
    routes: HashMap<PortCode, Vec<Arc<ShippingRoute>>>,
    route_count: usize,
}

impl InMemoryCatalogue {
    /// Create an empty catalogue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bulk-load ports and routes.
    ///
    /// # Errors
    ///
    /// Fails if a port code appears twice, or a route departs from or
    /// arrives at a port that is not listed.
    pub fn load(ports: Vec<Port>, routes: Vec<ShippingRoute>) -> Result<Self, CatalogueError> {
        let mut catalogue = Self::new();

        for port in ports {
            match catalogue.ports.entry(port.code.clone()) {
                Entry::Occupied(_) => return Err(CatalogueError::DuplicatePort(port.code)),
                Entry::Vacant(slot) => {
                    slot.insert(port);
                }
            }
        }

        for route in routes {
            if let Some(missing) = catalogue.missing_port(&route) {
                return Err(CatalogueError::UnknownPort {
                    missing: missing.clone(),
                    from: route.from,
                    to: route.to,
                });
            }
            catalogue.insert_route(route);
        }

        info!(
            ports = catalogue.ports.len(),
            routes = catalogue.route_count,
            "Loaded route catalogue"
        );

        Ok(catalogue)
    }

    /// Parse and load a catalogue from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogueError> {
        let file: CatalogueFile = serde_json::from_str(json)?;
        Self::load(file.ports, file.routes)
    }

    /// Read and load a catalogue from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogueError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&json)
    }

    /// Returns the port a route refers to that is not in the catalogue, if any.
    fn missing_port<'r>(&self, route: &'r ShippingRoute) -> Option<&'r PortCode> {
        [&route.from, &route.to]
            .into_iter()
            .find(|code| !self.ports.contains_key(*code))
    }

    fn insert_route(&mut self, route: ShippingRoute) {
        self.routes
            .entry(route.from.clone())
            .or_default()
            .push(Arc::new(route));
        self.route_count += 1;
    }

    /// Look up a port by code.
    pub fn port(&self, code: &PortCode) -> Option<&Port> {
        self.ports.get(code)
    }

    /// Returns true if the port is in the catalogue.
    pub fn contains_port(&self, code: &PortCode) -> bool {
        self.ports.contains_key(code)
    }

    /// Returns all ports, sorted by code.
    pub fn ports(&self) -> Vec<&Port> {
        let mut ports: Vec<&Port> = self.ports.values().collect();
        ports.sort_by(|a, b| a.code.cmp(&b.code));
        ports
    }

    /// Returns the number of ports.
    pub fn port_count(&self) -> usize {
        self.ports.len()
    }

    /// Returns the number of routes.
    pub fn route_count(&self) -> usize {
        self.route_count
    }

    /// Returns true if there are no ports.
    pub fn is_empty(&self) -> bool {
        self.ports.is_empty()
    }
}

impl RouteCatalogue for InMemoryCatalogue {
    fn routes_from(&self, port: &PortCode) -> &[Arc<ShippingRoute>] {
        self.routes.get(port).map(|v| v.as_slice()).unwrap_or(&[])
    }
}

/// Builder for creating catalogues from string literals.
///
/// Provides a fluent API for adding ports and routes. Unlike
/// [`InMemoryCatalogue::load`] it never fails: invalid codes, duplicate
/// ports and routes to unknown ports are logged and skipped.
#[derive(Debug, Default)]
pub struct CatalogueBuilder {
    inner: InMemoryCatalogue,
}

impl CatalogueBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a port.
    pub fn port(mut self, code: &str, name: &str) -> Self {
        match PortCode::parse(code) {
            Ok(code) => match self.inner.ports.entry(code) {
                Entry::Occupied(slot) => {
                    warn!(port = %slot.key(), "Skipping duplicate port");
                }
                Entry::Vacant(slot) => {
                    let port = Port::new(slot.key().clone(), name);
                    slot.insert(port);
                }
            },
            Err(e) => warn!(error = %e, "Skipping port"),
        }
        self
    }

    /// Add a route between two previously added ports.
    pub fn route(mut self, from: &str, to: &str, days: u32) -> Self {
        let (from, to) = match (PortCode::parse(from), PortCode::parse(to)) {
            (Ok(from), Ok(to)) => (from, to),
            (Err(e), _) | (_, Err(e)) => {
                warn!(error = %e, "Skipping route");
                return self;
            }
        };

        let route = ShippingRoute::new(from, to, days);
        match self.inner.missing_port(&route) {
            Some(missing) => warn!(route = %route, missing = %missing, "Skipping route to unknown port"),
            None => self.inner.insert_route(route),
        }
        self
    }

    /// Build the catalogue.
    pub fn build(self) -> InMemoryCatalogue {
        self.inner
    }
}
