//! Journey types.
//!
//! A `Journey` is one concrete walk through the route graph: an ordered
//! sequence of shipping routes where each route departs from the port the
//! previous one arrived at.

use std::fmt;
use std::sync::Arc;

use super::{DomainError, PortCode, ShippingRoute, TravelDays};

/// An ordered sequence of shipping routes from an origin toward a destination.
///
/// Cloning a journey copies the sequence but shares the routes, so a branch
/// can extend its own copy without the sibling branches observing it.
///
/// # Invariants
///
/// - Consecutive routes connect (`routes[i].to == routes[i + 1].from`)
///
/// The validity flag is only meaningful for journeys built from an explicit
/// stop list; see [`RouteProcessor::direct_journey`](crate::planner::RouteProcessor::direct_journey).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Journey {
    routes: Vec<Arc<ShippingRoute>>,
    valid: bool,
}

impl Journey {
    /// Creates an empty, not yet valid journey.
    pub fn new() -> Self {
        Self::default()
    }

    /// Constructs a valid journey from connected routes.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - Routes list is empty
    /// - Routes don't connect (arrival port != next departure port)
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::Arc;
    /// use shipping_routes::domain::{Journey, PortCode, ShippingRoute, TravelDays};
    ///
    /// let ba = PortCode::parse("BA").unwrap();
    /// let ny = PortCode::parse("NY").unwrap();
    /// let lv = PortCode::parse("LV").unwrap();
    ///
    /// let journey = Journey::from_routes(vec![
    ///     Arc::new(ShippingRoute::new(ba, ny.clone(), 6)),
    ///     Arc::new(ShippingRoute::new(ny, lv, 4)),
    /// ])
    /// .unwrap();
    ///
    /// assert!(journey.is_valid());
    /// assert_eq!(journey.stop_count(), 2);
    /// assert_eq!(journey.total_days(), TravelDays(10));
    /// assert_eq!(journey.to_string(), "BA -> NY -> LV (10 days)");
    /// ```
    pub fn from_routes(routes: Vec<Arc<ShippingRoute>>) -> Result<Self, DomainError> {
        if routes.is_empty() {
            return Err(DomainError::EmptyJourney);
        }

        let mut journey = Journey::new();
        for route in routes {
            journey.push(route)?;
        }
        journey.valid = true;

        Ok(journey)
    }

    /// Appends a route to the end of the journey.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the route does not depart from the current
    /// destination.
    pub fn push(&mut self, route: Arc<ShippingRoute>) -> Result<(), DomainError> {
        if let Some(last) = self.routes.last() {
            if last.to != route.from {
                return Err(DomainError::RoutesNotConnected(
                    last.to.clone(),
                    route.from.clone(),
                ));
            }
        }
        self.routes.push(route);
        Ok(())
    }

    /// Returns a copy of this journey extended by one route.
    ///
    /// The copy owns its own sequence; `self` is left untouched.
    pub fn branch(&self, route: &Arc<ShippingRoute>) -> Result<Self, DomainError> {
        let mut next = Journey {
            routes: Vec::with_capacity(self.routes.len() + 1),
            valid: false,
        };
        next.routes.extend(self.routes.iter().cloned());
        next.push(Arc::clone(route))?;
        Ok(next)
    }

    pub(crate) fn mark_valid(&mut self) {
        self.valid = true;
    }

    /// Returns true if the journey was confirmed as complete.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Returns all routes in travel order.
    pub fn routes(&self) -> &[Arc<ShippingRoute>] {
        &self.routes
    }

    /// Returns the number of stops (routes taken).
    pub fn stop_count(&self) -> usize {
        self.routes.len()
    }

    /// Returns true if no route has been taken yet.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Returns the total voyage time.
    pub fn total_days(&self) -> TravelDays {
        self.routes.iter().map(|r| r.days).sum()
    }

    /// Returns the departure port, if any route has been taken.
    pub fn origin(&self) -> Option<&PortCode> {
        self.routes.first().map(|r| &r.from)
    }

    /// Returns the arrival port, if any route has been taken.
    pub fn destination(&self) -> Option<&PortCode> {
        self.routes.last().map(|r| &r.to)
    }

    /// Returns every port visited, origin first.
    pub fn ports(&self) -> Vec<&PortCode> {
        let mut ports = Vec::with_capacity(self.routes.len() + 1);
        if let Some(origin) = self.origin() {
            ports.push(origin);
        }
        ports.extend(self.routes.iter().map(|r| &r.to));
        ports
    }

    /// Returns true if some route in the journey departs from `port`.
    pub fn departs_from(&self, port: &PortCode) -> bool {
        self.routes.iter().any(|r| &r.from == port)
    }
}

impl fmt::Display for Journey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.routes.is_empty() {
            return f.write_str("(no routes)");
        }
        for (i, port) in self.ports().iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{port}")?;
        }
        write!(f, " ({})", self.total_days())
    }
}
