//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Journey, Port, ShippingRoute};
use crate::planner::JourneyPermutations;

/// A port in the catalogue.
#[derive(Debug, Serialize)]
pub struct PortResult {
    /// Port code
    pub code: String,

    /// Full port name
    pub name: String,
}

impl PortResult {
    /// Build from a domain port.
    pub fn from_port(port: &Port) -> Self {
        Self {
            code: port.code.to_string(),
            name: port.name.clone(),
        }
    }
}

/// Response listing every port.
#[derive(Debug, Serialize)]
pub struct PortsResponse {
    pub ports: Vec<PortResult>,
}

/// Request to follow an explicit list of stops.
#[derive(Debug, Deserialize)]
pub struct DirectJourneyRequest {
    /// Departure port code
    pub from: String,

    /// Ports to call at, in order
    pub stops: Vec<String>,
}

/// Response for a direct journey.
#[derive(Debug, Serialize)]
pub struct DirectJourneyResponse {
    /// Whether every hop has a direct route
    pub valid: bool,

    /// The journey, present only when valid
    pub journey: Option<JourneyResult>,
}

/// Request to find all journeys between two ports.
#[derive(Debug, Deserialize)]
pub struct IndirectJourneyRequest {
    /// Departure port code
    pub from: String,

    /// Arrival port code (may equal `from` for a round trip)
    pub to: String,

    /// Fewest stops allowed
    pub min_stops: Option<usize>,

    /// Most stops allowed
    pub max_stops: Option<usize>,

    /// Longest voyage allowed, in days
    pub max_days: Option<u32>,
}

/// Response for an indirect search.
#[derive(Debug, Serialize)]
pub struct IndirectJourneyResponse {
    /// Total number of journeys found
    pub count: usize,

    /// Whether any journey was found
    pub has_valid_permutations: bool,

    /// Shortest voyage among all journeys found
    pub shortest_days: Option<u32>,

    /// Journeys, shortest first (may be truncated)
    pub journeys: Vec<JourneyResult>,

    /// Whether `journeys` was cut short
    pub truncated: bool,
}

impl IndirectJourneyResponse {
    /// Build from search results, listing at most `max_results` journeys.
    pub fn from_permutations(found: JourneyPermutations, max_results: usize) -> Self {
        let has_valid_permutations = found.has_valid_permutations();
        let shortest_days = has_valid_permutations.then(|| found.shortest_days().get());

        let mut journeys = found.into_journeys();
        let count = journeys.len();

        // Deposit order is nondeterministic; present a stable ordering.
        journeys.sort_by(|a, b| {
            a.total_days()
                .cmp(&b.total_days())
                .then_with(|| a.stop_count().cmp(&b.stop_count()))
                .then_with(|| a.ports().cmp(&b.ports()))
        });
        journeys.truncate(max_results);

        Self {
            count,
            has_valid_permutations,
            shortest_days,
            truncated: journeys.len() < count,
            journeys: journeys.iter().map(JourneyResult::from_journey).collect(),
        }
    }
}

/// A journey.
#[derive(Debug, Serialize)]
pub struct JourneyResult {
    /// Ports visited, origin first
    pub ports: Vec<String>,

    /// Number of stops
    pub stops: usize,

    /// Total voyage time in days
    pub days: u32,

    /// Individual routes
    pub routes: Vec<RouteResult>,
}

impl JourneyResult {
    /// Build from a domain journey.
    pub fn from_journey(journey: &Journey) -> Self {
        Self {
            ports: journey.ports().iter().map(|p| p.to_string()).collect(),
            stops: journey.stop_count(),
            days: journey.total_days().get(),
            routes: journey
                .routes()
                .iter()
                .map(|r| RouteResult::from_route(r))
                .collect(),
        }
    }
}

/// A single route within a journey.
#[derive(Debug, Serialize)]
pub struct RouteResult {
    pub from: String,
    pub to: String,
    pub days: u32,
}

impl RouteResult {
    /// Build from a domain route.
    pub fn from_route(route: &ShippingRoute) -> Self {
        Self {
            from: route.from.to_string(),
            to: route.to.to_string(),
            days: route.days.get(),
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
