//! Direct and indirect journey calculation.
//!
//! Direct journeys follow an explicit list of stops. Indirect journeys are
//! found by a depth-first walk over the catalogue that fans out in parallel
//! at every port, pruning branches as soon as they break a filter and
//! never departing from the same port twice.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use rayon::prelude::*;
use tracing::{debug, trace};

use crate::catalogue::RouteCatalogue;
use crate::domain::{Journey, PortCode, ShippingRoute};

use super::config::JourneyFilter;
use super::permutations::JourneyPermutations;

/// Error from journey planning.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    /// Filter bounds can never be satisfied
    #[error("invalid filter: {0}")]
    InvalidFilter(String),
}

/// Per-search state shared by every branch of one indirect search.
///
/// Passed down the recursion rather than stored on the processor, so two
/// searches on the same processor never see each other's destination or
/// filter.
struct ExploreContext<'q> {
    destination: &'q PortCode,
    filter: &'q JourneyFilter,
    found: &'q JourneyPermutations,
    /// Number of routes considered, for logging.
    branches: AtomicUsize,
}

/// Calculates journeys over a route catalogue.
pub struct RouteProcessor<'a, C: RouteCatalogue> {
    catalogue: &'a C,
}

impl<'a, C: RouteCatalogue> RouteProcessor<'a, C> {
    /// Create a new processor.
    pub fn new(catalogue: &'a C) -> Self {
        Self { catalogue }
    }

    /// Follow an explicit sequence of stops from `from`.
    ///
    /// Every consecutive pair of ports must be joined by a direct route.
    /// The returned journey is valid only if all of them are; on the first
    /// missing route the journey built so far is returned, still invalid.
    /// An empty stop list is always invalid.
    pub fn direct_journey(&self, from: &PortCode, stops: &[PortCode]) -> Journey {
        let mut journey = Journey::new();

        if stops.is_empty() {
            return journey;
        }

        let mut current = from.clone();
        for stop in stops {
            let Some(route) = self.catalogue.route_between(&current, stop) else {
                debug!(from = %current, to = %stop, "No direct route");
                return journey;
            };

            current = route.to.clone();
            if let Err(e) = journey.push(route) {
                debug!(error = %e, "Direct route does not connect");
                return journey;
            }
        }

        journey.mark_valid();
        journey
    }

    /// Find every journey from `from` to `to` that satisfies `filter`.
    ///
    /// A journey never departs from the same port twice, which keeps the
    /// search finite on cyclic graphs. When `from == to` only round trips
    /// of at least one route are found.
    ///
    /// Without `max_stops` or `max_days` the search visits every simple
    /// path out of `from`, which grows quickly with the size of the graph.
    pub fn indirect_journeys(
        &self,
        from: &PortCode,
        to: &PortCode,
        filter: &JourneyFilter,
    ) -> JourneyPermutations {
        let found = JourneyPermutations::new();
        let ctx = ExploreContext {
            destination: to,
            filter,
            found: &found,
            branches: AtomicUsize::new(0),
        };

        self.explore_from(from, &Journey::new(), &ctx);

        debug!(
            from = %from,
            to = %to,
            journeys = found.count(),
            branches = ctx.branches.load(Ordering::Relaxed),
            "Indirect search complete"
        );

        found
    }

    /// Fan out over every route leaving `port`.
    ///
    /// Returns once every branch below this port has finished.
    fn explore_from(&self, port: &PortCode, journey: &Journey, ctx: &ExploreContext<'_>) {
        self.catalogue
            .routes_from(port)
            .par_iter()
            .for_each(|route| self.explore_route(port, journey, route, ctx));
    }

    /// Evaluate one route leaving `port` as the next step of `journey`.
    fn explore_route(
        &self,
        port: &PortCode,
        journey: &Journey,
        route: &Arc<ShippingRoute>,
        ctx: &ExploreContext<'_>,
    ) {
        ctx.branches.fetch_add(1, Ordering::Relaxed);
        let stops = journey.stop_count() + 1;

        // A route back to the same port goes nowhere.
        if &route.to == port {
            trace!(port = %port, "Skipping loop route");
            return;
        }

        // Days and stops only grow, so nothing further down can recover.
        if ctx.filter.exceeds_days(journey.total_days() + route.days) {
            trace!(route = %route, "Pruned: too many days");
            return;
        }
        if ctx.filter.exceeds_stops(stops) {
            trace!(route = %route, "Pruned: too many stops");
            return;
        }

        if &route.to == ctx.destination {
            if ctx.filter.meets_min_stops(stops) {
                if let Some(mut complete) = self.extend(journey, route) {
                    complete.mark_valid();
                    ctx.found.deposit(complete);
                }
            }
            return;
        }

        if journey.departs_from(&route.to) {
            trace!(route = %route, "Pruned: revisits port");
            return;
        }

        if let Some(next) = self.extend(journey, route) {
            self.explore_from(&route.to, &next, ctx);
        }
    }

    fn extend(&self, journey: &Journey, route: &Arc<ShippingRoute>) -> Option<Journey> {
        match journey.branch(route) {
            Ok(next) => Some(next),
            Err(e) => {
                debug!(error = %e, "Catalogue returned a disconnected route");
                None
            }
        }
    }
}


#[cfg(test)]
mod proptests {
    use std::collections::{HashMap, HashSet};

    use super::*;
    use proptest::prelude::*;

    #[derive(Debug)]
    struct GraphCatalogue {
        routes: HashMap<PortCode, Vec<Arc<ShippingRoute>>>,
    }

    impl RouteCatalogue for GraphCatalogue {
        fn routes_from(&self, port: &PortCode) -> &[Arc<ShippingRoute>] {
            self.routes.get(port).map(|v| v.as_slice()).unwrap_or(&[])
        }
    }

    fn port_from_idx(i: usize) -> PortCode {
        PortCode::parse(&format!("P{i}")).unwrap()
    }

    /// Random graph over up to 6 ports, possibly cyclic, with loops.
    fn graph() -> impl Strategy<Value = GraphCatalogue> {
        proptest::collection::vec((0usize..6, 0usize..6, 0u32..10), 0..18).prop_map(|edges| {
            let mut routes: HashMap<PortCode, Vec<Arc<ShippingRoute>>> = HashMap::new();
            for (from, to, days) in edges {
                routes.entry(port_from_idx(from)).or_default().push(Arc::new(
                    ShippingRoute::new(port_from_idx(from), port_from_idx(to), days),
                ));
            }
            GraphCatalogue { routes }
        })
    }

    fn filter() -> impl Strategy<Value = JourneyFilter> {
        (
            proptest::option::of(0usize..5),
            proptest::option::of(0usize..5),
            proptest::option::of(0u32..30),
        )
            .prop_map(|(min_stops, max_stops, max_days)| JourneyFilter {
                min_stops,
                max_stops,
                max_days: max_days.map(crate::domain::TravelDays),
            })
    }

    proptest! {
        /// Property: every journey found runs from origin to destination,
        /// is a simple path, and satisfies the filter.
        #[test]
        fn journeys_are_simple_and_filtered(
            catalogue in graph(),
            from in 0usize..6,
            to in 0usize..6,
            filter in filter(),
        ) {
            let processor = RouteProcessor::new(&catalogue);
            let (from, to) = (port_from_idx(from), port_from_idx(to));
            let found = processor.indirect_journeys(&from, &to, &filter);

            for journey in found.journeys() {
                prop_assert!(journey.is_valid());
                prop_assert_eq!(journey.origin(), Some(&from));
                prop_assert_eq!(journey.destination(), Some(&to));
                prop_assert!(filter.accepts(&journey), "{} breaks {:?}", journey, filter);

                let mut departures = HashSet::new();
                for route in journey.routes() {
                    prop_assert!(departures.insert(route.from.clone()), "{} repeats a port", journey);
                }
            }
        }

        /// Property: repeated searches find the same journeys in some order.
        #[test]
        fn search_is_idempotent(
            catalogue in graph(),
            from in 0usize..6,
            to in 0usize..6,
            filter in filter(),
        ) {
            let processor = RouteProcessor::new(&catalogue);
            let (from, to) = (port_from_idx(from), port_from_idx(to));

            let run = || {
                let mut out: Vec<String> = processor
                    .indirect_journeys(&from, &to, &filter)
                    .into_journeys()
                    .iter()
                    .map(|j| j.to_string())
                    .collect();
                out.sort();
                out
            };

            prop_assert_eq!(run(), run());
        }

        /// Property: a direct journey along existing routes is valid and
        /// sums their days; removing any hop makes it invalid.
        #[test]
        fn direct_follows_routes(
            catalogue in graph(),
            start in 0usize..6,
            hops in proptest::collection::vec(0usize..6, 1..6),
        ) {
            let processor = RouteProcessor::new(&catalogue);
            let start = port_from_idx(start);
            let stops: Vec<PortCode> = hops.into_iter().map(port_from_idx).collect();

            let journey = processor.direct_journey(&start, &stops);

            let mut current = start.clone();
            let mut expected_days = 0u32;
            let mut all_connected = true;
            for stop in &stops {
                match catalogue.route_between(&current, stop) {
                    Some(route) => expected_days += route.days.get(),
                    None => {
                        all_connected = false;
                        break;
                    }
                }
                current = stop.clone();
            }

            prop_assert_eq!(journey.is_valid(), all_connected);
            if all_connected {
                prop_assert_eq!(journey.stop_count(), stops.len());
                prop_assert_eq!(journey.total_days().get(), expected_days);
            }
        }
    }
}
