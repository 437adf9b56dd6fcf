//! Collection of journeys found by an indirect search.

use parking_lot::Mutex;

use crate::domain::{Journey, TravelDays};

/// Every complete journey that passed the search filters.
///
/// Journeys are deposited concurrently from parallel branches of the
/// search, so the insertion order is not deterministic. Aggregates
/// (count, shortest) do not depend on it.
#[derive(Debug, Default)]
pub struct JourneyPermutations {
    journeys: Mutex<Vec<Journey>>,
}

impl JourneyPermutations {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a complete journey. Safe to call from several threads at once.
    pub fn deposit(&self, journey: Journey) {
        self.journeys.lock().push(journey);
    }

    /// Returns the number of journeys found.
    pub fn count(&self) -> usize {
        self.journeys.lock().len()
    }

    /// Returns true if at least one journey was found.
    pub fn has_valid_permutations(&self) -> bool {
        self.count() > 0
    }

    /// Returns the shortest total voyage time across all journeys.
    ///
    /// Returns zero when nothing was found; check
    /// [`has_valid_permutations`](Self::has_valid_permutations) first.
    pub fn shortest_days(&self) -> TravelDays {
        self.journeys
            .lock()
            .iter()
            .map(Journey::total_days)
            .min()
            .unwrap_or(TravelDays::ZERO)
    }

    /// Returns a journey with the shortest total voyage time, if any.
    pub fn shortest(&self) -> Option<Journey> {
        self.journeys
            .lock()
            .iter()
            .min_by_key(|j| j.total_days())
            .cloned()
    }

    /// Returns a snapshot of every journey found.
    pub fn journeys(&self) -> Vec<Journey> {
        self.journeys.lock().clone()
    }

    /// Consumes the collection, returning the journeys.
    pub fn into_journeys(self) -> Vec<Journey> {
        self.journeys.into_inner()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::domain::{PortCode, ShippingRoute};

    fn journey(ports: &[&str], days: &[u32]) -> Journey {
        let routes = ports
            .windows(2)
            .zip(days)
            .map(|(pair, d)| {
                Arc::new(ShippingRoute::new(
                    PortCode::parse(pair[0]).unwrap(),
                    PortCode::parse(pair[1]).unwrap(),
                    *d,
                ))
            })
            .collect();
        Journey::from_routes(routes).unwrap()
    }

    #[test]
    fn empty_collection() {
        let found = JourneyPermutations::new();
        assert_eq!(found.count(), 0);
        assert!(!found.has_valid_permutations());
        assert_eq!(found.shortest_days(), TravelDays::ZERO);
        assert!(found.shortest().is_none());
        assert!(found.journeys().is_empty());
    }

    #[test]
    fn aggregates() {
        let found = JourneyPermutations::new();
        found.deposit(journey(&["A", "B", "D"], &[1, 3]));
        found.deposit(journey(&["A", "B", "C", "D"], &[1, 2, 2]));
        found.deposit(journey(&["A", "D"], &[9]));

        assert_eq!(found.count(), 3);
        assert!(found.has_valid_permutations());
        assert_eq!(found.shortest_days(), TravelDays(4));
        assert_eq!(found.shortest().unwrap().stop_count(), 2);
    }

    #[test]
    fn shortest_tie_keeps_first_deposited() {
        let found = JourneyPermutations::new();
        found.deposit(journey(&["A", "B"], &[5]));
        found.deposit(journey(&["A", "C", "B"], &[2, 3]));

        assert_eq!(found.shortest_days(), TravelDays(5));
        assert_eq!(found.shortest().unwrap().stop_count(), 1);
    }

    #[test]
    fn concurrent_deposit() {
        let found = JourneyPermutations::new();

        std::thread::scope(|s| {
            for i in 0..8u32 {
                let found = &found;
                s.spawn(move || {
                    for _ in 0..50 {
                        found.deposit(journey(&["A", "B"], &[i]));
                    }
                });
            }
        });

        assert_eq!(found.count(), 400);
        assert_eq!(found.shortest_days(), TravelDays(0));
        assert_eq!(found.into_journeys().len(), 400);
    }
}
