//! Filter configuration for indirect journey search.

use serde::{Deserialize, Serialize};

use crate::domain::{Journey, TravelDays};

use super::processor::PlanError;

/// Optional bounds applied while enumerating journeys.
///
/// Each bound is independent and inclusive; `None` means unbounded. A filter
/// is fixed for the duration of one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JourneyFilter {
    /// Fewest stops a journey may make.
    pub min_stops: Option<usize>,

    /// Most stops a journey may make.
    /// Recommended for cyclic graphs, where the number of journeys grows fast.
    pub max_stops: Option<usize>,

    /// Longest total voyage allowed.
    pub max_days: Option<TravelDays>,
}

impl JourneyFilter {
    /// A filter with no bounds.
    pub fn new() -> Self {
        Self::default()
    }

    /// A filter matching journeys of exactly `stops` stops.
    pub fn exact_stops(stops: usize) -> Self {
        Self::new().with_min_stops(stops).with_max_stops(stops)
    }

    /// Sets the minimum number of stops.
    pub fn with_min_stops(mut self, stops: usize) -> Self {
        self.min_stops = Some(stops);
        self
    }

    /// Sets the maximum number of stops.
    pub fn with_max_stops(mut self, stops: usize) -> Self {
        self.max_stops = Some(stops);
        self
    }

    /// Sets the maximum total days.
    pub fn with_max_days(mut self, days: u32) -> Self {
        self.max_days = Some(TravelDays(days));
        self
    }

    /// Check the bounds are satisfiable together.
    pub fn validate(&self) -> Result<(), PlanError> {
        if let (Some(min), Some(max)) = (self.min_stops, self.max_stops) {
            if min > max {
                return Err(PlanError::InvalidFilter(format!(
                    "min_stops ({min}) is greater than max_stops ({max})"
                )));
            }
        }
        Ok(())
    }

    /// Returns true if a journey of `days` is already too long.
    pub fn exceeds_days(&self, days: TravelDays) -> bool {
        self.max_days.is_some_and(|max| days > max)
    }

    /// Returns true if a journey of `stops` stops is already too long.
    pub fn exceeds_stops(&self, stops: usize) -> bool {
        self.max_stops.is_some_and(|max| stops > max)
    }

    /// Returns true if `stops` satisfies the minimum.
    pub fn meets_min_stops(&self, stops: usize) -> bool {
        self.min_stops.is_none_or(|min| stops >= min)
    }

    /// Returns true if a complete journey satisfies every bound.
    pub fn accepts(&self, journey: &Journey) -> bool {
        let stops = journey.stop_count();
        !self.exceeds_days(journey.total_days())
            && !self.exceeds_stops(stops)
            && self.meets_min_stops(stops)
    }
}
