//! Shipping routes and travel durations.

use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use serde::{Deserialize, Serialize};

use super::PortCode;

/// A travel duration in whole days.
///
/// All voyages take a whole number of days, so a plain unsigned count is
/// enough. Addition saturates rather than wrapping.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TravelDays(pub u32);

impl TravelDays {
    /// Zero days.
    pub const ZERO: TravelDays = TravelDays(0);

    /// Returns the number of days.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl Add for TravelDays {
    type Output = TravelDays;

    fn add(self, rhs: TravelDays) -> TravelDays {
        TravelDays(self.0.saturating_add(rhs.0))
    }
}

impl Sum for TravelDays {
    fn sum<I: Iterator<Item = TravelDays>>(iter: I) -> TravelDays {
        iter.fold(TravelDays::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a TravelDays> for TravelDays {
    fn sum<I: Iterator<Item = &'a TravelDays>>(iter: I) -> TravelDays {
        iter.copied().sum()
    }
}

impl fmt::Display for TravelDays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            1 => f.write_str("1 day"),
            n => write!(f, "{n} days"),
        }
    }
}

/// A direct, one-way shipping route between two ports.
///
/// Routes are immutable once loaded into a catalogue; journeys hold them
/// behind an `Arc` and never copy the route itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShippingRoute {
    /// Port the route departs from
    pub from: PortCode,
    /// Port the route arrives at
    pub to: PortCode,
    /// Voyage length
    pub days: TravelDays,
}

impl ShippingRoute {
    /// Creates a new route.
    pub fn new(from: PortCode, to: PortCode, days: u32) -> Self {
        Self {
            from,
            to,
            days: TravelDays(days),
        }
    }

    /// Returns true if the route departs and arrives at the same port.
    pub fn is_loop(&self) -> bool {
        self.from == self.to
    }
}

impl fmt::Display for ShippingRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({})", self.from, self.to, self.days)
    }
}
