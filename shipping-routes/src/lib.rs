//! Shipping route planner.
//!
//! Answers questions about voyages between ports connected by one-way
//! shipping routes: how long a given sequence of stops takes, and which
//! journeys lead from one port to another within limits on stops and days.

pub mod catalogue;
pub mod config;
pub mod domain;
pub mod planner;
pub mod web;
