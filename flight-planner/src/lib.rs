//! Flight route planner.
//!
//! Finds connecting-flight routes between two cities inside a time window,
//! optimising for fewest flights, lowest fare, or fewest flights then
//! lowest fare.

pub mod collections;
pub mod domain;
pub mod planner;
pub mod source;
pub mod web;
