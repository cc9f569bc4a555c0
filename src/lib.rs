//! route-optimizer core
//!
//! Computes a feasible pickup/delivery visiting order from a start location
//! that maximizes completed jobs within a work-hour budget, tie-broken by
//! travel distance.

pub mod graph;
pub mod manhattan;
pub mod model;
pub mod osrm;
pub mod search;
pub mod traits;
