//! Seams for external travel estimate providers.
//!
//! The search consumes plain lookup maps; these types describe how those
//! maps are produced. Concrete apps can plug in their own routing service.

use thiserror::Error;

use crate::model::{DistanceMatrix, Location, TravelTimes};

/// Pairwise travel estimates for a set of locations.
///
/// Covers every ordered pair of distinct locations in the input, which is
/// exactly the coverage the default adjacency graph can traverse.
#[derive(Debug, Clone, Default)]
pub struct TravelMatrices {
    /// Travel time in hours per ordered pair.
    pub travel_times: TravelTimes,
    /// Distance per ordered pair.
    pub distances: DistanceMatrix,
}

/// Failures while fetching travel estimates.
#[derive(Debug, Error)]
pub enum EstimateError {
    #[error("routing service request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("routing service returned {actual} rows for {expected} locations")]
    Incomplete { expected: usize, actual: usize },
}

/// Provides travel-time and distance estimates for a set of locations.
pub trait TravelEstimator {
    fn matrices_for(&self, locations: &[Location]) -> Result<TravelMatrices, EstimateError>;
}
