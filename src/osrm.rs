//! OSRM HTTP adapter for pairwise travel estimates.
//!
//! One `/table` request per location set, converted into the hour/mile maps
//! the search consumes.

use serde::Deserialize;
use tracing::debug;

use crate::model::Location;
use crate::traits::{EstimateError, TravelEstimator, TravelMatrices};

/// Seconds per hour, for duration conversion.
const SECONDS_PER_HOUR: f64 = 3600.0;

/// Meters per mile, for distance conversion.
const METERS_PER_MILE: f64 = 1609.34;

#[derive(Debug, Clone)]
pub struct OsrmConfig {
    pub base_url: String,
    pub profile: String,
    pub timeout_secs: u64,
}

impl Default for OsrmConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            profile: "car".to_string(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone)]
pub struct OsrmClient {
    config: OsrmConfig,
    client: reqwest::blocking::Client,
}

impl OsrmClient {
    pub fn new(config: OsrmConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }
}

impl TravelEstimator for OsrmClient {
    fn matrices_for(&self, locations: &[Location]) -> Result<TravelMatrices, EstimateError> {
        if locations.is_empty() {
            return Ok(TravelMatrices::default());
        }

        let coords = locations
            .iter()
            .map(|location| {
                format!("{:.6},{:.6}", location.lng_degrees(), location.lat_degrees())
            })
            .collect::<Vec<_>>()
            .join(";");

        let url = format!(
            "{}/table/v1/{}/{}?annotations=duration,distance",
            self.config.base_url, self.config.profile, coords
        );

        let body = self
            .client
            .get(url)
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.json::<OsrmTableResponse>())?;

        let durations = body.durations.unwrap_or_default();
        let distances = body.distances.unwrap_or_default();
        if durations.len() != locations.len() || distances.len() != locations.len() {
            return Err(EstimateError::Incomplete {
                expected: locations.len(),
                actual: durations.len().min(distances.len()),
            });
        }

        let mut matrices = TravelMatrices::default();
        for (i, &from) in locations.iter().enumerate() {
            if durations[i].len() != locations.len() || distances[i].len() != locations.len() {
                return Err(EstimateError::Incomplete {
                    expected: locations.len(),
                    actual: durations[i].len().min(distances[i].len()),
                });
            }
            for (j, &to) in locations.iter().enumerate() {
                if i == j {
                    continue;
                }
                matrices
                    .travel_times
                    .insert((from, to), durations[i][j] / SECONDS_PER_HOUR);
                matrices
                    .distances
                    .insert((from, to), distances[i][j] / METERS_PER_MILE);
            }
        }

        debug!(
            locations = locations.len(),
            pairs = matrices.travel_times.len(),
            "fetched travel matrices"
        );
        Ok(matrices)
    }
}

#[derive(Debug, Deserialize)]
struct OsrmTableResponse {
    durations: Option<Vec<Vec<f64>>>,
    distances: Option<Vec<Vec<f64>>>,
}
