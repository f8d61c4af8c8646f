//! crates/edubloom_core/src/distance.rs
//!
//! Distance estimates between two places, in miles.
//!
//! Two strategies sit behind [`DistanceEstimator`]: the synthetic tiers the
//! demo front-end has always shown, and a great-circle estimate over the
//! coordinates of known locations. Either way, the same city in the same
//! state is 0 miles.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::str::FromStr;

use crate::domain::{Coordinates, Location};
use crate::filter::LocationFilter;
use crate::store::EntityStore;

/// Mean Earth radius in miles.
pub const EARTH_RADIUS_MILES: f64 = 3958.8;

/// Used by [`HaversineDistance`] when coordinates are unknown and both places share a state.
pub const SAME_STATE_FALLBACK_MILES: f64 = 15.0;
/// Used by [`HaversineDistance`] when coordinates are unknown and the states differ.
pub const OTHER_STATE_FALLBACK_MILES: f64 = 75.0;

//=========================================================================================
// Places
//=========================================================================================

/// A city/state pair, with coordinates when a known location sits there.
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    pub city: String,
    pub state: String,
    pub coordinates: Option<Coordinates>,
}

impl Place {
    pub fn new(city: impl Into<String>, state: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            state: state.into(),
            coordinates: None,
        }
    }

    /// Takes its coordinates from the first stored location in the same city and state.
    pub fn resolve(store: &EntityStore, city: &str, state: &str) -> Self {
        let coordinates = store
            .query::<Location>(&LocationFilter::new().city(city).state(state))
            .first()
            .map(|l| l.coordinates);

        Self {
            coordinates,
            ..Self::new(city, state)
        }
    }

    pub fn from_location(location: &Location) -> Self {
        Self {
            coordinates: Some(location.coordinates),
            ..Self::new(location.city.as_str(), location.state.as_str())
        }
    }

    fn same_city(&self, other: &Place) -> bool {
        self.city == other.city && self.state == other.state
    }
}

//=========================================================================================
// Estimators
//=========================================================================================

pub trait DistanceEstimator: Send {
    fn estimate(&mut self, from: &Place, to: &Place) -> f64;
}

/// Random tiers: 0 for the same city, `[5, 25)` within a state, `[25, 125)` otherwise.
///
/// Successive calls for the same pair give different answers.
pub struct SyntheticDistance<R = StdRng> {
    rng: R,
}

impl SyntheticDistance<StdRng> {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }
}

impl Default for SyntheticDistance<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> SyntheticDistance<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng + Send> DistanceEstimator for SyntheticDistance<R> {
    fn estimate(&mut self, from: &Place, to: &Place) -> f64 {
        if from.same_city(to) {
            0.0
        } else if from.state == to.state {
            self.rng.random_range(5.0..25.0)
        } else {
            self.rng.random_range(25.0..125.0)
        }
    }
}

/// Great-circle distance between resolved coordinates.
#[derive(Debug, Clone, Copy, Default)]
pub struct HaversineDistance;

impl DistanceEstimator for HaversineDistance {
    fn estimate(&mut self, from: &Place, to: &Place) -> f64 {
        if from.same_city(to) {
            return 0.0;
        }
        match (from.coordinates, to.coordinates) {
            (Some(a), Some(b)) => great_circle_miles(a, b),
            _ if from.state == to.state => SAME_STATE_FALLBACK_MILES,
            _ => OTHER_STATE_FALLBACK_MILES,
        }
    }
}

pub fn great_circle_miles(a: Coordinates, b: Coordinates) -> f64 {
    let (lat1, lat2) = (a.latitude.to_radians(), b.latitude.to_radians());
    let d_lat = lat2 - lat1;
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_MILES * h.sqrt().min(1.0).asin()
}

//=========================================================================================
// Mode selection
//=========================================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DistanceMode {
    #[default]
    Haversine,
    Synthetic,
}

impl DistanceMode {
    pub fn estimator(self) -> Box<dyn DistanceEstimator> {
        match self {
            DistanceMode::Haversine => Box::new(HaversineDistance),
            DistanceMode::Synthetic => Box::new(SyntheticDistance::new()),
        }
    }
}

impl fmt::Display for DistanceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DistanceMode::Haversine => f.write_str("haversine"),
            DistanceMode::Synthetic => f.write_str("synthetic"),
        }
    }
}

impl FromStr for DistanceMode {
    type Err = crate::domain::UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "haversine" => Ok(DistanceMode::Haversine),
            "synthetic" => Ok(DistanceMode::Synthetic),
            _ => Err(crate::domain::UnknownVariant {
                kind: "distance mode",
                value: s.to_string(),
            }),
        }
    }
}
