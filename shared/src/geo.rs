//! Geographic types
//!
//! Coordinates are validated at the boundary: a [`GeoPoint`] built through
//! [`GeoPoint::checked`] is always within WGS84 latitude/longitude ranges.

use crate::error::{AppError, AppResult, ErrorCode};
use serde::{Deserialize, Serialize};

/// Latitude span shown when browsing a records map
pub const BROWSE_LATITUDE_DELTA: f64 = 0.0922;
/// Longitude span shown when browsing a records map
pub const BROWSE_LONGITUDE_DELTA: f64 = 0.0421;
/// Span shown when focusing a single record's location
pub const FOCUS_DELTA: f64 = 0.01;

/// A WGS84 coordinate
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    /// Create a coordinate without range checks
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Create a coordinate, rejecting out-of-range values
    pub fn checked(latitude: f64, longitude: f64) -> AppResult<Self> {
        let point = Self::new(latitude, longitude);
        point.validate()?;
        Ok(point)
    }

    /// Check that the coordinate is within valid ranges
    pub fn validate(&self) -> AppResult<()> {
        if !self.latitude.is_finite() || !(-90.0..=90.0).contains(&self.latitude) {
            return Err(AppError::with_message(
                ErrorCode::CoordinateOutOfRange,
                format!("latitude {} is outside [-90, 90]", self.latitude),
            ));
        }
        if !self.longitude.is_finite() || !(-180.0..=180.0).contains(&self.longitude) {
            return Err(AppError::with_message(
                ErrorCode::CoordinateOutOfRange,
                format!("longitude {} is outside [-180, 180]", self.longitude),
            ));
        }
        Ok(())
    }
}

/// A rectangular map viewport, consumed by the host's map widget
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapRegion {
    pub center: GeoPoint,
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

impl MapRegion {
    /// Wide viewport for browsing multiple records
    pub fn browse(center: GeoPoint) -> Self {
        Self {
            center,
            latitude_delta: BROWSE_LATITUDE_DELTA,
            longitude_delta: BROWSE_LONGITUDE_DELTA,
        }
    }

    /// Tight viewport focused on a single record's location
    pub fn focused(center: GeoPoint) -> Self {
        Self {
            center,
            latitude_delta: FOCUS_DELTA,
            longitude_delta: FOCUS_DELTA,
        }
    }
}
