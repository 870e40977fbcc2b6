//! Stray animal sighting report model

use crate::error::{AppError, AppResult, ErrorCode};
use crate::geo::GeoPoint;
use crate::models::{Entity, Geolocated};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A report of a stray animal seen on the street
///
/// The location is the point tapped on the map by the reporter and is
/// required: a sighting without a place is not actionable.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StrayReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub species: String,
    pub breed: String,
    pub color: String,
    pub description: String,
    pub location: Option<GeoPoint>,
    pub reported_at: Option<DateTime<Utc>>,
    pub image_url: String,
}

impl Entity for StrayReport {
    const COLLECTION: &'static str = "stray_report";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn set_id(&mut self, id: String) {
        self.id = Some(id);
    }

    fn image_url(&self) -> &str {
        &self.image_url
    }

    fn set_image_url(&mut self, url: String) {
        self.image_url = url;
    }

    fn label(&self) -> &str {
        &self.species
    }

    fn validate(&self) -> AppResult<()> {
        if self.species.trim().is_empty() {
            return Err(AppError::required_field("species"));
        }
        if self.breed.trim().is_empty() {
            return Err(AppError::required_field("breed"));
        }
        if self.color.trim().is_empty() {
            return Err(AppError::required_field("color"));
        }
        if self.description.trim().is_empty() {
            return Err(AppError::required_field("description"));
        }
        match self.location {
            None => Err(AppError::new(ErrorCode::MissingCoordinate)),
            Some(point) => point.validate(),
        }
    }
}

impl Geolocated for StrayReport {
    fn location(&self) -> Option<GeoPoint> {
        self.location
    }

    fn set_location(&mut self, point: GeoPoint) {
        self.location = Some(point);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_report() -> StrayReport {
        StrayReport {
            species: "Dog".to_string(),
            breed: "Mutt".to_string(),
            color: "Brown".to_string(),
            description: "Limping near the market".to_string(),
            location: Some(GeoPoint::new(-15.79, -47.88)),
            reported_at: Some(Utc::now()),
            ..StrayReport::default()
        }
    }

    #[test]
    fn test_validate_ok() {
        assert!(valid_report().validate().is_ok());
    }

    #[test]
    fn test_validate_requires_location() {
        let mut report = valid_report();
        report.location = None;
        let err = report.validate().unwrap_err();
        assert_eq!(err.code, ErrorCode::MissingCoordinate);
    }

    #[test]
    fn test_validate_rejects_out_of_range_location() {
        let mut report = valid_report();
        report.location = Some(GeoPoint::new(120.0, 0.0));
        let err = report.validate().unwrap_err();
        assert_eq!(err.code, ErrorCode::CoordinateOutOfRange);
    }

    #[test]
    fn test_geolocated_accessors() {
        let mut report = StrayReport::default();
        assert!(Geolocated::location(&report).is_none());

        report.set_location(GeoPoint::new(-15.0, -47.0));
        assert_eq!(
            Geolocated::location(&report),
            Some(GeoPoint::new(-15.0, -47.0))
        );
    }
}
