//! Map-driven coordinate selection

use shared::error::AppResult;
use shared::geo::{GeoPoint, MapRegion};

/// One map session for choosing a record's coordinate
///
/// Seeded from the record's current location when it has one, else from
/// the host's default center. The chosen point reaches the record only
/// through [`commit`](GeoPicker::commit).
#[derive(Debug, Clone, Copy)]
pub struct GeoPicker {
    draft: GeoPoint,
    region: MapRegion,
}

impl GeoPicker {
    /// Start a session on the record's location, else on `fallback`
    pub fn seed(existing: Option<GeoPoint>, fallback: GeoPoint) -> Self {
        match existing {
            Some(point) => Self {
                draft: point,
                region: MapRegion::focused(point),
            },
            None => Self {
                draft: fallback,
                region: MapRegion::browse(fallback),
            },
        }
    }

    /// Move the marker to a tapped point
    ///
    /// Out-of-range taps are rejected and leave the marker where it was.
    pub fn set_from_map_tap(&mut self, latitude: f64, longitude: f64) -> AppResult<()> {
        self.draft = GeoPoint::checked(latitude, longitude)?;
        Ok(())
    }

    /// The coordinate currently under the marker
    pub fn draft(&self) -> GeoPoint {
        self.draft
    }

    /// The viewport to show for this session
    pub fn region(&self) -> MapRegion {
        self.region
    }

    /// Finish the session, yielding the chosen coordinate
    pub fn commit(self) -> GeoPoint {
        self.draft
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::error::ErrorCode;
    use shared::geo::{BROWSE_LATITUDE_DELTA, FOCUS_DELTA};

    #[test]
    fn seeds_focused_on_an_existing_location() {
        let existing = GeoPoint::new(-15.80, -47.88);
        let picker = GeoPicker::seed(Some(existing), GeoPoint::default());
        assert_eq!(picker.draft(), existing);
        assert_eq!(picker.region().center, existing);
        assert_eq!(picker.region().latitude_delta, FOCUS_DELTA);
    }

    #[test]
    fn seeds_browsing_around_the_fallback() {
        let fallback = GeoPoint::new(-15.7942, -47.8822);
        let picker = GeoPicker::seed(None, fallback);
        assert_eq!(picker.draft(), fallback);
        assert_eq!(picker.region().latitude_delta, BROWSE_LATITUDE_DELTA);
    }

    #[test]
    fn tap_moves_the_marker() {
        let mut picker = GeoPicker::seed(None, GeoPoint::default());
        picker.set_from_map_tap(-15.75, -47.90).unwrap();
        assert_eq!(picker.commit(), GeoPoint::new(-15.75, -47.90));
    }

    #[test]
    fn out_of_range_tap_is_rejected_and_keeps_the_marker() {
        let fallback = GeoPoint::new(-15.7942, -47.8822);
        let mut picker = GeoPicker::seed(None, fallback);
        let err = picker.set_from_map_tap(91.0, 0.0).unwrap_err();
        assert_eq!(err.code, ErrorCode::CoordinateOutOfRange);
        assert_eq!(picker.draft(), fallback);
    }
}
