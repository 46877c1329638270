use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Default study area: Kennedy, Bahia, Brazil.
pub const SEED_NAME: &str = "Kennedy, Bahia";
pub const SEED_LAT: f64 = -11.0833;
pub const SEED_LNG: f64 = -40.1667;
/// Default buffer radius around the point of interest, in km.
pub const SEED_BUFFER_KM: f64 = 5.0;

/// The area of interest: a named point with a circular buffer.
///
/// `area_km2` is always derived from the buffer radius (area = PI * r^2);
/// it is never set independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyArea {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub buffer_km: f64,
    pub area_km2: f64,
}

impl StudyArea {
    /// The default study area with the derived seed buffer area.
    pub fn seed() -> Self {
        Self::new(SEED_NAME, SEED_LAT, SEED_LNG, SEED_BUFFER_KM)
    }

    pub fn new(name: &str, lat: f64, lng: f64, buffer_km: f64) -> Self {
        Self {
            name: name.to_string(),
            lat,
            lng,
            buffer_km,
            area_km2: buffer_area_km2(buffer_km),
        }
    }

    /// Update the point of interest. Both coordinates must be finite and
    /// within range; otherwise the update is rejected and `false` is
    /// returned with the prior state intact.
    pub fn set_coordinates(&mut self, lat: f64, lng: f64) -> bool {
        let valid = lat.is_finite()
            && lng.is_finite()
            && (-90.0..=90.0).contains(&lat)
            && (-180.0..=180.0).contains(&lng);
        if !valid {
            log::info!("[EVET] rejected coordinate update ({lat}, {lng})");
            return false;
        }
        self.lat = lat;
        self.lng = lng;
        true
    }

    /// Update the buffer radius (km). Accepts any finite radius >= 0, no
    /// upper bound; negative or non-finite radii are rejected as a no-op.
    /// Recomputes the derived area.
    pub fn set_buffer_radius(&mut self, km: f64) -> bool {
        if !km.is_finite() || km < 0.0 {
            return false;
        }
        self.buffer_km = km;
        self.area_km2 = buffer_area_km2(km);
        true
    }

    /// Buffer radius in meters, for the map circle overlay.
    pub fn radius_meters(&self) -> f64 {
        self.buffer_km * 1000.0
    }
}

/// Circular buffer area in km^2 for a radius in km.
pub fn buffer_area_km2(radius_km: f64) -> f64 {
    PI * radius_km * radius_km
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_area_is_derived_from_buffer() {
        let area = StudyArea::seed();
        assert_eq!(area.buffer_km, 5.0);
        assert!((area.area_km2 - PI * 25.0).abs() < 1e-9);
    }

    #[test]
    fn buffer_radius_five_km() {
        let mut area = StudyArea::seed();
        assert!(area.set_buffer_radius(5.0));
        assert!((area.area_km2 - 78.54).abs() < 0.01);
    }

    #[test]
    fn buffer_radius_zero() {
        let mut area = StudyArea::seed();
        assert!(area.set_buffer_radius(0.0));
        assert_eq!(area.area_km2, 0.0);
    }

    #[test]
    fn negative_radius_is_a_no_op() {
        let mut area = StudyArea::seed();
        let before = area.clone();
        assert!(!area.set_buffer_radius(-1.0));
        assert!(!area.set_buffer_radius(f64::NAN));
        assert_eq!(area, before);
    }

    #[test]
    fn nan_coordinates_rejected() {
        let mut area = StudyArea::seed();
        let before = area.clone();
        assert!(!area.set_coordinates(f64::NAN, -40.0));
        assert_eq!(area, before);
    }

    #[test]
    fn out_of_range_coordinates_rejected() {
        let mut area = StudyArea::seed();
        let before = area.clone();
        assert!(!area.set_coordinates(91.0, 0.0));
        assert!(!area.set_coordinates(0.0, -181.0));
        assert_eq!(area, before);
    }

    #[test]
    fn valid_coordinates_applied() {
        let mut area = StudyArea::seed();
        assert!(area.set_coordinates(-12.0, -41.5));
        assert_eq!(area.lat, -12.0);
        assert_eq!(area.lng, -41.5);
    }

    #[test]
    fn radius_in_meters() {
        let mut area = StudyArea::seed();
        area.set_buffer_radius(7.5);
        assert_eq!(area.radius_meters(), 7500.0);
    }
}
