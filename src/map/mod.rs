use consts::EARTH_RADIUS_KM;
use models::LatLng;

pub mod cache;
pub mod consts;
pub mod models;

/// Great-circle distance in kilometers between two points, using the haversine formula.
pub fn distance_km(from: LatLng, to: LatLng) -> f64 {
    let phi_1 = from.lat.to_radians();
    let phi_2 = to.lat.to_radians();
    let delta_phi = (to.lat - from.lat).to_radians();
    let delta_lambda = (to.lng - from.lng).to_radians();
    let a = (delta_phi / 2.0).sin().powi(2)
        + phi_1.cos() * phi_2.cos() * (delta_lambda / 2.0).sin().powi(2);
    // Rounding can push `a` slightly outside of [0, 1] for near-antipodal points.
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;

    const GIVEAWAY: LatLng = LatLng {
        lat: -33.867582661116245,
        lng: 151.05560569089798,
    };

    #[test]
    fn distance_to_itself_is_zero() {
        assert_eq!(distance_km(GIVEAWAY, GIVEAWAY), 0.0);
        let origin = LatLng::new(0.0, 0.0);
        assert_eq!(distance_km(origin, origin), 0.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let points = [
            GIVEAWAY,
            LatLng::new(40.7128, -74.0060),
            LatLng::new(51.5074, -0.1278),
            LatLng::new(-90.0, 180.0),
            LatLng::new(89.9, -179.9),
        ];
        for a in points {
            for b in points {
                assert!((distance_km(a, b) - distance_km(b, a)).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn sydney_cbd_is_fourteen_km_from_giveaway() {
        let cbd = LatLng::new(-33.8688, 151.2093);
        let distance = distance_km(GIVEAWAY, cbd);
        assert!((distance - 14.19).abs() < 0.01, "got {distance}");
    }

    #[test]
    fn antipodal_points_are_half_the_circumference_apart() {
        let distance = distance_km(LatLng::new(0.0, 0.0), LatLng::new(0.0, 180.0));
        assert!((distance - std::f64::consts::PI * EARTH_RADIUS_KM).abs() < 1e-6);
        assert!(!distance.is_nan());
    }

    #[test]
    fn distance_is_never_negative() {
        let distance = distance_km(LatLng::new(-90.0, 0.0), LatLng::new(90.0, 0.0));
        assert!(distance > 0.0);
    }
}
