use crate::features::venues::models::{Coordinate, Venue};

/// Earth's radius in meters (for Haversine formula)
const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Meters per degree of latitude, rounded down
const METERS_PER_DEGREE: f64 = 111_000.0;

/// Calculate Haversine distance between two points in meters
pub fn haversine_distance(from: Coordinate, to: Coordinate) -> f64 {
    let lat1_rad = from.latitude.to_radians();
    let lat2_rad = to.latitude.to_radians();
    let delta_lat = (to.latitude - from.latitude).to_radians();
    let delta_lon = (to.longitude - from.longitude).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();

    EARTH_RADIUS_METERS * c
}

/// Rectangle used to pre-filter radius searches in the store.
/// Always contains the circle; the exact test is `WithinRadius`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_latitude: f64,
    pub max_latitude: f64,
    pub min_longitude: f64,
    pub max_longitude: f64,
}

impl BoundingBox {
    pub fn around(center: Coordinate, radius_meters: f64) -> Self {
        // 1 degree of latitude is approximately 111km; longitude shrinks with latitude
        let lat_delta = (radius_meters / METERS_PER_DEGREE) * 1.1;
        let lon_delta = lat_delta / center.latitude.to_radians().cos().abs().max(0.01);

        Self {
            min_latitude: center.latitude - lat_delta,
            max_latitude: center.latitude + lat_delta,
            min_longitude: center.longitude - lon_delta,
            max_longitude: center.longitude + lon_delta,
        }
    }

    /// Longitude ranges inside [-180, 180].
    ///
    /// A box crossing the antimeridian splits in two; otherwise both entries
    /// are the same range. A box reaching a pole spans every longitude.
    pub fn longitude_ranges(&self) -> [(f64, f64); 2] {
        if self.max_longitude - self.min_longitude >= 360.0
            || self.min_latitude <= -90.0
            || self.max_latitude >= 90.0
        {
            return [(-180.0, 180.0); 2];
        }

        if self.min_longitude < -180.0 {
            [(self.min_longitude + 360.0, 180.0), (-180.0, self.max_longitude)]
        } else if self.max_longitude > 180.0 {
            [(self.min_longitude, 180.0), (-180.0, self.max_longitude - 360.0)]
        } else {
            [(self.min_longitude, self.max_longitude); 2]
        }
    }

    pub fn contains(&self, point: Coordinate) -> bool {
        (self.min_latitude..=self.max_latitude).contains(&point.latitude)
            && self
                .longitude_ranges()
                .iter()
                .any(|(min, max)| (*min..=*max).contains(&point.longitude))
    }
}

/// How candidates are narrowed geographically
#[derive(Debug, Clone, PartialEq)]
pub enum GeoScope {
    /// Exact match on the city-level place identifier, no radius
    City { place_id: String },
    /// Everything within `meters` of `origin`
    Radius { origin: Coordinate, meters: f64 },
}

impl GeoScope {
    /// City mode wins whenever a place identifier is given
    pub fn select(
        place_id: Option<&str>,
        origin: Option<Coordinate>,
        radius_meters: f64,
    ) -> Option<Self> {
        match (place_id, origin) {
            (Some(place_id), _) => Some(GeoScope::City {
                place_id: place_id.to_string(),
            }),
            (None, Some(origin)) => Some(GeoScope::Radius {
                origin,
                meters: radius_meters,
            }),
            (None, None) => None,
        }
    }

    pub fn bounding_box(&self) -> Option<BoundingBox> {
        match self {
            GeoScope::City { .. } => None,
            GeoScope::Radius { origin, meters } => Some(BoundingBox::around(*origin, *meters)),
        }
    }
}

/// Distance from the caller to a venue, when both points are known
pub fn distance_to(origin: Option<Coordinate>, venue: &Venue) -> Option<f64> {
    Some(haversine_distance(origin?, venue.coordinate()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    const MILAN_DUOMO: Coordinate = Coordinate {
        longitude: 9.1900,
        latitude: 45.4642,
    };

    const MILAN_CENTRALE: Coordinate = Coordinate {
        longitude: 9.2042,
        latitude: 45.4861,
    };

    #[test]
    fn test_haversine_distance() {
        // Jakarta to Bandung, approx 116km by Haversine
        let jakarta = Coordinate::new(106.8456, -6.2088);
        let bandung = Coordinate::new(107.6191, -6.9175);

        let distance = haversine_distance(jakarta, bandung);
        assert!(distance > 110_000.0 && distance < 125_000.0);
    }

    #[test]
    fn test_haversine_same_point() {
        assert!(haversine_distance(MILAN_DUOMO, MILAN_DUOMO) < 1.0);
    }

    #[test]
    fn test_bounding_box_contains_points_within_radius() {
        let distance = haversine_distance(MILAN_DUOMO, MILAN_CENTRALE);
        let bbox = BoundingBox::around(MILAN_DUOMO, distance + 10.0);
        assert!(bbox.contains(MILAN_CENTRALE));

        let tight = BoundingBox::around(MILAN_DUOMO, 500.0);
        assert!(!tight.contains(MILAN_CENTRALE));
    }

    #[test]
    fn test_bounding_box_wraps_at_antimeridian() {
        let east = Coordinate::new(179.99, 0.0);
        let west = Coordinate::new(-179.99, 0.0);

        let bbox = BoundingBox::around(east, 5_000.0);
        assert!(bbox.max_longitude > 180.0);
        assert!(bbox.contains(west));
        assert!(!bbox.contains(Coordinate::new(0.0, 0.0)));

        let [(east_min, east_max), (west_min, west_max)] = bbox.longitude_ranges();
        assert_eq!(east_max, 180.0);
        assert!(east_min < 179.99);
        assert_eq!(west_min, -180.0);
        assert!(west_max > -179.99 && west_max < -179.0);

        assert!(BoundingBox::around(west, 5_000.0).contains(east));
    }

    #[test]
    fn test_bounding_box_near_pole_spans_all_longitudes() {
        let bbox = BoundingBox::around(Coordinate::new(10.0, 89.99), 5_000.0);
        assert_eq!(bbox.longitude_ranges(), [(-180.0, 180.0); 2]);
        assert!(bbox.contains(Coordinate::new(-170.0, 89.99)));
    }

    #[test]
    fn test_bounding_box_ranges_without_wrap() {
        let bbox = BoundingBox::around(MILAN_DUOMO, 1_000.0);
        let [first, second] = bbox.longitude_ranges();
        assert_eq!(first, second);
        assert_eq!(first, (bbox.min_longitude, bbox.max_longitude));
    }

    #[test]
    fn test_select_scope_prefers_city() {
        let scope = GeoScope::select(Some("milan"), Some(MILAN_DUOMO), 20_000.0);
        assert_eq!(
            scope,
            Some(GeoScope::City {
                place_id: "milan".to_string()
            })
        );
        assert!(scope.unwrap().bounding_box().is_none());

        let scope = GeoScope::select(None, Some(MILAN_DUOMO), 20_000.0).unwrap();
        assert!(matches!(scope, GeoScope::Radius { meters, .. } if meters == 20_000.0));
        assert!(scope.bounding_box().is_some());

        assert!(GeoScope::select(None, None, 20_000.0).is_none());
    }
}
